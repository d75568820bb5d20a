/// Error reporting for failed link-generation attempts
use serde_json::Value;

/// First line of every failure message shown to the user
pub const ERROR_BANNER: &str = "A link wasn't created because:<br>";

/// Shown when the request never produced a usable response
pub const SERVICE_UNREACHABLE: &str = "The link service could not be reached.";

/// Contract of the alert/notification collaborator. The popup only ever
/// hands it a ready-to-render HTML string.
pub trait MessageSink {
    fn show(&self, html: &str);
}

/// Flatten a `{field: message-or-messages}` map into the individual
/// messages, keeping the order the service presented the fields in.
/// Anything that is not an object produces no messages.
pub fn flatten_errors(errors: &Value) -> Vec<String> {
    let mut text = Vec::new();

    if let Value::Object(fields) = errors {
        for messages in fields.values() {
            match messages {
                Value::String(message) => text.push(message.clone()),
                Value::Array(many) => text.extend(
                    many.iter()
                        .filter_map(|message| message.as_str().map(str::to_string)),
                ),
                _ => {}
            }
        }
    }

    text
}

/// Turn the service's error payload into a banner-prefixed message list and
/// show it through the collaborator. Returns the list; an empty list means
/// nothing was shown.
pub fn report_link_errors(errors: &Value, sink: &dyn MessageSink) -> Vec<String> {
    let mut text = flatten_errors(errors);

    if !text.is_empty() {
        text.insert(0, ERROR_BANNER.to_string());
        sink.show(&text.join("<br>"));
    }

    text
}

/// Report a request that failed before the service could answer.
pub fn report_service_unreachable(sink: &dyn MessageSink) {
    sink.show(&format!("{}{}", ERROR_BANNER, SERVICE_UNREACHABLE));
}
