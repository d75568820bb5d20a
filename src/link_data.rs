/// Data structures for the link-generation round trip
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of the link-generation POST, as the service expects it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activate_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivate_date: Option<String>,
}

impl LinkRequest {
    pub fn new(
        url: String,
        activate_date: Option<String>,
        deactivate_date: Option<String>,
    ) -> LinkRequest {
        LinkRequest {
            url,
            activate_date,
            deactivate_date,
        }
    }
}

/// Response from the link service: a proxy URL on success, or a map of
/// field names to one-or-many error messages. The error value is kept as
/// raw JSON since the service's shape is not under our control.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    #[serde(default)]
    pub proxy_url: Option<String>,
    #[serde(default)]
    pub errors: Option<Value>,
}

impl LinkResponse {
    /// The validation failures carried by this response, if any.
    pub fn failure(&self) -> Option<&Value> {
        self.errors.as_ref().filter(|errors| !errors.is_null())
    }
}

/// The slice of a browser tab the popup reads from a tab query
#[derive(Debug, Clone, Deserialize)]
pub struct TabDescriptor {
    #[serde(default)]
    pub url: String,
}
