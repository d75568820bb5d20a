/// Reusable UI components

use patternfly_yew::prelude::*;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::messages::MessageSink;

/// Adapts a Yew callback to the message collaborator contract so the
/// response handlers can stay framework-agnostic.
pub struct BannerSink {
    on_show: Callback<String>,
}

impl BannerSink {
    pub fn new(on_show: Callback<String>) -> BannerSink {
        BannerSink { on_show }
    }
}

impl MessageSink for BannerSink {
    fn show(&self, html: &str) {
        self.on_show.emit(html.to_string());
    }
}

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    /// Ready-to-render HTML, `<br>`-separated lines
    pub html: AttrValue,
    pub on_dismiss: Callback<MouseEvent>,
}

/// The alert banner the popup shows failure messages in. Click to dismiss.
#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    html! {
        <div class="messageHolder" onclick={props.on_dismiss.clone()}>
            <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                {Html::from_html_unchecked(props.html.clone())}
            </Alert>
        </div>
    }
}
