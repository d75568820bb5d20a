/// Popup UI for the wut.link extension

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::clipboard;
use crate::link_data::{LinkRequest, TabDescriptor};
use crate::messages::{report_link_errors, report_service_unreachable};
use crate::state::{ButtonState, HolderState};
use crate::ui::components::{BannerSink, MessageBanner};

const COPIED_FEEDBACK_MS: u32 = 2000;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryActiveTab() -> Result<JsValue, JsValue>;
}

#[function_component(App)]
pub fn app() -> Html {
    let button_state = use_state(|| ButtonState::Idle);
    let loaded = use_state(|| false);
    let copied = use_state(|| false);
    let link = use_state(String::new);
    let placeholder = use_state(|| None::<String>);
    let banner = use_state(|| None::<String>);

    let url_ref = use_node_ref();
    let activate_ref = use_node_ref();
    let deactivate_ref = use_node_ref();
    let link_ref = use_node_ref();
    let copy_asap_ref = use_node_ref();

    // Seed the URL placeholder from the active tab on mount
    {
        let placeholder = placeholder.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match active_tab_url().await {
                    Ok(Some(url)) => placeholder.set(Some(url)),
                    Ok(None) => log::debug!("tab query returned no usable tab"),
                    Err(message) => log::warn!("tab query failed: {}", message),
                }
            });
            || ()
        });
    }

    // Generate-link handler
    let on_generate = {
        let button_state = button_state.clone();
        let loaded = loaded.clone();
        let copied = copied.clone();
        let link = link.clone();
        let banner = banner.clone();
        let placeholder = placeholder.clone();
        let url_ref = url_ref.clone();
        let activate_ref = activate_ref.clone();
        let deactivate_ref = deactivate_ref.clone();
        let copy_asap_ref = copy_asap_ref.clone();

        Callback::from(move |_| {
            // only one request in flight at a time
            if button_state.is_pending() {
                return;
            }

            let url = field_value(&url_ref)
                .filter(|value| !value.is_empty())
                .or_else(|| (*placeholder).clone())
                .unwrap_or_default();
            let request = LinkRequest::new(
                url,
                field_value(&activate_ref).filter(|value| !value.is_empty()),
                field_value(&deactivate_ref).filter(|value| !value.is_empty()),
            );

            button_state.set(ButtonState::Pending);

            let button_state = button_state.clone();
            let loaded = loaded.clone();
            let copied = copied.clone();
            let link = link.clone();
            let copy_asap_ref = copy_asap_ref.clone();
            let sink = BannerSink::new({
                let banner = banner.clone();
                Callback::from(move |html: String| banner.set(Some(html)))
            });

            spawn_local(async move {
                match api::submit_link_request(&request).await {
                    Ok(response) => {
                        if let Some(errors) = response.failure() {
                            report_link_errors(errors, &sink);
                        } else {
                            let proxy_url = response.proxy_url.clone().unwrap_or_default();
                            link.set(proxy_url.clone());
                            loaded.set(true);
                            if checkbox_checked(&copy_asap_ref) {
                                trigger_copy(proxy_url, copied);
                            }
                        }
                    }
                    Err(message) => {
                        log::warn!("link request failed: {}", message);
                        report_service_unreachable(&sink);
                    }
                }

                // button always comes back, success or not
                button_state.set(ButtonState::Idle);
            });
        })
    };

    // Copy-button handler
    let on_copy = {
        let link = link.clone();
        let copied = copied.clone();

        Callback::from(move |_| {
            trigger_copy((*link).clone(), copied.clone());
        })
    };

    // Clicking the link field selects it for manual copying
    let on_select_all = {
        let link_ref = link_ref.clone();

        Callback::from(move |_| {
            if let Some(field) = link_ref.cast::<HtmlInputElement>() {
                let _ = field.focus();
                field.select();
            }
        })
    };

    let on_dismiss = {
        let banner = banner.clone();
        Callback::from(move |_| banner.set(None))
    };

    let button = *button_state;
    let holder_classes = HolderState {
        loaded: *loaded,
        copied: *copied,
    }
    .class_list();

    html! {
        <div class="wutPopup">
            <h1 class="popup-title">{"wut.link"}</h1>

            if let Some(message) = (*banner).clone() {
                <MessageBanner html={message} on_dismiss={on_dismiss} />
            }

            <div class="fields">
                <input
                    id="urlField"
                    type="text"
                    ref={url_ref.clone()}
                    placeholder={(*placeholder).clone().unwrap_or_default()}
                />
                <input id="activationDateField" type="datetime-local" ref={activate_ref.clone()} />
                <input id="deactivationDateField" type="datetime-local" ref={deactivate_ref.clone()} />
                <label for="copyAsap">
                    <input id="copyAsap" type="checkbox" ref={copy_asap_ref.clone()} />
                    {"Copy link immediately"}
                </label>
            </div>

            <button
                id="generateLink"
                class={button.is_pending().then_some("disabled")}
                disabled={button.is_pending()}
                onclick={on_generate}
            >
                {button.label()}
            </button>

            <div class={holder_classes}>
                <input
                    id="link"
                    type="text"
                    readonly={true}
                    ref={link_ref.clone()}
                    value={(*link).clone()}
                    onclick={on_select_all}
                />
                <button id="copyButton" onclick={on_copy}>{"Copy"}</button>
            </div>

            <p class="footer-popup">
                {"wut.link v0.1.0"}
            </p>
        </div>
    }
}

// Helper functions

async fn active_tab_url() -> Result<Option<String>, String> {
    let tabs_js = queryActiveTab()
        .await
        .map_err(|e| api::js_error_message(e, "tab query rejected"))?;
    let tabs: Vec<TabDescriptor> = serde_wasm_bindgen::from_value(tabs_js)
        .map_err(|e| format!("Failed to parse tabs: {:?}", e))?;

    Ok(tabs
        .into_iter()
        .next()
        .map(|tab| tab.url)
        .filter(|url| !url.is_empty()))
}

/// Flip on the transient `copied` state and hand the text to the clipboard.
fn trigger_copy(text: String, copied: UseStateHandle<bool>) {
    copied.set(true);
    {
        let copied = copied.clone();
        Timeout::new(COPIED_FEEDBACK_MS, move || copied.set(false)).forget();
    }

    spawn_local(async move {
        match clipboard::write_clipboard_text(&text).await {
            Ok(true) => log::debug!("link copied to clipboard"),
            Ok(false) => log::warn!("clipboard rejected the copy"),
            Err(e) => log::warn!(
                "clipboard copy failed: {}",
                api::js_error_message(e, "unknown error")
            ),
        }
    });
}

fn field_value(field: &NodeRef) -> Option<String> {
    field.cast::<HtmlInputElement>().map(|input| input.value())
}

fn checkbox_checked(field: &NodeRef) -> bool {
    field
        .cast::<HtmlInputElement>()
        .map(|input| input.checked())
        .unwrap_or(false)
}
