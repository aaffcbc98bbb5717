use yew::prelude::*;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContactPopupProps {
    pub on_close: Callback<()>,
}

pub fn open_in_new_context(url: &str) {
    let Some(window) = window() else {
        log::error!("No window available to open {}", url);
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => {}
        Ok(None) => log::warn!("Browser blocked opening {}", url),
        Err(_) => log::error!("Failed to open {}", url),
    }
}

fn scroll_to_contact_form() {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("contact-form"));

    if let Some(element) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(ContactPopup)]
pub fn contact_popup(props: &ContactPopupProps) -> Html {
    let on_whatsapp = Callback::from(|_: MouseEvent| {
        open_in_new_context(&config::whatsapp_link(config::WHATSAPP_PRIMARY));
    });

    let on_email = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            scroll_to_contact_form();
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="popup-overlay">
            <div class="popup-panel">
                <h2>{"Choose Contact Method"}</h2>
                <button class="popup-whatsapp" onclick={on_whatsapp}>
                    {"WhatsApp"}
                </button>
                <button class="popup-email" onclick={on_email}>
                    {"Email Us"}
                </button>
                <button class="popup-cancel" onclick={on_cancel}>
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
