use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let whatsapp_contacts = [
        (config::WHATSAPP_PRIMARY, "+62-812-9318-5162"),
        (config::WHATSAPP_SECONDARY, "+62-857-7227-4445"),
    ];

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <a href="/" class="footer-logo">
                        <img src="/assets/edenic-logo.jpg" alt="Edenic Logo" width="150" height="50" />
                    </a>
                    <p>
                        {"We provide premium quality fresh and dried ginger, directly from Indonesia to global markets. Committed to sustainability and ethical farming practices."}
                    </p>
                </div>

                <div class="footer-contact">
                    <h3>{"CONTACT US"}</h3>
                    <p>
                        <span class="footer-line">
                            {"Email: "}
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                        </span>
                        { for whatsapp_contacts.iter().map(|(number, display)| html! {
                            <span class="footer-line">
                                {"WhatsApp: "}
                                <a href={config::whatsapp_link(number)} target="_blank" rel="noopener noreferrer">
                                    {*display}
                                </a>
                            </span>
                        }) }
                    </p>
                </div>
            </div>

            <div class="footer-bottom">
                <p>
                    {"Copyright © 2025 Edenic. All rights reserved. Designed by "}
                    <a href={config::DESIGNER_CREDIT_URL} target="_blank" rel="noopener noreferrer">
                        {"@neilwebsite"}
                    </a>
                    {"."}
                </p>
            </div>
        </footer>
    }
}
