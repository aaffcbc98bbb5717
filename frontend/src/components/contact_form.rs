use yew::prelude::*;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;

use crate::components::contact_popup::open_in_new_context;
use crate::components::country_select::CountrySelect;
use crate::contact::{ContactFormData, MISSING_FIELDS_ALERT};
use crate::countries::{fetch_countries, CountryOption};

fn alert(message: &str) {
    let Some(window) = window() else {
        log::error!("No window available to show alert");
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        log::error!("Failed to show alert: {:?}", err);
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_state(ContactFormData::default);
    let countries = use_state(Vec::<CountryOption>::new);

    // Load the country list once, on mount
    {
        let countries = countries.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match fetch_countries().await {
                        Ok(options) => countries.set(options),
                        Err(err) => log::error!("Error fetching countries: {}", err),
                    }
                });
                || ()
            },
            (),
        );
    }

    let text_input = |apply: fn(&mut ContactFormData, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_name = text_input(|data, value| data.name = value);
    let on_email = text_input(|data, value| data.email = value);
    let on_company = text_input(|data, value| data.company = value);

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };

    let on_country = {
        let form = form.clone();
        Callback::from(move |country: Option<CountryOption>| {
            let mut next = (*form).clone();
            next.country = country;
            form.set(next);
        })
    };

    // The form keeps its values after the compose link opens.
    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.submit() {
                Ok(link) => {
                    log::info!("Opening mail compose link");
                    open_in_new_context(&link);
                }
                Err(err) => {
                    log::warn!("Contact form rejected: {}", err);
                    alert(MISSING_FIELDS_ALERT);
                }
            }
        })
    };

    html! {
        <form class="contact-form" onsubmit={on_submit}>
            <div class="form-row">
                <div class="form-field">
                    <label>{"Name"}</label>
                    <input
                        type="text"
                        name="name"
                        class="form-input"
                        placeholder="Enter your name"
                        required=true
                        value={form.name.clone()}
                        oninput={on_name}
                    />
                </div>
                <div class="form-field">
                    <label>{"Email"}</label>
                    <input
                        type="email"
                        name="email"
                        class="form-input"
                        placeholder="Enter your email"
                        required=true
                        value={form.email.clone()}
                        oninput={on_email}
                    />
                </div>
            </div>

            <div class="form-field">
                <label>{"Company"}</label>
                <input
                    type="text"
                    name="company"
                    class="form-input"
                    placeholder="Enter your company name"
                    required=true
                    value={form.company.clone()}
                    oninput={on_company}
                />
            </div>

            <div class="form-field">
                <label>{"Select Your Country"}</label>
                <CountrySelect
                    options={(*countries).clone()}
                    selected={form.country.clone()}
                    on_change={on_country}
                />
                if let Some(country) = &form.country {
                    <p class="selected-country">{format!("Selected Country: {}", country.label)}</p>
                }
            </div>

            <div class="form-field">
                <label>{"Message"}</label>
                <textarea
                    name="message"
                    class="form-input"
                    placeholder="Write your message here"
                    required=true
                    rows="5"
                    value={form.message.clone()}
                    oninput={on_message}
                />
            </div>

            <div class="form-submit">
                <button type="submit" class="submit-button">{"Submit"}</button>
            </div>
        </form>
    }
}
