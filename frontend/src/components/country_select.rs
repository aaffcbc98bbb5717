use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::countries::{filter_options, CountryOption};

#[derive(Properties, PartialEq)]
pub struct CountrySelectProps {
    pub options: Vec<CountryOption>,
    pub selected: Option<CountryOption>,
    pub on_change: Callback<Option<CountryOption>>,
    #[prop_or(AttrValue::from("Search for your country..."))]
    pub placeholder: AttrValue,
}

/// Type-to-filter picker over the loaded country options.
#[function_component(CountrySelect)]
pub fn country_select(props: &CountrySelectProps) -> Html {
    let query = use_state(String::new);
    let is_open = use_state(|| false);

    let on_input = {
        let query = query.clone();
        let is_open = is_open.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
            is_open.set(true);
        })
    };

    let on_focus = {
        let is_open = is_open.clone();
        Callback::from(move |_: FocusEvent| is_open.set(true))
    };

    let on_blur = {
        let is_open = is_open.clone();
        Callback::from(move |_: FocusEvent| is_open.set(false))
    };

    let input_value = if *is_open {
        (*query).clone()
    } else {
        props
            .selected
            .as_ref()
            .map(|country| country.label.clone())
            .unwrap_or_default()
    };

    let matches = filter_options(&props.options, &query);

    html! {
        <div class="country-select">
            <div class="country-select-control">
                <input
                    type="text"
                    class="form-input"
                    placeholder={props.placeholder.clone()}
                    value={input_value}
                    oninput={on_input}
                    onfocus={on_focus}
                    onblur={on_blur}
                />
            </div>

            if *is_open {
                <ul class="country-select-menu">
                    if matches.is_empty() {
                        <li class="country-select-empty">{"No options"}</li>
                    }
                    { for matches.into_iter().map(|country| {
                        let is_selected = props.selected.as_ref() == Some(country);
                        // mousedown fires before the input's blur closes the menu
                        let on_pick = {
                            let country = country.clone();
                            let query = query.clone();
                            let is_open = is_open.clone();
                            let on_change = props.on_change.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                query.set(String::new());
                                is_open.set(false);
                                on_change.emit(Some(country.clone()));
                            })
                        };
                        html! {
                            <li
                                class={classes!("country-select-option", is_selected.then(|| "selected"))}
                                onmousedown={on_pick}
                            >
                                {&country.label}
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
