//! Labeled text input with presence validation feedback.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::models::FieldName;

stylance::import_crate_style!(css, "src/components/upload/field.module.css");

/// Text input bound to one form field.
///
/// The message is always rendered so toggling it never shifts the layout;
/// only its visibility follows `invalid`.
#[component]
pub fn TextField(
    field: FieldName,
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] invalid: Signal<bool>,
    on_input: Callback<String>,
) -> impl IntoView {
    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        on_input.run(input.value());
    };

    let input_class = move || {
        if invalid.get() {
            format!("{} {}", css::input, css::inputInvalid)
        } else {
            format!("{} {}", css::input, css::inputValid)
        }
    };

    let message_class = move || {
        if invalid.get() {
            format!("{} {}", css::message, css::visible)
        } else {
            format!("{} {}", css::message, css::hidden)
        }
    };

    view! {
        <div class=css::field>
            <label class=css::label for=field.as_str()>{field.as_str()}</label>
            <input
                id=field.as_str()
                name=field.as_str()
                type="text"
                class=input_class
                placeholder=placeholder
                aria-invalid=move || if invalid.get() { "true" } else { "false" }
                prop:value=value
                on:input=handle_input
            />
            <p class=message_class>{field.error_message()}</p>
        </div>
    }
}
