//! File picker with presence validation feedback.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::FieldName;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/upload/field.module.css");

/// File input bound to the file field. Only the first selected file is kept.
#[component]
pub fn FileField(
    field: FieldName,
    placeholder: &'static str,
    #[prop(into)] invalid: Signal<bool>,
    on_change: Callback<Option<web_sys::File>>,
) -> impl IntoView {
    let handle_change = move |ev: ev::Event| {
        on_change.run(dom::selected_file(&ev));
    };

    let input_class = move || {
        if invalid.get() {
            format!("{} {}", css::fileInput, css::fileInputInvalid)
        } else {
            format!("{} {}", css::fileInput, css::fileInputValid)
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
        <div class=css::fileField>
            <label class=css::fileLabel>
                <span class=css::srOnly>{placeholder}</span>
                <span class=css::fileIcon aria-hidden="true"><Icon icon=ic::UPLOAD /></span>
                <input
                    name=field.as_str()
                    type="file"
                    class=input_class
                    aria-invalid=move || if invalid.get() { "true" } else { "false" }
                    on:change=handle_change
                />
            </label>
            <p class=message_class>{field.error_message()}</p>
        </div>
    }
}
