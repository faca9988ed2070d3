//! Upload page: header plus the title/category/file form.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::file_field::FileField;
use super::hooks::UploadForm;
use super::text_field::TextField;
use crate::components::icons as ic;
use crate::config::{APP_NAME, FORM_HEADING, SUBMIT_LABEL, placeholders};
use crate::models::FieldName;

stylance::import_crate_style!(css, "src/components/upload/page.module.css");

/// Single-page upload form.
///
/// ## Submit flow
///
/// | Phase | Submit button | On submit |
/// |-------|---------------|-----------|
/// | Editing, no reported errors | enabled | validate, then POST |
/// | Editing, reported errors | disabled | - |
/// | Submitting | disabled | ignored |
#[component]
pub fn UploadPage() -> impl IntoView {
    let form = UploadForm::new();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    let on_title = Callback::new(move |value: String| form.set_text(FieldName::Title, value));
    let on_category =
        Callback::new(move |value: String| form.set_text(FieldName::Category, value));
    let on_file = Callback::new(move |file: Option<web_sys::File>| form.set_file(file));

    let submit_disabled = form.submit_disabled();
    let submitting = form.is_submitting();
    let last_failure = form.last_failure();

    view! {
        <div class=css::page>
            <header class=css::header>
                <h1 class=css::title>{APP_NAME}</h1>
            </header>
            <main class=css::main>
                <form class=css::form on:submit=on_submit novalidate=true>
                    <h2 class=css::heading>{FORM_HEADING}</h2>
                    <TextField
                        field=FieldName::Title
                        placeholder=placeholders::TITLE
                        value=form.text(FieldName::Title)
                        invalid=form.invalid(FieldName::Title)
                        on_input=on_title
                    />
                    <TextField
                        field=FieldName::Category
                        placeholder=placeholders::CATEGORY
                        value=form.text(FieldName::Category)
                        invalid=form.invalid(FieldName::Category)
                        on_input=on_category
                    />
                    <FileField
                        field=FieldName::File
                        placeholder=placeholders::FILE
                        invalid=form.invalid(FieldName::File)
                        on_change=on_file
                    />
                    <div class=css::actions>
                        <Show when=move || last_failure.with(Option::is_some)>
                            <p class=css::status role="status">
                                {move || last_failure.get().map(|msg| format!("Upload failed: {msg}"))}
                            </p>
                        </Show>
                        <button
                            type="submit"
                            class=css::submit
                            disabled=move || submit_disabled.get()
                            aria-busy=move || if submitting.get() { "true" } else { "false" }
                        >
                            <span class=css::submitIcon aria-hidden="true"><Icon icon=ic::SEND /></span>
                            {SUBMIT_LABEL}
                        </button>
                    </div>
                </form>
            </main>
            <footer></footer>
        </div>
    }
}
