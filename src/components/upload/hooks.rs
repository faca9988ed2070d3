//! Reactive binding between the upload page and [`FormState`].

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::core::{BrowserUploader, send_submission};
use crate::models::{FieldName, FormState, SubmitBlocked, SubmitPhase};

/// Upload form state held in a single local signal.
///
/// `web_sys::File` is not `Send`, so the state lives in local storage.
/// The struct is `Copy` because it only wraps the signal handle.
#[derive(Clone, Copy)]
pub struct UploadForm {
    pub state: RwSignal<FormState<web_sys::File>, LocalStorage>,
}

impl UploadForm {
    /// Create an empty form in the Editing phase.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new_local(FormState::new()),
        }
    }

    /// Reactive error flag for one field.
    pub fn invalid(&self, field: FieldName) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|f| f.errors().has(field)))
    }

    /// Reactive value of a text field.
    pub fn text(&self, field: FieldName) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|f| match field {
                FieldName::Title => f.title().to_string(),
                FieldName::Category => f.category().to_string(),
                FieldName::File => String::new(),
            })
        })
    }

    pub fn set_text(&self, field: FieldName, value: String) {
        self.state.update(|f| match field {
            FieldName::Title => f.set_title(value),
            FieldName::Category => f.set_category(value),
            FieldName::File => {}
        });
    }

    pub fn set_file(&self, file: Option<web_sys::File>) {
        self.state.update(|f| f.set_file(file));
    }

    pub fn submit_disabled(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|f| f.is_submit_disabled()))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|f| f.phase() == SubmitPhase::Submitting))
    }

    pub fn last_failure(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|f| f.last_failure().map(str::to_string)))
    }

    /// Validate and, when every field passes, send the upload in the background.
    pub fn submit(&self) {
        let state = self.state;
        let Some(started) = state.try_update(|f| f.begin_submit()) else {
            return;
        };

        match started {
            Ok(submission) => spawn_local(async move {
                let outcome = send_submission(&BrowserUploader::default(), submission).await;
                state.update(|f| f.finish_submit(outcome));
            }),
            Err(SubmitBlocked::Invalid(errors)) => {
                let fields: Vec<_> = errors.fields().map(|f| f.as_str()).collect();
                log::warn!(
                    "submit blocked: {} invalid field(s) [{}]",
                    errors.len(),
                    fields.join(", ")
                );
            }
            Err(SubmitBlocked::InFlight) => {
                log::debug!("submit ignored: upload already in flight");
            }
        }
    }
}

impl Default for UploadForm {
    fn default() -> Self {
        Self::new()
    }
}
