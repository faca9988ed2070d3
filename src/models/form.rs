//! Upload form state and the submission it produces.
//!
//! [`FormState`] is the single source of truth for the page: field values,
//! the errors reported to the user, and the Editing/Submitting phase. It is
//! generic over the attachment type so the browser can use `web_sys::File`
//! while tests use a plain struct.

use std::fmt;

use super::field::{FieldError, FieldErrors, FieldName};

/// A user-selected file that can be sent as a multipart part.
pub trait Attachment {
    /// Original filename of the selection.
    fn file_name(&self) -> String;
}

/// Phase of the submit flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
}

/// Reason a submit action did not start a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// One or more fields failed validation.
    Invalid(FieldErrors),
    /// A request is already in flight.
    InFlight,
}

/// One part of the multipart body.
#[derive(Debug, PartialEq, Eq)]
pub enum FormPart<'a, A> {
    File {
        name: &'static str,
        file_name: String,
        attachment: &'a A,
    },
    Text {
        name: &'static str,
        value: &'a str,
    },
}

impl<A> FormPart<'_, A> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::File { name, .. } | Self::Text { name, .. } => *name,
        }
    }
}

/// A validated set of values, alive for a single request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission<A> {
    pub title: String,
    pub category: String,
    pub file: A,
}

impl<A: Attachment> Submission<A> {
    /// Multipart parts in wire order: `file`, `title`, `category`.
    pub fn parts(&self) -> Vec<FormPart<'_, A>> {
        vec![
            FormPart::File {
                name: FieldName::File.as_str(),
                file_name: self.file.file_name(),
                attachment: &self.file,
            },
            FormPart::Text {
                name: FieldName::Title.as_str(),
                value: &self.title,
            },
            FormPart::Text {
                name: FieldName::Category.as_str(),
                value: &self.category,
            },
        ]
    }
}

/// State of the upload form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState<A> {
    title: String,
    category: String,
    file: Option<A>,
    errors: FieldErrors,
    submit_attempted: bool,
    phase: SubmitPhase,
    last_failure: Option<String>,
}

impl<A> Default for FormState<A> {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: String::new(),
            file: None,
            errors: FieldErrors::new(),
            submit_attempted: false,
            phase: SubmitPhase::Editing,
            last_failure: None,
        }
    }
}

impl<A> FormState<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    #[cfg(test)]
    pub fn file(&self) -> Option<&A> {
        self.file.as_ref()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Errors currently reported to the user.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Message of the last failed upload, cleared by the next submit.
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
        self.revalidate(FieldName::Title);
    }

    pub fn set_category(&mut self, value: impl Into<String>) {
        self.category = value.into();
        self.revalidate(FieldName::Category);
    }

    pub fn set_file(&mut self, file: Option<A>) {
        self.file = file;
        self.revalidate(FieldName::File);
    }

    /// Checks a single field against its rule.
    pub fn check(&self, field: FieldName) -> Option<FieldError> {
        let present = match field {
            FieldName::Title => !self.title.is_empty(),
            FieldName::Category => !self.category.is_empty(),
            FieldName::File => self.file.is_some(),
        };
        (!present).then_some(FieldError::Required)
    }

    /// Validates every field against the current values.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in FieldName::ALL {
            errors.set(field, self.check(field));
        }
        errors
    }

    /// Whether the submit button is disabled.
    pub fn is_submit_disabled(&self) -> bool {
        !self.errors.is_empty() || self.phase == SubmitPhase::Submitting
    }

    /// Errors are only re-checked on change once the user has tried to submit.
    fn revalidate(&mut self, field: FieldName) {
        if self.submit_attempted {
            let error = self.check(field);
            self.errors.set(field, error);
        }
    }

    /// Handles a submit action.
    ///
    /// On success the state moves to [`SubmitPhase::Submitting`] and the
    /// returned submission must be settled with [`FormState::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<Submission<A>, SubmitBlocked>
    where
        A: Clone,
    {
        if self.phase == SubmitPhase::Submitting {
            return Err(SubmitBlocked::InFlight);
        }

        self.submit_attempted = true;
        self.errors = self.validate();
        if !self.errors.is_empty() {
            return Err(SubmitBlocked::Invalid(self.errors.clone()));
        }

        let file = self
            .file
            .clone()
            .ok_or_else(|| SubmitBlocked::Invalid(self.errors.clone()))?;

        self.phase = SubmitPhase::Submitting;
        self.last_failure = None;
        Ok(Submission {
            title: self.title.clone(),
            category: self.category.clone(),
            file,
        })
    }

    /// Returns to [`SubmitPhase::Editing`] once the request settled.
    ///
    /// Field values are kept either way.
    pub fn finish_submit<E: fmt::Display>(&mut self, outcome: Result<(), E>) {
        self.phase = SubmitPhase::Editing;
        self.last_failure = outcome.err().map(|e| e.to_string());
    }
}
