//! Create-vs-edit modal state shared by the list pages.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Which record, if any, the modal form is editing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(String),
}

impl FormMode {
    #[must_use]
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }

    /// Modal heading, e.g. "Add A Car" / "Edit Car".
    #[must_use]
    pub fn title(&self, noun: &str) -> String {
        match self {
            Self::Create => format!("Add A {noun}"),
            Self::Edit(_) => format!("Edit {noun}"),
        }
    }

    /// Submit button label for the current submitting state.
    #[must_use]
    pub fn submit_label(&self, noun: &str, submitting: bool) -> String {
        match (self, submitting) {
            (Self::Create, true) => "Adding...".to_owned(),
            (Self::Edit(_), true) => "Updating...".to_owned(),
            (Self::Create, false) => format!("Add {noun}"),
            (Self::Edit(_), false) => format!("Update {noun}"),
        }
    }
}

/// Modal form state: visibility, mode, draft values and submit status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<F> {
    pub open: bool,
    pub mode: FormMode,
    pub draft: F,
    pub submitting: bool,
    pub error: Option<String>,
}

impl<F: Default> FormState<F> {
    /// Open an empty form for a new record.
    pub fn open_create(&mut self) {
        *self = Self { open: true, ..Self::default() };
    }

    /// Open the form pre-filled with an existing record's fields.
    pub fn open_edit(&mut self, id: &str, draft: F) {
        *self = Self { open: true, mode: FormMode::Edit(id.to_owned()), draft, ..Self::default() };
    }

    /// Close and reset the form.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}
