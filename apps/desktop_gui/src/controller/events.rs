//! UI events and error modeling for the course form controller.

use course_core::{StoreError, StoreEvent};
use shared::error::{ValidationError, ValidationErrorKind};

pub enum UiEvent {
    Store(StoreEvent),
    Rejected(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    StaleRow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Submit,
    BeginEdit,
    Delete,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    kind: Option<ValidationErrorKind>,
    message: String,
}

impl UiError {
    pub fn from_validation(err: &ValidationError) -> Self {
        Self {
            category: UiErrorCategory::Validation,
            context: UiErrorContext::Submit,
            kind: Some(err.kind()),
            message: err.to_string(),
        }
    }

    pub fn from_store(context: UiErrorContext, err: &StoreError) -> Self {
        Self {
            category: UiErrorCategory::StaleRow,
            context,
            kind: None,
            message: err.to_string(),
        }
    }

    /// Field that should take keyboard focus so the user can fix the input.
    pub fn focus_hint(&self) -> Option<shared::domain::FormField> {
        use shared::domain::FormField;

        match self.kind? {
            ValidationErrorKind::EmptyName => Some(FormField::Name),
            ValidationErrorKind::NonNumericId | ValidationErrorKind::DuplicateId => {
                Some(FormField::Id)
            }
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            Some(kind) => err_label(kind),
            None => "List changed",
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn status_for_store_event(event: &StoreEvent) -> Option<String> {
    match event {
        StoreEvent::FormEdited { .. } => None,
        StoreEvent::FormReset => None,
        StoreEvent::EditStarted { position } => Some(format!("Editing row {}", position + 1)),
        StoreEvent::CourseAdded { .. } => Some("Course added".to_string()),
        StoreEvent::CourseUpdated { .. } => Some("Changes saved".to_string()),
        StoreEvent::CourseDeleted { id, .. } => Some(format!("Deleted course {id}")),
        StoreEvent::Seeded { count } => Some(format!("Loaded {count} sample courses")),
    }
}

pub fn err_label(kind: ValidationErrorKind) -> &'static str {
    match kind {
        ValidationErrorKind::NonNumericId => "Invalid id",
        ValidationErrorKind::EmptyName => "Missing name",
        ValidationErrorKind::DuplicateId => "Duplicate id",
    }
}
