//! Applies form actions from the view to the course store.

use course_core::{CourseStore, SaveOutcome};
use shared::domain::FormField;

use crate::controller::events::{UiError, UiErrorContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Edit { field: FormField, text: String },
    Submit,
    Clear,
    BeginEdit(usize),
    Delete(usize),
}

impl FormAction {
    fn name(&self) -> &'static str {
        match self {
            FormAction::Edit { .. } => "edit_field",
            FormAction::Submit => "submit",
            FormAction::Clear => "clear",
            FormAction::BeginEdit(_) => "begin_edit",
            FormAction::Delete(_) => "delete",
        }
    }
}

pub fn dispatch_form_action(
    store: &mut CourseStore,
    action: FormAction,
) -> Result<Option<SaveOutcome>, UiError> {
    let action_name = action.name();
    tracing::trace!(action = action_name, "applying form action");

    match action {
        FormAction::Edit { field, text } => {
            store.set_field(field, text);
            Ok(None)
        }
        FormAction::Submit => match store.save() {
            Ok(outcome) => Ok(Some(outcome)),
            Err(err) => Err(UiError::from_validation(&err)),
        },
        FormAction::Clear => {
            store.reset_form();
            Ok(None)
        }
        FormAction::BeginEdit(position) => store
            .begin_edit(position)
            .map(|()| None)
            .map_err(|err| log_store_error(UiErrorContext::BeginEdit, action_name, &err)),
        FormAction::Delete(position) => store
            .delete_at(position)
            .map(|_| None)
            .map_err(|err| log_store_error(UiErrorContext::Delete, action_name, &err)),
    }
}

fn log_store_error(
    context: UiErrorContext,
    action_name: &'static str,
    err: &course_core::StoreError,
) -> UiError {
    tracing::error!(action = action_name, %err, "form action addressed a missing row");
    UiError::from_store(context, err)
}
