//! In-memory course list and the add/edit form that mutates it.

use crossbeam_channel::Receiver;
use shared::{
    domain::{Course, CourseId, FormField, FormMode},
    error::ValidationError,
};
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod events;

pub use events::StoreEvent;

use events::Subscribers;

pub const SEED_COURSE_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("position {position} is out of range for {len} courses")]
    PositionOutOfRange { position: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added { position: usize },
    Updated { position: usize },
}

/// Raw text of the form plus the position being edited, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub id: String,
    pub name: String,
    pub description: String,
    pub edit_index: Option<usize>,
}

impl FormState {
    pub fn mode(&self) -> FormMode {
        FormMode::from_edit_index(self.edit_index)
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Name => &self.name,
            FormField::Description => &self.description,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.id.is_empty() && self.name.is_empty() && self.description.is_empty()
    }

    fn validate(&self) -> Result<Course, ValidationError> {
        let id = self
            .id
            .parse::<i32>()
            .map_err(|_| ValidationError::NonNumericId)?;
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Course::new(CourseId(id), name, self.description.trim()))
    }
}

/// Owns the course collection and the form. One instance per UI session.
#[derive(Debug, Default)]
pub struct CourseStore {
    courses: Vec<Course>,
    form: FormState,
    subscribers: Subscribers,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses,
            ..Self::default()
        }
    }

    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.subscribers.subscribe()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get(&self, position: usize) -> Option<&Course> {
        self.courses.get(position)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn edit_index(&self) -> Option<usize> {
        self.form.edit_index
    }

    pub fn mode(&self) -> FormMode {
        self.form.mode()
    }

    pub fn submit_label(&self) -> &'static str {
        self.mode().submit_label()
    }

    pub fn set_id_field(&mut self, text: impl Into<String>) {
        self.form.id = text.into();
        self.emit(StoreEvent::FormEdited { field: FormField::Id });
    }

    pub fn set_name_field(&mut self, text: impl Into<String>) {
        self.form.name = text.into();
        self.emit(StoreEvent::FormEdited {
            field: FormField::Name,
        });
    }

    pub fn set_description_field(&mut self, text: impl Into<String>) {
        self.form.description = text.into();
        self.emit(StoreEvent::FormEdited {
            field: FormField::Description,
        });
    }

    pub fn set_field(&mut self, field: FormField, text: impl Into<String>) {
        match field {
            FormField::Id => self.set_id_field(text),
            FormField::Name => self.set_name_field(text),
            FormField::Description => self.set_description_field(text),
        }
    }

    pub fn reset_form(&mut self) {
        self.form = FormState::default();
        self.emit(StoreEvent::FormReset);
    }

    pub fn begin_edit(&mut self, position: usize) -> Result<(), StoreError> {
        let course = self
            .courses
            .get(position)
            .ok_or(StoreError::PositionOutOfRange {
                position,
                len: self.courses.len(),
            })?;
        self.form = FormState {
            id: course.id.to_string(),
            name: course.name.clone(),
            description: course.description.clone(),
            edit_index: Some(position),
        };
        debug!(position, course_id = course.id.0, "editing course");
        self.emit(StoreEvent::EditStarted { position });
        Ok(())
    }

    /// Removes the course at `position`, keeping the edit cursor on the same
    /// logical record when an earlier row disappears.
    pub fn delete_at(&mut self, position: usize) -> Result<Course, StoreError> {
        if position >= self.courses.len() {
            return Err(StoreError::PositionOutOfRange {
                position,
                len: self.courses.len(),
            });
        }
        let removed = self.courses.remove(position);
        debug!(position, course_id = removed.id.0, "deleted course");
        self.emit(StoreEvent::CourseDeleted {
            position,
            id: removed.id,
        });

        match self.form.edit_index {
            Some(editing) if editing == position => self.reset_form(),
            Some(editing) if position < editing => {
                self.form.edit_index = Some(editing - 1);
            }
            _ => {}
        }
        Ok(removed)
    }

    /// Validates the form and either appends a new course or overwrites the
    /// one being edited. Edits are not re-checked for id collisions.
    pub fn save(&mut self) -> Result<SaveOutcome, ValidationError> {
        let course = self.form.validate().inspect_err(|err| {
            warn!(reason = %err, "rejected course form");
        })?;

        let outcome = match self.form.edit_index {
            None => {
                if self.courses.iter().any(|existing| existing.id == course.id) {
                    warn!(course_id = course.id.0, "rejected duplicate course id");
                    return Err(ValidationError::DuplicateId(course.id));
                }
                debug!(course_id = course.id.0, "added course");
                self.courses.push(course);
                let position = self.courses.len() - 1;
                self.emit(StoreEvent::CourseAdded { position });
                SaveOutcome::Added { position }
            }
            Some(position) => {
                debug!(position, course_id = course.id.0, "updated course");
                self.courses[position] = course;
                self.emit(StoreEvent::CourseUpdated { position });
                SaveOutcome::Updated { position }
            }
        };
        self.reset_form();
        Ok(outcome)
    }

    /// Callback form of [`CourseStore::save`]: the error message is handed to
    /// `on_error` and nothing else happens.
    pub fn save_with(&mut self, on_error: impl FnOnce(String)) -> Option<SaveOutcome> {
        match self.save() {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                on_error(err.to_string());
                None
            }
        }
    }

    pub fn seed_if_empty(&mut self) -> bool {
        if !self.courses.is_empty() {
            return false;
        }
        self.courses.extend((1..=SEED_COURSE_COUNT).map(|n| {
            Course::new(
                CourseId(n as i32),
                format!("Name {n}"),
                format!("Description {n}"),
            )
        }));
        info!(count = SEED_COURSE_COUNT, "seeded placeholder courses");
        self.emit(StoreEvent::Seeded {
            count: SEED_COURSE_COUNT,
        });
        true
    }

    fn emit(&mut self, event: StoreEvent) {
        self.subscribers.emit(event);
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
