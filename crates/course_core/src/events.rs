//! Change notifications emitted by [`crate::CourseStore`] after each mutation.

use crossbeam_channel::{unbounded, Receiver, Sender};
use shared::domain::{CourseId, FormField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    FormEdited { field: FormField },
    FormReset,
    EditStarted { position: usize },
    CourseAdded { position: usize },
    CourseUpdated { position: usize },
    CourseDeleted { position: usize, id: CourseId },
    Seeded { count: usize },
}

impl StoreEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FormEdited { .. } => "form_edited",
            Self::FormReset => "form_reset",
            Self::EditStarted { .. } => "edit_started",
            Self::CourseAdded { .. } => "course_added",
            Self::CourseUpdated { .. } => "course_updated",
            Self::CourseDeleted { .. } => "course_deleted",
            Self::Seeded { .. } => "seeded",
        }
    }

    /// True when the course list itself changed, not only the form.
    pub fn touches_collection(&self) -> bool {
        matches!(
            self,
            Self::CourseAdded { .. }
                | Self::CourseUpdated { .. }
                | Self::CourseDeleted { .. }
                | Self::Seeded { .. }
        )
    }
}

/// Fan-out of store events to every live receiver.
#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    senders: Vec<Sender<StoreEvent>>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = unbounded();
        self.senders.push(tx);
        rx
    }

    pub(crate) fn emit(&mut self, event: StoreEvent) {
        let before = self.senders.len();
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
        let dropped = before - self.senders.len();
        if dropped > 0 {
            tracing::debug!(dropped, "pruned disconnected store subscribers");
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.senders.len()
    }
}
