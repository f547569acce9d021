use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(CourseId);

/// A single course record. Edits replace the whole value, never single fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub description: String,
}

impl Course {
    pub fn new(id: CourseId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Row title as shown in the course list, e.g. `(3) Algebra`.
    pub fn list_title(&self) -> String {
        format!("({}) {}", self.id, self.name)
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "position", rename_all = "snake_case")]
pub enum FormMode {
    Adding,
    Editing(usize),
}

impl FormMode {
    pub fn from_edit_index(edit_index: Option<usize>) -> Self {
        match edit_index {
            Some(position) => Self::Editing(position),
            None => Self::Adding,
        }
    }

    pub fn is_editing(self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Adding => "Add",
            Self::Editing(_) => "Save changes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Id,
    Name,
    Description,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Name => "Course name",
            Self::Description => "Description",
        }
    }
}
