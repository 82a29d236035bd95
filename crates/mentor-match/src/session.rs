//! Session-scoped presentation preferences.
//!
//! The active view (student or alumni dashboard) is carried by the caller for the
//! lifetime of a session instead of living in process-wide state.

use serde::{Deserialize, Serialize};

/// Dashboard perspective selected for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewRole {
    #[default]
    Student,
    Alumni,
}

impl ViewRole {
    pub const fn label(self) -> &'static str {
        match self {
            ViewRole::Student => "student",
            ViewRole::Alumni => "alumni",
        }
    }

    pub const fn toggle(self) -> Self {
        match self {
            ViewRole::Student => ViewRole::Alumni,
            ViewRole::Alumni => ViewRole::Student,
        }
    }
}

/// Preferences owned by one session; cheap to copy into request handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPreferences {
    pub view: ViewRole,
}

impl SessionPreferences {
    pub fn with_view(view: ViewRole) -> Self {
        Self { view }
    }

    pub fn switched(self) -> Self {
        Self {
            view: self.view.toggle(),
        }
    }
}
