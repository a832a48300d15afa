//! Render model for the board.
//!
//! Everything a surface draws is computed here from the server's catalog, so
//! the same data always yields the same view.

use crate::initials::get_initials;
use crate::model::structs::{Activity, ActivityCatalog};

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const GENERIC_ERROR: &str = "An error occurred";
pub const DELETE_GLYPH: &str = "×";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub activity: String,
    pub initials: String,
    /// Shown as the row label and sent back as `email` on removal.
    pub identity: String,
}

impl ParticipantRow {
    pub fn delete_label(&self) -> String {
        format!("Remove {} from {}", self.identity, self.activity)
    }

    pub fn delete_title(&self) -> String {
        format!("Remove {}", self.identity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantList {
    /// A single italic "No participants yet" item.
    Placeholder,
    Rows(Vec<ParticipantRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub title: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: u32,
    pub participants: ParticipantList,
}

impl ActivityCard {
    pub fn from_activity(name: &str, activity: &Activity) -> Self {
        let participants = if activity.participants.is_empty() {
            ParticipantList::Placeholder
        } else {
            ParticipantList::Rows(
                activity
                    .participants
                    .iter()
                    .map(|p| ParticipantRow {
                        activity: name.to_string(),
                        initials: get_initials(p.badge_source()),
                        identity: p.display_identity().to_string(),
                    })
                    .collect(),
            )
        };

        Self {
            title: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule_or_tba().to_string(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    /// `Schedule: … · Availability: N spots left`
    pub fn meta_line(&self) -> String {
        format!(
            "Schedule: {} · Availability: {} spots left",
            self.schedule, self.spots_left
        )
    }
}

/// The list area and the select control, rebuilt wholesale on every load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub cards: Vec<ActivityCard>,
    pub options: Vec<SelectOption>,
}

impl BoardView {
    pub fn from_catalog(catalog: &ActivityCatalog) -> Self {
        let mut options = Vec::with_capacity(catalog.len() + 1);
        options.push(SelectOption::placeholder());

        let cards = catalog
            .iter()
            .map(|(name, activity)| {
                options.push(SelectOption {
                    value: name.to_string(),
                    label: name.to_string(),
                });
                ActivityCard::from_activity(name, activity)
            })
            .collect();

        Self { cards, options }
    }

    pub fn card(&self, title: &str) -> Option<&ActivityCard> {
        self.cards.iter().find(|c| c.title == title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class applied to the message area
    pub fn class_name(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}
