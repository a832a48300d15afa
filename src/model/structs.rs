use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{ErrorKind, Result};

/// Shown when a record participant carries neither an email nor a name.
pub const UNKNOWN_PARTICIPANT: &str = "Unknown";
pub const SCHEDULE_TBA: &str = "TBA";

/// A participant as the server reports it: either a bare email or a record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Participant {
    Identifier(String),
    Record {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        email: Option<String>,
    },
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Participant {
    /// Identity shown next to the badge and sent back on removal.
    /// Records prefer the email, then the name.
    pub fn display_identity(&self) -> &str {
        match self {
            Participant::Identifier(id) => id,
            Participant::Record { name, email } => non_empty(email)
                .or_else(|| non_empty(name))
                .unwrap_or(UNKNOWN_PARTICIPANT),
        }
    }

    /// Text the initials badge is computed from. Records prefer the name here.
    pub fn badge_source(&self) -> &str {
        match self {
            Participant::Identifier(id) => id,
            Participant::Record { name, email } => {
                non_empty(name).or_else(|| non_empty(email)).unwrap_or("")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_participants: u32,
    #[serde(default, deserialize_with = "lenient_participants")]
    pub participants: Vec<Participant>,
}

impl Activity {
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn schedule_or_tba(&self) -> &str {
        non_empty(&self.schedule).unwrap_or(SCHEDULE_TBA)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> core::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Anything that is not an array counts as "no participants".
fn lenient_participants<'de, D>(deserializer: D) -> core::result::Result<Vec<Participant>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| Participant::deserialize(item).map_err(serde::de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// Activities keyed by name, in the order the server listed them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    pub fn from_value(value: Value) -> Result<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(ErrorKind::ParseError(format!(
                    "expected an object of activities, got {other}"
                ))
                .into())
            }
        };

        let mut entries = Vec::with_capacity(map.len());
        for (name, details) in map {
            let activity: Activity = serde_json::from_value(details)?;
            entries.push((name, activity));
        }

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, a)| (name.as_str(), a))
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Activity)> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
