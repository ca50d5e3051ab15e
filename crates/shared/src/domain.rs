use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ControllerError;

/// Identity of a member record, assigned by the data source.
///
/// The upstream feed serves ids as JSON strings (`"id": "7"`), so
/// deserialization accepts either a number or a decimal string. Serialization
/// always emits a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MemberId(pub i64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(value) => Ok(MemberId(value)),
            RawId::Text(text) => text
                .trim()
                .parse::<i64>()
                .map(MemberId)
                .map_err(|err| serde::de::Error::custom(format!("invalid member id '{text}': {err}"))),
        }
    }
}

impl FromStr for MemberId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(MemberId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Member {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: MemberId(id),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    pub fn field(&self, field: EditableField) -> &str {
        match field {
            EditableField::Name => &self.name,
            EditableField::Email => &self.email,
            EditableField::Role => &self.role,
        }
    }

    /// Every field rendered as text, id first, in display column order.
    pub fn searchable_values(&self) -> [String; 4] {
        [
            self.id.0.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.role.clone(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditableField {
    Name,
    Email,
    Role,
}

impl EditableField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
        }
    }
}

impl fmt::Display for EditableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditableField {
    type Err = ControllerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "role" => Ok(Self::Role),
            other => Err(ControllerError::UnknownField(other.to_string())),
        }
    }
}

/// Pending edits for one member. `None` means "keep the committed value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl MemberPatch {
    pub fn set(&mut self, field: EditableField, value: impl Into<String>) {
        let slot = match field {
            EditableField::Name => &mut self.name,
            EditableField::Email => &mut self.email,
            EditableField::Role => &mut self.role,
        };
        *slot = Some(value.into());
    }

    pub fn get(&self, field: EditableField) -> Option<&str> {
        match field {
            EditableField::Name => self.name.as_deref(),
            EditableField::Email => self.email.as_deref(),
            EditableField::Role => self.role.as_deref(),
        }
    }

    /// Returns a replacement record with only the patched fields overwritten.
    pub fn apply_to(&self, member: &Member) -> Member {
        Member {
            id: member.id,
            name: self.name.clone().unwrap_or_else(|| member.name.clone()),
            email: self.email.clone().unwrap_or_else(|| member.email.clone()),
            role: self.role.clone().unwrap_or_else(|| member.role.clone()),
        }
    }
}
