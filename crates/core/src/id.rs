// SPDX-License-Identifier: MIT

//!
//! Position & achievement IDs.  These are human-readable slugs (e.g.
//! `design-lead-fintech`) that appear in URLs.
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Characters that can't appear inside an ID: separators in the `position` &
/// `achievement` query parameters, and characters with a meaning in a URL
/// path.  Whitespace isn't allowed either.
pub const RESERVED_ID_CHARS: [char; 6] = [',', ':', '/', '?', '#', '%'];

/// Errors that can arise in relation to an ID
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("ID cannot be empty")]
    Empty,

    #[error("ID `{0}` cannot contain `{1}`")]
    ReservedChar(String, char),
}

/// Check the string is usable as an ID and return it trimmed
fn validate(id: String) -> Result<String, IdError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(IdError::Empty);
    }
    if let Some(reserved) = id
        .chars()
        .find(|c| c.is_whitespace() || RESERVED_ID_CHARS.contains(c))
    {
        return Err(IdError::ReservedChar(id.to_string(), reserved));
    }
    Ok(id.to_string())
}

/// Lowercase, with runs of anything that isn't a letter or digit replaced by a
/// single `-`.  e.g. `"Grew users 10x!"` becomes `grew-users-10x`
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

macro_rules! slug_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[rustfmt::skip]
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[derive(derive_more::Display, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from a string if the string is a valid ID
            pub fn from<S: ToString>(id: S) -> Result<Self, IdError> {
                Ok(Self(validate(id.to_string())?))
            }

            /// Get the underlying `&str`
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let string = String::deserialize(deserializer)?;
                $name::from(string).map_err(serde::de::Error::custom)
            }
        }
    };
}

slug_id!(
    /// Identifies a [`crate::Position`]
    PositionId
);

slug_id!(
    /// Identifies an [`crate::Achievement`] within its position
    AchievementId
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from() {
        assert_eq!(PositionId::from(""), Err(IdError::Empty));
        assert_eq!(PositionId::from("   "), Err(IdError::Empty));
        assert!(matches!(
            AchievementId::from("a,b"),
            Err(IdError::ReservedChar(_, ','))
        ));
        assert!(matches!(
            AchievementId::from("p:a"),
            Err(IdError::ReservedChar(_, ':'))
        ));
        for (id, reserved) in [("a/b", '/'), ("a?b", '?'), ("a#b", '#'), ("a%2Fb", '%'), ("a b", ' ')] {
            assert_eq!(
                PositionId::from(id),
                Err(IdError::ReservedChar(id.to_string(), reserved))
            );
        }
        assert_eq!(
            PositionId::from(" design-lead ").unwrap().as_str(),
            "design-lead"
        );
    }

    #[test]
    fn deserialisation() {
        let id: PositionId = serde_json::from_str(r#""principal-designer""#).unwrap();
        assert_eq!(id.to_string(), "principal-designer");
        assert!(serde_json::from_str::<PositionId>(r#""""#).is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""principal-designer""#);
    }

    #[test]
    fn slugs() {
        assert_eq!(slugify("Grew users 10x!"), "grew-users-10x");
        assert_eq!(
            slugify("  Reduced onboarding time by 75%  "),
            "reduced-onboarding-time-by-75"
        );
        assert_eq!(slugify("P&L for $50M+"), "p-l-for-50m");
        assert_eq!(slugify("!!!"), "");
    }
}
