//! Participant model.
//!
//! # Invariants
//! - `name` is non-blank and stored as given.
//! - `initials` is always derived from `name`, never set independently.
//! - `interests` keeps caller order and never contains blank entries.

use super::{non_blank, ModelValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable participant identifier.
pub type PersonId = Uuid;

/// One participant shown in the board sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Upper-cased first letters of each name token.
    pub initials: String,
    /// Hex color taken from `palette::PALETTE`.
    pub color: String,
    pub interests: Vec<String>,
}

impl Person {
    /// Creates a participant with a generated ID.
    ///
    /// # Errors
    /// - Returns `EmptyName` when `name` is empty or whitespace only.
    pub fn new<I, S>(
        name: &str,
        interests: I,
        color: impl Into<String>,
    ) -> Result<Self, ModelValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = non_blank(name).ok_or(ModelValidationError::EmptyName)?;
        let interests = interests
            .into_iter()
            .filter_map(|interest| non_blank(interest.as_ref()))
            .collect();

        Ok(Self {
            id: Uuid::new_v4(),
            initials: derive_initials(&name),
            name,
            color: color.into(),
            interests,
        })
    }
}

/// Derives display initials from a participant name.
///
/// Takes the first character of every whitespace-separated token and
/// upper-cases the result, so `"ada  lovelace"` becomes `"AL"`.
pub fn derive_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{derive_initials, Person};
    use crate::model::ModelValidationError;

    #[test]
    fn initials_take_first_letter_of_each_token() {
        assert_eq!(derive_initials("Ada Lovelace"), "AL");
        assert_eq!(derive_initials("  grace   brewster hopper "), "GBH");
        assert_eq!(derive_initials("émile"), "É");
    }

    #[test]
    fn new_keeps_text_and_drops_blank_interests() {
        let person = Person::new(" Ada ", ["hiking", "  ", " chess "], "#000000").unwrap();
        assert_eq!(person.name, " Ada ");
        assert_eq!(person.initials, "A");
        assert_eq!(person.interests, vec!["hiking", " chess "]);
    }

    #[test]
    fn new_rejects_blank_name() {
        let err = Person::new("   ", Vec::<String>::new(), "#000000").unwrap_err();
        assert_eq!(err, ModelValidationError::EmptyName);
    }
}
