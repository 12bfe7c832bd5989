//! The editable card model and its input validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::persona::Persona;

/// Name shown on a fresh card.
pub const DEFAULT_NAME: &str = "Firstname Lastname";

/// Wit shown on a fresh card until the user generates or types their own.
pub const DEFAULT_WIT: &str = "I put the \"pro\" in \"procrastination\".";

/// Placeholder portrait for a fresh card.
pub const DEFAULT_IMAGE_URL: &str = "https://picsum.photos/seed/user/400/400";

/// Visual theme of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardTheme {
    #[default]
    Tactical,
    Magazine,
}

impl CardTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            CardTheme::Tactical => "Tactical",
            CardTheme::Magazine => "Magazine",
        }
    }
}

impl fmt::Display for CardTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardTheme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tactical" => Ok(CardTheme::Tactical),
            "Magazine" => Ok(CardTheme::Magazine),
            other => Err(CoreError::Validation(format!(
                "Invalid theme '{other}'. Must be one of: Tactical, Magazine"
            ))),
        }
    }
}

impl TryFrom<String> for CardTheme {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A card being edited. Owned by the client session until it is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    pub name: String,
    pub persona: Persona,
    #[validate(custom(function = "validate_image_reference"))]
    pub image_url: String,
    #[serde(default)]
    pub theme: CardTheme,
    #[serde(default)]
    pub satirical_wit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 280, message = "Bio is too long"))]
    pub bio: Option<String>,
    #[serde(default)]
    pub is_evolved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 280, message = "Custom quote is too long"))]
    pub custom_quote: Option<String>,
}

impl CardData {
    /// A fresh card for `persona` with every other field at its default.
    pub fn draft(persona: Persona) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            persona,
            image_url: DEFAULT_IMAGE_URL.to_string(),
            theme: CardTheme::Tactical,
            satirical_wit: DEFAULT_WIT.to_string(),
            bio: Some(String::new()),
            is_evolved: false,
            custom_quote: Some(String::new()),
        }
    }

    /// Trim user-entered text, drop blank optionals, and validate.
    pub fn normalized(mut self) -> Result<Self, CoreError> {
        self.name = self.name.trim().to_string();
        self.image_url = self.image_url.trim().to_string();
        self.satirical_wit = self.satirical_wit.trim().to_string();
        self.bio = non_blank(self.bio);
        self.custom_quote = non_blank(self.custom_quote);

        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        Ok(self)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Accept `http(s)` URLs and base64 `data:image/...` URIs.
pub fn is_image_reference(value: &str) -> bool {
    if let Some(rest) = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
    {
        return !rest.is_empty() && !rest.contains(char::is_whitespace);
    }
    if let Some(rest) = value.strip_prefix("data:image/") {
        return rest
            .split_once(";base64,")
            .is_some_and(|(mime, data)| !mime.is_empty() && !data.is_empty());
    }
    false
}

fn validate_image_reference(value: &str) -> Result<(), ValidationError> {
    if is_image_reference(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("image_url");
        err.message = Some("Please enter a valid image URL or upload an image".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::persona;

    fn card() -> CardData {
        let mut c = CardData::draft(persona::resolve("coffee-badger").clone());
        c.name = "Jane Doe".into();
        c
    }

    #[test]
    fn draft_uses_defaults() {
        let c = CardData::draft(persona::catalog()[0].clone());
        assert_eq!(c.name, DEFAULT_NAME);
        assert_eq!(c.satirical_wit, DEFAULT_WIT);
        assert_eq!(c.theme, CardTheme::Tactical);
        assert!(!c.is_evolved);
    }

    #[test]
    fn normalized_trims_and_drops_blank_optionals() {
        let mut c = card();
        c.name = "  Jane Doe  ".into();
        c.bio = Some("   ".into());
        c.custom_quote = Some(" Synergy. ".into());

        let c = c.normalized().unwrap();
        assert_eq!(c.name, "Jane Doe");
        assert_eq!(c.bio, None);
        assert_eq!(c.custom_quote.as_deref(), Some("Synergy."));
    }

    #[test]
    fn short_name_is_rejected() {
        let mut c = card();
        c.name = " J ".into();
        assert_matches!(c.normalized(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn long_name_is_rejected() {
        let mut c = card();
        c.name = "x".repeat(51);
        assert_matches!(c.normalized(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn bad_image_reference_is_rejected() {
        let mut c = card();
        c.image_url = "ftp://example.com/me.png".into();
        let err = c.normalized().unwrap_err();
        assert!(err.to_string().contains("valid image URL"));
    }

    #[test]
    fn image_reference_forms() {
        assert!(is_image_reference("https://example.com/a.png"));
        assert!(is_image_reference("http://example.com/a.png"));
        assert!(is_image_reference("data:image/png;base64,iVBORw0KGgo="));
        assert!(!is_image_reference("https://"));
        assert!(!is_image_reference("data:image/png;base64,"));
        assert!(!is_image_reference("data:text/plain;base64,aGk="));
        assert!(!is_image_reference("not a url"));
    }

    #[test]
    fn theme_round_trips_through_strings() {
        assert_eq!("Magazine".parse::<CardTheme>().unwrap(), CardTheme::Magazine);
        assert_eq!(CardTheme::Tactical.to_string(), "Tactical");
        assert_matches!("Neon".parse::<CardTheme>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn card_data_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(card()).unwrap();
        assert_eq!(json["imageUrl"], DEFAULT_IMAGE_URL);
        assert_eq!(json["isEvolved"], false);
        assert_eq!(json["persona"]["id"], "coffee-badger");
    }
}
