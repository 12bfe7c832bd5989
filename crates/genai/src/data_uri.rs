//! `data:<mime>;base64,<payload>` URIs, the format images travel in
//! between the browser and the image model.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::GenAiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime_type: String,
    /// Base64 payload, exactly as received.
    pub data: String,
}

impl DataUri {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

impl FromStr for DataUri {
    type Err = GenAiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            GenAiError::InvalidInput(
                "Expected an image data URI of the form data:<mimetype>;base64,<data>".into(),
            )
        };

        let rest = s.trim().strip_prefix("data:").ok_or_else(invalid)?;
        let (mime_type, data) = rest.split_once(";base64,").ok_or_else(invalid)?;
        if mime_type.is_empty() || !mime_type.contains('/') || data.is_empty() {
            return Err(invalid());
        }
        STANDARD.decode(data).map_err(|_| invalid())?;

        Ok(Self::new(mime_type, data))
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.data)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_png_data_uri() {
        let uri: DataUri = "data:image/png;base64,iVBORw0KGgo=".parse().unwrap();
        assert_eq!(uri.mime_type, "image/png");
        assert_eq!(uri.data, "iVBORw0KGgo=");
        assert!(uri.is_image());
        assert_eq!(uri.to_string(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn rejects_plain_urls_and_bad_payloads() {
        assert_matches!(
            "https://example.com/me.png".parse::<DataUri>(),
            Err(GenAiError::InvalidInput(_))
        );
        assert_matches!(
            "data:image/png;base64,***".parse::<DataUri>(),
            Err(GenAiError::InvalidInput(_))
        );
        assert_matches!(
            "data:image/png,raw".parse::<DataUri>(),
            Err(GenAiError::InvalidInput(_))
        );
    }
}
