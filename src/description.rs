//! Token descriptions
//!
//! A description is a YAML (or JSON) document with two optional mappings:
//!
//! ```yaml
//! headers:
//!   kid: "1234"
//! payload:
//!   iss: admin
//!   sub: "1337"
//! ```

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::token::{with_claims, with_headers, Token};

/// Headers and payload of a token to be minted
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenDescription {
    /// Protected header entries
    #[serde(default)]
    pub headers: Option<Map<String, Value>>,

    /// Claims
    #[serde(default)]
    pub payload: Option<Map<String, Value>>,
}

impl TokenDescription {
    /// Decode a description from YAML or JSON
    pub fn from_yaml(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(input).map_err(|e| Error::DescriptionInvalid(e.to_string()))
    }

    /// Read and decode a description file
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading token description");

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::DescriptionInvalid(format!("{}: {e}", path.display())))?;

        let description = Self::from_yaml(&content)?;
        tracing::debug!(
            headers = description.headers.as_ref().map_or(0, Map::len),
            claims = description.payload.as_ref().map_or(0, Map::len),
            "decoded token description"
        );
        Ok(description)
    }

    /// Check if neither headers nor payload carry any entry
    pub fn is_empty(&self) -> bool {
        let empty =
            |entries: &Option<Map<String, Value>>| entries.as_ref().map_or(true, Map::is_empty);
        empty(&self.headers) && empty(&self.payload)
    }

    /// Build the described token, payload first
    pub fn into_token(self) -> Result<Token> {
        if self.is_empty() {
            return Err(Error::ConstructionRejected(
                "no valid token description".to_string(),
            ));
        }

        let claims = self.payload.into_iter().map(with_claims);
        let headers = self.headers.into_iter().map(with_headers);
        Token::new(claims.chain(headers))
    }
}
