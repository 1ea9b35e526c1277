use serde_json::Value;

use crate::error::{Error, Result};
use crate::token::registered::{check_claim, check_header};
use crate::token::{Claims, Headers, Token};

/// A composable step of token construction
///
/// Created with [`with_claims`] or [`with_headers`] and applied in order by
/// [`Token::new`].
#[derive(Debug, Clone, PartialEq)]
pub enum TokenOption {
    /// Insert claims into the payload
    Claims(Vec<(String, Value)>),

    /// Insert headers into the protected header
    Headers(Vec<(String, Value)>),
}

/// Add every entry of `claims` to the token payload
pub fn with_claims<I, K, V>(claims: I) -> TokenOption
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    TokenOption::Claims(collect(claims))
}

/// Add every entry of `headers` to the token header
pub fn with_headers<I, K, V>(headers: I) -> TokenOption
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    TokenOption::Headers(collect(headers))
}

fn collect<I, K, V>(entries: I) -> Vec<(String, Value)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    entries
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

/// Builder for [`Token`]
///
/// Entries are checked as they are added. The first rejected entry is kept
/// and every later call is skipped, so [`build`](TokenBuilder::build)
/// returns either a complete token or that first error.
///
/// ```
/// use tkn::{Token, Error};
///
/// let token = Token::builder()
///     .claim("iss", "admin")
///     .claim("sub", "1337")
///     .header("kid", "1234")
///     .build()?;
/// assert_eq!(token.subject(), Some("1337"));
///
/// let rejected = Token::builder().claim("sub", 1337).build();
/// assert!(matches!(rejected, Err(Error::ConstructionRejected(_))));
/// # Ok::<(), tkn::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct TokenBuilder {
    headers: Headers,
    claims: Claims,
    error: Option<Error>,
}

impl TokenBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single claim
    pub fn claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        if self.error.is_none() {
            let (name, value) = (name.into(), value.into());
            match check_claim(&name, &value) {
                Ok(()) => {
                    self.claims.insert(name, value);
                }
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    /// Add a single header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        if self.error.is_none() {
            let (name, value) = (name.into(), value.into());
            match check_header(&name, &value) {
                Ok(()) => {
                    self.headers.insert(name, value);
                }
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    /// Add several claims
    pub fn claims<I, K, V>(self, claims: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        claims
            .into_iter()
            .fold(self, |builder, (name, value)| builder.claim(name, value))
    }

    /// Add several headers
    pub fn headers<I, K, V>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        headers
            .into_iter()
            .fold(self, |builder, (name, value)| builder.header(name, value))
    }

    /// Apply a [`TokenOption`]
    pub fn apply(self, option: TokenOption) -> Self {
        match option {
            TokenOption::Claims(claims) => self.claims(claims),
            TokenOption::Headers(headers) => self.headers(headers),
        }
    }

    /// Finish construction
    pub fn build(self) -> Result<Token> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(Token::from_parts(self.headers, self.claims)),
        }
    }
}
