//! The unsigned token
//!
//! A [`Token`] is a header set and a claim set. It is produced by the
//! builder or by a successful [`parse`](crate::parse) and never changes
//! afterwards; signing borrows it and returns a new [`SignedToken`].

use serde_json::{Map, Value};

use crate::algorithm::AlgorithmId;
use crate::error::Result;
use crate::keys::Key;
use crate::token::{parsed, signed, SignedToken, TokenBuilder, TokenOption};

/// Claim set of a token
pub type Claims = Map<String, Value>;

/// Header set of a token
pub type Headers = Map<String, Value>;

/// A JWT header and claim set
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    headers: Headers,
    claims: Claims,
}

impl Token {
    /// Build a token from options applied in order
    ///
    /// ```
    /// use tkn::{with_claims, with_headers, Token};
    ///
    /// let token = Token::new([
    ///     with_claims([("iss", "admin"), ("sub", "1337")]),
    ///     with_headers([("kid", "1234")]),
    /// ])?;
    /// assert_eq!(token.issuer(), Some("admin"));
    /// # Ok::<(), tkn::Error>(())
    /// ```
    pub fn new(options: impl IntoIterator<Item = TokenOption>) -> Result<Self> {
        options
            .into_iter()
            .fold(TokenBuilder::new(), TokenBuilder::apply)
            .build()
    }

    /// Start an explicit builder
    pub fn builder() -> TokenBuilder {
        TokenBuilder::new()
    }

    pub(crate) fn from_parts(headers: Headers, claims: Claims) -> Self {
        Self { headers, claims }
    }

    /// Get all headers
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Get all claims
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Get a single header
    pub fn header(&self, name: &str) -> Option<&Value> {
        self.headers.get(name)
    }

    /// Get a single claim
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// Get the issuer (iss claim)
    pub fn issuer(&self) -> Option<&str> {
        self.claim("iss").and_then(Value::as_str)
    }

    /// Get the subject (sub claim)
    pub fn subject(&self) -> Option<&str> {
        self.claim("sub").and_then(Value::as_str)
    }

    /// Get the JWT ID (jti claim)
    pub fn jwt_id(&self) -> Option<&str> {
        self.claim("jti").and_then(Value::as_str)
    }

    /// Get the key ID (kid header)
    pub fn key_id(&self) -> Option<&str> {
        self.header("kid").and_then(Value::as_str)
    }

    /// Get the algorithm named in the `alg` header, if it is a supported one
    pub fn algorithm(&self) -> Option<AlgorithmId> {
        self.header("alg")
            .and_then(Value::as_str)
            .and_then(|alg| AlgorithmId::from_str(alg).ok())
    }

    /// Sign the token with `key` using `algorithm`
    ///
    /// The `alg` header is set to `algorithm` and `typ` defaults to `JWT`.
    /// A key that does not fit the algorithm fails with
    /// [`Error::SignFailed`](crate::Error::SignFailed).
    pub fn sign(&self, key: &Key, algorithm: AlgorithmId) -> Result<SignedToken> {
        signed::sign(self, key, algorithm)
    }

    /// Verify a compact token and return its headers and claims
    ///
    /// See [`parse`](crate::parse).
    pub fn parse(token: impl AsRef<[u8]>, key: &Key, algorithm: AlgorithmId) -> Result<Self> {
        parsed::parse(token, key, algorithm)
    }
}
