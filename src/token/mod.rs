//! Token construction, signing and verification
//!
//! ```text
//! TokenBuilder / Token::new(options)
//!     │ .build()            ──► Error::ConstructionRejected
//!     ▼
//! Token (headers + claims)
//!     │ .sign(key, alg)     ──► Error::SignFailed
//!     ▼
//! SignedToken (compact JWS)
//!     │ parse / .verify()   ──► Error::VerificationFailed
//!     ▼
//! Token
//! ```
//!
// Internal modules
mod builder;
mod parsed;
mod registered;
mod signed;
#[allow(clippy::module_inception)]
mod token;

// Public API exports
pub use builder::{with_claims, with_headers, TokenBuilder, TokenOption};
pub use parsed::parse;
pub use signed::SignedToken;
pub use token::{Claims, Headers, Token};
