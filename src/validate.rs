//! Parameter validation
//!
//! Checks that an algorithm, secret, key path and description path fit
//! together before any file is opened or key is parsed.

use crate::algorithm::{AlgorithmId, KeyClass};
use crate::error::{Error, Result};
use crate::utils::path;

const DESCRIPTION: &str = "a token description";
const KEYFILE: &str = "a keyfile";

/// Validate the parameters of a signing request
///
/// Checks run in order and stop at the first failure:
/// 1. `algorithm` is one of the supported algorithms
/// 2. `description_path` is a well formed path
/// 3. HMAC algorithms have a non-empty `secret`; RSA and ECDSA algorithms
///    have a non-empty, well formed `key_path`
///
/// No I/O is performed.
pub fn validate_params(
    algorithm: &str,
    secret: &str,
    key_path: &str,
    description_path: &str,
) -> Result<()> {
    let algorithm = AlgorithmId::from_str(algorithm)?;

    check_path(description_path, DESCRIPTION)?;

    match algorithm.key_class() {
        KeyClass::Secret if secret.is_empty() => {
            Err(Error::MissingSecret(algorithm.to_string()))
        }
        KeyClass::Secret => Ok(()),
        KeyClass::Asymmetric if key_path.is_empty() => {
            Err(Error::MissingKeyPath(algorithm.to_string()))
        }
        KeyClass::Asymmetric => check_path(key_path, KEYFILE),
    }
}

fn check_path(path: &str, target: &'static str) -> Result<()> {
    if path::is_valid(path) {
        Ok(())
    } else {
        Err(Error::InvalidPath {
            path: path.to_string(),
            target,
        })
    }
}
