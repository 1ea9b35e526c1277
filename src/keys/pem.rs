//! PEM key files
//!
//! Loads private keys (PKCS#1 `RSA PRIVATE KEY`, PKCS#8 `PRIVATE KEY`) and
//! public keys (SPKI `PUBLIC KEY`), and renders the public half of a key as
//! an SPKI PEM. Uses the RustCrypto `der` and `spki` crates.

use std::path::Path;

use der::asn1::{AnyRef, BitString};
use der::pem::LineEnding;
use der::{Decode, Document, EncodePem, SecretDocument};
use spki::{AlgorithmIdentifierOwned, ObjectIdentifier, SubjectPublicKeyInfoOwned, SubjectPublicKeyInfoRef};

use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::keys::{AsymmetricKey, EcdsaCurve, Key};

const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
const EC_PUBLIC_KEY_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
const SECP256R1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
const SECP384R1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");
const SECP521R1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

/// Create error message for key encoding failures
fn pem_error(operation: &str, details: impl std::fmt::Display) -> Error {
    Error::KeyRejected(format!("pem: {operation}: {details}"))
}

fn curve_oid(curve: EcdsaCurve) -> ObjectIdentifier {
    match curve {
        EcdsaCurve::P256 => SECP256R1_OID,
        EcdsaCurve::P384 => SECP384R1_OID,
        EcdsaCurve::P521 => SECP521R1_OID,
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| pem_error("failed to read key file", format!("{}: {e}", path.display())))
}

/// Load the private key for `algorithm` from a PEM file
pub fn load_private_key(path: impl AsRef<Path>, algorithm: AlgorithmId) -> Result<Key> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), %algorithm, "loading private key");
    decode_private_key(&read(path)?, algorithm)
}

/// Load the public key for `algorithm` from a PEM file
pub fn load_public_key(path: impl AsRef<Path>, algorithm: AlgorithmId) -> Result<Key> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), %algorithm, "loading public key");
    decode_public_key(&read(path)?, algorithm)
}

/// Decode a PEM private key for `algorithm`
///
/// RSA algorithms accept PKCS#1 and PKCS#8, ECDSA algorithms PKCS#8 on the
/// algorithm's curve.
pub fn decode_private_key(pem: &str, algorithm: AlgorithmId) -> Result<Key> {
    if algorithm.is_symmetric() {
        return Err(pem_error(
            "no key file for HMAC",
            format!("{algorithm} signs with a secret"),
        ));
    }

    let (label, document) =
        SecretDocument::from_pem(pem).map_err(|e| pem_error("invalid PEM", e))?;

    match (label, EcdsaCurve::for_algorithm(algorithm)) {
        ("RSA PRIVATE KEY", None) => Key::rsa_pkcs1(document.as_bytes()),
        ("PRIVATE KEY", None) => Key::rsa_pkcs8(document.as_bytes()),
        ("PRIVATE KEY", Some(curve)) => Key::ecdsa_pkcs8(document.as_bytes(), curve),
        (label, _) => Err(pem_error(
            "unsupported label",
            format!("'{label}' cannot be used with {algorithm}"),
        )),
    }
}

/// Decode a PEM `PUBLIC KEY` (SPKI) for `algorithm`
pub fn decode_public_key(pem: &str, algorithm: AlgorithmId) -> Result<Key> {
    if algorithm.is_symmetric() {
        return Err(pem_error(
            "no key file for HMAC",
            format!("{algorithm} verifies with a secret"),
        ));
    }

    let (label, document) = Document::from_pem(pem).map_err(|e| pem_error("invalid PEM", e))?;
    if label != "PUBLIC KEY" {
        return Err(pem_error(
            "unsupported label",
            format!("expected 'PUBLIC KEY', found '{label}'"),
        ));
    }

    let info = SubjectPublicKeyInfoRef::from_der(document.as_bytes())
        .map_err(|e| pem_error("invalid SPKI", e))?;
    let key_bytes = info.subject_public_key.raw_bytes().to_vec();

    match EcdsaCurve::for_algorithm(algorithm) {
        None if info.algorithm.oid == RSA_ENCRYPTION_OID => Ok(Key::rsa_public(key_bytes)),
        Some(curve) if info.algorithm.oid == EC_PUBLIC_KEY_OID => {
            let parameters = info
                .algorithm
                .parameters_oid()
                .map_err(|e| pem_error("missing curve", e))?;
            if parameters != curve_oid(curve) {
                return Err(pem_error(
                    "curve mismatch",
                    format!("{algorithm} requires {curve}"),
                ));
            }
            Ok(Key::ecdsa_public(key_bytes, curve))
        }
        _ => Err(pem_error(
            "algorithm mismatch",
            format!("key {} cannot be used with {algorithm}", info.algorithm.oid),
        )),
    }
}

/// Render the public half of an asymmetric key as an SPKI `PUBLIC KEY` PEM
pub fn public_key_pem(key: &Key) -> Result<String> {
    let (algorithm, key_bytes) = match key {
        Key::Symmetric(_) => {
            return Err(pem_error(
                "no public key",
                "symmetric keys have no public half",
            ))
        }
        Key::Asymmetric(AsymmetricKey::RsaPrivate(rsa)) => (rsa_identifier(), rsa.public_der()),
        Key::Asymmetric(AsymmetricKey::RsaPublic(rsa)) => (rsa_identifier(), rsa.as_der()),
        Key::Asymmetric(AsymmetricKey::EcdsaPrivate(ec)) => {
            (ec_identifier(ec.curve()), ec.public_point())
        }
        Key::Asymmetric(AsymmetricKey::EcdsaPublic(ec)) => {
            (ec_identifier(ec.curve()), ec.as_point())
        }
    };

    let subject_public_key = BitString::new(0, key_bytes.to_vec())
        .map_err(|e| pem_error("failed to create bit string", e))?;

    let info = SubjectPublicKeyInfoOwned {
        algorithm,
        subject_public_key,
    };

    info.to_pem(LineEnding::LF)
        .map_err(|e| pem_error("failed to encode SPKI", e))
}

fn rsa_identifier() -> AlgorithmIdentifierOwned {
    AlgorithmIdentifierOwned {
        oid: RSA_ENCRYPTION_OID,
        parameters: Some(AnyRef::NULL.into()),
    }
}

fn ec_identifier(curve: EcdsaCurve) -> AlgorithmIdentifierOwned {
    let curve = curve_oid(curve);
    AlgorithmIdentifierOwned {
        oid: EC_PUBLIC_KEY_OID,
        parameters: Some(AnyRef::from(&curve).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::get_algorithm;
    use aws_lc_rs::rand::SystemRandom;
    use aws_lc_rs::signature::EcdsaKeyPair;
    use der::pem;

    fn ecdsa_private_pem(curve: EcdsaCurve) -> String {
        let rng = SystemRandom::new();
        let pkcs8 = EcdsaKeyPair::generate_pkcs8(curve.signing_algorithm(), &rng)
            .expect("Failed to generate key");
        pem::encode_string("PRIVATE KEY", LineEnding::LF, pkcs8.as_ref())
            .expect("Failed to encode PEM")
    }

    #[test]
    fn test_ecdsa_private_and_public_pem() {
        let private = decode_private_key(&ecdsa_private_pem(EcdsaCurve::P256), AlgorithmId::ES256)
            .expect("private key should load");

        let public_pem = public_key_pem(&private).expect("public key should render");
        assert!(public_pem.starts_with("-----BEGIN PUBLIC KEY-----"));

        let public = decode_public_key(&public_pem, AlgorithmId::ES256).unwrap();
        assert_eq!(
            public.ecdsa_public_point(EcdsaCurve::P256).unwrap(),
            private.ecdsa_public_point(EcdsaCurve::P256).unwrap()
        );

        let es256 = get_algorithm(&AlgorithmId::ES256);
        let signature = es256.sign("header.payload", &private).unwrap();
        assert!(es256.verify("header.payload", &signature, &public).is_ok());
    }

    #[test]
    fn test_public_pem_curve_mismatch() {
        let private =
            decode_private_key(&ecdsa_private_pem(EcdsaCurve::P384), AlgorithmId::ES384).unwrap();
        let public_pem = public_key_pem(&private).unwrap();

        assert!(decode_public_key(&public_pem, AlgorithmId::ES384).is_ok());
        assert!(matches!(
            decode_public_key(&public_pem, AlgorithmId::ES256),
            Err(Error::KeyRejected(_))
        ));
        assert!(matches!(
            decode_public_key(&public_pem, AlgorithmId::RS256),
            Err(Error::KeyRejected(_))
        ));
    }

    #[test]
    fn test_private_key_for_wrong_family() {
        let pem = ecdsa_private_pem(EcdsaCurve::P256);
        assert!(matches!(
            decode_private_key(&pem, AlgorithmId::ES384),
            Err(Error::KeyRejected(_))
        ));
        assert!(matches!(
            decode_private_key(&pem, AlgorithmId::RS256),
            Err(Error::KeyRejected(_))
        ));
    }

    #[test]
    fn test_hmac_has_no_key_file() {
        let pem = ecdsa_private_pem(EcdsaCurve::P256);
        assert!(matches!(
            decode_private_key(&pem, AlgorithmId::HS256),
            Err(Error::KeyRejected(_))
        ));
        assert!(public_key_pem(&Key::symmetric(b"secret".to_vec())).is_err());
    }

    #[test]
    fn test_invalid_pem() {
        assert!(matches!(
            decode_private_key("not a pem", AlgorithmId::RS256),
            Err(Error::KeyRejected(_))
        ));
        assert!(matches!(
            decode_public_key("not a pem", AlgorithmId::RS256),
            Err(Error::KeyRejected(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_private_key("/nonexistent/tkn/key.pem", AlgorithmId::RS256);
        assert!(matches!(result, Err(Error::KeyRejected(_))));
    }
}
