//! Shared key material for integration tests

#![allow(dead_code)]

use std::sync::LazyLock;

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{
    EcdsaKeyPair, ECDSA_P256_SHA256_FIXED_SIGNING, ECDSA_P384_SHA384_FIXED_SIGNING,
    ECDSA_P521_SHA512_FIXED_SIGNING,
};
use der::pem::LineEnding;
use rsa::pkcs8::EncodePrivateKey;
use tkn::keys::pem::{decode_private_key, decode_public_key, public_key_pem};
use tkn::{AlgorithmId, EcdsaCurve, Key, KeyClass};

pub const SECRET: &str = "s3cr3t-value";
pub const WRONG_SECRET: &str = "wrong";

/// RSA keys are slow to generate; share two across a test binary
pub static RSA_PEM: LazyLock<String> = LazyLock::new(generate_rsa_pem);
pub static OTHER_RSA_PEM: LazyLock<String> = LazyLock::new(generate_rsa_pem);

pub fn generate_rsa_pem() -> String {
    let mut rng = rand::thread_rng();
    let private = rsa::RsaPrivateKey::new(&mut rng, 2048).expect("failed to generate RSA key");
    private
        .to_pkcs8_pem(LineEnding::LF)
        .expect("failed to encode PKCS#8 PEM")
        .as_str()
        .to_owned()
}

pub fn generate_ecdsa_pem(curve: EcdsaCurve) -> String {
    let algorithm = match curve {
        EcdsaCurve::P256 => &ECDSA_P256_SHA256_FIXED_SIGNING,
        EcdsaCurve::P384 => &ECDSA_P384_SHA384_FIXED_SIGNING,
        EcdsaCurve::P521 => &ECDSA_P521_SHA512_FIXED_SIGNING,
    };
    let pkcs8 = EcdsaKeyPair::generate_pkcs8(algorithm, &SystemRandom::new())
        .expect("failed to generate ECDSA key");
    der::pem::encode_string("PRIVATE KEY", LineEnding::LF, pkcs8.as_ref())
        .expect("failed to encode PEM")
}

/// A signing key that fits `algorithm`
pub fn signing_key(algorithm: AlgorithmId) -> Key {
    match (algorithm.key_class(), EcdsaCurve::for_algorithm(algorithm)) {
        (KeyClass::Secret, _) => Key::symmetric(SECRET),
        (KeyClass::Asymmetric, None) => {
            decode_private_key(&RSA_PEM, algorithm).expect("failed to load RSA key")
        }
        (KeyClass::Asymmetric, Some(curve)) => {
            decode_private_key(&generate_ecdsa_pem(curve), algorithm)
                .expect("failed to load ECDSA key")
        }
    }
}

/// A key that fits `algorithm` but was not used for signing
pub fn unrelated_key(algorithm: AlgorithmId) -> Key {
    match (algorithm.key_class(), EcdsaCurve::for_algorithm(algorithm)) {
        (KeyClass::Secret, _) => Key::symmetric(WRONG_SECRET),
        (KeyClass::Asymmetric, None) => {
            decode_private_key(&OTHER_RSA_PEM, algorithm).expect("failed to load RSA key")
        }
        (KeyClass::Asymmetric, Some(curve)) => {
            decode_private_key(&generate_ecdsa_pem(curve), algorithm)
                .expect("failed to load ECDSA key")
        }
    }
}

/// The key a verifier would hold: the secret itself, or the public key
/// taken through its SPKI PEM
pub fn verifying_key(key: &Key, algorithm: AlgorithmId) -> Key {
    match key.key_class() {
        KeyClass::Secret => key.clone(),
        KeyClass::Asymmetric => {
            let pem = public_key_pem(key).expect("failed to render public key");
            decode_public_key(&pem, algorithm).expect("failed to load public key")
        }
    }
}

/// A key of the given class, matching `algorithm` where the class allows
pub fn key_of_class(class: KeyClass, algorithm: AlgorithmId) -> Key {
    match class {
        KeyClass::Secret => Key::symmetric(SECRET),
        KeyClass::Asymmetric if algorithm.is_asymmetric() => signing_key(algorithm),
        KeyClass::Asymmetric => signing_key(AlgorithmId::RS256),
    }
}
