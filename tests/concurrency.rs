//! Sharing keys and tokens across threads

mod common;

use std::thread;

use common::{signing_key, verifying_key};
use tkn::*;

const THREADS: usize = 8;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn shared_types_are_send_and_sync() {
    assert_send_sync::<Key>();
    assert_send_sync::<Token>();
    assert_send_sync::<SignedToken>();
    assert_send_sync::<TokenDescription>();
    assert_send_sync::<Error>();
}

fn sign_and_verify_in_threads(algorithm: AlgorithmId) {
    let key = signing_key(algorithm);
    let public = verifying_key(&key, algorithm);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let (key, public) = (&key, &public);
                scope.spawn(move || {
                    let subject = format!("user-{i}");
                    let token = Token::builder().claim("sub", subject.as_str()).build()?;
                    let signed = token.sign(key, algorithm)?;
                    let parsed = parse(&signed, public, algorithm)?;
                    assert_eq!(parsed.subject(), Some(subject.as_str()));
                    Ok::<_, Error>(signed)
                })
            })
            .collect();

        for handle in handles {
            let signed = handle.join().unwrap().unwrap();
            assert!(signed.verify(&public, algorithm).is_ok(), "{algorithm}");
        }
    });
}

#[test]
fn hmac_key_shared_across_threads() {
    sign_and_verify_in_threads(AlgorithmId::HS256);
}

#[test]
fn rsa_key_shared_across_threads() {
    sign_and_verify_in_threads(AlgorithmId::RS256);
    sign_and_verify_in_threads(AlgorithmId::PS384);
}

#[test]
fn ecdsa_key_shared_across_threads() {
    sign_and_verify_in_threads(AlgorithmId::ES256);
}

#[test]
fn signed_token_shared_across_threads() {
    let key = signing_key(AlgorithmId::HS512);
    let signed = Token::builder()
        .claim("sub", "1337")
        .build()
        .unwrap()
        .sign(&key, AlgorithmId::HS512)
        .unwrap();

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                let token = signed.verify(&key, AlgorithmId::HS512).unwrap();
                assert_eq!(token.subject(), Some("1337"));
            });
        }
    });
}
