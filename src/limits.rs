//! Size limit constants for input validation

/// Maximum length for a signed token string (100KB)
///
/// Holds a header, payload and signature at their decoded limits once
/// base64url-encoded, plus the two separators.
pub(crate) const MAX_TOKEN_LENGTH: usize = 100 * 1024;

/// Maximum size for decoded header JSON (8KB)
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for decoded payload JSON (64KB)
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 64 * 1024;

/// Maximum size for decoded signature bytes (1KB)
/// An RSA-8192 signature is exactly 1024 bytes
pub(crate) const MAX_DECODED_SIGNATURE_SIZE: usize = 1024;

/// Length of `n` bytes after unpadded base64url encoding
const fn encoded_len(n: usize) -> usize {
    (n * 4).div_ceil(3)
}

const _: () = assert!(
    encoded_len(MAX_DECODED_HEADER_SIZE)
        + encoded_len(MAX_DECODED_PAYLOAD_SIZE)
        + encoded_len(MAX_DECODED_SIGNATURE_SIZE)
        + 2
        <= MAX_TOKEN_LENGTH
);
