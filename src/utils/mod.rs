pub mod base64url;
pub mod path;

pub use base64url::{encode, encode_bytes};
