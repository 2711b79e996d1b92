//! HMAC-SHA256 signatures for Tripletex webhooks and host callbacks.
//!
//! Tripletex signs every webhook delivery and puts the result in a single
//! header:
//!
//! ```text
//! X-Tripletex-Signature: {signature}
//! ```
//!
//! where `signature = HMAC-SHA256(raw_body, webhook_secret)`.
//!
//! The MAC is always computed over the bytes exactly as they arrived on the
//! wire. Re-encoding the parsed JSON before verifying would change key order
//! and whitespace and make valid deliveries fail.
//!
//! The header value may be hex (either case) or standard base64 (padded or
//! not). A raw HMAC-SHA256 is 32 bytes, so hex is always 64 characters and
//! base64 is 43 or 44: the two forms never collide.

/// Header carrying the Tripletex webhook signature.
pub const SIGNATURE_HEADER: &str = "X-Tripletex-Signature";

/// Header carrying our own signature on status callbacks sent to the host.
pub const CALLBACK_SIGNATURE_HEADER: &str = "X-Gateway-Signature";

/// Length of a raw HMAC-SHA256 tag in bytes.
pub const MAC_LEN: usize = 32;

/// Errors produced by signature operations.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("missing signature header")]
    MissingHeader,
    #[error("invalid signature encoding")]
    InvalidEncoding,
    #[error("invalid signature")]
    SignatureMismatch,
}

impl From<ring::error::Unspecified> for SignatureError {
    fn from(_: ring::error::Unspecified) -> Self {
        Self::SignatureMismatch
    }
}

fn key(secret: &[u8]) -> ring::hmac::Key {
    ring::hmac::Key::new(ring::hmac::HMAC_SHA256, secret)
}

/// Compute the raw HMAC-SHA256 tag of `body`.
pub fn sign(body: &[u8], secret: &[u8]) -> Box<[u8]> {
    ring::hmac::sign(&key(secret), body)
        .as_ref()
        .to_owned()
        .into_boxed_slice()
}

/// Compute the signature of `body` and format it as lowercase hex, the form
/// Tripletex (and PHP's `hash_hmac`) emits.
pub fn sign_hex(body: &[u8], secret: &[u8]) -> String {
    hex::encode(sign(body, secret))
}

/// Decode a signature header value into raw tag bytes.
///
/// Accepts 64 hex digits or base64 with or without `=` padding.
pub fn decode_signature(value: &str) -> Result<Box<[u8]>, SignatureError> {
    let value = value.trim();
    if value.len() == MAC_LEN * 2 && value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return hex::decode(value)
            .map(Vec::into_boxed_slice)
            .map_err(|_| SignatureError::InvalidEncoding);
    }
    fast32::base64::RFC4648_NOPAD
        .decode_str(value.trim_end_matches('='))
        .map(Vec::into_boxed_slice)
        .map_err(|_| SignatureError::InvalidEncoding)
}

/// Verify a raw body against a signature header value in constant time.
///
/// `header_value` is `None` when the request carried no signature header.
pub fn verify_body(
    body: &[u8],
    header_value: Option<&str>,
    secret: &[u8],
) -> Result<(), SignatureError> {
    let header_value = header_value.ok_or(SignatureError::MissingHeader)?;
    let signature = decode_signature(header_value)?;
    ring::hmac::verify(&key(secret), body, &signature)?;
    Ok(())
}
