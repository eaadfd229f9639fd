//! Header credential extraction.
//!
//! Every function here is total: a missing header, a scheme mismatch, bad
//! base64, invalid UTF-8 or a missing identifier all produce `None`. Nothing
//! in this module can fail a request.

use std::fmt;

use axum::http::{HeaderMap, header::AsHeaderName};
use base64::{
    Engine, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};

/// Standard alphabet, accepting payloads with or without `=` padding.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A decoded `identifier:secret` pair.
///
/// The identifier is never empty. The secret may be empty and may itself
/// contain colons.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialPair {
    /// Login, client id or any other public half of the credential.
    pub identifier: String,
    /// Password or client secret.
    pub secret: String,
}

impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Returns the first value of a header as a string.
///
/// Values that are not visible ASCII are treated as absent.
#[must_use]
pub fn header_str<K: AsHeaderName>(headers: &HeaderMap, name: K) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Matches `scheme` case-insensitively at the start of `header` and returns
/// the trimmed remainder.
///
/// A header shorter than the scheme does not match.
#[must_use]
pub fn strip_scheme<'a>(header: &'a str, scheme: &str) -> Option<&'a str> {
    // `get` returns None both for short headers and for a cut inside a
    // multi-byte character.
    let prefix = header.get(..scheme.len())?;
    if !prefix.eq_ignore_ascii_case(scheme) {
        return None;
    }
    Some(header[scheme.len()..].trim())
}

/// Decodes a base64 `identifier:secret` payload.
///
/// Padding is optional. Splits on the first colon; returns `None` when there is no colon or the
/// identifier is empty.
#[must_use]
pub fn decode_pair(payload: &str) -> Option<CredentialPair> {
    let decoded = LENIENT.decode(payload).ok()?;
    let text = String::from_utf8(decoded).ok()?;

    let (identifier, secret) = text.split_once(':')?;
    if identifier.is_empty() {
        return None;
    }

    Some(CredentialPair {
        identifier: identifier.to_string(),
        secret: secret.to_string(),
    })
}

/// Extracts a pair from a header carrying `<scheme> <base64(id:secret)>`.
#[must_use]
pub fn scheme_pair(header: Option<&str>, scheme: &str) -> Option<CredentialPair> {
    strip_scheme(header?, scheme).and_then(decode_pair)
}

/// Extracts an opaque token from a header carrying `<scheme> <token>`.
///
/// The token is returned verbatim; an empty token counts as absent.
#[must_use]
pub fn scheme_token<'a>(header: Option<&'a str>, scheme: &str) -> Option<&'a str> {
    strip_scheme(header?, scheme).filter(|token| !token.is_empty())
}
