//! URL normalization before a request goes on the wire.
//!
//! # Design
//! `flexible_encode` accepts a path that may be raw, already percent-encoded,
//! or a mix, and produces one consistently encoded form. It decodes first
//! and treats a malformed escape as proof the input was raw. Escapes of
//! reserved characters (`%2F`, `%3F`, ...) carry meaning distinct from the
//! literal character, so decoding leaves them alone and encoding passes
//! them through untouched.
//!
//! `prepare_url_for_sending` never reuses the literal query string: the
//! query is read into key/value pairs and serialized back from those pairs.
//! The path is the one the caller wrote; `Url` only validates it.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::{form_urlencoded, Position, Url};

use crate::config::{PrepareConfig, DEFAULT_PROTOCOL};
use crate::error::PrepareError;

/// Characters a URI may carry unescaped: alphanumerics plus the reserved
/// and mark characters below. Everything else is percent-encoded.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Reserved characters whose escapes survive decoding.
const DECODE_RESERVED: &[u8] = b";/?:@&=+$,#";

/// Prefix `url` with `default_protocol` (`"http:"` when `None`) and `//`
/// unless it already contains `://`.
pub fn set_default_protocol(url: &str, default_protocol: Option<&str>) -> String {
    if url.contains("://") {
        return url.to_string();
    }
    format!("{}//{url}", default_protocol.unwrap_or(DEFAULT_PROTOCOL))
}

/// Normalize a path that may be raw or already percent-encoded.
pub fn flexible_encode(input: &str) -> String {
    let spaced = input.replace("%20", " ");
    match decode_uri(&spaced) {
        Ok(decoded) => encode_uri(&decoded.text, &decoded.kept),
        Err(e) => {
            tracing::trace!(offset = e.offset, "malformed escape, encoding input as raw");
            encode_uri(&spaced, &[])
        }
    }
}

/// Prepare `url` for sending with the default configuration.
pub fn prepare_url_for_sending(url: &str) -> Result<String, PrepareError> {
    prepare_url_with(url, &PrepareConfig::default())
}

/// Apply the default protocol, re-encode the path and rebuild the query
/// from its key/value pairs.
///
/// The path is taken from the input text, not from the parsed `Url`, so dot
/// segments and other literal path content reach the wire as typed.
pub fn prepare_url_with(url: &str, config: &PrepareConfig) -> Result<String, PrepareError> {
    let with_protocol = set_default_protocol(url, Some(config.default_protocol.as_str()));
    let parsed = Url::parse(&with_protocol).map_err(|source| PrepareError::InvalidUrl {
        url: with_protocol.clone(),
        source,
    })?;

    let mut prepared = parsed[..Position::BeforePath].to_string();
    match literal_path(&with_protocol) {
        "" => prepared.push_str(parsed.path()),
        path => prepared.push_str(&flexible_encode(path)),
    }

    let query: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    if !query.is_empty() {
        prepared.push('?');
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&query)
            .finish();
        prepared.push_str(&encoded);
    }
    if let Some(fragment) = parsed.fragment() {
        prepared.push('#');
        prepared.push_str(fragment);
    }

    tracing::debug!(input = url, prepared = %prepared, "prepared url");
    Ok(prepared)
}

/// The path of `url` exactly as written: from the first `/` after the
/// authority up to the query or fragment.
fn literal_path(url: &str) -> &str {
    let after_scheme = url.find("://").map_or(0, |i| i + 3);
    let rest = &url[after_scheme..];
    let rest = &rest[..rest.find(|c: char| c == '?' || c == '#').unwrap_or(rest.len())];
    rest.find('/').map_or("", |i| &rest[i..])
}

#[derive(Debug)]
struct MalformedEscape {
    offset: usize,
}

/// Decoded text plus the byte offsets of reserved escapes that were kept.
struct Decoded {
    text: String,
    kept: Vec<usize>,
}

fn hex_pair(bytes: &[u8], at: usize) -> Option<u8> {
    let hi = char::from(*bytes.get(at + 1)?).to_digit(16)?;
    let lo = char::from(*bytes.get(at + 2)?).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Decode `%XX` escapes. Fails on a `%` without two hex digits and on
/// escapes that do not form valid UTF-8.
fn decode_uri(input: &str) -> Result<Decoded, MalformedEscape> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut kept = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        let start = i;
        let lead = hex_pair(bytes, i).ok_or(MalformedEscape { offset: start })?;
        i += 3;

        if lead < 0x80 {
            if DECODE_RESERVED.contains(&lead) {
                kept.push(out.len());
                out.extend_from_slice(&bytes[start..i]);
            } else {
                out.push(lead);
            }
            continue;
        }

        let width = utf8_width(lead).ok_or(MalformedEscape { offset: start })?;
        let mut seq = [lead, 0, 0, 0];
        for slot in seq.iter_mut().take(width).skip(1) {
            if bytes.get(i) != Some(&b'%') {
                return Err(MalformedEscape { offset: i });
            }
            *slot = hex_pair(bytes, i)
                .filter(|b| b & 0xC0 == 0x80)
                .ok_or(MalformedEscape { offset: i })?;
            i += 3;
        }
        // Rejects overlong forms and surrogates.
        std::str::from_utf8(&seq[..width]).map_err(|_| MalformedEscape { offset: start })?;
        out.extend_from_slice(&seq[..width]);
    }

    let text = String::from_utf8(out).map_err(|e| MalformedEscape {
        offset: e.utf8_error().valid_up_to(),
    })?;
    Ok(Decoded { text, kept })
}

/// Percent-encode `text`, copying the three-byte escapes at `kept` verbatim.
fn encode_uri(text: &str, kept: &[usize]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut start = 0;
    for &at in kept {
        out.extend(utf8_percent_encode(&text[start..at], URI_ENCODE_SET));
        out.push_str(&text[at..at + 3]);
        start = at + 3;
    }
    out.extend(utf8_percent_encode(&text[start..], URI_ENCODE_SET));
    out
}
