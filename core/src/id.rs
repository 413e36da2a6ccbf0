//! Short, shareable identifiers of the form `<prefix>_<timestamp><random>`.
//!
//! The timestamp is Unix milliseconds in base 36, so ids sort roughly by
//! creation time. The suffix avoids glyphs that are easy to misread
//! (`0`, `1`, `i`, `l`, `o`, `I`, `L`, `O`). Not suitable where uniqueness
//! has security consequences: the generator is `fastrand`.

use std::time::{SystemTime, UNIX_EPOCH};

const ID_ALPHABET: &[u8] = b"23456789abcdefghjkmnpqrstuvwxyzABCDEFGHJKMNPQRSTUVWXYZ";
const BASE36_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 16;

pub const REQUEST_ID_PREFIX: &str = "req";

/// Generate an id, prefixed with `prefix_` when `prefix` is non-empty.
pub fn generate_id(prefix: Option<&str>) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    compose_id(prefix, millis, |n| fastrand::usize(..n))
}

/// Id for tagging an outgoing request, e.g. `req_loyw3v28Xk...`.
pub fn generate_request_id() -> String {
    generate_id(Some(REQUEST_ID_PREFIX))
}

/// `pick(n)` returns an index below `n`.
fn compose_id(prefix: Option<&str>, millis: u128, mut pick: impl FnMut(usize) -> usize) -> String {
    let mut id = String::with_capacity(32);
    if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
        id.push_str(prefix);
        id.push('_');
    }
    id.push_str(&to_base36(millis));
    for _ in 0..SUFFIX_LEN {
        id.push(char::from(ID_ALPHABET[pick(ID_ALPHABET.len())]));
    }
    id
}

fn to_base36(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    digits.iter().rev().map(|&d| char::from(d)).collect()
}
