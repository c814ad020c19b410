// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Percent-decode a card href into a relative path.
/// Invalid UTF-8 after decoding is replaced, not rejected; `+` stays `+`.
pub fn decode_reference(raw: &str) -> String {
    let bytes = urlencoding::decode_binary(raw.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
