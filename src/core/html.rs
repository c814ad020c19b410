// src/core/html.rs
// Raw-markup scanning. Everything works on byte offsets into the original
// text so callers can patch exactly what they found.

/// Find `pat` at or after `from`. Returns the absolute offset.
pub fn find_from(s: &str, pat: &str, from: usize) -> Option<usize> {
    s.get(from..)?.find(pat).map(|i| i + from)
}

/// All offsets where `pat` starts, left to right, non-overlapping.
pub fn find_all(s: &str, pat: &str) -> Vec<usize> {
    s.match_indices(pat).map(|(i, _)| i).collect()
}

/// If `pat` sits exactly at `pos`, return the offset just past it.
pub fn expect_at(s: &str, pos: usize, pat: &str) -> Option<usize> {
    s.get(pos..)?.starts_with(pat).then(|| pos + pat.len())
}

/// Skip whitespace from `pos`. Returns the first non-whitespace offset.
pub fn skip_ws(s: &str, pos: usize) -> usize {
    match s.get(pos..) {
        Some(rest) => pos + (rest.len() - rest.trim_start().len()),
        None => pos,
    }
}

/// Run of bytes from `pos` accepted by `pred`, at most `max` long.
/// Returns the end offset.
fn take_while(s: &str, pos: usize, max: usize, pred: impl Fn(u8) -> bool) -> usize {
    let b = s.as_bytes();
    let mut i = pos;
    while i < b.len() && i - pos < max && pred(b[i]) {
        i += 1;
    }
    i
}

/// Match a human date shape at `pos`: letters, whitespace, one or two
/// digits, a comma, whitespace, four digits (`February 3, 2024`).
/// Only the shape is checked; the month name and day may still be bogus.
pub fn date_shape_at(s: &str, pos: usize) -> Option<usize> {
    let b = s.as_bytes();

    let month_end = take_while(s, pos, usize::MAX, |c| c.is_ascii_alphabetic());
    if month_end == pos { return None; }

    let day_start = skip_ws(s, month_end);
    if day_start == month_end { return None; }

    let day_end = take_while(s, day_start, 2, |c| c.is_ascii_digit());
    if day_end == day_start || b.get(day_end) != Some(&b',') { return None; }

    let year_start = skip_ws(s, day_end + 1);
    if year_start == day_end + 1 { return None; }

    let year_end = take_while(s, year_start, 4, |c| c.is_ascii_digit());
    (year_end - year_start == 4).then_some(year_end)
}

/// `YYYY-MM-DD` shape check (digits and dashes only, no calendar check).
pub fn is_iso_date_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}
