//! Alphanumeric ("natural") string comparison.
//!
//! Runs of ASCII digits are compared by numeric value, everything else byte by
//! byte. `"10.1"` therefore sorts after `"2.1"`, and `"2.01"` equals `"2.1"`.

use std::cmp::Ordering;

/// Compare two strings treating digit runs as numbers.
///
/// Digit runs of any length are supported; leading zeros are ignored. When
/// `case_sensitive` is false, ASCII letters are compared upper-cased. If one
/// string is a prefix of the other (numerically), the longer one is greater.
#[must_use]
pub fn compare(a: &str, b: &str, case_sensitive: bool) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let end_a = digit_run_end(a, i);
            let end_b = digit_run_end(b, j);
            match compare_digit_runs(&a[i..end_a], &b[j..end_b]) {
                Ordering::Equal => {}
                ord => return ord,
            }
            i = end_a;
            j = end_b;
        } else {
            let (c1, c2) = if case_sensitive {
                (a[i], b[j])
            } else {
                (a[i].to_ascii_uppercase(), b[j].to_ascii_uppercase())
            };
            match c1.cmp(&c2) {
                Ordering::Equal => {}
                ord => return ord,
            }
            i += 1;
            j += 1;
        }
    }

    match (i < a.len(), j < b.len()) {
        (false, false) => Ordering::Equal,
        (true, _) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Like [`compare`], but strings that compare equal are ordered by length.
///
/// Keeps `"ATSAM3N00B"` and `"ATSAM3N0B"` distinct while `compare` treats
/// them as the same name.
#[must_use]
pub fn compare_len(a: &str, b: &str, case_sensitive: bool) -> Ordering {
    compare(a, b, case_sensitive).then_with(|| a.len().cmp(&b.len()))
}

fn digit_run_end(s: &[u8], start: usize) -> usize {
    s[start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(s.len(), |n| start + n)
}

/// Numeric comparison of two digit runs without converting them to integers.
fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(run: &[u8]) -> &[u8] {
    let zeros = run.iter().take_while(|&&c| c == b'0').count();
    &run[zeros..]
}
