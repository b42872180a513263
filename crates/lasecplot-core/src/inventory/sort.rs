//! Numeric-aware port ordering
//!
//! Paths are ordered by the first run of ASCII digits they contain, read as a
//! non-negative integer (no digits counts as 0), then byte-wise by the full path.
//! `COM2` therefore sorts before `COM10`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

use super::Port;

static FIRST_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// First digit run of `path` with leading zeros stripped ("" stands for 0)
fn first_number(path: &str) -> &str {
    FIRST_NUMBER
        .find(path)
        .map(|m| m.as_str().trim_start_matches('0'))
        .unwrap_or("")
}

/// Compare two decimal digit strings without leading zeros by value.
///
/// Works for any length, so very long indices never overflow.
fn cmp_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Total order used for every port list the helper emits
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    cmp_digits(first_number(a), first_number(b)).then_with(|| a.cmp(b))
}

/// Sort ports in place by [`compare_paths`]
pub fn sort_ports(ports: &mut [Port]) {
    ports.sort_by(|a, b| compare_paths(&a.path, &b.path));
}
