//! Field predicates for problem metadata.
//!
//! Each accepted value must match its pattern in full. The year field also
//! accepts the literal `tmp`; blank years are resolved by the prompt layer.

use regex::Regex;
use std::sync::LazyLock;

static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:20[0-9]{2}|tmp)$").expect("Invalid year regex"));

static ROUND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{1,10}$").expect("Invalid round regex"));

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9+-]+$").expect("Invalid slug regex"));

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_!?#()=~+*/.:,; -]+$").expect("Invalid problem name regex")
});

/// Check a year: `20xx` or the placeholder `tmp`.
pub fn is_valid_year(year: &str) -> bool {
    YEAR_REGEX.is_match(year)
}

/// Check a contest round: 1 to 10 ASCII letters or digits.
pub fn is_valid_round(round: &str) -> bool {
    ROUND_REGEX.is_match(round)
}

/// Check a folder slug: letters, digits, `-` and `+`.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

/// Check a problem name against the allow-listed character set.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Normalize an accepted round to its stored form.
pub fn normalize_round(round: &str) -> String {
    round.to_uppercase()
}
