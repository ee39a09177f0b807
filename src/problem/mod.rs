//! Problem metadata model.
//!
//! A [`ProblemDescriptor`] holds the five values collected from the user.
//! Every field except `link` is validated before a descriptor exists, so
//! downstream code never sees malformed input.

pub mod layout;
pub mod validation;


use chrono::{Datelike, Local};
use std::fmt;

pub use layout::{ProblemLayout, README_FILE};

/// The metadata fields prompted for, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemField {
    Year,
    Round,
    Folder,
    Name,
    Url,
}

impl ProblemField {
    /// All fields in the order they are prompted.
    pub const ALL: [ProblemField; 5] = [
        ProblemField::Year,
        ProblemField::Round,
        ProblemField::Folder,
        ProblemField::Name,
        ProblemField::Url,
    ];

    /// Prompt text shown before reading the field.
    pub fn prompt(self) -> &'static str {
        match self {
            ProblemField::Year => "Year: ",
            ProblemField::Round => "Round: ",
            ProblemField::Folder => "Folder: ",
            ProblemField::Name => "Name: ",
            ProblemField::Url => "URL: ",
        }
    }

    /// Check a trimmed raw value against the field's predicate.
    ///
    /// The URL field accepts anything. A blank year is not accepted here;
    /// the prompt layer substitutes the current year before validating.
    pub fn accepts(self, value: &str) -> bool {
        match self {
            ProblemField::Year => validation::is_valid_year(value),
            ProblemField::Round => validation::is_valid_round(value),
            ProblemField::Folder => validation::is_valid_slug(value),
            ProblemField::Name => validation::is_valid_name(value),
            ProblemField::Url => true,
        }
    }
}

impl fmt::Display for ProblemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemField::Year => write!(f, "year"),
            ProblemField::Round => write!(f, "round"),
            ProblemField::Folder => write!(f, "folder"),
            ProblemField::Name => write!(f, "name"),
            ProblemField::Url => write!(f, "url"),
        }
    }
}

/// A field value that failed its predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidField {
    pub field: ProblemField,
    pub value: String,
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bad input {}: {}", self.field, self.value)
    }
}

impl std::error::Error for InvalidField {}

/// Validated metadata for one problem entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemDescriptor {
    /// `20xx` or `tmp`.
    pub year: String,
    /// Upper-cased round identifier.
    pub round: String,
    /// Folder slug.
    pub slug: String,
    /// Human-readable problem name.
    pub name: String,
    /// Problem URL. Collected, never written anywhere.
    pub link: String,
}

impl ProblemDescriptor {
    /// Build a descriptor, validating every field.
    ///
    /// The round is upper-cased; the other values are stored as given.
    pub fn new(
        year: &str,
        round: &str,
        slug: &str,
        name: &str,
        link: &str,
    ) -> Result<Self, InvalidField> {
        let checks = [
            (ProblemField::Year, year),
            (ProblemField::Round, round),
            (ProblemField::Folder, slug),
            (ProblemField::Name, name),
        ];
        for (field, value) in checks {
            if !field.accepts(value) {
                return Err(InvalidField {
                    field,
                    value: value.to_string(),
                });
            }
        }

        Ok(Self {
            year: year.to_string(),
            round: validation::normalize_round(round),
            slug: slug.to_string(),
            name: name.to_string(),
            link: link.to_string(),
        })
    }
}

/// Current calendar year in local time, used for blank year input.
pub fn current_year() -> String {
    Local::now().year().to_string()
}
