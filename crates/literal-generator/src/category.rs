//! Generation categories.

use crate::samples;
use chrono::NaiveDate;
use std::fmt;

/// One of the six mutually exclusive ways a literal can be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Random `[A-Za-z0-9]` string, 5 to 15 characters long.
    Alphanumeric,
    /// Random UUID v4.
    Uuid,
    /// Current local date, `YYYY-MM-DD`.
    Date,
    /// `file_{n}.txt`.
    FileName,
    /// `user{n}@example.com`.
    Email,
    /// Entry of the fixed sample table.
    Sample,
}

impl Category {
    /// All categories in selector order.
    pub const ALL: [Category; 6] = [
        Category::Alphanumeric,
        Category::Uuid,
        Category::Date,
        Category::FileName,
        Category::Email,
        Category::Sample,
    ];

    /// Short snake_case name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Alphanumeric => "alphanumeric",
            Category::Uuid => "uuid",
            Category::Date => "date",
            Category::FileName => "file_name",
            Category::Email => "email",
            Category::Sample => "sample",
        }
    }

    /// Whether `value` has the shape this category produces.
    ///
    /// `today` is the date a [`Category::Date`] value must equal.
    pub fn matches(&self, value: &str, today: NaiveDate) -> bool {
        match self {
            Category::Alphanumeric => {
                (5..=15).contains(&value.len()) && value.chars().all(|c| c.is_ascii_alphanumeric())
            }
            Category::Uuid => is_canonical_uuid(value),
            Category::Date => value == today.format("%Y-%m-%d").to_string(),
            Category::FileName => value
                .strip_prefix("file_")
                .and_then(|rest| rest.strip_suffix(".txt"))
                .is_some_and(is_pattern_number),
            Category::Email => value
                .strip_prefix("user")
                .and_then(|rest| rest.strip_suffix("@example.com"))
                .is_some_and(is_pattern_number),
            Category::Sample => samples::is_sample(value),
        }
    }

    /// Categories whose shape `value` has.
    ///
    /// Usually one, but a sample such as `admin` also looks alphanumeric.
    pub fn classify(value: &str, today: NaiveDate) -> Vec<Category> {
        Self::ALL
            .into_iter()
            .filter(|category| category.matches(value, today))
            .collect()
    }
}

/// 36 lowercase hex characters with hyphens at byte offsets 8, 13, 18 and 23.
fn is_canonical_uuid(value: &str) -> bool {
    value.len() == 36
        && value.char_indices().all(|(i, c)| match i {
            8 | 13 | 18 | 23 => c == '-',
            _ => c.is_ascii_digit() || ('a'..='f').contains(&c),
        })
}

/// 1 to 4 decimal digits with a value in `1..=9999`.
fn is_pattern_number(digits: &str) -> bool {
    (1..=4).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
        && digits.parse::<u32>().is_ok_and(|n| n >= 1)
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
