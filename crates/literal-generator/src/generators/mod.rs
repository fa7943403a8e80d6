//! Per-category value generators.
//!
//! Each submodule produces the value for one [`Category`]. They are generic
//! over [`rand::Rng`] so the caller decides where randomness comes from.

pub mod alphanumeric;
pub mod date;
pub mod pattern;
pub mod uuid;

use crate::samples;
use crate::Category;
use chrono::NaiveDate;
use rand::Rng;

/// Generate a value for the given category.
///
/// `today` is the date used by [`Category::Date`]; the other categories
/// ignore it.
pub fn generate_category<R: Rng>(category: Category, rng: &mut R, today: NaiveDate) -> String {
    match category {
        Category::Alphanumeric => alphanumeric::generate_alphanumeric(rng),

        Category::Uuid => uuid::generate_uuid_v4(rng),

        Category::Date => date::generate_date(today),

        Category::FileName => {
            pattern::generate_pattern(pattern::FILE_NAME_PATTERN, rng, pattern::NUMBER_RANGE)
        }

        Category::Email => {
            pattern::generate_pattern(pattern::EMAIL_PATTERN, rng, pattern::NUMBER_RANGE)
        }

        Category::Sample => samples::pick_sample(rng),
    }
}
