//! Pure, stateless conversions between the representations the edge and
//! cloud services use: timestamp formats, time units, key casing, age
//! approximation, and reading-format adapters.
//!
//! Every function here returns a fresh value and never mutates its input;
//! all are safe to call concurrently. The only environmental dependency is
//! the [`crate::clock::Clock`] passed explicitly to the age conversions.

mod age;
mod casing;
mod reading;
mod timestamp;
mod unit;

pub use age::{age_to_birth_date, birth_date_to_age};
pub use casing::{camel_to_snake, camel_to_snake_string, snake_to_camel, snake_to_camel_string};
pub use reading::{reading_to_cloud, reading_to_edge};
pub use timestamp::{
    date_to_iso, iso_to_date, iso_to_unix, iso_to_unix_ms, unix_ms_to_iso, unix_to_iso,
};
pub use unit::{hours_to_seconds, minutes_to_seconds, seconds_to_hours, seconds_to_minutes};
