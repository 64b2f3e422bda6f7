//! Pure helpers shared by the chart pages.

pub mod collate;
pub mod format;
pub mod interval;

pub use collate::Collation;
pub use interval::{parse_interval, TimeOfDay};
