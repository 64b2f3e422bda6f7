//! Routed pages. Each one is a thin wrapper that picks a chart kind.

mod charts;

pub use charts::{MeanTimeWeekday, PresenceDays, PresenceStartEnd, PresenceWeekday};
