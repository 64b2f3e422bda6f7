//! The four dashboard charts and what distinguishes them.

use api::Endpoint;

/// Visual form a chart takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartStyle {
    Column,
    Pie,
    Timeline,
    Calendar,
}

/// Descriptor of one dashboard chart: which statistic it shows, where that
/// statistic comes from, and how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Total presence per weekday, as a pie.
    PresenceWeekday,
    /// Mean presence time per weekday, as columns.
    MeanTimeWeekday,
    /// Mean arrival and departure per weekday, as a timeline.
    PresenceStartEnd,
    /// Daily presence over the year, as a calendar heatmap.
    PresenceDays,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::PresenceWeekday,
        ChartKind::MeanTimeWeekday,
        ChartKind::PresenceStartEnd,
        ChartKind::PresenceDays,
    ];

    pub fn style(&self) -> ChartStyle {
        match self {
            ChartKind::PresenceWeekday => ChartStyle::Pie,
            ChartKind::MeanTimeWeekday => ChartStyle::Column,
            ChartKind::PresenceStartEnd => ChartStyle::Timeline,
            ChartKind::PresenceDays => ChartStyle::Calendar,
        }
    }

    pub fn endpoint(&self, user_id: u32) -> Endpoint {
        match self {
            ChartKind::PresenceWeekday => Endpoint::PresenceWeekday(user_id),
            ChartKind::MeanTimeWeekday => Endpoint::MeanTimeWeekday(user_id),
            ChartKind::PresenceStartEnd => Endpoint::PresenceStartEnd(user_id),
            ChartKind::PresenceDays => Endpoint::PresenceDays(user_id),
        }
    }

    /// Route segment and CSS modifier.
    pub fn slug(&self) -> &'static str {
        match self {
            ChartKind::PresenceWeekday => "presence_weekday",
            ChartKind::MeanTimeWeekday => "mean_time_weekday",
            ChartKind::PresenceStartEnd => "presence_start_end",
            ChartKind::PresenceDays => "presence_days",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_matches_endpoint_path() {
        for kind in ChartKind::ALL {
            let path = kind.endpoint(1).path();
            assert_eq!(path, format!("/api/v1/{}/1", kind.slug()));
        }
    }

    #[test]
    fn every_style_is_used_once() {
        use std::collections::HashSet;

        let styles: HashSet<ChartStyle> = ChartKind::ALL.iter().map(ChartKind::style).collect();
        assert_eq!(styles.len(), 4);
    }
}
