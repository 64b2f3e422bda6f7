//! Presentation settings shared by every chart.
//!
//! The hosting shell installs one [`ChartEnvironment`] into context before
//! any chart mounts; chart components read it instead of relying on global
//! state.

/// Series colours, in slice/bar order.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#3366cc", "#dc3912", "#ff9900", "#109618", "#990099", "#0099c6", "#dd4477",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ChartEnvironment {
    pub palette: &'static [&'static str],
    /// Drawing area of column, pie and timeline charts.
    pub width: f64,
    pub height: f64,
    /// Edge of one day cell in the calendar heatmap.
    pub calendar_cell_size: f64,
    /// Row height of the timeline chart.
    pub timeline_row_height: f64,
}

impl Default for ChartEnvironment {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE,
            width: 640.0,
            height: 360.0,
            calendar_cell_size: 13.0,
            timeline_row_height: 36.0,
        }
    }
}

impl ChartEnvironment {
    pub fn color(&self, index: usize) -> &'static str {
        if self.palette.is_empty() {
            DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
        } else {
            self.palette[index % self.palette.len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps() {
        let env = ChartEnvironment::default();
        assert_eq!(env.color(0), "#3366cc");
        assert_eq!(env.color(DEFAULT_PALETTE.len()), "#3366cc");
    }

    #[test]
    fn empty_palette_falls_back() {
        let env = ChartEnvironment {
            palette: &[],
            ..ChartEnvironment::default()
        };
        assert_eq!(env.color(1), "#dc3912");
    }
}
