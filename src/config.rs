//! Display settings for a [`ProgressBar`](crate::ProgressBar).
//!
//! [`BarConfig`] is a plain value type so an embedding application can keep it in
//! its own settings file (enable the `serde` feature) and hand it to
//! [`ProgressBar::set_config`](crate::ProgressBar::set_config) or the builder.

use compact_str::CompactString;

/// Default number of glyph cells inside the bar delimiters.
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Default minimum number of seconds between two unforced repaints.
pub const DEFAULT_MIN_REFRESH_INTERVAL: f64 = 0.1;

/// Appearance and throttling of a progress bar.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BarConfig {
    /// Label printed before the percentage.
    pub prefix: CompactString,
    /// Number of glyph cells between the `|` delimiters.
    pub bar_width: usize,
    /// Minimum seconds between repaints unless a repaint is forced.
    pub min_refresh_interval: f64,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            prefix: CompactString::default(),
            bar_width: DEFAULT_BAR_WIDTH,
            min_refresh_interval: DEFAULT_MIN_REFRESH_INTERVAL,
        }
    }
}

impl BarConfig {
    /// Returns this config with the given prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<CompactString>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Returns this config with the given bar width.
    #[must_use]
    pub const fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Returns this config with the given minimum refresh interval, in seconds.
    #[must_use]
    pub const fn with_min_refresh_interval(mut self, seconds: f64) -> Self {
        self.min_refresh_interval = seconds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::BarConfig;

    /// Defaults
    /// Verifies an empty prefix, a 40-cell bar and a 0.1s interval.
    #[test]
    #[allow(clippy::float_cmp)]
    fn test_defaults() {
        let config = BarConfig::default();
        assert!(config.prefix.is_empty());
        assert_eq!(config.bar_width, 40);
        assert_eq!(config.min_refresh_interval, 0.1);
    }

    /// Fluent Setters
    /// Verifies chained `with_*` calls set every field.
    #[test]
    fn test_with_chain() {
        let config = BarConfig::default()
            .with_prefix("download")
            .with_bar_width(12)
            .with_min_refresh_interval(0.5);

        assert_eq!(config.prefix, "download");
        assert_eq!(config.bar_width, 12);
        assert!((config.min_refresh_interval - 0.5).abs() < f64::EPSILON);
    }
}
