//! Formatting of a single progress line.
//!
//! Everything here is pure: the functions build owned strings and never touch a
//! writer, so repaints cannot leave formatting state behind in the output sink.
//!
//! A line looks like:
//!
//! ```text
//! \r<prefix>  42.5%|█████████████████▍                      | [3.1s<4.2s]
//! ```

/// Glyphs for a partially filled cell, from emptiest to fullest.
pub const GRADATION: [char; 8] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// Glyph for a completely filled cell.
pub const FULL_BLOCK: char = '█';

/// Delimiter on both sides of the bar.
pub const DELIMITER: char = '|';

/// Highest gradation index reachable from a fractional position. Index 7 only
/// appears once the bar is complete.
const MAX_PARTIAL_INDEX: i64 = 6;

/// Picks the gradation glyph index for `progress` in `[0, 1]`.
///
/// The index is the whole-percent offset into the current 10% bucket, capped at 6.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn gradation_index(progress: f64) -> usize {
    let percent = (progress * 100.0) as i64;
    let bucket = ((progress * 10.0).floor() * 10.0) as i64;
    (percent - bucket).clamp(0, MAX_PARTIAL_INDEX) as usize
}

/// Renders the bar including its delimiters.
///
/// The interior is always `width` cells (at least one, for the gradation glyph):
/// full blocks, one gradation glyph, then space padding. At `progress >= 1` the
/// gradation glyph is a full block, so the bar is solid.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn render_bar(progress: f64, width: usize) -> String {
    let filled = ((progress * width as f64).round() as usize).min(width.saturating_sub(1));
    let partial = if progress >= 1.0 {
        FULL_BLOCK
    } else {
        GRADATION[gradation_index(progress)]
    };
    let padding = width.saturating_sub(filled + 1);

    let mut bar = String::with_capacity((filled + 1) * FULL_BLOCK.len_utf8() + padding + 2);
    bar.push(DELIMITER);
    bar.extend(std::iter::repeat_n(FULL_BLOCK, filled));
    bar.push(partial);
    bar.extend(std::iter::repeat_n(' ', padding));
    bar.push(DELIMITER);
    bar
}

/// Renders a complete progress line, starting with a carriage return.
#[must_use]
pub fn render_line(prefix: &str, progress: f64, width: usize, elapsed: f64, eta: f64) -> String {
    let percent = progress * 100.0;
    let bar = render_bar(progress, width);
    format!("\r{prefix} {percent:5.1}%{bar} [{elapsed:.1}s<{eta:.1}s]")
}

#[cfg(test)]
mod tests {
    use super::{FULL_BLOCK, GRADATION, gradation_index, render_bar, render_line};

    fn interior(bar: &str) -> Vec<char> {
        let chars: Vec<char> = bar.chars().collect();
        assert_eq!(chars.first(), Some(&'|'));
        assert_eq!(chars.last(), Some(&'|'));
        chars[1..chars.len() - 1].to_vec()
    }

    /// Gradation Clamp
    /// Verifies the bucket offset is used as the glyph index and never exceeds 6.
    #[test]
    fn test_gradation_index_clamps_at_six() {
        assert_eq!(gradation_index(0.0), 0);
        assert_eq!(gradation_index(0.12), 2);
        assert_eq!(gradation_index(0.45), 5);
        assert_eq!(gradation_index(0.56), 6);
        assert_eq!(gradation_index(0.57), 6);
        assert_eq!(gradation_index(0.99), 6);
    }

    /// NaN Progress
    /// Verifies an undefined fraction falls back to the emptiest glyph.
    #[test]
    fn test_gradation_index_nan_is_zero() {
        assert_eq!(gradation_index(f64::NAN), 0);
    }

    /// Cell Accounting
    /// Verifies full blocks, exactly one gradation glyph, and padding fill the width.
    #[test]
    fn test_bar_cell_accounting() {
        let width = 40;
        for step in 1..100u32 {
            let progress = f64::from(step) / 100.0;
            let cells = interior(&render_bar(progress, width));
            assert_eq!(cells.len(), width, "progress {progress}");

            let padding = cells.iter().rev().take_while(|c| **c == ' ').count();
            let glyphs = &cells[..width - padding];
            let (partial, filled) = glyphs.split_last().expect("one gradation glyph");

            assert!(filled.iter().all(|c| *c == FULL_BLOCK));
            assert!(GRADATION[..7].contains(partial), "progress {progress}");
            assert_eq!(filled.len() + 1 + padding, width);
        }
    }

    /// Half Bar
    /// Verifies a 50% bar fills half the cells and ends on the thinnest glyph.
    #[test]
    fn test_bar_half() {
        assert_eq!(render_bar(0.5, 10), "|█████▏    |");
    }

    /// Empty Bar
    /// Verifies zero progress still draws one gradation glyph.
    #[test]
    fn test_bar_empty() {
        assert_eq!(render_bar(0.0, 4), "|▏   |");
    }

    /// Complete Bar
    /// Verifies a finished bar is solid with no padding.
    #[test]
    fn test_bar_complete_is_solid() {
        assert_eq!(render_bar(1.0, 10), "|██████████|");
        assert_eq!(render_bar(1.0, 1), "|█|");
    }

    /// Width Cap
    /// Verifies a fill that rounds up to the last cell leaves room for the gradation glyph.
    #[test]
    fn test_bar_never_overflows_width() {
        let cells = interior(&render_bar(0.97, 10));
        assert_eq!(cells.len(), 10);
        assert_eq!(cells[9], GRADATION[6]);
    }

    /// Zero Width
    /// Verifies a zero-width bar renders only the gradation glyph.
    #[test]
    fn test_bar_zero_width_still_has_gradation() {
        assert_eq!(render_bar(0.3, 0), "|▏|");
    }

    /// Line Layout
    /// Verifies the carriage return, prefix, percentage, bar and timing fields.
    #[test]
    fn test_line_layout() {
        let line = render_line("copy", 0.25, 8, 1.0, 3.0);
        assert_eq!(line, "\rcopy  25.0%|██▊     | [1.0s<3.0s]");
    }

    /// Infinite ETA
    /// Verifies zero progress with elapsed time prints an `inf` estimate.
    #[test]
    fn test_line_without_progress_has_infinite_eta() {
        let line = render_line("", 0.0, 2, 0.5, f64::INFINITY);
        assert_eq!(line, "\r   0.0%|▏ | [0.5s<infs]");
    }

    /// Undefined ETA
    /// Verifies zero progress at zero elapsed time prints a `NaN` estimate.
    #[test]
    fn test_line_without_progress_or_time_has_nan_eta() {
        let line = render_line("", 0.0, 2, 0.0, f64::NAN);
        assert_eq!(line, "\r   0.0%|▏ | [0.0s<NaNs]");
    }
}
