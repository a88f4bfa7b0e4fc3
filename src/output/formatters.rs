//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar comparing a letter's observed share against its English share
///
/// A full bar means the letter is at least three times as common as usual.
#[must_use]
pub fn proportion_bar(observed: f64, baseline: f64, width: usize) -> String {
    create_progress_bar(observed / baseline, 3.0, width)
}

/// Render a score as a fixed-width column, showing unseen scores as a dash
#[must_use]
pub fn format_score(score: f64) -> String {
    if score <= crate::ngrams::UNSEEN {
        format!("{:>8}", "—")
    } else {
        format!("{score:>8.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(500.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-5.0, 100.0, 4), "░░░░");
    }

    #[test]
    fn proportion_bar_scales_by_baseline() {
        assert_eq!(proportion_bar(0.5, 0.1, 3), "███");
        assert_eq!(proportion_bar(0.1, 0.1, 3), "█░░");
    }

    #[test]
    fn unseen_score_is_dash() {
        assert_eq!(format_score(-1000.0).trim(), "—");
        assert_eq!(format_score(-2.5).trim(), "-2.50");
    }
}
