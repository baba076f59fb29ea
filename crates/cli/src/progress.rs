//! Progress reporting for the sample data loader.
//!
//! Responsibilities:
//! - Decide when a 5-point progress boundary has been crossed.
//! - Draw a percent bar on STDERR so stdout stays reserved for operator messages.
//!
//! Non-responsibilities:
//! - This module does not post anything; the loader reports lines as it goes.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Percentage points between two progress reports.
pub(crate) const REPORT_INTERVAL: u64 = 5;

/// Percentage to report after `done` of `total` lines, if a boundary was crossed
/// since `last_reported`.
///
/// The percentage is floored, so the report for a line is never ahead of the work.
pub(crate) fn crossed_boundary(done: u64, total: u64, last_reported: u64) -> Option<u64> {
    if total == 0 {
        return None;
    }
    let percent = done.min(total) * 100 / total;
    (percent >= last_reported + REPORT_INTERVAL).then_some(percent)
}

/// A percent-based progress bar (0–100%); a no-op when disabled.
pub(crate) struct LoadProgress {
    label: String,
    pb: Option<ProgressBar>,
}

impl LoadProgress {
    pub(crate) fn new(enabled: bool, label: impl Into<String>) -> Self {
        let label = label.into();

        if !enabled {
            return Self { label, pb: None };
        }

        let pb = ProgressBar::new(100);
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos:>3}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb.set_message(label.clone());

        Self {
            label,
            pb: Some(pb),
        }
    }

    pub(crate) fn set_percent(&self, percent: u64) {
        if let Some(pb) = &self.pb {
            pb.set_position(percent.min(100));
        }
    }

    pub(crate) fn finish(&self) {
        let Some(pb) = &self.pb else {
            return;
        };

        pb.set_position(100);
        pb.finish_with_message(format!("{} done", self.label));
    }
}

impl Drop for LoadProgress {
    fn drop(&mut self) {
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reports(total: u64) -> Vec<u64> {
        let mut last = 0;
        let mut out = Vec::new();
        for done in 1..=total {
            if let Some(p) = crossed_boundary(done, total, last) {
                out.push(p);
                last = p;
            }
        }
        out
    }

    #[test]
    fn test_small_files() {
        assert_eq!(reports(3), vec![33, 66, 100]);
        assert_eq!(reports(1), vec![100]);
        assert!(reports(0).is_empty());
    }

    #[test]
    fn test_hundred_lines_report_every_fifth() {
        let r = reports(100);
        assert_eq!(r.len(), 20);
        assert_eq!(r.first(), Some(&5));
        assert_eq!(r.last(), Some(&100));
    }

    #[test]
    fn test_disabled_progress_is_noop() {
        let progress = LoadProgress::new(false, "otel");
        progress.set_percent(50);
        progress.finish();
    }

    proptest! {
        #[test]
        fn prop_reports_are_spaced_and_bounded(total in 1u64..5000) {
            let r = reports(total);
            prop_assert!(r.len() <= 20);
            prop_assert!(r.iter().all(|p| *p >= REPORT_INTERVAL && *p <= 100));
            prop_assert!(r.windows(2).all(|w| w[1] >= w[0] + REPORT_INTERVAL));
        }

        #[test]
        fn prop_no_report_without_progress(done in 0u64..1000, total in 1u64..1000) {
            let done = done.min(total);
            let percent = done * 100 / total;
            prop_assert_eq!(crossed_boundary(done, total, percent), None);
        }
    }
}
