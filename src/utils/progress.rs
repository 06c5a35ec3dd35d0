use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner-style status reporter for the streaming passes. Row totals are
/// unknown up front, so progress is reported as a message, not a bar.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new_spinner(message: &str, silent: bool) -> Self {
        if silent {
            Self { progress_bar: None }
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message(message.to_string());
            pb.enable_steady_tick(Duration::from_millis(100));

            Self {
                progress_bar: Some(pb),
            }
        }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        }
    }

    pub fn finish_with_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(message.to_string());
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_reporter_has_no_bar() {
        let reporter = ProgressReporter::new_spinner("working", true);
        assert!(reporter.progress_bar.is_none());
        // Messages are no-ops when silent
        reporter.set_message("still working");
        reporter.finish_with_message("done");
    }

    #[test]
    fn test_spinner_accepts_messages() {
        let reporter = ProgressReporter::new_spinner("working", false);
        assert!(reporter.progress_bar.is_some());
        reporter.set_message("halfway");
        reporter.finish_with_message("done");
    }
}
