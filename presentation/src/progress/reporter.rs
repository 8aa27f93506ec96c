//! Progress reporting while a submission is in flight

use crate::output::console::ConsoleFormatter;
use feedback_application::{NoSubmissionProgress, SubmissionProgress};
use feedback_domain::{FeedbackSubmission, SUBMITTING_MESSAGE, SubmissionStatus};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::sync::Mutex;
use std::time::Duration;

/// Shows an animated spinner with the "Submitting..." message
pub struct SpinnerProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionProgress for SpinnerProgress {
    fn on_submitting(&self, _submission: &FeedbackSubmission) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(SUBMITTING_MESSAGE);
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_finished(&self, _status: &SubmissionStatus) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Plain text progress (no animation)
pub struct SimpleProgress;

impl SubmissionProgress for SimpleProgress {
    fn on_submitting(&self, _submission: &FeedbackSubmission) {
        println!("{}", ConsoleFormatter::format_message(SUBMITTING_MESSAGE));
    }

    fn on_finished(&self, _status: &SubmissionStatus) {}
}

/// Pick the progress display: a spinner on a terminal, plain text otherwise,
/// nothing when disabled.
pub fn progress_for(show_progress: bool) -> Box<dyn SubmissionProgress> {
    if !show_progress {
        return Box::new(NoSubmissionProgress);
    }
    if std::io::stdout().is_terminal() {
        Box::new(SpinnerProgress::new())
    } else {
        Box::new(SimpleProgress)
    }
}
