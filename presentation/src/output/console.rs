//! Console output formatter for the feedback form

use colored::Colorize;
use feedback_domain::{ConfigIssue, FeedbackField, FeedbackSubmission, SubmissionStatus};

/// Formats form state and status messages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a status message: green when it is a success message, red otherwise
    pub fn format_message(message: &str) -> String {
        if SubmissionStatus::is_success_message(message) {
            message.green().bold().to_string()
        } else {
            message.red().bold().to_string()
        }
    }

    /// Format the status line, or `None` when there is nothing to show
    pub fn format_status(status: &SubmissionStatus) -> Option<String> {
        status.message().map(Self::format_message)
    }

    /// Current field values, one per line
    pub fn format_submission(submission: &FeedbackSubmission) -> String {
        let mut output = String::new();
        for field in FeedbackField::ALL {
            let value = submission.get(field);
            let shown = if value.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                value
            };
            output.push_str(&format!(
                "  {:<14} {}\n",
                format!("{}:", field.label()).cyan().bold(),
                shown
            ));
        }
        output
    }

    /// The request body as it will be sent
    pub fn format_json(submission: &FeedbackSubmission) -> String {
        serde_json::to_string_pretty(submission).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_issue(issue: &ConfigIssue) -> String {
        if issue.is_error() {
            format!("{} {}", "error:".red().bold(), issue.message)
        } else {
            format!("{} {}", "warning:".yellow().bold(), issue.message)
        }
    }

    /// Prompt-layer refusal, e.g. a blank required field
    pub fn format_refusal(reason: &str) -> String {
        format!("{} {}", "!".yellow().bold(), reason)
    }

    pub fn header(title: &str) -> String {
        let line = "─".repeat(45);
        format!("{}\n  {}\n{}", line, title.bold(), line)
    }
}
