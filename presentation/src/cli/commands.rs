//! CLI command definitions

use clap::Parser;
use feedback_domain::FeedbackField;
use std::path::PathBuf;

/// CLI arguments for feedback-form
#[derive(Parser, Debug)]
#[command(name = "feedback-form")]
#[command(author, version, about = "Collect feedback and submit it to a feedback service")]
#[command(long_about = r#"
feedback-form collects a name, an email, a 1-5 rating and free-text feedback,
then POSTs them as JSON to a feedback service.

Without --submit an interactive form starts. Fields given as flags are
pre-filled and can still be edited.

Configuration files are loaded from (in priority order):
1. FEEDBACK_* environment variables
2. --config <path>     Explicit config file
3. ./feedback.toml     Project-level config
4. ~/.config/feedback-form/config.toml   Global config

Example:
  feedback-form
  feedback-form --name Ada --rating 4 --feedback "Smooth checkout" --submit
  feedback-form --url http://feedback.internal:8080
"#)]
pub struct Cli {
    /// Pre-fill the name field
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Pre-fill the email field
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Pre-fill the rating (1-5)
    #[arg(long, value_name = "1-5", value_parser = clap::value_parser!(i64).range(1..=5))]
    pub rating: Option<i64>,

    /// Pre-fill the feedback text
    #[arg(long, value_name = "TEXT")]
    pub feedback: Option<String>,

    /// Submit the pre-filled values once and exit
    #[arg(long)]
    pub submit: bool,

    /// Base URL of the feedback service (overrides config)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Field values given on the command line, in form order
    pub fn prefill(&self) -> Vec<(FeedbackField, String)> {
        [
            (FeedbackField::Name, self.name.clone()),
            (FeedbackField::Email, self.email.clone()),
            (FeedbackField::Rating, self.rating.map(|r| r.to_string())),
            (FeedbackField::Feedback, self.feedback.clone()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}
