//! CLI entrypoint for feedback-form
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use feedback_application::{FeedbackForm, SubmissionLogger, SubmitFeedbackUseCase};
use feedback_domain::FeedbackSubmission;
use feedback_infrastructure::{
    ConfigLoader, FileConfig, HttpFeedbackGateway, JsonlSubmissionLogger,
};
use feedback_presentation::{
    Cli, ConsoleFormatter, FormRepl, OutputConfig, check_before_submit, progress_for,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    let config = apply_cli_overrides(config, &cli);

    let issues = config.validate();
    for issue in &issues {
        eprintln!("{}", ConsoleFormatter::format_issue(issue));
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }

    let output = OutputConfig::default()
        .with_color(config.output.color && !cli.no_color)
        .with_progress(config.output.show_progress && !cli.quiet);
    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let endpoint = config.endpoint.to_endpoint_config();
    let gateway = Arc::new(HttpFeedbackGateway::new(endpoint.clone())?);

    let mut use_case = SubmitFeedbackUseCase::new(gateway);
    if let Some(path) = config.log.submissions_path() {
        match JsonlSubmissionLogger::new(&path) {
            Some(logger) => {
                info!("Recording submissions to {}", logger.path().display());
                let logger: Arc<dyn SubmissionLogger> = Arc::new(logger);
                use_case = use_case.with_logger(logger);
            }
            None => warn!("Submission log disabled: cannot open {}", path.display()),
        }
    }

    let mut prefilled = FeedbackSubmission::new();
    for (field, value) in cli.prefill() {
        prefilled
            .apply(field, &value)
            .with_context(|| format!("Invalid value for --{}", field))?;
    }
    let mut form = FeedbackForm::new(use_case).with_submission(prefilled);

    info!("Feedback endpoint: {}", endpoint.url());

    // One-shot mode
    if cli.submit {
        if let Err(reason) = check_before_submit(form.submission()) {
            bail!(reason);
        }

        let progress = progress_for(output.show_progress);
        let status = form.on_submit(progress.as_ref()).await;
        if let Some(line) = ConsoleFormatter::format_status(status) {
            println!("{}", line);
        }

        return Ok(if status.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    // Interactive mode
    let mut repl = FormRepl::new(form, endpoint.url()).with_output(output);
    repl.run().await?;

    Ok(ExitCode::SUCCESS)
}

/// Install the tracing subscriber. The returned guard must live until exit
/// so buffered file logs are flushed.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Cannot open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn apply_cli_overrides(mut config: FileConfig, cli: &Cli) -> FileConfig {
    if let Some(url) = &cli.url {
        config.endpoint.base_url = url.clone();
    }
    config
}
