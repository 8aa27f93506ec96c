//! Line-editor session for filling in and submitting the form

use super::command::FormCommand;
use super::input::{check_before_submit, check_field_input};
use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::progress_for;
use feedback_application::FeedbackForm;
use feedback_domain::FeedbackField;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use std::path::Path;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 200;

/// Create the directory that will hold `path`.
fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Interactive form session
pub struct FormRepl {
    form: FeedbackForm,
    endpoint: String,
    output: OutputConfig,
}

impl FormRepl {
    pub fn new(form: FeedbackForm, endpoint: impl Into<String>) -> Self {
        Self {
            form,
            endpoint: endpoint.into(),
            output: OutputConfig::default(),
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Run the session: prompt every field once, then accept commands until
    /// `/quit` or Ctrl-D.
    pub async fn run(&mut self) -> io::Result<()> {
        let mut editor = Self::create_editor();

        self.print_welcome();

        if !self.fill_fields(&mut editor)? {
            println!("Bye!");
            return Ok(());
        }

        println!();
        println!("Type /submit to send, /help for more commands.");

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("feedback".to_string()),
            DefaultPromptSegment::Empty,
        );

        loop {
            match editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    match FormCommand::parse(line) {
                        Ok(command) => {
                            if self.handle_command(command, &mut editor).await? {
                                break;
                            }
                        }
                        Err(message) => println!("{}", message),
                    }
                }
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(_) => {
                    println!("Bye!");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    fn create_editor() -> Reedline {
        let editor = Reedline::create();

        let Some(path) = dirs::data_dir().map(|p| p.join("feedback-form").join("history.txt"))
        else {
            return editor;
        };
        if let Err(e) = ensure_parent_dir(&path) {
            warn!("Command history disabled: {}: {}", path.display(), e);
            return editor;
        }

        match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Command history disabled: {}", e);
                editor
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", ConsoleFormatter::header("Feedback Form"));
        println!();
        println!("Submitting to: {}", self.endpoint);
        println!("Press Enter to keep the value shown in brackets.");
        println!();
    }

    /// Prompt for every field in form order.
    ///
    /// Returns `false` when the user pressed Ctrl-D and wants to leave.
    /// Ctrl-C stops filling but stays in the session.
    fn fill_fields(&mut self, editor: &mut Reedline) -> io::Result<bool> {
        for field in FeedbackField::ALL {
            loop {
                let current = self.form.submission().get(field);
                let label = if current.is_empty() {
                    field.label().to_string()
                } else {
                    format!("{} [{}]", field.label(), current)
                };
                let prompt = DefaultPrompt::new(
                    DefaultPromptSegment::Basic(label),
                    DefaultPromptSegment::Empty,
                );

                match editor.read_line(&prompt)? {
                    Signal::Success(value) => {
                        let value = value.trim();
                        if value.is_empty() && !current.trim().is_empty() {
                            break;
                        }
                        if self.change_field(field, value) {
                            break;
                        }
                    }
                    Signal::CtrlC => {
                        println!("^C");
                        return Ok(true);
                    }
                    _ => return Ok(false),
                }
            }
        }
        Ok(true)
    }

    /// Apply one edit through the input checks. Returns whether it was accepted.
    fn change_field(&mut self, field: FeedbackField, value: &str) -> bool {
        if let Err(reason) = check_field_input(field, value) {
            println!("{}", ConsoleFormatter::format_refusal(&reason));
            return false;
        }
        match self.form.on_field_change(field, value) {
            Ok(()) => true,
            Err(e) => {
                println!("{}", ConsoleFormatter::format_refusal(&e.to_string()));
                false
            }
        }
    }

    /// Handle a parsed command. Returns true if the session should end.
    async fn handle_command(
        &mut self,
        command: FormCommand,
        editor: &mut Reedline,
    ) -> io::Result<bool> {
        debug!("Command: {:?}", command);

        match command {
            FormCommand::Set(field, value) => {
                if self.change_field(field, &value) {
                    println!("{} = {}", field, self.form.submission().get(field));
                }
            }
            FormCommand::Fill => {
                if !self.fill_fields(editor)? {
                    println!("Bye!");
                    return Ok(true);
                }
            }
            FormCommand::Show => {
                println!();
                print!("{}", ConsoleFormatter::format_submission(self.form.submission()));
                if let Some(status) = ConsoleFormatter::format_status(self.form.status()) {
                    println!();
                    println!("{}", status);
                }
                println!();
            }
            FormCommand::Json => {
                println!("{}", ConsoleFormatter::format_json(self.form.submission()));
            }
            FormCommand::Submit => self.submit().await,
            FormCommand::Reset => {
                self.form.reset();
                println!("Form cleared.");
            }
            FormCommand::Help => {
                println!();
                println!("{}", FormCommand::help_text());
                println!();
            }
            FormCommand::Quit => {
                println!("Bye!");
                return Ok(true);
            }
        }

        Ok(false)
    }

    async fn submit(&mut self) {
        if let Err(reason) = check_before_submit(self.form.submission()) {
            println!("{}", ConsoleFormatter::format_refusal(&reason));
            return;
        }

        let progress = progress_for(self.output.show_progress);
        let status = self.form.on_submit(progress.as_ref()).await;

        if let Some(line) = ConsoleFormatter::format_status(status) {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_dir_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback-form").join("history.txt");

        ensure_parent_dir(&path).unwrap();

        assert!(dir.path().join("feedback-form").is_dir());
    }

    #[test]
    fn test_history_dir_under_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("feedback-form");
        std::fs::write(&blocker, "not a directory").unwrap();

        assert!(ensure_parent_dir(&blocker.join("history.txt")).is_err());
    }

    #[test]
    fn test_bare_file_name_needs_no_dir() {
        assert!(ensure_parent_dir(Path::new("history.txt")).is_ok());
    }
}
