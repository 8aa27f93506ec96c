//! Slash commands of the interactive form

use feedback_domain::FeedbackField;

/// A parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// `/set <field> <value>`
    Set(FeedbackField, String),
    /// `/fill`: prompt for every field again
    Fill,
    /// `/show`: print the current values
    Show,
    /// `/json`: print the request body
    Json,
    Submit,
    Reset,
    Help,
    Quit,
}

impl FormCommand {
    /// Parse one input line. Errors carry a message for the user.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('/') else {
            return Err(format!(
                "Unknown input: {}\nType /help for available commands",
                line
            ));
        };

        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };

        match name {
            "set" | "s" => {
                let (field, value) = match args.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (args, ""),
                };
                if field.is_empty() {
                    return Err("Usage: /set <field> <value>".to_string());
                }
                let field = field.parse::<FeedbackField>().map_err(|e| e.to_string())?;
                Ok(FormCommand::Set(field, value.to_string()))
            }
            "fill" | "f" => Ok(FormCommand::Fill),
            "show" => Ok(FormCommand::Show),
            "json" => Ok(FormCommand::Json),
            "submit" => Ok(FormCommand::Submit),
            "reset" => Ok(FormCommand::Reset),
            "help" | "h" | "?" => Ok(FormCommand::Help),
            "quit" | "exit" | "q" => Ok(FormCommand::Quit),
            other => Err(format!(
                "Unknown command: /{}\nType /help for available commands",
                other
            )),
        }
    }

    pub fn help_text() -> &'static str {
        "Commands:
  /set <field> <value>  - Change one field (name, email, rating, feedback)
  /fill, /f             - Enter every field again
  /show                 - Show current values
  /json                 - Show the request body
  /submit               - Submit the form
  /reset                - Clear the form
  /help, /h, /?         - Show this help
  /quit, /exit, /q      - Exit"
    }
}
