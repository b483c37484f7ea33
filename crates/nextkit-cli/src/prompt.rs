//! Terminal implementation of the feature prompt.

use std::io::{self, BufRead, Write};

use nextkit_core::{
    application::{ApplicationError, ports::FeaturePrompt},
    domain::FeatureId,
    error::NextkitResult,
};

/// Asks each feature question on the terminal. Answers default to "no".
///
/// Uses `dialoguer` when built with the `interactive` feature and stdin is a
/// TTY; otherwise reads one `y`/`n` line per question from stdin.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl FeaturePrompt for TerminalPrompt {
    fn confirm(&self, feature: FeatureId) -> NextkitResult<bool> {
        if let Some(answer) = ask_dialog(feature) {
            return answer;
        }

        let stdin = io::stdin();
        let mut stderr = io::stderr();
        ask_line(&mut stdin.lock(), &mut stderr, feature)
    }
}

/// `None` when no interactive terminal is available.
#[cfg(feature = "interactive")]
fn ask_dialog(feature: FeatureId) -> Option<NextkitResult<bool>> {
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() {
        return None;
    }
    let answer: NextkitResult<bool> = dialoguer::Confirm::new()
        .with_prompt(feature.question())
        .default(false)
        .interact()
        .map_err(|e| {
            ApplicationError::PromptFailed {
                reason: e.to_string(),
            }
            .into()
        });
    Some(answer)
}

#[cfg(not(feature = "interactive"))]
fn ask_dialog(_feature: FeatureId) -> Option<NextkitResult<bool>> {
    None
}

/// Line-based fallback: prints the question to `out`, reads one answer.
fn ask_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    feature: FeatureId,
) -> NextkitResult<bool> {
    let failed = |e: io::Error| ApplicationError::PromptFailed {
        reason: e.to_string(),
    };

    write!(out, "{} [y/N] ", feature.question()).map_err(failed)?;
    out.flush().map_err(failed)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(failed)?;
    if read == 0 {
        return Err(ApplicationError::PromptFailed {
            reason: "stdin closed before all questions were answered".into(),
        }
        .into());
    }

    Ok(is_yes(&line))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn yes_answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("nope"));
    }

    #[test]
    fn line_prompt_shows_question() {
        let mut input = Cursor::new("y\n");
        let mut out = Vec::new();

        let answer = ask_line(&mut input, &mut out, FeatureId::Docker).unwrap();

        assert!(answer);
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.starts_with(FeatureId::Docker.question()));
    }

    #[test]
    fn closed_stdin_is_an_error() {
        let mut input = Cursor::new("");
        let err = ask_line(&mut input, &mut Vec::new(), FeatureId::Testing).unwrap_err();
        assert!(err.to_string().contains("stdin closed"));
    }
}
