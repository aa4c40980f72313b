//! Interactive prompts and the help loop wrapped around them.
//!
//! Every reply is handed to the core as a [`Response`]; parsing failures come
//! back as typed errors and are answered with a re-prompt here, never inside
//! the core.

use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use rota_core::pattern::PatternError;
use rota_core::response::{help_requested, Response, UnsupportedResponse};
use std::fmt;
use std::io;

/// Error type for prompt handling.
#[derive(Debug)]
pub enum PromptError {
    /// IO error while reading the terminal.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
    /// A reply shape the help check refuses reached it.
    Contract(UnsupportedResponse),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
            PromptError::Contract(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

impl From<UnsupportedResponse> for PromptError {
    fn from(e: UnsupportedResponse) -> Self {
        PromptError::Contract(e)
    }
}

/// Convert a dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}

/// Read a line of free text; an empty reply falls back to `default` when one
/// is given.
pub fn ask_text(prompt: &str, default: Option<&str>) -> Result<Response, PromptError> {
    let theme = ColorfulTheme::default();

    let mut input = Input::<String>::with_theme(&theme);
    input = input.with_prompt(prompt);
    if let Some(d) = default {
        input = input.default(d.to_string());
    }

    input
        .interact_text()
        .map(Response::Text)
        .map_err(dialoguer_error_to_prompt_error)
}

/// Ask a yes/no question.
pub fn ask_flag(prompt: &str, default: bool) -> Result<Response, PromptError> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map(Response::Flag)
        .map_err(dialoguer_error_to_prompt_error)
}

/// Ask for a number; dialoguer keeps re-reading until one parses.
pub fn ask_number(prompt: &str) -> Result<Response, PromptError> {
    Input::<i64>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .map(Response::Number)
        .map_err(dialoguer_error_to_prompt_error)
}

/// Ask for a month number until one in [1-12] arrives.
pub fn prompt_month() -> Result<u32, PromptError> {
    loop {
        let response = ask_number(
            "Please enter a number from [1-12] for the month you'd like to plan",
        )?;
        if let Response::Number(n) = response {
            if (1..=12).contains(&n) {
                return Ok(n as u32);
            }
            eprintln!("{n} is not a month between 1 and 12");
        }
    }
}

/// Re-read through `read` until the reply is not a help request, echoing the
/// help text through `out` each time one comes in. Confirmation flags pass
/// straight through; a contract violation in the help check aborts the run.
pub fn pause_for_help<R, O>(
    mut read: R,
    help: &str,
    mut out: O,
) -> Result<Response, PromptError>
where
    R: FnMut() -> Result<Response, PromptError>,
    O: FnMut(&str),
{
    loop {
        let response = read()?;
        if !help_requested(&response)? {
            return Ok(response);
        }
        out(help);
    }
}

/// Text prompt with help support, returning the raw reply.
pub fn prompt_text(
    prompt: &str,
    default: Option<&str>,
    help: &str,
) -> Result<String, PromptError> {
    loop {
        let response =
            pause_for_help(|| ask_text(prompt, default), help, |text| println!("{text}"))?;
        if let Response::Text(text) = response {
            return Ok(text);
        }
    }
}

/// Yes/no prompt routed through the help check like every other reply.
pub fn confirm(prompt: &str, default: bool) -> Result<bool, PromptError> {
    loop {
        let response = pause_for_help(|| ask_flag(prompt, default), "", |_| {})?;
        if let Response::Flag(value) = response {
            return Ok(value);
        }
    }
}

/// Text prompt that keeps asking until the reply parses; parse failures are
/// printed and re-asked, help replies show the help text.
pub fn prompt_parsed<T, F>(
    prompt: &str,
    default: Option<&str>,
    help: &str,
    parse: F,
) -> Result<T, PromptError>
where
    F: Fn(&str) -> Result<T, PatternError>,
{
    loop {
        let text = prompt_text(prompt, default, help)?;
        match parse(&text) {
            Ok(value) => return Ok(value),
            Err(e) => eprintln!("{e}"),
        }
    }
}
