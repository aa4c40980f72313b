//! Replies collected from the interactive channel, and the help predicate
//! the prompt loop runs before any parsing.

use thiserror::Error;

/// A single reply to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Free text, as typed.
    Text(String),
    /// A yes/no confirmation.
    Flag(bool),
    /// A numeric reply from a typed prompt.
    Number(i64),
}

impl Response {
    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Flag(_) => "flag",
            Self::Number(_) => "number",
        }
    }
}

/// A reply shape the help check refuses to inspect.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("help check cannot inspect a {0} response")]
pub struct UnsupportedResponse(&'static str);

/// Whether the reply asks for help instead of answering the prompt.
///
/// Text matches `h`, `help` or `help!` in any case; confirmation flags pass
/// straight through as "not help". Any other shape reaching this check is a
/// caller bug and fails instead of being coerced.
pub fn help_requested(response: &Response) -> Result<bool, UnsupportedResponse> {
    match response {
        Response::Text(text) => {
            let text = text.trim().to_ascii_lowercase();
            Ok(matches!(text.as_str(), "h" | "help" | "help!"))
        }
        Response::Flag(_) => Ok(false),
        other => Err(UnsupportedResponse(other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_help_forms_are_recognized() {
        for text in ["help", "h", "help!", "HELP", " Help "] {
            assert_eq!(help_requested(&Response::Text(text.into())), Ok(true), "{text:?}");
        }
    }

    #[test]
    fn ordinary_text_is_not_help() {
        assert_eq!(help_requested(&Response::Text(String::new())), Ok(false));
        assert_eq!(help_requested(&Response::Text("bob".into())), Ok(false));
        assert_eq!(help_requested(&Response::Text("helpers".into())), Ok(false));
    }

    #[test]
    fn flags_pass_through() {
        assert_eq!(help_requested(&Response::Flag(true)), Ok(false));
        assert_eq!(help_requested(&Response::Flag(false)), Ok(false));
    }

    #[test]
    fn numbers_violate_the_contract() {
        let err = help_requested(&Response::Number(4)).unwrap_err();
        assert_eq!(err.to_string(), "help check cannot inspect a number response");
    }
}
