use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEVEL: Regex = Regex::new(r"\[(\w+)\]").unwrap();
    static ref LEVEL_AND_MESSAGE: Regex = Regex::new(r"\[(\w+)\] - .* : (.+?) -").unwrap();
}

/// Extract the bracketed level token from a line, if there is one.
///
/// The token is returned raw: it may lie outside the known vocabulary,
/// and deciding what to do about that is the caller's business.
pub fn level_token(line: &str) -> Option<&str> {
    LEVEL.captures(line).and_then(|captures| captures.get(1)).map(|token| token.as_str())
}

/// Extract the level token and the message text from a line.
///
/// The message sits between the ` : ` delimiter and the next ` -`
/// boundary. The capture is non-greedy, so a message that itself contains
/// a ` -` sequence is truncated at the first one. That clipping is the
/// grammar's policy, kept as the format's original consumers had it.
pub fn level_and_message(line: &str) -> Option<(&str, &str)> {
    let captures = LEVEL_AND_MESSAGE.captures(line)?;
    match (captures.get(1), captures.get(2)) {
        (Some(token), Some(message)) => Some((token.as_str(), message.as_str())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulls_the_bracketed_token() {
        let line = "[INFO] - 2024-01-01 12:00:00 : server started - At package: main";
        assert_eq!(level_token(line), Some("INFO"));
    }

    #[test]
    fn token_outside_the_vocabulary_is_still_extracted() {
        assert_eq!(level_token("[TRACE] - t : noisy -"), Some("TRACE"));
    }

    #[test]
    fn line_without_brackets_yields_nothing() {
        assert_eq!(level_token("plain text, no level here"), None);
        assert_eq!(level_and_message("plain text, no level here"), None);
    }

    #[test]
    fn pulls_the_token_and_the_message() {
        let line = "[ERROR] - 2024-01-01 12:00:05 : disk quota exceeded - retrying";
        assert_eq!(level_and_message(line), Some(("ERROR", "disk quota exceeded")));
    }

    #[test]
    fn message_is_clipped_at_the_first_hyphen_boundary() {
        let line = "[ERROR] - t : disk full - cleanup started - twice";
        assert_eq!(level_and_message(line), Some(("ERROR", "disk full")));
    }

    #[test]
    fn embedded_hyphen_without_a_space_survives() {
        let line = "[ERROR] - t : re-try failed - At package: main";
        assert_eq!(level_and_message(line), Some(("ERROR", "re-try failed")));
    }

    #[test]
    fn line_with_no_message_segment_yields_nothing() {
        assert_eq!(level_and_message("[INFO] - 2024-01-01 12:00:00"), None);
    }
}
