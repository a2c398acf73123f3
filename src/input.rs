//! Text parsing for simulation input.
//!
//! The visualizer collects the pending requests as one comma-separated
//! text field and the start position as another. Both must parse before
//! the engine is invoked; the engine itself never validates text, and an
//! [`InputError`] is a caller-side rejection, not an engine error.
//!
//! Tokens must be whole integers: `"12abc"` is rejected rather than
//! truncated to `12`. Negative and out-of-range values parse fine, since
//! the engine accepts them arithmetically.

use thiserror::Error;

use crate::models::{SimulationRequest, Track};

/// Rejection of malformed user text, raised before scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The request field contained no tokens at all.
    #[error("no track requests given")]
    EmptyRequestList,
    /// A request token is not an integer track number.
    #[error("invalid track number '{0}'")]
    InvalidTrack(String),
    /// The start position is not an integer track number.
    #[error("invalid start position '{0}'")]
    InvalidStart(String),
}

/// Parses a comma-separated track list (e.g. `"98, 183,37"`).
pub fn parse_request_list(text: &str) -> Result<Vec<Track>, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::EmptyRequestList);
    }
    text.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<Track>()
                .map_err(|_| InputError::InvalidTrack(token.to_string()))
        })
        .collect()
}

/// Parses the head's starting position.
pub fn parse_start_position(text: &str) -> Result<Track, InputError> {
    let token = text.trim();
    token
        .parse::<Track>()
        .map_err(|_| InputError::InvalidStart(token.to_string()))
}

/// Parses both fields into a ready-to-schedule request with default
/// direction and disk size.
///
/// # Example
///
/// ```
/// use diskviz::input::parse_simulation_request;
///
/// let request = parse_simulation_request("98, 183, 37", "53").unwrap();
/// assert_eq!(request.requests, vec![98, 183, 37]);
/// assert_eq!(request.start, 53);
/// ```
pub fn parse_simulation_request(
    requests: &str,
    start: &str,
) -> Result<SimulationRequest, InputError> {
    let requests = parse_request_list(requests)?;
    let start = parse_start_position(start)?;
    Ok(SimulationRequest::new(requests, start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_list() {
        assert_eq!(
            parse_request_list("98,183, 37 ,122"),
            Ok(vec![98, 183, 37, 122])
        );
    }

    #[test]
    fn test_parse_single_request() {
        assert_eq!(parse_request_list("42"), Ok(vec![42]));
    }

    #[test]
    fn test_negative_tracks_parse() {
        // Bounds are the engine's concern, not the parser's.
        assert_eq!(parse_request_list("-5, 250"), Ok(vec![-5, 250]));
    }

    #[test]
    fn test_empty_request_list_rejected() {
        assert_eq!(parse_request_list(""), Err(InputError::EmptyRequestList));
        assert_eq!(parse_request_list("   "), Err(InputError::EmptyRequestList));
    }

    #[test]
    fn test_non_numeric_token_rejected() {
        assert_eq!(
            parse_request_list("98,abc,37"),
            Err(InputError::InvalidTrack("abc".to_string()))
        );
    }

    #[test]
    fn test_partial_number_rejected() {
        // Whole-token parsing: no silent truncation of trailing garbage.
        assert_eq!(
            parse_request_list("12abc"),
            Err(InputError::InvalidTrack("12abc".to_string()))
        );
    }

    #[test]
    fn test_missing_token_rejected() {
        assert_eq!(
            parse_request_list("98,,37"),
            Err(InputError::InvalidTrack(String::new()))
        );
    }

    #[test]
    fn test_parse_start_position() {
        assert_eq!(parse_start_position(" 53 "), Ok(53));
        assert_eq!(
            parse_start_position("x"),
            Err(InputError::InvalidStart("x".to_string()))
        );
    }

    #[test]
    fn test_parse_simulation_request() {
        let request = parse_simulation_request("95,180,34,119", "50").expect("valid input");
        assert_eq!(request.requests, vec![95, 180, 34, 119]);
        assert_eq!(request.start, 50);
    }

    #[test]
    fn test_error_messages_are_presentable() {
        assert_eq!(
            InputError::InvalidTrack("abc".into()).to_string(),
            "invalid track number 'abc'"
        );
        assert_eq!(
            InputError::EmptyRequestList.to_string(),
            "no track requests given"
        );
    }
}
