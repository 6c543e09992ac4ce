//! Turn input: one angle and one velocity per turn
//!
//! Input is line oriented. A turn consumes the next non-blank line; its first
//! two whitespace-separated tokens are the angle (degrees) and the velocity.
//! Anything after them on the same line is discarded. A lone angle on the
//! final line means the stream ran out mid-turn and counts as exhausted.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::core::error::{BallerburgError, Result};

/// Launch parameters chosen by the acting side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotInput {
    pub angle_deg: f64,
    pub velocity: f64,
}

impl ShotInput {
    pub fn new(angle_deg: f64, velocity: f64) -> Self {
        Self {
            angle_deg,
            velocity,
        }
    }
}

/// Supplier of per-turn launch parameters
///
/// Implementations return `MalformedTurnInput` when the turn should be
/// forfeited and `InputExhausted` when no further turns can be read.
pub trait TurnSource {
    fn next_shot(&mut self) -> Result<ShotInput>;
}

/// Parse the first two tokens of a line as angle and velocity
pub fn parse_shot(line: &str) -> Result<ShotInput> {
    let mut tokens = line.split_whitespace();
    let angle = parse_number(tokens.next(), "angle")?;
    let velocity = parse_number(tokens.next(), "velocity")?;
    Ok(ShotInput::new(angle, velocity))
}

fn parse_number(token: Option<&str>, field: &str) -> Result<f64> {
    let token = token.ok_or_else(|| {
        BallerburgError::MalformedTurnInput(format!("missing {}", field))
    })?;

    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(BallerburgError::MalformedTurnInput(format!(
            "{} is not a number: {:?}",
            field, token
        ))),
    }
}

/// Reads turns from any buffered reader (stdin, a file, a byte slice)
pub struct LineSource<R> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }

    /// True when the last line read had no newline or nothing follows it
    fn at_end_of_stream(&mut self) -> bool {
        if !self.buffer.ends_with('\n') {
            return true;
        }
        self.reader.fill_buf().map(|rest| rest.is_empty()).unwrap_or(true)
    }
}

impl<R: BufRead> TurnSource for LineSource<R> {
    fn next_shot(&mut self) -> Result<ShotInput> {
        loop {
            self.buffer.clear();
            let read = match self.reader.read_line(&mut self.buffer) {
                Ok(n) => n,
                Err(e) => {
                    tracing::warn!("Turn input unreadable, treating as exhausted: {}", e);
                    return Err(BallerburgError::InputExhausted);
                }
            };

            if read == 0 {
                return Err(BallerburgError::InputExhausted);
            }

            if self.buffer.trim().is_empty() {
                continue;
            }

            let parsed = parse_shot(&self.buffer);
            if parsed.is_err() && is_cut_short(&self.buffer) && self.at_end_of_stream() {
                return Err(BallerburgError::InputExhausted);
            }
            return parsed;
        }
    }
}

/// A line holding only the angle: the stream ended before the velocity arrived
fn is_cut_short(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    tokens.len() < 2 && tokens.iter().all(|t| t.parse::<f64>().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_numbers() {
        let shot = parse_shot("45 31.32\n").unwrap();
        assert_eq!(shot, ShotInput::new(45.0, 31.32));
    }

    #[test]
    fn test_parse_accepts_negative_and_extra_whitespace() {
        let shot = parse_shot("   -30\t\t12.5  ").unwrap();
        assert_eq!(shot, ShotInput::new(-30.0, 12.5));
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        let shot = parse_shot("10 20 fire!").unwrap();
        assert_eq!(shot, ShotInput::new(10.0, 20.0));
    }

    #[test]
    fn test_parse_rejects_incomplete_line() {
        assert!(matches!(
            parse_shot("45"),
            Err(BallerburgError::MalformedTurnInput(_))
        ));
    }

    #[test]
    fn test_parse_rejects_words() {
        assert!(matches!(
            parse_shot("high fast"),
            Err(BallerburgError::MalformedTurnInput(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(parse_shot("inf 10").is_err());
        assert!(parse_shot("45 NaN").is_err());
    }

    #[test]
    fn test_line_source_sequence() {
        let mut source = LineSource::new("45 31.32\n\n  \nbad input\n30 10\n".as_bytes());

        assert_eq!(source.next_shot().unwrap(), ShotInput::new(45.0, 31.32));
        assert!(matches!(
            source.next_shot(),
            Err(BallerburgError::MalformedTurnInput(_))
        ));
        assert_eq!(source.next_shot().unwrap(), ShotInput::new(30.0, 10.0));
        assert!(matches!(
            source.next_shot(),
            Err(BallerburgError::InputExhausted)
        ));
    }

    #[test]
    fn test_line_source_last_line_without_newline() {
        let mut source = LineSource::new("60 25".as_bytes());
        assert_eq!(source.next_shot().unwrap(), ShotInput::new(60.0, 25.0));
        assert!(matches!(
            source.next_shot(),
            Err(BallerburgError::InputExhausted)
        ));
    }

    #[test]
    fn test_angle_without_velocity_at_end_is_exhausted() {
        let mut source = LineSource::new("45".as_bytes());
        assert!(matches!(
            source.next_shot(),
            Err(BallerburgError::InputExhausted)
        ));

        let mut source = LineSource::new("45\n".as_bytes());
        assert!(matches!(
            source.next_shot(),
            Err(BallerburgError::InputExhausted)
        ));
    }

    #[test]
    fn test_angle_without_velocity_mid_stream_is_malformed() {
        let mut source = LineSource::new("45\n30 10\n".as_bytes());
        assert!(matches!(
            source.next_shot(),
            Err(BallerburgError::MalformedTurnInput(_))
        ));
        assert_eq!(source.next_shot().unwrap(), ShotInput::new(30.0, 10.0));
    }

    #[test]
    fn test_unterminated_garbage_is_still_malformed() {
        let mut source = LineSource::new("aim".as_bytes());
        assert!(matches!(
            source.next_shot(),
            Err(BallerburgError::MalformedTurnInput(_))
        ));
    }

    #[test]
    fn test_empty_source_is_exhausted() {
        let mut source = LineSource::new("".as_bytes());
        assert!(matches!(
            source.next_shot(),
            Err(BallerburgError::InputExhausted)
        ));
    }
}
