use crate::error::BotError;
use serde::Deserialize;

/// The oracle's verdict for one letter in one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Correct,
    Present,
    Absent,
}

impl ResultCode {
    /// Parses the wire string. Anything outside the closed set is a
    /// contract violation on the oracle's side.
    pub fn parse(s: &str) -> Result<Self, BotError> {
        match s {
            "correct" => Ok(ResultCode::Correct),
            "present" => Ok(ResultCode::Present),
            "absent" => Ok(ResultCode::Absent),
            other => Err(BotError::UnrecognizedResultCode(other.to_string())),
        }
    }
}

/// One element of an oracle response; a full response holds one entry per
/// slot, in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterFeedback {
    pub slot: usize,
    pub letter: char,
    pub result: ResultCode,
}

/// Wire shape of one response element, before the result string is checked.
#[derive(Debug, Deserialize)]
pub struct RawFeedback {
    pub slot: usize,
    pub guess: char,
    pub result: String,
}

impl TryFrom<RawFeedback> for LetterFeedback {
    type Error = BotError;

    fn try_from(raw: RawFeedback) -> Result<Self, BotError> {
        Ok(LetterFeedback {
            slot: raw.slot,
            letter: raw.guess,
            result: ResultCode::parse(&raw.result)?,
        })
    }
}

/// True when every slot came back Correct, i.e. the guess was the answer.
pub fn is_solved(response: &[LetterFeedback]) -> bool {
    response.iter().all(|f| f.result == ResultCode::Correct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(ResultCode::parse("correct").unwrap(), ResultCode::Correct);
        assert_eq!(ResultCode::parse("present").unwrap(), ResultCode::Present);
        assert_eq!(ResultCode::parse("absent").unwrap(), ResultCode::Absent);
    }

    #[test]
    fn test_parse_unknown_code_is_rejected() {
        let err = ResultCode::parse("maybe").unwrap_err();
        assert!(matches!(err, BotError::UnrecognizedResultCode(s) if s == "maybe"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // The oracle sends lowercase; anything else is out of contract.
        assert!(ResultCode::parse("Correct").is_err());
    }

    #[test]
    fn test_raw_feedback_conversion() {
        let raw = RawFeedback {
            slot: 2,
            guess: 'a',
            result: "present".to_string(),
        };
        let fb = LetterFeedback::try_from(raw).unwrap();
        assert_eq!(fb.slot, 2);
        assert_eq!(fb.letter, 'a');
        assert_eq!(fb.result, ResultCode::Present);
    }

    #[test]
    fn test_is_solved() {
        let all_correct: Vec<LetterFeedback> = "crane"
            .chars()
            .enumerate()
            .map(|(slot, letter)| LetterFeedback {
                slot,
                letter,
                result: ResultCode::Correct,
            })
            .collect();
        assert!(is_solved(&all_correct));

        let mut one_off = all_correct.clone();
        one_off[3].result = ResultCode::Present;
        assert!(!is_solved(&one_off));
    }
}
