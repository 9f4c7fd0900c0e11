//! Scenario parser
//!
//! The input is a flat whitespace-separated integer stream, so the parser is
//! a cursor over tokenized integers: tokenize first, then consume in order.
//! Errors carry the 1-based token position for diagnostics.

use crate::grid::Coord;
use crate::parser::spec::{FoldSpec, Scenario};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// 1-based position of the offending token in the input stream
    pub position: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at token {}: {}",
            self.position, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Cursor-based parser for the scenario integer stream
pub struct ScenarioParser {
    tokens: Vec<i32>,
    position: usize,
}

impl ScenarioParser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut tokens = Vec::new();
        for (i, word) in source.split_whitespace().enumerate() {
            let value = word.parse::<i32>().map_err(|_| ParseError {
                message: format!("expected an integer, got '{}'", word),
                position: i + 1,
            })?;
            tokens.push(value);
        }
        Ok(ScenarioParser {
            tokens,
            position: 0,
        })
    }

    /// Parse the whole scenario: fold count, fold records, punch coordinate
    pub fn parse_scenario(&mut self) -> Result<Scenario, ParseError> {
        let count = self.next_int("fold count")?;
        if count < 0 {
            return Err(self.error_here(format!("fold count must be non-negative, got {}", count)));
        }

        let mut folds = Vec::with_capacity(count as usize);
        for _ in 0..count {
            folds.push(self.parse_fold()?);
        }

        let row = self.next_int("punch row")?;
        let col = self.next_int("punch column")?;

        Ok(Scenario {
            folds,
            punch: Coord::new(row, col),
        })
    }

    /// Parse one fold record: `mode param`, plus `b` for diagonal modes
    fn parse_fold(&mut self) -> Result<FoldSpec, ParseError> {
        let mode = self.next_int("fold mode")?;
        let param = self.next_int("fold parameter")?;

        match mode {
            1 => Ok(FoldSpec::Horizontal { line: param }),
            2 => Ok(FoldSpec::Vertical { line: param }),
            // Diagonal records carry an extra intercept integer; the second
            // field is part of the record but does not drive the fold.
            3 => {
                let intercept = self.next_int("crease intercept")?;
                Ok(FoldSpec::DiagonalRising { intercept })
            }
            4 => {
                let intercept = self.next_int("crease intercept")?;
                Ok(FoldSpec::DiagonalFalling { intercept })
            }
            other => Err(self.error_here(format!("unknown fold mode {}", other))),
        }
    }

    fn next_int(&mut self, what: &str) -> Result<i32, ParseError> {
        match self.tokens.get(self.position) {
            Some(&value) => {
                self.position += 1;
                Ok(value)
            }
            None => Err(ParseError {
                message: format!("unexpected end of input while reading {}", what),
                position: self.position + 1,
            }),
        }
    }

    fn error_here(&self, message: String) -> ParseError {
        ParseError {
            message,
            position: self.position,
        }
    }
}

/// Convenience entry point: parse a full scenario from text
pub fn parse_scenario(source: &str) -> Result<Scenario, ParseError> {
    ScenarioParser::new(source)?.parse_scenario()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_axis_folds() {
        let scenario = parse_scenario("2\n1 2\n2 5\n3 4\n").unwrap();
        assert_eq!(
            scenario.folds,
            vec![
                FoldSpec::Horizontal { line: 2 },
                FoldSpec::Vertical { line: 5 },
            ]
        );
        assert_eq!(scenario.punch, Coord::new(3, 4));
    }

    #[test]
    fn test_parse_diagonal_record_carries_intercept() {
        let scenario = parse_scenario("2\n3 1 0\n4 1 7\n6 6\n").unwrap();
        assert_eq!(
            scenario.folds,
            vec![
                FoldSpec::DiagonalRising { intercept: 0 },
                FoldSpec::DiagonalFalling { intercept: 7 },
            ]
        );
        assert_eq!(scenario.punch, Coord::new(6, 6));
    }

    #[test]
    fn test_parse_zero_folds() {
        let scenario = parse_scenario("0\n2 3\n").unwrap();
        assert!(scenario.folds.is_empty());
        assert_eq!(scenario.punch, Coord::new(2, 3));
    }

    #[test]
    fn test_parse_negative_intercept() {
        let scenario = parse_scenario("1\n3 1 -2\n1 1\n").unwrap();
        assert_eq!(
            scenario.folds,
            vec![FoldSpec::DiagonalRising { intercept: -2 }]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let err = parse_scenario("1\n5 2\n1 1\n").unwrap_err();
        assert!(err.message.contains("unknown fold mode 5"));
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        let err = parse_scenario("1\nx 2\n1 1\n").unwrap_err();
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_parse_rejects_truncated_input() {
        let err = parse_scenario("1\n1 2\n").unwrap_err();
        assert!(err.message.contains("punch row"));
    }
}
