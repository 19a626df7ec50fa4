use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Chain length list cannot be empty.")]
    Empty,

    #[error("Invalid chain length '{0}'. Expected a positive integer.")]
    InvalidLength(String),

    #[error(
        "Invalid chain length range '{0}'. Expected 'start:end' or 'start:end:step' (e.g., '10:80:10')."
    )]
    InvalidRangeFormat(String),

    #[error("Range step must be positive, got 0.")]
    ZeroStep,

    #[error("Range start {start} is greater than its end {end}.")]
    DescendingRange { start: usize, end: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainLengthRange {
    pub start: usize,
    pub end: usize,
    pub step: usize,
}

/// Parses `10,20,30` or an inclusive range `10:80:10` (step defaults to 1).
pub fn parse_chain_lengths(input: &str) -> Result<Vec<usize>, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    if input.contains(':') {
        let parts: Vec<&str> = input.split(':').map(str::trim).collect();
        let (start, end, step) = match parts.as_slice() {
            [start, end] => (*start, *end, "1"),
            [start, end, step] => (*start, *end, *step),
            _ => return Err(ParseError::InvalidRangeFormat(input.to_string())),
        };
        let parse = |s: &str| {
            s.parse::<usize>()
                .map_err(|_| ParseError::InvalidRangeFormat(input.to_string()))
        };
        return expand_range(ChainLengthRange {
            start: parse(start)?,
            end: parse(end)?,
            step: parse(step)?,
        });
    }

    input
        .split(',')
        .map(str::trim)
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| ParseError::InvalidLength(s.to_string()))
        })
        .collect()
}

pub fn expand_range(range: ChainLengthRange) -> Result<Vec<usize>, ParseError> {
    if range.step == 0 {
        return Err(ParseError::ZeroStep);
    }
    if range.start > range.end {
        return Err(ParseError::DescendingRange {
            start: range.start,
            end: range.end,
        });
    }
    Ok((range.start..=range.end).step_by(range.step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_list_preserving_order() {
        assert_eq!(parse_chain_lengths("30, 10,20"), Ok(vec![30, 10, 20]));
    }

    #[test]
    fn parses_inclusive_range_with_step() {
        assert_eq!(
            parse_chain_lengths("10:80:10"),
            Ok(vec![10, 20, 30, 40, 50, 60, 70, 80])
        );
    }

    #[test]
    fn range_without_step_uses_unit_step() {
        assert_eq!(parse_chain_lengths("4:6"), Ok(vec![4, 5, 6]));
    }

    #[test]
    fn range_end_not_on_step_is_excluded() {
        assert_eq!(parse_chain_lengths("10:25:10"), Ok(vec![10, 20]));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_chain_lengths("  "), Err(ParseError::Empty));
        assert_eq!(
            parse_chain_lengths("10,x"),
            Err(ParseError::InvalidLength("x".to_string()))
        );
        assert_eq!(
            parse_chain_lengths("10,-5"),
            Err(ParseError::InvalidLength("-5".to_string()))
        );
        assert_eq!(
            parse_chain_lengths("1:2:3:4"),
            Err(ParseError::InvalidRangeFormat("1:2:3:4".to_string()))
        );
        assert_eq!(parse_chain_lengths("1:9:0"), Err(ParseError::ZeroStep));
        assert_eq!(
            parse_chain_lengths("9:1"),
            Err(ParseError::DescendingRange { start: 9, end: 1 })
        );
    }
}
