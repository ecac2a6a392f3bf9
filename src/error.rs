use std::fmt::{self, Display};

/// Reasons a CIGAR string is rejected by the strict scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input string has no characters.
    Empty,
    /// Operation code at byte offset `pos` has no preceding length.
    MissingLength {
        /// Operation code without a length.
        op: char,
        /// Byte offset of `op`.
        pos: usize,
    },
    /// Input ends with a length that has no operation code.
    MissingOperation {
        /// Dangling length.
        length: u32,
    },
    /// Operation code at byte offset `pos` is not a printable ASCII character.
    InvalidOperation {
        /// Rejected character.
        op: char,
        /// Byte offset of `op`.
        pos: usize,
    },
    /// Length ending at byte offset `pos` does not fit in a `u32`.
    LengthOverflow {
        /// Byte offset of the digit that overflowed.
        pos: usize,
    },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty CIGAR string"),
            ParseError::MissingLength { op, pos } => {
                write!(f, "operation '{op}' at position {pos} has no length")
            }
            ParseError::MissingOperation { length } => {
                write!(f, "length {length} at end of CIGAR string has no operation")
            }
            ParseError::InvalidOperation { op, pos } => {
                write!(f, "invalid operation {op:?} at position {pos}")
            }
            ParseError::LengthOverflow { pos } => {
                write!(f, "run length overflows at position {pos}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        assert_eq!(ParseError::Empty.to_string(), "empty CIGAR string");
        assert_eq!(
            ParseError::MissingLength { op: 'M', pos: 0 }.to_string(),
            "operation 'M' at position 0 has no length"
        );
        assert_eq!(
            ParseError::MissingOperation { length: 5 }.to_string(),
            "length 5 at end of CIGAR string has no operation"
        );
    }

    #[test]
    fn test_parse_error_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err(ParseError::Empty)?
        }
        let err = fails().unwrap_err();
        assert_eq!(err.downcast_ref::<ParseError>(), Some(&ParseError::Empty));
    }
}
