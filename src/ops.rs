//! Adapters for alignment operation lists owned by other libraries.

use crate::run::{CigarRun, DELETION, EQUAL, INSERTION, MATCH, MISMATCH};

/// Read access to one `(length, code)` operation of an external alignment library.
pub trait AlignOp {
    /// Number of positions consumed.
    fn length(&self) -> u32;
    /// Single character operation code.
    fn code(&self) -> char;
}

/// Construct an external alignment library operation from `(length, code)`.
pub trait FromAlignOp {
    fn from_parts(length: u32, code: char) -> Self;
}

impl AlignOp for (u32, char) {
    fn length(&self) -> u32 {
        self.0
    }

    fn code(&self) -> char {
        self.1
    }
}

impl FromAlignOp for (u32, char) {
    fn from_parts(length: u32, code: char) -> Self {
        (length, code)
    }
}

impl AlignOp for CigarRun {
    fn length(&self) -> u32 {
        self.length
    }

    fn code(&self) -> char {
        self.op
    }
}

impl FromAlignOp for CigarRun {
    fn from_parts(length: u32, code: char) -> Self {
        CigarRun::new(length, code)
    }
}

impl<T: AlignOp + ?Sized> AlignOp for &T {
    fn length(&self) -> u32 {
        (**self).length()
    }

    fn code(&self) -> char {
        (**self).code()
    }
}

/// Describes CIGAR format.
/// * See http://samtools.github.io/hts-specs/SAMv1.pdf
/// * See http://drive5.com/usearch/manual/cigar.html
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CigarFormat {
    #[default]
    /// Match: 'M', Insertion: 'I', Deletion: 'D', Mismatch: 'M'.
    Standard,
    /// Match: '=', Insertion: 'I', Deletion: 'D', Mismatch: 'X'.
    Extended,
}

/// Single column of an edit path, as produced by edit distance aligners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Match
    Match,
    /// Insertion to target = deletion from query.
    ///
    /// ### Example:
    /// * Target: `ATCG`
    /// * Query:  `A-CG`
    Insert,
    /// Deletion from target = insertion to query.
    ///
    /// ### Example:
    /// * Target: `A-CG`
    /// * Query:  `ATCG`
    Delete,
    /// Mismatch
    Mismatch,
}

impl EditOp {
    /// Operation code of this column in the given [`CigarFormat`].
    pub fn code(&self, format: CigarFormat) -> char {
        match (self, format) {
            (EditOp::Match, CigarFormat::Standard) | (EditOp::Mismatch, CigarFormat::Standard) => {
                MATCH
            }
            (EditOp::Match, CigarFormat::Extended) => EQUAL,
            (EditOp::Mismatch, CigarFormat::Extended) => MISMATCH,
            (EditOp::Insert, _) => INSERTION,
            (EditOp::Delete, _) => DELETION,
        }
    }
}
