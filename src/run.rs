use std::fmt::{self, Display};

/// Alignment match. Can be a sequence match or mismatch.
pub const MATCH: char = 'M';
/// Insertion to the reference.
pub const INSERTION: char = 'I';
/// Deletion from the reference.
pub const DELETION: char = 'D';
/// Soft clip. Bases present in the read but not aligned.
pub const SOFT_CLIP: char = 'S';
/// Sequence mismatch.
pub const MISMATCH: char = 'X';
/// Sequence match. Only produced by [`CigarFormat::Extended`](crate::ops::CigarFormat::Extended).
pub const EQUAL: char = '=';

/// Check if operation `op` advances the position in the reference sequence.
pub fn consumes_ref(op: char) -> bool {
    matches!(op, MATCH | DELETION | MISMATCH)
}

/// Check if operation `op` advances the position in the read.
pub fn consumes_read(op: char) -> bool {
    matches!(op, MATCH | INSERTION | MISMATCH | SOFT_CLIP)
}

/// A single run of one alignment operation.
///
/// The default value is the uninitialized state: length `0` and operation `'\0'`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CigarRun {
    /// Number of positions consumed.
    pub length: u32,
    /// Single character operation code. ex. `M`, `I`, `D`, `S`, `X`
    pub op: char,
}

impl CigarRun {
    /// Create a new run.
    ///
    /// ```
    /// use rs_cigar::CigarRun;
    ///
    /// let run = CigarRun::new(12, 'M');
    /// assert_eq!(run.to_string(), "12M");
    /// ```
    pub fn new(length: u32, op: char) -> Self {
        CigarRun { length, op }
    }

    /// Reset to the uninitialized state.
    pub fn clear(&mut self) {
        *self = CigarRun::default()
    }

    pub fn is_insertion(&self) -> bool {
        self.op == INSERTION
    }

    pub fn is_deletion(&self) -> bool {
        self.op == DELETION
    }

    pub fn is_softclip(&self) -> bool {
        self.op == SOFT_CLIP
    }

    /// Either an insertion or a deletion.
    pub fn is_indel(&self) -> bool {
        self.is_insertion() || self.is_deletion()
    }

    /// See [`consumes_ref`].
    pub fn consumes_ref(&self) -> bool {
        consumes_ref(self.op)
    }

    /// See [`consumes_read`].
    pub fn consumes_read(&self) -> bool {
        consumes_read(self.op)
    }
}

impl Display for CigarRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length, self.op)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clear_run() {
        let mut run = CigarRun::new(10, 'I');
        run.clear();
        assert_eq!(run, CigarRun::default());
        assert_eq!(run.length, 0);
        assert_eq!(run.op, '\0');
    }

    #[test]
    fn test_run_predicates() {
        let ins = CigarRun::new(2, 'I');
        let del = CigarRun::new(3, 'D');
        let clip = CigarRun::new(5, 'S');
        let mat = CigarRun::new(7, 'M');

        assert!(ins.is_insertion() && ins.is_indel() && !ins.is_deletion());
        assert!(del.is_deletion() && del.is_indel() && !del.is_insertion());
        assert!(clip.is_softclip() && !clip.is_indel());
        assert!(!mat.is_indel() && !mat.is_softclip());
    }

    #[test]
    fn test_run_consumption() {
        // (op, ref, read)
        let expected = [
            ('M', true, true),
            ('X', true, true),
            ('D', true, false),
            ('I', false, true),
            ('S', false, true),
            ('H', false, false),
        ];
        for (op, rf, rd) in expected {
            let run = CigarRun::new(1, op);
            assert_eq!(run.consumes_ref(), rf, "{op}");
            assert_eq!(run.consumes_read(), rd, "{op}");
        }
    }

    #[test]
    fn test_display_run() {
        assert_eq!(CigarRun::new(12, 'M').to_string(), "12M");
        assert_eq!(CigarRun::new(0, 'D').to_string(), "0D");
    }
}
