#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// How to treat malformed CIGAR text?
pub enum ParseMode {
    #[default]
    /// Reject malformed input with a [`ParseError`](crate::error::ParseError).
    Strict,
    /// Never fail. Reproduces the legacy scanner exactly.
    /// * Operation codes with no length become runs of length `0`.
    /// * Consecutive operation codes collapse to the first one.
    /// * A trailing length with no operation code is dropped.
    /// * Empty input gives an empty [`Cigar`](crate::Cigar).
    ///
    /// ### Example
    /// `M5I3` is read as `0M5I`.
    Lenient,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// How should runs built from variant alleles be merged?
pub enum AlleleMerge {
    #[default]
    /// Only consecutive matching alleles are merged into one `M` run.
    /// * Substitutions and indels always emit their own run.
    ///
    /// ### Example
    /// `AC/AC`, `G/T`, `AC/AC` gives `2M1M2M`.
    Legacy,
    /// Every adjacent pair of runs with the same operation is merged.
    ///
    /// ### Example
    /// `AC/AC`, `G/T`, `AC/AC` gives `5M`.
    Coalesce,
}
