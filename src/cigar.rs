use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use anyhow::Context;
use log::trace;

use crate::{
    allele::Allele,
    config::CigarConfig,
    error::ParseError,
    mode::AlleleMerge,
    ops::{AlignOp, CigarFormat, EditOp, FromAlignOp},
    parse,
    run::{CigarRun, DELETION, INSERTION, MATCH, SOFT_CLIP},
};

/// Alignment path of a read against a reference as a sequence of [`CigarRun`]s.
/// * Runs are ordered from read start to read end.
/// * Adjacent runs with the same operation are not merged on [`Cigar::push`].
///   Use [`Cigar::push_coalesced`] or [`Cigar::append`] to merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cigar {
    runs: Vec<CigarRun>,
}

fn run_length(length: usize) -> anyhow::Result<u32> {
    u32::try_from(length).with_context(|| format!("Run length {length} does not fit in u32."))
}

/// Single run describing how `allele` changes the reference.
fn allele_run<A: Allele + ?Sized>(allele: &A) -> anyhow::Result<CigarRun> {
    let (ref_len, alt_len) = (allele.reference().len(), allele.alternate().len());
    let run = match ref_len.cmp(&alt_len) {
        // Match or substitution.
        Ordering::Equal => CigarRun::new(run_length(ref_len)?, MATCH),
        Ordering::Greater => CigarRun::new(run_length(ref_len - alt_len)?, DELETION),
        Ordering::Less => CigarRun::new(run_length(alt_len - ref_len)?, INSERTION),
    };
    Ok(run)
}

impl Cigar {
    /// Empty alignment path.
    pub fn new() -> Self {
        Cigar::default()
    }

    /// Alignment path of one run.
    pub fn from_run(length: u32, op: char) -> Self {
        Cigar {
            runs: vec![CigarRun::new(length, op)],
        }
    }

    /// Parse CIGAR text with the [`ParseMode`](crate::mode::ParseMode) in `config`.
    ///
    /// ### Example
    /// ```
    /// use rs_cigar::{Cigar, CigarConfig};
    ///
    /// let cigar = Cigar::parse_with("M5I3", &CigarConfig::legacy()).unwrap();
    /// assert_eq!(cigar.to_string(), "0M5I");
    /// assert!(Cigar::parse_with("M5I3", &CigarConfig::default()).is_err());
    /// ```
    pub fn parse_with(cigar: &str, config: &CigarConfig) -> Result<Self, ParseError> {
        Ok(Cigar {
            runs: parse::scan(cigar, config.parse_mode)?,
        })
    }

    /// Alignment path of a single variant allele.
    /// * `M` of the reference length if reference and alternate have the same length.
    /// * `D` of the length difference if the reference is longer.
    /// * `I` of the length difference if the alternate is longer.
    pub fn from_allele<A: Allele + ?Sized>(allele: &A) -> anyhow::Result<Self> {
        Ok(Cigar {
            runs: vec![allele_run(allele)?],
        })
    }

    /// Alignment path of consecutive variant alleles with [`AlleleMerge::Legacy`] merging.
    ///
    /// ### Example
    /// ```
    /// use rs_cigar::Cigar;
    ///
    /// let cigar = Cigar::from_alleles([("AC", "AC"), ("G", "T"), ("AC", "AC")]).unwrap();
    /// assert_eq!(cigar.to_string(), "2M1M2M");
    ///
    /// let cigar = Cigar::from_alleles([("A", "A"), ("TTG", "T"), ("C", "CAA")]).unwrap();
    /// assert_eq!(cigar.to_string(), "1M2D2I");
    /// ```
    pub fn from_alleles<I>(alleles: I) -> anyhow::Result<Self>
    where
        I: IntoIterator,
        I::Item: Allele,
    {
        Cigar::from_alleles_with(alleles, &CigarConfig::default())
    }

    /// Alignment path of consecutive variant alleles.
    ///
    /// Matching alleles accumulate into one pending `M` run. Any other allele first
    /// flushes the pending run and then emits its own run. See [`AlleleMerge`] for
    /// how emitted runs are merged.
    pub fn from_alleles_with<I>(alleles: I, config: &CigarConfig) -> anyhow::Result<Self>
    where
        I: IntoIterator,
        I::Item: Allele,
    {
        let mut cigar = Cigar::new();
        let mut pending_match: Option<usize> = None;

        for allele in alleles {
            if allele.is_match() {
                *pending_match.get_or_insert(0) += allele.reference().len();
                continue;
            }
            if let Some(length) = pending_match.take() {
                cigar.emit(CigarRun::new(run_length(length)?, MATCH), config.allele_merge)?;
            }
            cigar.emit(allele_run(&allele)?, config.allele_merge)?;
        }
        if let Some(length) = pending_match {
            cigar.emit(CigarRun::new(run_length(length)?, MATCH), config.allele_merge)?;
        }
        Ok(cigar)
    }

    fn emit(&mut self, run: CigarRun, merge: AlleleMerge) -> anyhow::Result<()> {
        match merge {
            AlleleMerge::Legacy => {
                self.push(run);
                Ok(())
            }
            AlleleMerge::Coalesce => self.push_coalesced(run),
        }
    }

    /// Copy an external alignment library operation list. Order and runs are kept as is.
    pub fn from_ops<I>(ops: I) -> Self
    where
        I: IntoIterator,
        I::Item: AlignOp,
    {
        ops.into_iter()
            .map(|op| CigarRun::new(op.length(), op.code()))
            .collect()
    }

    /// Run length encode an edit path.
    ///
    /// ### Example
    /// ```
    /// use rs_cigar::{Cigar, ops::{CigarFormat, EditOp}};
    ///
    /// let path = [EditOp::Match, EditOp::Mismatch, EditOp::Insert, EditOp::Insert, EditOp::Match];
    /// let standard = Cigar::from_edit_ops(&path, CigarFormat::Standard).unwrap();
    /// let extended = Cigar::from_edit_ops(&path, CigarFormat::Extended).unwrap();
    /// assert_eq!(standard.to_string(), "2M2I1M");
    /// assert_eq!(extended.to_string(), "1=1X2I1=");
    /// ```
    pub fn from_edit_ops(ops: &[EditOp], format: CigarFormat) -> anyhow::Result<Self> {
        let mut cigar = Cigar::new();
        for op in ops {
            cigar.push_coalesced(CigarRun::new(1, op.code(format)))?;
        }
        Ok(cigar)
    }

    /// Build from `runs`, merging every adjacent pair with the same operation and
    /// dropping runs of length `0`.
    pub fn coalesced<I>(runs: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = CigarRun>,
    {
        let mut cigar = Cigar::new();
        for run in runs {
            cigar.push_coalesced(run)?;
        }
        Ok(cigar)
    }

    pub fn runs(&self) -> &[CigarRun] {
        &self.runs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CigarRun> {
        self.runs.iter()
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Add `run` to the end without merging.
    pub fn push(&mut self, run: CigarRun) {
        self.runs.push(run)
    }

    /// Add `run` to the end, extending the last run if the operations are equal.
    /// * Runs of length `0` are dropped.
    pub fn push_coalesced(&mut self, run: CigarRun) -> anyhow::Result<()> {
        if run.length == 0 {
            return Ok(());
        }
        match self.runs.last_mut() {
            Some(last) if last.op == run.op => {
                last.length = last.length.checked_add(run.length).with_context(|| {
                    format!("Merging {run} into {last} overflows the run length.")
                })?;
            }
            _ => self.runs.push(run),
        }
        Ok(())
    }

    /// Reference positions consumed. Sum of `M`, `D` and `X` runs.
    pub fn ref_len(&self) -> usize {
        self.runs
            .iter()
            .filter(|run| run.consumes_ref())
            .map(|run| run.length as usize)
            .sum()
    }

    /// Read positions consumed. Sum of `M`, `I`, `X` and `S` runs.
    pub fn read_len(&self) -> usize {
        self.runs
            .iter()
            .filter(|run| run.consumes_read())
            .map(|run| run.length as usize)
            .sum()
    }

    /// Sum of all run lengths regardless of operation.
    pub fn total_len(&self) -> usize {
        self.runs.iter().map(|run| run.length as usize).sum()
    }

    /// Length of the leading soft clip. `0` if none or empty.
    pub fn soft_clip_start(&self) -> u32 {
        match self.runs.first() {
            Some(run) if run.op == SOFT_CLIP => run.length,
            _ => 0,
        }
    }

    /// Length of the trailing soft clip. `0` if none or empty.
    pub fn soft_clip_end(&self) -> u32 {
        match self.runs.last() {
            Some(run) if run.op == SOFT_CLIP => run.length,
            _ => 0,
        }
    }

    /// Single `M` run. An ungapped and unclipped alignment.
    pub fn is_reference(&self) -> bool {
        matches!(self.runs.as_slice(), [run] if run.op == MATCH)
    }

    /// Extend this alignment path with `other`.
    /// * A single run of length `0` in `other` appends nothing.
    /// * Leading runs of `other` with the same operation as the last run are merged into it.
    /// * Remaining runs of `other` are added unchanged.
    ///
    /// Nothing is modified if merging overflows a run length.
    ///
    /// ### Example
    /// ```
    /// use rs_cigar::Cigar;
    ///
    /// let mut cigar: Cigar = "5M".parse().unwrap();
    /// cigar.append(&"3M2I".parse().unwrap()).unwrap();
    /// assert_eq!(cigar.to_string(), "8M2I");
    ///
    /// cigar.append(&Cigar::from_run(0, 'D')).unwrap();
    /// assert_eq!(cigar.to_string(), "8M2I");
    /// ```
    pub fn append(&mut self, other: &Cigar) -> anyhow::Result<()> {
        if let [only] = other.runs.as_slice() {
            if only.length == 0 {
                return Ok(());
            }
        }
        let Some(last) = self.runs.last_mut() else {
            self.runs = other.runs.clone();
            return Ok(());
        };

        let num_merged = other
            .runs
            .iter()
            .take_while(|run| run.op == last.op)
            .count();
        last.length = other.runs[..num_merged]
            .iter()
            .try_fold(last.length, |length, run| length.checked_add(run.length))
            .with_context(|| format!("Appending {other} to {last} overflows the run length."))?;
        if num_merged > 0 {
            trace!("Merged {num_merged} run(s) into {last} at append boundary.");
        }

        self.runs.extend_from_slice(&other.runs[num_merged..]);
        Ok(())
    }

    /// Convert to an external alignment library operation list.
    pub fn to_ops<T: FromAlignOp>(&self) -> Vec<T> {
        self.runs
            .iter()
            .map(|run| T::from_parts(run.length, run.op))
            .collect()
    }

    /// Replace the contents of `ops` with this alignment path.
    pub fn write_ops<T: FromAlignOp>(&self, ops: &mut Vec<T>) {
        ops.clear();
        ops.extend(
            self.runs
                .iter()
                .map(|run| T::from_parts(run.length, run.op)),
        )
    }
}

/// Concatenate alignment paths in order with [`Cigar::append`].
///
/// ### Example
/// ```
/// use rs_cigar::{join, Cigar};
///
/// let parts: Vec<Cigar> = ["5S3M", "2M1I", "4M"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(join(&parts).unwrap().to_string(), "5S5M1I4M");
/// ```
pub fn join<'a, I>(cigars: I) -> anyhow::Result<Cigar>
where
    I: IntoIterator<Item = &'a Cigar>,
{
    let mut joined = Cigar::new();
    for cigar in cigars {
        joined.append(cigar)?;
    }
    Ok(joined)
}

impl Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in self.runs.iter() {
            write!(f, "{run}")?;
        }
        Ok(())
    }
}

/// Strict parse. See [`Cigar::parse_with`] for the lenient scanner.
impl FromStr for Cigar {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cigar::parse_with(s, &CigarConfig::default())
    }
}

impl Index<usize> for Cigar {
    type Output = CigarRun;

    fn index(&self, index: usize) -> &CigarRun {
        &self.runs[index]
    }
}

impl FromIterator<CigarRun> for Cigar {
    fn from_iter<I: IntoIterator<Item = CigarRun>>(iter: I) -> Self {
        Cigar {
            runs: iter.into_iter().collect(),
        }
    }
}

impl Extend<CigarRun> for Cigar {
    fn extend<I: IntoIterator<Item = CigarRun>>(&mut self, iter: I) {
        self.runs.extend(iter)
    }
}

impl IntoIterator for Cigar {
    type Item = CigarRun;
    type IntoIter = std::vec::IntoIter<CigarRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cigar {
    type Item = &'a CigarRun;
    type IntoIter = std::slice::Iter<'a, CigarRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
