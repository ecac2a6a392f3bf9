use log::debug;

use crate::{error::ParseError, mode::ParseMode, run::CigarRun};

/// Scan CIGAR text into runs using the given [`ParseMode`].
///
/// [`ParseMode::Lenient`] never returns an error.
pub fn scan(cigar: &str, mode: ParseMode) -> Result<Vec<CigarRun>, ParseError> {
    match mode {
        ParseMode::Strict => scan_strict(cigar),
        ParseMode::Lenient => Ok(scan_lenient(cigar)),
    }
}

/// Single pass scanner over `(<digits><op>)+`.
///
/// # Arguments
/// * `cigar`: CIGAR string. ex. `10M2I3D5M`
///
/// # Returns
/// * Runs in string order or the first [`ParseError`] found.
pub fn scan_strict(cigar: &str) -> Result<Vec<CigarRun>, ParseError> {
    if cigar.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut runs = Vec::with_capacity(cigar.len() / 2);
    let mut length: Option<u32> = None;

    for (pos, c) in cigar.char_indices() {
        if let Some(digit) = c.to_digit(10) {
            let new_length = length
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|l| l.checked_add(digit))
                .ok_or(ParseError::LengthOverflow { pos })?;
            length = Some(new_length);
            continue;
        }
        if !c.is_ascii_graphic() {
            return Err(ParseError::InvalidOperation { op: c, pos });
        }
        let Some(run_length) = length.take() else {
            return Err(ParseError::MissingLength { op: c, pos });
        };
        runs.push(CigarRun::new(run_length, c))
    }

    if let Some(length) = length {
        return Err(ParseError::MissingOperation { length });
    }
    Ok(runs)
}

/// Legacy scanner. See [`ParseMode::Lenient`].
///
/// A run is only emitted once the next length starts or the input ends, so the
/// first operation character after a length is the one kept.
pub fn scan_lenient(cigar: &str) -> Vec<CigarRun> {
    let mut runs = vec![];
    let mut length: u32 = 0;
    let mut has_digits = false;
    let mut op: Option<char> = None;

    for c in cigar.chars() {
        if let Some(digit) = c.to_digit(10) {
            if let Some(op) = op.take() {
                if !has_digits {
                    debug!("Operation '{op}' in {cigar:?} has no length, using 0");
                }
                runs.push(CigarRun::new(length, op));
                length = 0;
                has_digits = false;
            }
            length = length.saturating_mul(10).saturating_add(digit);
            has_digits = true;
        } else if let Some(first) = op {
            debug!("Ignoring operation '{c}' after '{first}' in {cigar:?}");
        } else {
            op = Some(c);
        }
    }

    match (has_digits, op) {
        (true, Some(op)) => runs.push(CigarRun::new(length, op)),
        (true, None) => debug!("Dropping trailing length {length} in {cigar:?}"),
        (false, Some(op)) => debug!("Dropping trailing operation '{op}' in {cigar:?}"),
        (false, None) => {}
    }
    runs
}
