#![warn(missing_docs)]

//! CIGAR alignment paths.
//!
//! Parse, build, measure and concatenate run length encoded alignment paths such as `10M2I3D5M`.
//!
//! ```
//! use rs_cigar::Cigar;
//!
//! let cigar: Cigar = "5S10M2I3D5M".parse().unwrap();
//! assert_eq!(cigar.ref_len(), 18);
//! assert_eq!(cigar.read_len(), 22);
//! assert_eq!(cigar.soft_clip_start(), 5);
//! ```

pub mod allele;
pub mod cigar;
pub mod config;
pub mod error;
pub mod mode;
pub mod ops;
pub mod parse;
pub mod run;

pub use allele::{Allele, VariantAllele};
pub use cigar::{join, Cigar};
pub use config::CigarConfig;
pub use error::ParseError;
pub use run::CigarRun;
