use std::fmt::{self, Display};

/// One point of difference between a reference and an alternate sequence.
///
/// Implemented by whatever variant comparison produces the alleles. Only string
/// equality and lengths are used.
pub trait Allele {
    /// Reference substring.
    fn reference(&self) -> &str;
    /// Alternate substring.
    fn alternate(&self) -> &str;

    /// Reference and alternate are identical.
    fn is_match(&self) -> bool {
        self.reference() == self.alternate()
    }
}

/// Owned reference/alternate pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantAllele {
    /// Reference substring.
    pub reference: String,
    /// Alternate substring.
    pub alternate: String,
}

impl VariantAllele {
    pub fn new(reference: impl Into<String>, alternate: impl Into<String>) -> Self {
        VariantAllele {
            reference: reference.into(),
            alternate: alternate.into(),
        }
    }
}

impl Display for VariantAllele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.reference, self.alternate)
    }
}

impl Allele for VariantAllele {
    fn reference(&self) -> &str {
        &self.reference
    }

    fn alternate(&self) -> &str {
        &self.alternate
    }
}

impl<S: AsRef<str>> Allele for (S, S) {
    fn reference(&self) -> &str {
        self.0.as_ref()
    }

    fn alternate(&self) -> &str {
        self.1.as_ref()
    }
}

impl<A: Allele + ?Sized> Allele for &A {
    fn reference(&self) -> &str {
        (**self).reference()
    }

    fn alternate(&self) -> &str {
        (**self).alternate()
    }
}
