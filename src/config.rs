use crate::mode::{AlleleMerge, ParseMode};

#[derive(Debug, Clone, Default)]
/// Construction configuration.
pub struct CigarConfig {
    /// Text scanner behavior, [`ParseMode`].
    pub parse_mode: ParseMode,
    /// Run merging when building from variant alleles, [`AlleleMerge`].
    pub allele_merge: AlleleMerge,
}

impl CigarConfig {
    /// Reproduce the legacy behavior.
    /// * Lenient text scanner.
    /// * Legacy allele merging.
    pub fn legacy() -> Self {
        CigarConfig {
            parse_mode: ParseMode::Lenient,
            allele_merge: AlleleMerge::Legacy,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_config_is_strict() {
        let config = CigarConfig::default();
        assert_eq!(config.parse_mode, ParseMode::Strict);
        assert_eq!(config.allele_merge, AlleleMerge::Legacy);
    }

    #[test]
    fn test_legacy_config() {
        let config = CigarConfig::legacy();
        assert_eq!(config.parse_mode, ParseMode::Lenient);
        assert_eq!(config.allele_merge, AlleleMerge::Legacy);
    }
}
