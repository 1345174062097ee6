//! Reader settings with environment overrides (`BOLETO_*`)

fn parse_u32(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_i32(raw: Option<&str>, default: i32) -> i32 {
    raw.and_then(|v| v.trim().parse::<i32>().ok())
        .unwrap_or(default)
}

fn parse_bool_u8(raw: Option<&str>, default: bool) -> bool {
    raw.and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

/// What to do when the general check digit does not verify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumPolicy {
    /// Log the mismatch and return the barcode with `general_check == false`
    #[default]
    Warn,
    /// Fail the decode with `ChecksumMismatch`
    Enforce,
}

/// Handling of a raw modulus-10 check value of 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mod10Overflow {
    /// Report 0, as FEBRABAN prescribes for arrecadação barcodes
    #[default]
    Zero,
    /// Keep the raw value 10 (rendered as two characters)
    Preserve,
}

impl Mod10Overflow {
    /// Apply the policy to a raw modulus-10 value
    pub fn apply(self, raw: u8) -> u8 {
        match (self, raw) {
            (Mod10Overflow::Zero, 10) => 0,
            _ => raw,
        }
    }
}

/// Configuration for [`crate::BarcodeReader`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Rows averaged into the scanline
    pub band_height: u32,
    /// Rows from the vertical midpoint to the top of the band
    pub vertical_offset: i32,
    /// General check digit enforcement
    pub checksum_policy: ChecksumPolicy,
    /// Modulus-10 overflow handling
    pub mod10_overflow: Mod10Overflow,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            band_height: 1,
            vertical_offset: 0,
            checksum_policy: ChecksumPolicy::Warn,
            mod10_overflow: Mod10Overflow::Zero,
        }
    }
}

impl ReaderConfig {
    /// Defaults overridden by `BOLETO_BAND_HEIGHT`, `BOLETO_VERTICAL_OFFSET`,
    /// `BOLETO_STRICT_CHECKSUM` and `BOLETO_MOD10_PRESERVE`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`
    ///
    /// Values that do not parse leave the default in place. A band height of
    /// 0 is raised to 1.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let strict = parse_bool_u8(lookup("BOLETO_STRICT_CHECKSUM").as_deref(), false);
        let preserve = parse_bool_u8(lookup("BOLETO_MOD10_PRESERVE").as_deref(), false);
        Self {
            band_height: parse_u32(lookup("BOLETO_BAND_HEIGHT").as_deref(), defaults.band_height)
                .max(1),
            vertical_offset: parse_i32(
                lookup("BOLETO_VERTICAL_OFFSET").as_deref(),
                defaults.vertical_offset,
            ),
            checksum_policy: if strict {
                ChecksumPolicy::Enforce
            } else {
                ChecksumPolicy::Warn
            },
            mod10_overflow: if preserve {
                Mod10Overflow::Preserve
            } else {
                Mod10Overflow::Zero
            },
        }
    }

    /// Set the number of rows averaged into the scanline
    pub fn with_band_height(mut self, band_height: u32) -> Self {
        self.band_height = band_height;
        self
    }

    /// Set the band offset from the vertical midpoint
    pub fn with_vertical_offset(mut self, vertical_offset: i32) -> Self {
        self.vertical_offset = vertical_offset;
        self
    }

    /// Set the general check digit policy
    pub fn with_checksum_policy(mut self, policy: ChecksumPolicy) -> Self {
        self.checksum_policy = policy;
        self
    }

    /// Set the modulus-10 overflow handling
    pub fn with_mod10_overflow(mut self, overflow: Mod10Overflow) -> Self {
        self.mod10_overflow = overflow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ReaderConfig::default();
        assert_eq!(config.band_height, 1);
        assert_eq!(config.vertical_offset, 0);
        assert_eq!(config.checksum_policy, ChecksumPolicy::Warn);
        assert_eq!(config.mod10_overflow, Mod10Overflow::Zero);
    }

    #[test]
    fn test_builder() {
        let config = ReaderConfig::default()
            .with_band_height(5)
            .with_vertical_offset(-3)
            .with_checksum_policy(ChecksumPolicy::Enforce)
            .with_mod10_overflow(Mod10Overflow::Preserve);
        assert_eq!(config.band_height, 5);
        assert_eq!(config.vertical_offset, -3);
        assert_eq!(config.checksum_policy, ChecksumPolicy::Enforce);
        assert_eq!(config.mod10_overflow, Mod10Overflow::Preserve);
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_u32(None, 7), 7);
        assert_eq!(parse_u32(Some("abc"), 7), 7);
        assert_eq!(parse_u32(Some(" 9 "), 7), 9);
        assert_eq!(parse_u32(Some("0"), 7), 0);
        assert_eq!(parse_u32(Some("-1"), 7), 7);

        assert_eq!(parse_i32(None, -2), -2);
        assert_eq!(parse_i32(Some("x1"), -2), -2);
        assert_eq!(parse_i32(Some(" -15"), -2), -15);

        assert!(parse_bool_u8(None, true));
        assert!(!parse_bool_u8(Some("yes"), false));
        assert!(parse_bool_u8(Some("1"), false));
        assert!(!parse_bool_u8(Some("0"), true));
    }

    #[test]
    fn test_lookup_maps_variables() {
        let config = ReaderConfig::from_lookup(lookup_from(&[
            ("BOLETO_BAND_HEIGHT", "5"),
            ("BOLETO_VERTICAL_OFFSET", "-12"),
            ("BOLETO_STRICT_CHECKSUM", "1"),
            ("BOLETO_MOD10_PRESERVE", "1"),
        ]));
        assert_eq!(config.band_height, 5);
        assert_eq!(config.vertical_offset, -12);
        assert_eq!(config.checksum_policy, ChecksumPolicy::Enforce);
        assert_eq!(config.mod10_overflow, Mod10Overflow::Preserve);
    }

    #[test]
    fn test_lookup_bad_values_keep_defaults() {
        let config = ReaderConfig::from_lookup(lookup_from(&[
            ("BOLETO_BAND_HEIGHT", "abc"),
            ("BOLETO_VERTICAL_OFFSET", ""),
            ("BOLETO_STRICT_CHECKSUM", "true"),
            ("BOLETO_MOD10_PRESERVE", "0"),
        ]));
        assert_eq!(config, ReaderConfig::default());
        assert_eq!(
            ReaderConfig::from_lookup(lookup_from(&[])),
            ReaderConfig::default()
        );
    }

    #[test]
    fn test_lookup_zero_band_height_clamped() {
        let config = ReaderConfig::from_lookup(lookup_from(&[("BOLETO_BAND_HEIGHT", "0")]));
        assert_eq!(config.band_height, 1);
    }

    #[test]
    fn test_from_env_band_height_positive() {
        assert!(ReaderConfig::from_env().band_height >= 1);
    }
}
