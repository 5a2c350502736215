use std::fmt;
use std::str::FromStr;

use super::UnknownVariant;

/// How a create treats an order whose id is already stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritePolicy {
    /// Unconditional put. The last write wins.
    #[default]
    Overwrite,
    /// Conditional put. A colliding id fails with `StoreError::AlreadyExists`.
    RejectExisting,
}

impl WritePolicy {
    const EXPECTED: &'static str = "overwrite, reject-existing";

    pub fn as_str(&self) -> &'static str {
        match self {
            WritePolicy::Overwrite => "overwrite",
            WritePolicy::RejectExisting => "reject-existing",
        }
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WritePolicy {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(WritePolicy::Overwrite),
            "reject-existing" | "reject_existing" => Ok(WritePolicy::RejectExisting),
            _ => Err(UnknownVariant {
                kind: "write policy",
                value: s.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// How much of the table a scan reads.
///
/// `SinglePage` issues one scan request and drops anything past the store's
/// single-response limit. `Paginated` follows continuation keys until the
/// table is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    #[default]
    SinglePage,
    Paginated,
}

impl ScanMode {
    const EXPECTED: &'static str = "single-page, paginated";

    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMode::SinglePage => "single-page",
            ScanMode::Paginated => "paginated",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single-page" | "single_page" => Ok(ScanMode::SinglePage),
            "paginated" => Ok(ScanMode::Paginated),
            _ => Err(UnknownVariant {
                kind: "scan mode",
                value: s.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_preserve_plain_put_and_single_page() {
        assert_eq!(WritePolicy::default(), WritePolicy::Overwrite);
        assert_eq!(ScanMode::default(), ScanMode::SinglePage);
    }

    #[test]
    fn test_write_policy_parsing() {
        assert_eq!("overwrite".parse::<WritePolicy>(), Ok(WritePolicy::Overwrite));
        assert_eq!("Reject-Existing".parse::<WritePolicy>(), Ok(WritePolicy::RejectExisting));
        assert_eq!("reject_existing".parse::<WritePolicy>(), Ok(WritePolicy::RejectExisting));
        assert!("upsert".parse::<WritePolicy>().is_err());
    }

    #[test]
    fn test_scan_mode_parsing() {
        assert_eq!(" single-page ".parse::<ScanMode>(), Ok(ScanMode::SinglePage));
        assert_eq!("PAGINATED".parse::<ScanMode>(), Ok(ScanMode::Paginated));

        let err = "all".parse::<ScanMode>().unwrap_err();
        assert_eq!(err.kind, "scan mode");
        assert_eq!(err.value, "all");
    }

    #[test]
    fn test_display_matches_parse_input() {
        for policy in [WritePolicy::Overwrite, WritePolicy::RejectExisting] {
            assert_eq!(policy.to_string().parse::<WritePolicy>(), Ok(policy));
        }
        for mode in [ScanMode::SinglePage, ScanMode::Paginated] {
            assert_eq!(mode.to_string().parse::<ScanMode>(), Ok(mode));
        }
    }
}
