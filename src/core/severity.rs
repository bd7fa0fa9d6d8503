//! Severity tiers and cumulative threshold masks

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a single emitted event, ordered most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Fatal,
    Error,
    Warning,
    Information,
    Debug,
}

impl Severity {
    /// All five tiers, most severe first.
    pub const ALL: [Severity; 5] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warning,
        Severity::Information,
        Severity::Debug,
    ];

    /// The single filter bit for this tier.
    pub fn bit(self) -> i32 {
        match self {
            Severity::Fatal => 1,
            Severity::Error => 2,
            Severity::Warning => 4,
            Severity::Information => 8,
            Severity::Debug => 16,
        }
    }

    pub fn to_str(self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Information => "INFORMATION",
            Severity::Debug => "DEBUG",
        }
    }

    pub fn color_code(self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Fatal => BrightRed,
            Severity::Error => Red,
            Severity::Warning => Yellow,
            Severity::Information => Green,
            Severity::Debug => Blue,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FATAL" | "CRITICAL" => Ok(Severity::Fatal),
            "ERROR" => Ok(Severity::Error),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "INFO" | "INFORMATION" => Ok(Severity::Information),
            "DEBUG" | "VERBOSE" => Ok(Severity::Debug),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

/// Minimum-severity threshold as a cumulative bitmask: each tier's mask is
/// the union of all more-severe tiers' bits plus its own, so the tiers nest
/// strictly (`Fatal ⊂ Error ⊂ Warning ⊂ Information ⊂ Debug`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(i32)]
pub enum SeverityLevel {
    /// Does not allow any events through.
    Off = 0,
    /// Allows only Fatal events through.
    Fatal = 1,
    /// Allows Fatal and Error events through.
    Error = 3,
    /// Allows Fatal, Error, and Warning events through.
    Warning = 7,
    /// Allows Fatal, Error, Warning, and Information events through.
    Information = 15,
    /// Allows every tier through, including Debug.
    Debug = 31,
    /// Allows all events through.
    #[default]
    All = -1,
}

impl SeverityLevel {
    /// The raw cumulative bitmask for this threshold.
    pub fn mask(self) -> i32 {
        self as i32
    }

    /// Whether an event of the given severity passes this threshold.
    ///
    /// Pure bit test over the cumulative mask; filtering never errors,
    /// it only suppresses.
    pub fn accepts(self, severity: Severity) -> bool {
        self.mask() & severity.bit() != 0
    }

    pub fn to_str(self) -> &'static str {
        match self {
            SeverityLevel::Off => "OFF",
            SeverityLevel::Fatal => "FATAL",
            SeverityLevel::Error => "ERROR",
            SeverityLevel::Warning => "WARNING",
            SeverityLevel::Information => "INFORMATION",
            SeverityLevel::Debug => "DEBUG",
            SeverityLevel::All => "ALL",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for SeverityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" => Ok(SeverityLevel::Off),
            "FATAL" => Ok(SeverityLevel::Fatal),
            "ERROR" => Ok(SeverityLevel::Error),
            "WARN" | "WARNING" => Ok(SeverityLevel::Warning),
            "INFO" | "INFORMATION" => Ok(SeverityLevel::Information),
            "DEBUG" => Ok(SeverityLevel::Debug),
            "ALL" => Ok(SeverityLevel::All),
            _ => Err(format!("Invalid severity level: '{}'", s)),
        }
    }
}

impl From<Severity> for SeverityLevel {
    /// The threshold whose most verbose accepted tier is `severity`.
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Fatal => SeverityLevel::Fatal,
            Severity::Error => SeverityLevel::Error,
            Severity::Warning => SeverityLevel::Warning,
            Severity::Information => SeverityLevel::Information,
            Severity::Debug => SeverityLevel::Debug,
        }
    }
}
