//! Per-call output metadata policy
//!
//! Which optional metadata fields a rendered line carries is decided per
//! emit call from the event's severity, as a plain value handed to the
//! render step. Every sink of a given call sees the same options.

use super::severity::Severity;

/// Optional metadata attached to a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub include_timestamp: bool,
    pub include_call_stack: bool,
}

impl OutputOptions {
    /// No optional metadata at all.
    pub const NONE: OutputOptions = OutputOptions {
        include_timestamp: false,
        include_call_stack: false,
    };

    /// The metadata policy for an event of the given severity: every tier
    /// gets a timestamp, Error and Fatal additionally get a call stack.
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error | Severity::Fatal => OutputOptions {
                include_timestamp: true,
                include_call_stack: true,
            },
            Severity::Debug | Severity::Information | Severity::Warning => OutputOptions {
                include_timestamp: true,
                include_call_stack: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_only_tiers() {
        for severity in [Severity::Debug, Severity::Information, Severity::Warning] {
            let options = OutputOptions::for_severity(severity);
            assert!(options.include_timestamp, "{} should carry a timestamp", severity);
            assert!(
                !options.include_call_stack,
                "{} should not carry a call stack",
                severity
            );
        }
    }

    #[test]
    fn test_call_stack_tiers() {
        for severity in [Severity::Error, Severity::Fatal] {
            let options = OutputOptions::for_severity(severity);
            assert!(options.include_timestamp);
            assert!(
                options.include_call_stack,
                "{} should carry a call stack",
                severity
            );
        }
    }

    #[test]
    fn test_none() {
        assert!(!OutputOptions::NONE.include_timestamp);
        assert!(!OutputOptions::NONE.include_call_stack);
    }
}
