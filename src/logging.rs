//! Severity-filtered, depth-indented logging for the tree walk.
//!
//! Verbosity is a bitmask so several severities can be enabled at once
//! (e.g. ERROR + WARNING). A message prints when its severity bit is set in
//! the configured mask, or when it is forced; otherwise it is dropped and
//! counted, so the final summary can report how many lines were suppressed.

use std::fmt::Display;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use colored::{ColoredString, Colorize};

use crate::error::SweepError;

/// Bitmask of enabled log severities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Verbosity(u8);

impl Verbosity {
    /// No extra logging; only forced messages print.
    pub const NONE: Verbosity = Verbosity(0);
    /// Display errors.
    pub const ERROR: Verbosity = Verbosity(1);
    /// Also display warnings (ignored non-empty directories).
    pub const WARNING: Verbosity = Verbosity(1 << 1);
    /// Also display successful deletions.
    pub const DELETION: Verbosity = Verbosity(1 << 2);
    /// Also display begin/finish of each visited directory.
    pub const INFORMATION: Verbosity = Verbosity(1 << 3);
    /// All severities enabled.
    pub const ALL: Verbosity = Verbosity(0b1111);

    /// Check whether every bit of `other` is set in this mask.
    pub fn contains(self, other: Verbosity) -> bool {
        self.0 & other.0 == other.0
    }

    /// The raw bit representation of the mask.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Build a mask from raw bits, rejecting bits outside the four
    /// user-selectable severities.
    pub fn from_bits(bits: u8) -> Option<Verbosity> {
        (bits <= Self::ALL.0).then_some(Verbosity(bits))
    }
}

impl BitOr for Verbosity {
    type Output = Verbosity;

    fn bitor(self, rhs: Verbosity) -> Verbosity {
        Verbosity(self.0 | rhs.0)
    }
}

impl BitOrAssign for Verbosity {
    fn bitor_assign(&mut self, rhs: Verbosity) {
        self.0 |= rhs.0;
    }
}

impl FromStr for Verbosity {
    type Err = SweepError;

    /// Parse a verbosity token: a numeric mask in `0..=15`, or severity
    /// names joined with `,` or `|` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();

        if let Ok(bits) = value.parse::<u8>() {
            return Verbosity::from_bits(bits).ok_or_else(|| {
                SweepError::InvalidVerbosity(
                    value.to_string(),
                    "numeric mask must be between 0 and 15".to_string(),
                )
            });
        }

        let mut mask = Verbosity::NONE;
        for token in value.split([',', '|']) {
            mask |= match token.trim().to_ascii_uppercase().as_str() {
                "ERROR" => Verbosity::ERROR,
                "WARNING" => Verbosity::WARNING,
                "DELETION" => Verbosity::DELETION,
                "INFORMATION" => Verbosity::INFORMATION,
                other => {
                    return Err(SweepError::InvalidVerbosity(
                        value.to_string(),
                        format!("unknown severity '{other}'"),
                    ));
                }
            };
        }

        Ok(mask)
    }
}

/// Severity of a single log event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Deletion,
    Information,
}

impl Severity {
    /// The verbosity bit that enables this severity.
    fn mask_bit(self) -> Verbosity {
        match self {
            Severity::Error => Verbosity::ERROR,
            Severity::Warning => Verbosity::WARNING,
            Severity::Deletion => Verbosity::DELETION,
            Severity::Information => Verbosity::INFORMATION,
        }
    }

    /// Three-letter tag prefixed to every emitted line.
    fn tag(self) -> &'static str {
        match self {
            Severity::Error => "ERR",
            Severity::Warning => "WAR",
            Severity::Deletion => "DEL",
            Severity::Information => "INF",
        }
    }

    fn paint(self, line: &str) -> ColoredString {
        match self {
            Severity::Error => line.red(),
            Severity::Warning => line.yellow(),
            Severity::Deletion => line.green(),
            Severity::Information => line.white(),
        }
    }
}

/// Severity filter and output sink for the walk.
///
/// Owns the count of suppressed messages; the sweep merges it into the run
/// statistics once the walk finishes.
#[derive(Debug)]
pub struct Logger {
    mask: Verbosity,
    suppressed: u64,
}

impl Logger {
    pub fn new(mask: Verbosity) -> Self {
        Self {
            mask,
            suppressed: 0,
        }
    }

    /// Emit a message subject to the verbosity mask.
    pub fn log(&mut self, severity: Severity, depth: usize, message: impl Display) {
        self.write(severity, depth, message, false);
    }

    /// Emit a message unconditionally, bypassing the verbosity mask.
    ///
    /// Used for messages that must reach the user regardless of
    /// configuration, such as configuration errors.
    pub fn force(&mut self, severity: Severity, depth: usize, message: impl Display) {
        self.write(severity, depth, message, true);
    }

    /// Number of messages dropped by the verbosity filter so far.
    pub fn suppressed(&self) -> u64 {
        self.suppressed
    }

    /// The configured verbosity mask.
    pub fn mask(&self) -> Verbosity {
        self.mask
    }

    fn write(&mut self, severity: Severity, depth: usize, message: impl Display, force: bool) {
        if !force && !self.mask.contains(severity.mask_bit()) {
            self.suppressed += 1;
            return;
        }

        // One indent space per recursion level nests child output under
        // its parent.
        let line = format!("[{}] {:depth$}{message}", severity.tag(), "");
        println!("{}", severity.paint(&line));
    }
}
