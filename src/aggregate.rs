//! Summing the numbers stored in `count` files
//!
//! [`CountAggregator`] is an [`EntryVisitor`] that reads every file with the
//! target name and adds its content to an arbitrary-precision running total.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use tracing::debug;

use crate::error::{Result, WalkError};
use crate::walker::{Entry, EntryVisitor};

/// File name summed when no other target is configured.
pub const DEFAULT_TARGET: &str = "count";

#[derive(Debug, Clone)]
pub struct CountAggregator {
    target: String,
    /// Fractional digits kept in the running total.
    scale: u32,
    total: BigDecimal,
    files: usize,
}

impl CountAggregator {
    pub fn new() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            scale: 0,
            total: BigDecimal::zero(),
            files: 0,
        }
    }

    /// Sum files with this base name instead of `count`.
    pub fn with_target(mut self, name: impl Into<String>) -> Self {
        self.target = name.into();
        self
    }

    /// Keep `scale` fractional digits in the running total. Every addition is
    /// truncated toward zero to this many digits, so digits dropped early are
    /// never recovered by later additions.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self.total = self.total.with_scale(i64::from(scale));
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of files added to the total so far.
    pub fn files_summed(&self) -> usize {
        self.files
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Running total with exactly `scale` fractional digits.
    pub fn total(&self) -> String {
        self.total.with_scale(i64::from(self.scale)).to_plain_string()
    }

    /// Read one file and add its value to the total.
    pub fn add_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|source| WalkError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let value = parse_decimal(&content).ok_or_else(|| WalkError::InvalidNumber {
            path: path.to_path_buf(),
            content: content.clone(),
        })?;

        debug!(path = %path.display(), %value, "adding count");
        self.total = (&self.total + &value).with_scale(i64::from(self.scale));
        self.files += 1;
        Ok(())
    }
}

impl Default for CountAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryVisitor for CountAggregator {
    type Error = WalkError;

    fn visit_file(&mut self, entry: &Entry) -> Result<()> {
        if entry.name() != self.target {
            return Ok(());
        }
        self.add_file(entry.path())
    }
}

/// Parse a plain decimal number: optional sign, digits, optional fraction.
///
/// Surrounding whitespace is ignored and blank input is zero. Exponents,
/// digit separators and anything else are rejected.
pub fn parse_decimal(text: &str) -> Option<BigDecimal> {
    let text = text.trim();
    if text.is_empty() {
        return Some(BigDecimal::zero());
    }

    let (sign, unsigned) = match text.as_bytes()[0] {
        b'-' => ("-", &text[1..]),
        b'+' => ("", &text[1..]),
        _ => ("", text),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let normalized = if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    };
    BigDecimal::from_str(&normalized).ok()
}
