// crates/shared-kernel/src/value_objects/file_size.rs
use std::{fmt, iter::Sum, ops::Add};

use serde::{Deserialize, Serialize};

const MIB: u64 = 1 << 20;
const GIB: u64 = 1 << 30;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Returns the size expressed in mebibytes.
    pub fn megabytes(self) -> f64 {
        self.0 as f64 / MIB as f64
    }

    /// Returns the size expressed in gibibytes.
    pub fn gigabytes(self) -> f64 {
        self.0 as f64 / GIB as f64
    }

    /// Picks GB once the total reaches one gibibyte, MB otherwise.
    pub fn to_transfer_unit(self) -> ScaledSize {
        if self.0 >= GIB {
            ScaledSize { value: self.gigabytes(), unit: SizeUnit::Gigabytes }
        } else {
            ScaledSize { value: self.megabytes(), unit: SizeUnit::Megabytes }
        }
    }

    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

impl Add for FileSize {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl Sum for FileSize {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_transfer_unit())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeUnit {
    #[serde(rename = "MB")]
    Megabytes,
    #[serde(rename = "GB")]
    Gigabytes,
}

impl SizeUnit {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A size converted to a display unit, e.g. `1,536.00 GB`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledSize {
    pub value: f64,
    pub unit: SizeUnit,
}

impl ScaledSize {
    /// Two decimals with `,` thousands separators.
    pub fn formatted_value(&self) -> String {
        group_thousands(&format!("{:.2}", self.value))
    }
}

impl fmt::Display for ScaledSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.formatted_value(), self.unit)
    }
}

fn group_thousands(fixed: &str) -> String {
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed, ""));
    let digits = int_part.trim_start_matches('-');
    let mut grouped = String::with_capacity(fixed.len() + digits.len() / 3);
    if digits.len() != int_part.len() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
