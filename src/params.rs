
use std::{fmt, str::FromStr};

use anyhow::{Result, bail};

/// How strongly masked pixels are pulled toward their deinterlaced value.
///
/// Each level scales the color channels of a masked pixel by a fixed
/// fraction, using truncating integer division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Strength {
    /// 8/9
    Subtle = 0,
    /// 4/5
    Low = 1,
    /// 2/3
    #[default]
    Medium = 2,
    /// 1/2
    High = 3,
    /// 0/1, masked pixels go black.
    Full = 4,
}

impl Strength {
    pub const ALL: [Self; 5] = [Self::Subtle, Self::Low, Self::Medium, Self::High, Self::Full];

    /// `(numerator, denominator)` applied to each color channel.
    #[must_use]
    pub const fn ratio(self) -> (u16, u16) {
        match self {
            Self::Subtle => (8, 9),
            Self::Low => (4, 5),
            Self::Medium => (2, 3),
            Self::High => (1, 2),
            Self::Full => (0, 1),
        }
    }

    /// Scales one channel value by this level's ratio, rounding down.
    #[inline]
    #[must_use]
    pub const fn apply(self, channel: u8) -> u8 {
        let (num, den) = self.ratio();
        (channel as u16 * num / den) as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Subtle => "subtle",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Full => "full",
        }
    }
}

impl TryFrom<i64> for Strength {
    type Error = anyhow::Error;

    fn try_from(val: i64) -> Result<Self> {
        Ok(match val {
            0 => Self::Subtle,
            1 => Self::Low,
            2 => Self::Medium,
            3 => Self::High,
            4 => Self::Full,
            _ => bail!("Invalid value for 'strength', must be 0-4, got {val}."),
        })
    }
}

impl FromStr for Strength {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid value for 'strength', must be one of subtle, low, medium, high, full, got {s:?}."
                )
            })
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the compositor writes into masked pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// Scale the color channels by the configured [`Strength`].
    #[default]
    Attenuate = 0,
    /// OR each masked pixel with the pixel directly above it, filling the
    /// dark lines of a combed field with their neighbors.
    LineMerge = 1,
}

impl TryFrom<i64> for CompositeMode {
    type Error = anyhow::Error;

    fn try_from(val: i64) -> Result<Self> {
        Ok(match val {
            0 => Self::Attenuate,
            1 => Self::LineMerge,
            _ => bail!("Invalid value for 'mode', must be 0-1, got {val}."),
        })
    }
}

impl FromStr for CompositeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "attenuate" => Self::Attenuate,
            "line-merge" | "linemerge" => Self::LineMerge,
            _ => bail!("Invalid value for 'mode', must be attenuate or line-merge, got {s:?}."),
        })
    }
}

impl fmt::Display for CompositeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Attenuate => "attenuate",
            Self::LineMerge => "line-merge",
        })
    }
}

/// Which operator `refine` applies first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefineOrder {
    /// Grow, then tighten (closing). Fills gaps inside the region.
    #[default]
    DilateFirst = 0,
    /// Tighten, then grow (opening). Drops specks smaller than the passes.
    ErodeFirst = 1,
}

impl TryFrom<i64> for RefineOrder {
    type Error = anyhow::Error;

    fn try_from(val: i64) -> Result<Self> {
        Ok(match val {
            0 => Self::DilateFirst,
            1 => Self::ErodeFirst,
            _ => bail!("Invalid value for 'order', must be 0-1, got {val}."),
        })
    }
}

impl FromStr for RefineOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "dilate-first" | "closing" => Self::DilateFirst,
            "erode-first" | "opening" => Self::ErodeFirst,
            _ => bail!("Invalid value for 'order', must be dilate-first or erode-first, got {s:?}."),
        })
    }
}

impl fmt::Display for RefineOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DilateFirst => "dilate-first",
            Self::ErodeFirst => "erode-first",
        })
    }
}

pub const DEFAULT_PASSES: usize = 2;
