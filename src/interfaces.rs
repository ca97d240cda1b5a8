// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};
use std::fmt;

// Enumeration for the two tabulated settings of a magnetic space group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Setting {
    Bns,
    Og,
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::Bns => write!(f, "BNS"),
            Setting::Og => write!(f, "OG"),
        }
    }
}

/// Which point-operator table the operator indices of a group refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointOperatorFamily {
    NonHexagonal,
    Hexagonal,
}

impl PointOperatorFamily {
    /// Table appropriate for a space-group number: trigonal and hexagonal groups
    /// (143–194) use the hexagonal table.
    pub fn for_space_group(number: u32) -> Self {
        if (143..=194).contains(&number) {
            Self::Hexagonal
        } else {
            Self::NonHexagonal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NonHexagonal => "nonhexagonal",
            Self::Hexagonal => "hexagonal",
        }
    }
}

impl fmt::Display for PointOperatorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Time reversal attached to a magnetic symmetry operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeReversal {
    /// +1: moments are not reversed
    Even,
    /// -1: moments are reversed (primed operation)
    Odd,
}

impl TimeReversal {
    pub fn from_sign(sign: i64) -> Option<Self> {
        match sign {
            1 => Some(Self::Even),
            -1 => Some(Self::Odd),
            _ => None,
        }
    }

    pub fn sign(&self) -> i32 {
        match self {
            Self::Even => 1,
            Self::Odd => -1,
        }
    }

    pub fn compose(self, other: Self) -> Self {
        if self == other {
            Self::Even
        } else {
            Self::Odd
        }
    }
}

impl fmt::Display for TimeReversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => write!(f, "+1"),
            Self::Odd => write!(f, "-1"),
        }
    }
}
