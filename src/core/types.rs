use serde::{Deserialize, Serialize};

/// Paired-end read direction inferred from a file name.
///
/// `Unknown` files are still grouped and merged, under a caller-chosen
/// fallback token, but never count toward pair completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadDirection {
    Forward,
    Reverse,
    Unknown,
}

impl ReadDirection {
    /// Output-name token for this direction.
    ///
    /// `Forward` and `Reverse` map to the conventional `R1`/`R2`; `Unknown`
    /// maps to `fallback` so its outputs cannot collide with real pairs.
    #[must_use]
    pub fn token<'a>(self, fallback: &'a str) -> &'a str {
        match self {
            Self::Forward => "R1",
            Self::Reverse => "R2",
            Self::Unknown => fallback,
        }
    }

    /// Recognize a direction from an output-name token.
    ///
    /// Inverse of [`ReadDirection::token`]; returns `None` for tokens that
    /// are neither `R1`, `R2`, nor the fallback.
    #[must_use]
    pub fn from_token(token: &str, fallback: &str) -> Option<Self> {
        match token {
            "R1" => Some(Self::Forward),
            "R2" => Some(Self::Reverse),
            t if t == fallback => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReadDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reverse => write!(f, "reverse"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
