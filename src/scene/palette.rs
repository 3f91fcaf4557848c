use std::str::FromStr;

use crate::foundation::{
    core::Rgba8Premul,
    error::{ForestError, ForestResult},
};

/// Named two-color vertical background gradient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    /// Deep blue fading to slate.
    #[default]
    Misty,
    /// Night sky fading to teal.
    Sunrise,
    /// Navy fading to dusk blue.
    Twilight,
    /// Almost black fading to midnight.
    Night,
    /// Flat dark ink.
    Paper,
    /// Barely-there gradient.
    Minimal,
    /// Dark blue fading to green-grey.
    Fog,
}

impl BackgroundKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Misty,
        Self::Sunrise,
        Self::Twilight,
        Self::Night,
        Self::Paper,
        Self::Minimal,
        Self::Fog,
    ];

    /// Lowercase name as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Misty => "misty",
            Self::Sunrise => "sunrise",
            Self::Twilight => "twilight",
            Self::Night => "night",
            Self::Paper => "paper",
            Self::Minimal => "minimal",
            Self::Fog => "fog",
        }
    }

    /// `(top, bottom)` gradient stops; both opaque.
    pub fn gradient(self) -> (Rgba8Premul, Rgba8Premul) {
        let ink = Rgba8Premul::opaque(11, 18, 32);
        match self {
            Self::Misty => (ink, Rgba8Premul::opaque(22, 50, 79)),
            Self::Sunrise => (ink, Rgba8Premul::opaque(27, 111, 138)),
            Self::Twilight => (Rgba8Premul::opaque(7, 16, 30), Rgba8Premul::opaque(15, 58, 99)),
            Self::Night => (Rgba8Premul::opaque(6, 11, 20), Rgba8Premul::opaque(11, 24, 48)),
            Self::Paper => (ink, ink),
            Self::Minimal => (ink, Rgba8Premul::opaque(13, 27, 42)),
            Self::Fog => (ink, Rgba8Premul::opaque(19, 78, 74)),
        }
    }
}

impl FromStr for BackgroundKind {
    type Err = ForestError;

    fn from_str(s: &str) -> ForestResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
                ForestError::validation(format!(
                    "unknown background '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

impl std::fmt::Display for BackgroundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/palette.rs"]
mod tests;
