//! Optional project features.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An optional feature the user can opt into.
///
/// The `include*` aliases match the tokens older answer files used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    #[serde(alias = "includeSass")]
    Sass,
    #[serde(alias = "includeModernizr")]
    Modernizr,
    #[serde(alias = "includejQuery")]
    Jquery,
    #[serde(alias = "includeNormalize")]
    Normalize,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Sass,
        Feature::Modernizr,
        Feature::Jquery,
        Feature::Normalize,
    ];

    /// Returns the label shown in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Sass => "Sass",
            Feature::Modernizr => "Modernizr",
            Feature::Jquery => "jQuery",
            Feature::Normalize => "Normalize CSS",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
