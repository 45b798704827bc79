/// Builtin image filters
///
/// This module handles everything filter-related:
/// - The fixed table of builtin filters and their accepted parameters (this file)
/// - Slider-to-native-range parameter mapping (mapping.rs)
/// - Human-readable filter names (name.rs)
/// - The filter evaluators themselves (builtin.rs)

pub mod builtin;
pub mod mapping;
pub mod name;

use mapping::ParamKey;
use serde::{Deserialize, Serialize};

/// Prefix carried by every internal filter identifier.
pub const FILTER_PREFIX: &str = "Fx";

/// One of the builtin filters.
///
/// Each variant knows its internal identifier and which of the three named
/// parameters it accepts, so the mapper can query capabilities instead of
/// branching per filter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Crystallize,
    Edges,
    GaussianBlur,
    Pixellate,
    SepiaTone,
    UnsharpMask,
    Vignette,
}

impl FilterKind {
    /// The fixed list of filter choices shown to the user.
    pub const ALL: [FilterKind; 7] = [
        FilterKind::Crystallize,
        FilterKind::Edges,
        FilterKind::GaussianBlur,
        FilterKind::Pixellate,
        FilterKind::SepiaTone,
        FilterKind::UnsharpMask,
        FilterKind::Vignette,
    ];

    /// Internal prefixed camel-case identifier.
    pub fn identifier(self) -> &'static str {
        match self {
            FilterKind::Crystallize => "FxCrystallize",
            FilterKind::Edges => "FxEdges",
            FilterKind::GaussianBlur => "FxGaussianBlur",
            FilterKind::Pixellate => "FxPixellate",
            FilterKind::SepiaTone => "FxSepiaTone",
            FilterKind::UnsharpMask => "FxUnsharpMask",
            FilterKind::Vignette => "FxVignette",
        }
    }

    /// The named parameters this filter accepts, in its native ranges.
    pub fn accepted_params(self) -> &'static [ParamKey] {
        match self {
            FilterKind::Crystallize => &[ParamKey::Radius],
            FilterKind::Edges => &[ParamKey::Intensity],
            FilterKind::GaussianBlur => &[ParamKey::Radius],
            FilterKind::Pixellate => &[ParamKey::Scale],
            FilterKind::SepiaTone => &[ParamKey::Intensity],
            FilterKind::UnsharpMask => &[ParamKey::Radius, ParamKey::Intensity],
            FilterKind::Vignette => &[ParamKey::Intensity, ParamKey::Radius],
        }
    }
}

impl Default for FilterKind {
    fn default() -> Self {
        FilterKind::SepiaTone
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", name::format_name(self.identifier(), FILTER_PREFIX))
    }
}
