/// Normalized filter parameters
///
/// The two slider values driving the active filter. Both are normalized to
/// [0, 1]; scaling to each filter's native range happens in the parameter
/// mapper, not here. Serialized to JSON so the last session can be restored.

use serde::{Deserialize, Serialize};

/// The user-facing slider state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Filter intensity (0.0 to 1.0)
    pub intensity: f32,
    /// Filter radius (0.0 to 1.0, scaled to the filter's native range)
    pub radius: f32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            intensity: 0.5,
            radius: 0.5,
        }
    }
}

impl FilterParams {
    /// Clamp both values into [0, 1].
    pub fn clamped(self) -> Self {
        Self {
            intensity: self.intensity.clamp(0.0, 1.0),
            radius: self.radius.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_sit_mid_range() {
        let params = FilterParams::default();
        assert_eq!(params.intensity, 0.5);
        assert_eq!(params.radius, 0.5);
    }

    #[test]
    fn test_serialization_round_trip() {
        let params = FilterParams {
            intensity: 0.75,
            radius: 0.2,
        };

        let json = serde_json::to_string(&params).unwrap();
        let restored: FilterParams = serde_json::from_str(&json).unwrap();

        assert_eq!(params, restored);
    }

    #[test]
    fn test_clamping() {
        let params = FilterParams {
            intensity: 1.5,
            radius: -0.2,
        }
        .clamped();

        assert_eq!(params.intensity, 1.0);
        assert_eq!(params.radius, 0.0);
    }
}
