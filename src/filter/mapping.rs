/// Slider-to-filter parameter mapping
///
/// The UI exposes two normalized sliders (intensity, radius). Each filter
/// accepts some subset of three named parameters, in its native range:
/// - intensity: the intensity slider, unscaled (0.0 to 1.0)
/// - radius: the radius slider scaled to 0.0 to 200.0
/// - scale: the intensity slider scaled to 0.0 to 100.0

use super::FilterKind;
use crate::state::params::FilterParams;

/// The named parameters a filter can accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKey {
    Intensity,
    Radius,
    Scale,
}

/// Native-range values assigned to the parameters a filter accepts.
///
/// A `None` field means the filter does not accept that parameter and
/// nothing was assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParamAssignments {
    pub intensity: Option<f32>,
    pub radius: Option<f32>,
    pub scale: Option<f32>,
}

impl ParamAssignments {
    /// Compute the assignments for one filter from the current slider state.
    ///
    /// Pure function of its inputs, so repeated calls with the same inputs
    /// always produce the same assignments.
    pub fn for_filter(kind: FilterKind, params: &FilterParams) -> Self {
        let accepted = kind.accepted_params();

        let mut assignments = Self::default();
        if accepted.contains(&ParamKey::Intensity) {
            assignments.intensity = Some(params.intensity);
        }
        if accepted.contains(&ParamKey::Radius) {
            assignments.radius = Some(params.radius * 200.0);
        }
        if accepted.contains(&ParamKey::Scale) {
            assignments.scale = Some(params.intensity * 100.0);
        }

        assignments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(intensity: f32, radius: f32) -> FilterParams {
        FilterParams { intensity, radius }
    }

    #[test]
    fn test_radius_scaled_by_200() {
        let a = ParamAssignments::for_filter(FilterKind::GaussianBlur, &params(0.5, 0.25));
        assert_eq!(a.radius, Some(50.0));
        assert_eq!(a.intensity, None);
        assert_eq!(a.scale, None);
    }

    #[test]
    fn test_scale_is_intensity_times_100() {
        let a = ParamAssignments::for_filter(FilterKind::Pixellate, &params(0.3, 0.9));
        assert_eq!(a.scale, Some(30.0));
        assert_eq!(a.radius, None);
        assert_eq!(a.intensity, None);
    }

    #[test]
    fn test_intensity_passes_through_unscaled() {
        let a = ParamAssignments::for_filter(FilterKind::SepiaTone, &params(0.7, 0.2));
        assert_eq!(a.intensity, Some(0.7));
        assert_eq!(a.radius, None);
    }

    #[test]
    fn test_filter_accepting_both_sliders() {
        let a = ParamAssignments::for_filter(FilterKind::UnsharpMask, &params(0.4, 0.1));
        assert_eq!(a.intensity, Some(0.4));
        assert_eq!(a.radius, Some(20.0));
    }

    #[test]
    fn test_repeated_mapping_is_identical() {
        let p = params(0.33, 0.66);
        let first = ParamAssignments::for_filter(FilterKind::Vignette, &p);
        let second = ParamAssignments::for_filter(FilterKind::Vignette, &p);
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_filter_scales_consistently() {
        for &kind in FilterKind::ALL.iter() {
            let a = ParamAssignments::for_filter(kind, &params(0.5, 0.5));
            if let Some(radius) = a.radius {
                assert_eq!(radius, 100.0);
            }
            if let Some(scale) = a.scale {
                assert_eq!(scale, 50.0);
            }
            if let Some(intensity) = a.intensity {
                assert_eq!(intensity, 0.5);
            }
        }
    }
}
