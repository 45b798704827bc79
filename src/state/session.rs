/// Editor session state
///
/// Owns everything the single editing screen works on: the picked source
/// image, the active filter, the slider values, and the cached processed
/// image derived from the other three.
///
/// All mutation goes through setters that end in an explicit `recompute()`,
/// so the derived image can never drift from the inputs by a forgotten
/// update path.

use image::{DynamicImage, RgbaImage};

use crate::filter::FilterKind;
use crate::pipeline;
use crate::state::params::FilterParams;

pub struct EditorSession {
    filter: FilterKind,
    params: FilterParams,
    /// The raw image the user picked; replaced wholesale on each pick.
    source: Option<DynamicImage>,
    /// Cached output of (source, filter, params). None until a source is
    /// set; kept unchanged when an evaluation produces no output.
    processed: Option<RgbaImage>,
}

impl EditorSession {
    pub fn new(filter: FilterKind, params: FilterParams) -> Self {
        Self {
            filter,
            params: params.clamped(),
            source: None,
            processed: None,
        }
    }

    pub fn filter(&self) -> FilterKind {
        self.filter
    }

    pub fn params(&self) -> FilterParams {
        self.params
    }

    pub fn processed(&self) -> Option<&RgbaImage> {
        self.processed.as_ref()
    }

    pub fn set_source(&mut self, image: DynamicImage) {
        self.source = Some(image);
        self.recompute();
    }

    pub fn set_filter(&mut self, filter: FilterKind) {
        self.filter = filter;
        self.recompute();
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.params.intensity = intensity.clamp(0.0, 1.0);
        self.recompute();
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.params.radius = radius.clamp(0.0, 1.0);
        self.recompute();
    }

    /// Recompute the processed image from the current inputs.
    ///
    /// No source means no output. A failed evaluation leaves the previous
    /// processed image in place, so the display never goes blank mid-edit.
    fn recompute(&mut self) {
        let Some(source) = &self.source else {
            return;
        };

        if let Some(output) = pipeline::process(source, self.filter, &self.params) {
            self.processed = Some(output);
        }
    }
}
