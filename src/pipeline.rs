/// Image processing pipeline
///
/// Glue between the slider state, the filter table, and the display: map the
/// normalized sliders into the filter's native parameters, run the
/// evaluator, and convert the output into something the UI can show.

use iced::widget::image::Handle;
use image::{DynamicImage, RgbaImage};

use crate::filter::mapping::ParamAssignments;
use crate::filter::{builtin, FilterKind};
use crate::state::params::FilterParams;

/// Run the active filter over the source image.
///
/// Returns `None` when the evaluation produces no output; callers keep
/// whatever they were displaying.
pub fn process(
    source: &DynamicImage,
    filter: FilterKind,
    params: &FilterParams,
) -> Option<RgbaImage> {
    let assignments = ParamAssignments::for_filter(filter, params);
    let output = builtin::evaluate(filter, source, &assignments)?;
    Some(output.to_rgba8())
}

/// Convert a processed image into an iced image handle for the preview.
pub fn to_handle(image: &RgbaImage) -> Handle {
    Handle::from_rgba(image.width(), image.height(), image.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn sample_image() -> DynamicImage {
        let mut img = RgbaImage::new(10, 6);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 20) as u8, (y * 40) as u8, 90, 255]);
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_process_runs_every_builtin_filter() {
        let source = sample_image();
        let params = FilterParams::default();

        for kind in FilterKind::ALL {
            let output = process(&source, kind, &params)
                .unwrap_or_else(|| panic!("{} produced no output", kind.identifier()));
            assert_eq!(output.dimensions(), (10, 6));
        }
    }

    #[test]
    fn test_process_with_degenerate_source_yields_none() {
        let empty = DynamicImage::ImageRgba8(RgbaImage::new(0, 0));
        let params = FilterParams::default();
        assert!(process(&empty, FilterKind::GaussianBlur, &params).is_none());
    }

    #[test]
    fn test_same_inputs_give_same_output() {
        let source = sample_image();
        let params = FilterParams {
            intensity: 0.6,
            radius: 0.4,
        };

        let first = process(&source, FilterKind::Vignette, &params).unwrap();
        let second = process(&source, FilterKind::Vignette, &params).unwrap();
        assert_eq!(first, second);
    }
}
