/// Builtin filter evaluators
///
/// Each evaluator is a thin pass over the `image` crate's primitives. Inputs
/// arrive in the filter's native range (radius 0-200, scale 0-100, intensity
/// 0-1) and each evaluator maps that onto its kernel's working range.
///
/// Evaluation returns `None` instead of erroring when no output can be
/// produced; the caller keeps whatever it was displaying before.

use image::{imageops, imageops::FilterType, DynamicImage, Rgba, RgbaImage};

use super::mapping::ParamAssignments;
use super::FilterKind;

/// Apply one builtin filter to a source image.
pub fn evaluate(
    kind: FilterKind,
    source: &DynamicImage,
    assignments: &ParamAssignments,
) -> Option<DynamicImage> {
    if source.width() == 0 || source.height() == 0 {
        return None;
    }

    let output = match kind {
        FilterKind::Crystallize => crystallize(source, assignments.radius.unwrap_or(40.0)),
        FilterKind::Edges => edges(source, assignments.intensity.unwrap_or(1.0)),
        FilterKind::GaussianBlur => gaussian_blur(source, assignments.radius.unwrap_or(10.0)),
        FilterKind::Pixellate => pixellate(source, assignments.scale.unwrap_or(8.0)),
        FilterKind::SepiaTone => sepia_tone(source, assignments.intensity.unwrap_or(1.0)),
        FilterKind::UnsharpMask => unsharp_mask(
            source,
            assignments.radius.unwrap_or(2.5),
            assignments.intensity.unwrap_or(0.5),
        ),
        FilterKind::Vignette => vignette(
            source,
            assignments.intensity.unwrap_or(0.0),
            assignments.radius.unwrap_or(100.0),
        ),
    };

    Some(output)
}

/// Gaussian blur. Native radius 0-200 maps onto the blur sigma.
fn gaussian_blur(source: &DynamicImage, radius: f32) -> DynamicImage {
    let sigma = radius * 0.25;
    if sigma <= 0.0 {
        return source.clone();
    }
    DynamicImage::ImageRgba8(imageops::fast_blur(&source.to_rgba8(), sigma))
}

/// Unsharp mask. Radius drives the blur sigma, intensity lowers the
/// difference threshold below which pixels are left alone.
fn unsharp_mask(source: &DynamicImage, radius: f32, intensity: f32) -> DynamicImage {
    let sigma = (radius * 0.05).max(0.1);
    let threshold = ((1.0 - intensity.clamp(0.0, 1.0)) * 10.0).round() as i32;
    source.unsharpen(sigma, threshold)
}

/// Edge detection via a 3x3 Laplacian kernel scaled by intensity.
/// Run on RGB so the zero-sum kernel doesn't wipe the alpha channel.
fn edges(source: &DynamicImage, intensity: f32) -> DynamicImage {
    let k = intensity.clamp(0.0, 1.0);
    let kernel = [-k, -k, -k, -k, 8.0 * k, -k, -k, -k, -k];
    DynamicImage::ImageRgb8(imageops::filter3x3(&source.to_rgb8(), &kernel))
}

/// Pixellate. Native scale 0-100 is the block size in pixels: downscale with
/// nearest-neighbor sampling, then upscale back to the original size.
fn pixellate(source: &DynamicImage, scale: f32) -> DynamicImage {
    let block = scale.round().max(1.0) as u32;
    if block <= 1 {
        return source.clone();
    }

    let (width, height) = (source.width(), source.height());
    let down_w = (width / block).max(1);
    let down_h = (height / block).max(1);

    source
        .resize_exact(down_w, down_h, FilterType::Nearest)
        .resize_exact(width, height, FilterType::Nearest)
}

/// Crystallize. A block-average mosaic; native radius 0-200 drives the
/// cell size.
fn crystallize(source: &DynamicImage, radius: f32) -> DynamicImage {
    let cell = (radius * 0.25).round().max(1.0) as u32;
    if cell <= 1 {
        return source.clone();
    }

    let input = source.to_rgba8();
    let (width, height) = input.dimensions();
    let mut output = RgbaImage::new(width, height);

    for cell_y in (0..height).step_by(cell as usize) {
        for cell_x in (0..width).step_by(cell as usize) {
            let cell_w = cell.min(width - cell_x);
            let cell_h = cell.min(height - cell_y);
            let count = cell_w * cell_h;

            // Average the cell, then flood it with that color.
            let mut sum = [0u32; 4];
            for y in cell_y..cell_y + cell_h {
                for x in cell_x..cell_x + cell_w {
                    let px = input.get_pixel(x, y).0;
                    for channel in 0..4 {
                        sum[channel] += px[channel] as u32;
                    }
                }
            }

            let average = Rgba([
                (sum[0] / count) as u8,
                (sum[1] / count) as u8,
                (sum[2] / count) as u8,
                (sum[3] / count) as u8,
            ]);
            for y in cell_y..cell_y + cell_h {
                for x in cell_x..cell_x + cell_w {
                    output.put_pixel(x, y, average);
                }
            }
        }
    }

    DynamicImage::ImageRgba8(output)
}

/// Sepia tone. The standard sepia color matrix, blended with the original
/// by intensity (0.0 = untouched, 1.0 = full sepia).
fn sepia_tone(source: &DynamicImage, intensity: f32) -> DynamicImage {
    let blend = intensity.clamp(0.0, 1.0);
    let mut output = source.to_rgba8();

    for pixel in output.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let (rf, gf, bf) = (r as f32, g as f32, b as f32);

        let sepia_r = (0.393 * rf + 0.769 * gf + 0.189 * bf).min(255.0);
        let sepia_g = (0.349 * rf + 0.686 * gf + 0.168 * bf).min(255.0);
        let sepia_b = (0.272 * rf + 0.534 * gf + 0.131 * bf).min(255.0);

        pixel.0 = [
            (rf + (sepia_r - rf) * blend) as u8,
            (gf + (sepia_g - gf) * blend) as u8,
            (bf + (sepia_b - bf) * blend) as u8,
            a,
        ];
    }

    DynamicImage::ImageRgba8(output)
}

/// Vignette. Radial darkening from the image center; native radius 0-200
/// sets the untouched inner region, intensity the strength at the corners.
fn vignette(source: &DynamicImage, intensity: f32, radius: f32) -> DynamicImage {
    let strength = intensity.clamp(0.0, 1.0);
    if strength <= 0.0 {
        return source.clone();
    }

    let mut output = source.to_rgba8();
    let (width, height) = output.dimensions();
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let half_diagonal = (center_x * center_x + center_y * center_y).sqrt();
    let inner = (radius / 200.0).clamp(0.0, 0.99);

    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let distance = (dx * dx + dy * dy).sqrt() / half_diagonal;

        let falloff = ((distance - inner) / (1.0 - inner)).clamp(0.0, 1.0);
        let factor = 1.0 - strength * falloff;

        pixel.0[0] = (pixel.0[0] as f32 * factor) as u8;
        pixel.0[1] = (pixel.0[1] as f32 * factor) as u8;
        pixel.0[2] = (pixel.0[2] as f32 * factor) as u8;
    }

    DynamicImage::ImageRgba8(output)
}
