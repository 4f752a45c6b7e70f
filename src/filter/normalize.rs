use crate::img::RasterImage;

/// Rescales the samples linearly so that the darkest becomes 0 and the
/// brightest becomes 1. A uniform image has no range to stretch and
/// becomes all zeros instead of dividing by zero
pub fn normalized(image: &RasterImage) -> RasterImage {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;

    for s in image.samples().iter() {
        if *s < min { min = *s; }
        if *s > max { max = *s; }
    }

    if max == min {
        return RasterImage::empty_size_of(image);
    }

    let range = max - min;
    let samples: Vec<f32> = image.samples().iter()
        .map(|s| (*s - min) / range)
        .collect();

    RasterImage::from_samples(samples, image.w(), image.h())
}
