use super::{FilterDef, KERNEL_SIZE};
use crate::img::RasterImage;
use crate::pixel_pos::PixelPos;

/// Slides the filter window over the image and writes the weighted average
/// of every window into a new image of the same size.
///
/// The window is anchored at its top left cell, never centered: for the
/// output sample at (row, col) it covers (row..row+3, col..col+3). Window
/// cells past the right or bottom border are dropped from the sum, and the
/// divisor is the number of cells actually used, so border samples are
/// averaged over 4..9 terms
pub fn filtered(image: &RasterImage, filter: &FilterDef) -> RasterImage {
    // `None` passes the image through; `All` is expanded into concrete
    // filters by the pipeline and must not reach the weighted path
    if !filter.has_weights() {
        return image.clone();
    }

    let w = image.w();
    let h = image.h();

    let mut res = RasterImage::empty_size_of(image);

    for row in 0..h {
        for col in 0..w {
            let mut sum = 0_f32;
            let mut count = 0_f32;

            for dy in 0..KERNEL_SIZE {
                if row + dy >= h { continue; }

                for dx in 0..KERNEL_SIZE {
                    if col + dx >= w { continue; }

                    sum += image.sample_at(PixelPos::new(row + dy, col + dx)) * filter.weight(dx, dy);
                    count += 1_f32;
                }
            }

            res.set_sample(PixelPos::new(row, col), sum / count);
        }
    }

    res
}

#[cfg(test)]
mod tests {
    use super::filtered;
    use crate::filter::{self, FilterKind};
    use crate::img::RasterImage;
    use crate::pixel_pos::PixelPos;

    #[test]
    fn none_is_identity() {
        let img = RasterImage::from_samples(vec![
            0.1, 0.2,
            0.3, 0.4,
        ], 2, 2);

        let res = filtered(&img, filter::get_filter_by_kind(FilterKind::None));

        assert_eq!(res.w(), 2);
        assert_eq!(res.h(), 2);
        assert_eq!(res.samples(), img.samples());
    }

    #[test]
    fn single_pixel_gets_origin_weight() {
        let img = RasterImage::from_samples(vec![0.7], 1, 1);

        // only the window cell at the kernel origin is in bounds, count is 1
        let res = filtered(&img, filter::get_filter_by_kind(FilterKind::DiagonalNegative));
        assert_eq!(res.sample_at(PixelPos::new(0, 0)), 0.7);

        let res = filtered(&img, filter::get_filter_by_kind(FilterKind::Horizontal));
        assert_eq!(res.sample_at(PixelPos::new(0, 0)), 0.0);
    }

    #[test]
    fn output_keeps_input_dimensions() {
        let img = RasterImage::empty_with_size(5, 3);
        let res = filtered(&img, filter::get_filter_by_kind(FilterKind::Vertical));

        assert_eq!(res.w(), 5);
        assert_eq!(res.h(), 3);
    }

    #[test]
    fn horizontal_on_uniform_gray() {
        let img = RasterImage::from_samples(vec![0.5_f32; 16], 4, 4);

        let res = filtered(&img, filter::get_filter_by_kind(FilterKind::Horizontal));

        // full 3x3 window, middle row carries 3 ones
        assert_eq!(res.sample_at(PixelPos::new(0, 0)), 1.5 / 9.0);
        assert_eq!(res.sample_at(PixelPos::new(1, 1)), 1.5 / 9.0);

        // right border: the window is 1 column wide, 3 rows tall
        assert_eq!(res.sample_at(PixelPos::new(0, 3)), 0.5 / 3.0);

        // 2x2 window, middle row carries 2 ones
        assert_eq!(res.sample_at(PixelPos::new(2, 2)), 1.0 / 4.0);

        // bottom row: the window has no middle row left
        for col in 0..4 {
            assert_eq!(res.sample_at(PixelPos::new(3, col)), 0.0);
        }
    }

    #[test]
    fn vertical_line_detector_response() {
        // a vertical white line on black: the detector sums three ones
        // over a 9-cell window, windows past the line catch nothing
        let img = RasterImage::from_samples(vec![
            0.0, 1.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
        ], 4, 4);

        let res = filtered(&img, filter::get_filter_by_kind(FilterKind::Vertical));

        // window over (0..3, 0..3) sees the line under the kernel column
        assert_eq!(res.sample_at(PixelPos::new(0, 0)), 3.0 / 9.0);
        // window anchored on the line itself has the line at x=0, weights at x=1
        assert_eq!(res.sample_at(PixelPos::new(0, 1)), 0.0);
    }
}
