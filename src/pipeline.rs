use std::path::{Path, PathBuf};

use crate::filter::{self, convolve, normalize, FilterDef, FilterKind};
use crate::img::RasterImage;
use crate::my_err::MyError;

pub struct FilterOutput {
    pub filter: &'static FilterDef,
    pub image: RasterImage,
    pub path: PathBuf,
}

/// Loads the source image, runs the selected filter (or, for `All`, every
/// concrete filter separately) and saves one PNG per result next to the
/// source file. A failed load stops the whole run; a failed save is logged
/// and the remaining results are still saved and returned for display
pub fn run(source_path: &Path, selection: &'static FilterDef, amount: usize) -> Result<Vec<FilterOutput>, MyError> {
    let source = RasterImage::load(source_path.to_path_buf())?;

    let outputs: Vec<FilterOutput> = apply_selection(&source, selection, amount)
        .into_iter()
        .map(|(filter, image)| FilterOutput {
            filter,
            image,
            path: output_path(source_path, filter),
        })
        .collect();

    for output in outputs.iter() {
        if let Err(err) = output.image.save_png(&output.path) {
            log::error!("could not save '{}': {}", output.path.display(), err.get_message());
        }
    }

    Ok(outputs)
}

/// Expands the `All` sentinel into one pass per concrete filter,
/// in registry order
pub fn apply_selection(source: &RasterImage, selection: &'static FilterDef, amount: usize)
    -> Vec<(&'static FilterDef, RasterImage)>
{
    match selection.kind() {
        FilterKind::All => {
            filter::concrete_filters()
                .map(|f| (f, apply_repeated(source, f, amount)))
                .collect()
        },
        _ => vec![(selection, apply_repeated(source, selection, amount))],
    }
}

/// One repetition is a filter pass followed by a normalization pass; each
/// repetition consumes the previous one's normalized output
pub fn apply_repeated(source: &RasterImage, filter: &FilterDef, amount: usize) -> RasterImage {
    assert!(filter.kind() != FilterKind::All);

    let amount = if amount < 1 { 1 } else { amount };

    let mut current = source.clone();

    for _ in 0..amount {
        let filtered = convolve::filtered(&current, filter);
        current = normalize::normalized(&filtered);
    }

    current
}

/// `<source stem>_<filter id>.png`, in the directory of the source file
pub fn output_path(source_path: &Path, filter: &FilterDef) -> PathBuf {
    let stem = source_path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    source_path.with_file_name(format!("{}_{}.png", stem, filter.id()))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{apply_repeated, apply_selection, output_path};
    use crate::filter::{self, convolve, normalize, FilterKind};
    use crate::img::RasterImage;

    fn gradient_img() -> RasterImage {
        let samples: Vec<f32> = (0..16).map(|i| i as f32 / 15.0).collect();
        RasterImage::from_samples(samples, 4, 4)
    }

    #[test]
    fn all_fans_out_to_every_concrete_filter() {
        let img = gradient_img();
        let all = filter::get_filter_by_kind(FilterKind::All);

        let results = apply_selection(&img, all, 1);

        let ids: Vec<&str> = results.iter().map(|(f, _)| f.id()).collect();
        assert_eq!(ids, vec!["hor", "ver", "diapos", "dianeg"]);

        for (_, image) in results.iter() {
            assert_eq!(image.w(), 4);
            assert_eq!(image.h(), 4);
        }
    }

    #[test]
    fn single_filter_yields_single_result() {
        let img = gradient_img();
        let hor = filter::get_filter_by_kind(FilterKind::Horizontal);

        let results = apply_selection(&img, hor, 1);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0.id(), "hor");
    }

    #[test]
    fn repetitions_chain_filter_and_normalize() {
        let img = gradient_img();
        let ver = filter::get_filter_by_kind(FilterKind::Vertical);

        let by_pipeline = apply_repeated(&img, ver, 3);

        let mut by_hand = img.clone();
        for _ in 0..3 {
            by_hand = normalize::normalized(&convolve::filtered(&by_hand, ver));
        }

        assert_eq!(by_pipeline.samples(), by_hand.samples());

        // the result of the last pass is normalized again, so it is
        // still bounded even though its input already was
        let min = by_pipeline.samples().iter().cloned().fold(f32::INFINITY, f32::min);
        let max = by_pipeline.samples().iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(min, 0.0);
        assert_eq!(max, 1.0);
    }

    #[test]
    fn amount_is_at_least_one() {
        let img = gradient_img();
        let hor = filter::get_filter_by_kind(FilterKind::Horizontal);

        let zero = apply_repeated(&img, hor, 0);
        let one = apply_repeated(&img, hor, 1);

        assert_eq!(zero.samples(), one.samples());
    }

    #[test]
    fn none_selection_passes_through_and_normalizes() {
        let img = gradient_img();
        let none = filter::get_filter_by_kind(FilterKind::None);

        let results = apply_selection(&img, none, 1);

        assert_eq!(results.len(), 1);
        // the gradient already spans [0, 1], so normalization keeps it
        assert_eq!(results[0].1.samples(), img.samples());
    }

    #[test]
    fn output_file_name_carries_filter_id() {
        let hor = filter::get_filter_by_kind(FilterKind::Horizontal);
        let dianeg = filter::get_filter_by_kind(FilterKind::DiagonalNegative);

        assert_eq!(
            output_path(Path::new("/tmp/photo.png"), hor),
            Path::new("/tmp/photo_hor.png"));
        assert_eq!(
            output_path(Path::new("/tmp/photo.with.dots.jpeg"), dianeg),
            Path::new("/tmp/photo.with.dots_dianeg.png"));
        assert_eq!(
            output_path(Path::new("scan.bmp"), hor),
            Path::new("scan_hor.png"));
    }
}
