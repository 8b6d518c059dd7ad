use super::impurity::gini_impurity;
use crate::dataset::Dataset;
use crate::image::NUM_PIXELS;

/// Finds the pixel whose split of `subset` has the lowest Gini impurity.
///
/// Non-finite scores (a split leaving one side empty) are never selected.
/// On ties the smallest pixel index wins, since only a strictly smaller
/// score replaces the current best.
///
/// Returns `None` when no pixel yields a finite score, which happens when
/// every image of the subset falls on the same side of every pixel.
pub fn find_best_split<D: Dataset + ?Sized>(dataset: &D, subset: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for pixel in 0..NUM_PIXELS {
        let score = gini_impurity(dataset, subset, pixel);
        if !score.is_finite() {
            continue;
        }
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((pixel, score)),
        }
    }
    best.map(|(pixel, _)| pixel)
}

#[cfg(test)]
#[path = "split_test.rs"]
mod tests;
