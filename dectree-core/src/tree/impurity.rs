use crate::dataset::Dataset;
use crate::image::NUM_LABELS;

/// Gini impurity `Σ p(1 - p)` of a label histogram holding `total` items.
///
/// Returns NaN when `total == 0`.
fn group_gini(freq: &[usize; NUM_LABELS], total: usize) -> f64 {
    if total == 0 {
        return f64::NAN;
    }
    let total = total as f64;
    freq.iter()
        .map(|&count| {
            let p = count as f64 / total;
            p * (1.0 - p)
        })
        .sum()
}

/// Weighted Gini impurity of splitting `subset` at `pixel`.
///
/// Group A holds the items whose intensity at `pixel` is below
/// `PIXEL_THRESHOLD`, group B the rest. The result is
/// `(gini(A) * |A| + gini(B) * |B|) / |subset|`.
///
/// If either group is empty the split is unusable and the result is NaN.
/// This is an expected outcome, callers filter it out.
pub fn gini_impurity<D: Dataset + ?Sized>(dataset: &D, subset: &[usize], pixel: usize) -> f64 {
    let mut a_freq = [0usize; NUM_LABELS];
    let mut b_freq = [0usize; NUM_LABELS];
    let mut a_count = 0;
    let mut b_count = 0;

    for &idx in subset {
        let label = dataset.label(idx) as usize;
        if dataset.image(idx).goes_left(pixel) {
            a_freq[label] += 1;
            a_count += 1;
        } else {
            b_freq[label] += 1;
            b_count += 1;
        }
    }

    if a_count == 0 || b_count == 0 {
        return f64::NAN;
    }

    let a_gini = group_gini(&a_freq, a_count);
    let b_gini = group_gini(&b_freq, b_count);
    (a_gini * a_count as f64 + b_gini * b_count as f64) / subset.len() as f64
}

#[cfg(test)]
#[path = "impurity_test.rs"]
mod tests;
