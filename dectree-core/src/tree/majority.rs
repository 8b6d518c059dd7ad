use crate::dataset::Dataset;
use crate::error::DecTreeError;
use crate::image::NUM_LABELS;

/// Returns the most frequent label in `subset` together with its count.
///
/// Ties go to the smallest label.
///
/// # Errors
///
/// Returns `DecTreeError::EmptySubset` if `subset` is empty.
pub fn most_frequent<D: Dataset + ?Sized>(
    dataset: &D,
    subset: &[usize],
) -> Result<(u8, usize), DecTreeError> {
    if subset.is_empty() {
        return Err(DecTreeError::EmptySubset {
            operation: "most_frequent".to_string(),
        });
    }

    let mut freq = [0usize; NUM_LABELS];
    for &idx in subset {
        freq[dataset.label(idx) as usize] += 1;
    }

    let mut best_label = 0;
    let mut best_count = 0;
    for (label, &count) in freq.iter().enumerate() {
        if count > best_count {
            best_label = label;
            best_count = count;
        }
    }
    Ok((best_label as u8, best_count))
}

#[cfg(test)]
#[path = "majority_test.rs"]
mod tests;
