// dectree-core/src/tree/majority_test.rs

use super::*;
use crate::image::Image;
use crate::utils::testing::dataset_from;

fn labeled(labels: &[u8]) -> crate::dataset::ImageDataset {
    dataset_from(labels.iter().map(|&l| (Image::blank(), l)).collect())
}

#[test]
fn test_most_frequent_basic() {
    let dataset = labeled(&[4, 4, 1, 4, 9]);
    assert_eq!(most_frequent(&dataset, &[0, 1, 2, 3, 4]).unwrap(), (4, 3));
}

#[test]
fn test_most_frequent_tie_picks_smallest_label() {
    let dataset = labeled(&[7, 3, 7, 3, 1]);
    assert_eq!(most_frequent(&dataset, &[0, 1, 2, 3, 4]).unwrap(), (3, 2));
}

#[test]
fn test_most_frequent_only_counts_subset() {
    let dataset = labeled(&[2, 2, 2, 8, 8]);
    assert_eq!(most_frequent(&dataset, &[3, 4, 0]).unwrap(), (8, 2));
}

#[test]
fn test_most_frequent_single_item() {
    let dataset = labeled(&[9]);
    assert_eq!(most_frequent(&dataset, &[0]).unwrap(), (9, 1));
}

#[test]
fn test_most_frequent_empty_subset_errors() {
    let dataset = labeled(&[1, 2]);
    match most_frequent(&dataset, &[]) {
        Err(DecTreeError::EmptySubset { operation }) => assert_eq!(operation, "most_frequent"),
        other => panic!("Expected EmptySubset error, got {:?}", other),
    }
}

/// A dataset that breaks the `Dataset::label` contract.
struct OutOfRangeLabels(Image);

impl crate::dataset::Dataset for OutOfRangeLabels {
    fn len(&self) -> usize {
        1
    }

    fn image(&self, _index: usize) -> &Image {
        &self.0
    }

    fn label(&self, _index: usize) -> u8 {
        12
    }
}

#[test]
#[should_panic]
fn test_most_frequent_panics_on_label_outside_range() {
    let _ = most_frequent(&OutOfRangeLabels(Image::blank()), &[0]);
}
