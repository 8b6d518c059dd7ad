use dectree_core::utils::testing::{dataset_from, image_lit};
use dectree_core::ImageDataset;

// Helper shared by the integration tests: a dataset where label `k` lights
// the row band `k` (pixels k*28 .. k*28+28), repeated `copies` times.
#[allow(dead_code)]
pub(crate) fn banded_dataset(copies: usize) -> ImageDataset {
    let mut items = Vec::new();
    for _ in 0..copies {
        for label in 0u8..10 {
            let start = label as usize * 28;
            let lit: Vec<usize> = (start..start + 28).collect();
            items.push((image_lit(&lit), label));
        }
    }
    dataset_from(items)
}
