// dectree-data/src/writer_test.rs

use super::*;
use crate::{HEADER_BYTES, RECORD_BYTES};
use dectree_core::utils::testing::{dataset_from, image_with};

#[test]
fn test_write_dataset_layout() {
    let dataset = dataset_from(vec![
        (image_with(&[(0, 17)]), 5),
        (image_with(&[(783, 200)]), 8),
    ]);
    let mut bytes = Vec::new();
    write_dataset(&mut bytes, &dataset).unwrap();

    assert_eq!(bytes.len(), HEADER_BYTES + 2 * RECORD_BYTES);
    assert_eq!(&bytes[..4], &2u32.to_ne_bytes());
    assert_eq!(bytes[4], 5);
    assert_eq!(bytes[5], 17);
    assert_eq!(bytes[4 + RECORD_BYTES], 8);
    assert_eq!(bytes[4 + 2 * RECORD_BYTES - 1], 200);
}

#[test]
fn test_write_empty_dataset() {
    let mut bytes = Vec::new();
    write_dataset(&mut bytes, &ImageDataset::default()).unwrap();
    assert_eq!(bytes, 0u32.to_ne_bytes().to_vec());
}
