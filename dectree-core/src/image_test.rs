// dectree-core/src/image_test.rs

use super::*;

#[test]
fn test_image_new_valid() {
    let img = Image::new(vec![7u8; NUM_PIXELS]).unwrap();
    assert_eq!(img.as_bytes().len(), NUM_PIXELS);
    assert_eq!(img.pixel(0), 7);
    assert_eq!(img.pixel(NUM_PIXELS - 1), 7);
}

#[test]
fn test_image_new_wrong_size() {
    match Image::new(vec![0u8; 10]) {
        Err(DecTreeError::ImageSizeMismatch { expected, actual }) => {
            assert_eq!(expected, NUM_PIXELS);
            assert_eq!(actual, 10);
        }
        other => panic!("Expected ImageSizeMismatch, got {:?}", other),
    }
}

#[test]
fn test_image_goes_left_cutoff() {
    let mut data = vec![0u8; NUM_PIXELS];
    data[1] = 127;
    data[2] = 128;
    data[3] = 255;
    let img = Image::new(data).unwrap();
    assert!(img.goes_left(0));
    assert!(img.goes_left(1));
    assert!(!img.goes_left(2));
    assert!(!img.goes_left(3));
}

#[test]
fn test_image_row_major_access() {
    let mut data = vec![0u8; NUM_PIXELS];
    data[WIDTH + 2] = 200; // row 1, column 2
    let img = Image::try_from(data).unwrap();
    assert_eq!(img.at(2, 1), 200);
    assert_eq!(img.at(1, 2), 0);
}

#[test]
fn test_image_blank() {
    let img = Image::blank();
    assert!(img.as_bytes().iter().all(|&p| p == 0));
}
