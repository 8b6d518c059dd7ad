use crate::dataset::ImageDataset;
use crate::image::{Image, NUM_PIXELS};

/// Builds an image that is black everywhere except for the listed
/// `(pixel, intensity)` pairs.
///
/// Panics if a pixel index is out of range.
pub fn image_with(pixels: &[(usize, u8)]) -> Image {
    let mut image = Image::blank();
    let data = image.as_bytes_mut();
    for &(pixel, value) in pixels {
        assert!(pixel < NUM_PIXELS, "pixel {} out of range", pixel);
        data[pixel] = value;
    }
    image
}

/// Builds an image whose listed pixels are white (255), all others black.
pub fn image_lit(pixels: &[usize]) -> Image {
    let pairs: Vec<(usize, u8)> = pixels.iter().map(|&p| (p, 255)).collect();
    image_with(&pairs)
}

/// Builds a dataset from `(image, label)` pairs.
///
/// Panics if a label is outside `0..10`; meant for tests only.
pub fn dataset_from(items: Vec<(Image, u8)>) -> ImageDataset {
    let (images, labels): (Vec<Image>, Vec<u8>) = items.into_iter().unzip();
    ImageDataset::new(images, labels).expect("Failed to create test dataset")
}
