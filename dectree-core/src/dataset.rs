use crate::error::DecTreeError;
use crate::image::{Image, NUM_LABELS};

/// Read access to a labeled collection of images.
///
/// The impurity evaluator, split selector, majority voter and tree builder
/// all work through this trait, addressing items by their position.
pub trait Dataset {
    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Returns the image at `index`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    fn image(&self, index: usize) -> &Image;

    /// Returns the label (0..10) at `index`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds. Implementations must only
    /// return labels below `NUM_LABELS`: the impurity evaluator and the
    /// majority voter index per-label counters by this value and panic
    /// otherwise.
    fn label(&self, index: usize) -> u8;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An in-memory dataset: `images[i]` is labeled `labels[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageDataset {
    images: Vec<Image>,
    labels: Vec<u8>,
}

impl ImageDataset {
    /// Creates a dataset from parallel image and label vectors.
    ///
    /// # Errors
    ///
    /// * `DecTreeError::LengthMismatch` if the vectors differ in length.
    /// * `DecTreeError::InvalidLabel` if any label is outside `0..NUM_LABELS`.
    pub fn new(images: Vec<Image>, labels: Vec<u8>) -> Result<Self, DecTreeError> {
        if images.len() != labels.len() {
            return Err(DecTreeError::LengthMismatch {
                images: images.len(),
                labels: labels.len(),
            });
        }
        if let Some(index) = labels.iter().position(|&l| l as usize >= NUM_LABELS) {
            return Err(DecTreeError::InvalidLabel {
                index,
                label: labels[index],
            });
        }
        Ok(Self { images, labels })
    }

    /// Creates an empty dataset with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            images: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    /// Appends one labeled image.
    ///
    /// # Errors
    ///
    /// Returns `DecTreeError::InvalidLabel` if `label >= NUM_LABELS`.
    pub fn push(&mut self, image: Image, label: u8) -> Result<(), DecTreeError> {
        if label as usize >= NUM_LABELS {
            return Err(DecTreeError::InvalidLabel {
                index: self.labels.len(),
                label,
            });
        }
        self.images.push(image);
        self.labels.push(label);
        Ok(())
    }

    /// Returns the `(image, label)` pair at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DecTreeError::IndexOutOfBounds` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Result<(&Image, u8), DecTreeError> {
        match (self.images.get(index), self.labels.get(index)) {
            (Some(image), Some(&label)) => Ok((image, label)),
            _ => Err(DecTreeError::IndexOutOfBounds {
                index,
                len: self.images.len(),
            }),
        }
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// Iterates over `(image, label)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&Image, u8)> + '_ {
        self.images.iter().zip(self.labels.iter().copied())
    }
}

impl Dataset for ImageDataset {
    fn len(&self) -> usize {
        self.images.len()
    }

    fn image(&self, index: usize) -> &Image {
        &self.images[index]
    }

    fn label(&self, index: usize) -> u8 {
        self.labels[index]
    }
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
