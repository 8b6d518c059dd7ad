//! Core of DecTree: a Gini decision tree classifier over 28x28 grayscale
//! images with labels 0 to 9.

pub mod dataset;
pub mod error;
pub mod image;
pub mod tree;
pub mod utils;

pub use dataset::{Dataset, ImageDataset};
pub use error::DecTreeError;
pub use image::{Image, NUM_LABELS, NUM_PIXELS, PIXEL_THRESHOLD, WIDTH};
pub use tree::{build_dec_tree, DecisionTree, TreeConfig};
