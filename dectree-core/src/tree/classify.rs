use log::debug;

use super::{DTNode, DecisionTree};
use crate::dataset::Dataset;
use crate::image::{Image, NUM_LABELS};

impl DecisionTree {
    /// Predicts the label of `image`.
    ///
    /// Walks from the root: a node without children yields its label,
    /// otherwise the walk continues left when the split pixel is below
    /// `PIXEL_THRESHOLD` and right otherwise. If the chosen side has no
    /// child the majority label of the current node is returned.
    pub fn classify(&self, image: &Image) -> u8 {
        let mut id = self.root();
        loop {
            match *self.node(id) {
                DTNode::Leaf { label } => return label,
                DTNode::Split {
                    pixel,
                    majority,
                    left,
                    right,
                } => {
                    let next = if image.goes_left(pixel) { left } else { right };
                    match next {
                        Some(child) => id = child,
                        None => return majority,
                    }
                }
            }
        }
    }

    /// Predicts a label for every image of `dataset`, in dataset order.
    pub fn predict<D: Dataset + ?Sized>(&self, dataset: &D) -> Vec<u8> {
        (0..dataset.len())
            .map(|i| self.classify(dataset.image(i)))
            .collect()
    }

    /// Classifies every item of `dataset` and compares against its label.
    pub fn evaluate<D: Dataset + ?Sized>(&self, dataset: &D) -> Evaluation {
        let mut eval = Evaluation::default();
        for i in 0..dataset.len() {
            let predicted = self.classify(dataset.image(i));
            eval.record(dataset.label(i), predicted);
        }
        debug!(
            "Evaluated {} items: {} correct",
            eval.total(),
            eval.correct()
        );
        eval
    }
}

/// Outcome of classifying a labeled dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// `confusion[actual][predicted]` counts.
    confusion: [[usize; NUM_LABELS]; NUM_LABELS],
}

impl Evaluation {
    fn record(&mut self, actual: u8, predicted: u8) {
        self.confusion[actual as usize][predicted as usize] += 1;
    }

    pub fn total(&self) -> usize {
        self.confusion.iter().flatten().sum()
    }

    pub fn correct(&self) -> usize {
        (0..NUM_LABELS).map(|l| self.confusion[l][l]).sum()
    }

    /// Fraction of correctly classified items; 0.0 when nothing was evaluated.
    pub fn accuracy(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.correct() as f64 / total as f64,
        }
    }

    pub fn confusion(&self) -> &[[usize; NUM_LABELS]; NUM_LABELS] {
        &self.confusion
    }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
