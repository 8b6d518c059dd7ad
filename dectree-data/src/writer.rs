use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use dectree_core::{DecTreeError, ImageDataset};
use log::info;

/// Writes `dataset` in the binary format to `writer`.
///
/// # Errors
///
/// Returns `DecTreeError::Io` if writing fails, or
/// `DecTreeError::TooManyItems` if the 4-byte header cannot hold the count.
pub fn write_dataset<W: Write>(mut writer: W, dataset: &ImageDataset) -> Result<(), DecTreeError> {
    let len = dataset.labels().len();
    let num_items = u32::try_from(len).map_err(|_| DecTreeError::TooManyItems(len))?;
    writer.write_all(&num_items.to_ne_bytes())?;
    for (image, label) in dataset.iter() {
        writer.write_all(&[label])?;
        writer.write_all(image.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Saves `dataset` to the file at `path`, replacing any existing file.
pub fn save_dataset<P: AsRef<Path>>(path: P, dataset: &ImageDataset) -> Result<(), DecTreeError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_dataset(BufWriter::new(file), dataset)?;
    info!("Saved {} items to {}", dataset.labels().len(), path.display());
    Ok(())
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod tests;
