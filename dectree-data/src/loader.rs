use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use dectree_core::{DecTreeError, Image, ImageDataset, NUM_PIXELS};
use log::{debug, info};

/// Upper bound on the number of items reserved before any record is read,
/// so a corrupt header cannot force a huge allocation.
const MAX_PREALLOCATED_ITEMS: usize = 1 << 16;

/// Loads a dataset from the binary file at `path`.
///
/// # Errors
///
/// * `DecTreeError::DatasetOpen` if the file cannot be opened.
/// * Any error of [`read_dataset`].
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<ImageDataset, DecTreeError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DecTreeError::DatasetOpen {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let dataset = read_dataset(BufReader::new(file))?;
    info!("Loaded {} items from {}", dataset.labels().len(), path.display());
    Ok(dataset)
}

/// Reads a dataset in the binary format from `reader`.
///
/// Items are read in file order. Storage for the announced number of items
/// is reserved up front, capped at `MAX_PREALLOCATED_ITEMS`.
///
/// # Errors
///
/// * `DecTreeError::TruncatedDataset` if the header or a record is cut short.
/// * `DecTreeError::InvalidLabel` if a label byte is not in `0..10`.
/// * `DecTreeError::Io` for any other read failure.
pub fn read_dataset<R: Read>(mut reader: R) -> Result<ImageDataset, DecTreeError> {
    let mut header = [0u8; 4];
    read_exact_or_truncated(&mut reader, &mut header, 0, 0)?;
    let num_items = u32::from_ne_bytes(header) as usize;
    debug!("Dataset header announces {} items", num_items);

    let mut dataset = ImageDataset::with_capacity(num_items.min(MAX_PREALLOCATED_ITEMS));
    let mut label = [0u8; 1];
    for index in 0..num_items {
        read_exact_or_truncated(&mut reader, &mut label, num_items, index)?;
        let mut pixels = vec![0u8; NUM_PIXELS];
        read_exact_or_truncated(&mut reader, &mut pixels, num_items, index)?;
        dataset.push(Image::new(pixels)?, label[0])?;
    }
    Ok(dataset)
}

fn read_exact_or_truncated<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    expected: usize,
    read: usize,
) -> Result<(), DecTreeError> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => DecTreeError::TruncatedDataset { expected, read },
        _ => DecTreeError::from(e),
    })
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
