//! Builds a decision tree from a training file and reports its accuracy on a
//! test file.
//!
//! ```text
//! cargo run -p dectree-data --example classifier -- <training.bin> <testing.bin> [threshold]
//! ```
//!
//! Set `RUST_LOG=debug` to trace every split.

use std::process;

use dectree_core::tree::{build_dec_tree, TreeConfig};
use dectree_core::DecTreeError;
use dectree_data::load_dataset;
use log::{error, info};

fn run(train_path: &str, test_path: &str, threshold: Option<f64>) -> Result<f64, DecTreeError> {
    let mut config = TreeConfig::default();
    if let Some(ratio) = threshold {
        config = config.with_threshold_ratio(ratio);
    }
    config.validate()?;

    let training = load_dataset(train_path)?;
    let testing = load_dataset(test_path)?;

    let tree = build_dec_tree(&training, &config)?;
    let eval = tree.evaluate(&testing);
    info!("{} of {} test images classified correctly", eval.correct(), eval.total());
    Ok(eval.accuracy())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <training file> <testing file> [threshold ratio]", args[0]);
        process::exit(1);
    }
    let threshold = match args.get(3).map(|s| s.parse::<f64>()) {
        None => None,
        Some(Ok(ratio)) => Some(ratio),
        Some(Err(e)) => {
            eprintln!("Invalid threshold ratio '{}': {}", args[3], e);
            process::exit(1);
        }
    };

    match run(&args[1], &args[2], threshold) {
        Ok(accuracy) => println!("Accuracy: {:.2}%", accuracy * 100.0),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
