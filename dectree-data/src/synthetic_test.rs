// dectree-data/src/synthetic_test.rs

use super::*;
use dectree_core::Dataset;

#[test]
fn test_generate_is_deterministic() {
    let config = SyntheticConfig::new(50).with_noise(0.05).with_seed(42);
    let a = generate(&config).unwrap();
    let b = generate(&config).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 50);
}

#[test]
fn test_generate_different_seeds_differ() {
    let a = generate(&SyntheticConfig::new(50).with_seed(1)).unwrap();
    let b = generate(&SyntheticConfig::new(50).with_seed(2)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_generate_noiseless_images_show_their_bar() {
    let dataset = generate(&SyntheticConfig::new(30).with_seed(7)).unwrap();
    for (image, label) in dataset.iter() {
        assert!(label < 10);
        for p in 0..NUM_PIXELS {
            let expected = if in_bar(label, p) { 255 } else { 0 };
            assert_eq!(image.pixel(p), expected, "pixel {} of label {}", p, label);
        }
    }
}

#[test]
fn test_in_bar_geometry() {
    // Label 0 occupies rows 2 and 3, columns 4..=23.
    assert!(in_bar(0, 2 * WIDTH + 4));
    assert!(in_bar(0, 3 * WIDTH + 23));
    assert!(!in_bar(0, 2 * WIDTH + 3));
    assert!(!in_bar(0, 4 * WIDTH + 4));
    assert!(in_bar(9, 20 * WIDTH + 10));
    assert!(!in_bar(9, 22 * WIDTH + 10));
}

#[test]
fn test_noise_is_clamped() {
    assert_eq!(SyntheticConfig::new(1).with_noise(3.0).noise, 1.0);
    assert_eq!(SyntheticConfig::new(1).with_noise(-1.0).noise, 0.0);
}
