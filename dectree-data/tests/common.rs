use std::path::PathBuf;

// Unique temporary file path per test and process.
#[allow(dead_code)]
pub(crate) fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dectree_{}_{}.bin", name, std::process::id()))
}
