//! Runtime configuration for the demo.

use std::path::PathBuf;

/// Configuration for a demo run.
#[derive(Debug, Clone)]
pub struct Config {
    /// File holding one signed byte per line
    pub data_path: PathBuf,
    /// Value searched for in the list, queue and set demos
    pub search_value: i8,
    /// Appended to `data_path` to name the sorted output file
    pub sorted_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/bytes.txt"),
            search_value: 42,
            sorted_suffix: ".sorted".to_string(),
        }
    }
}

impl Config {
    /// Where the sorted records are written: `data_path` plus the suffix.
    pub fn sorted_output_path(&self) -> PathBuf {
        let mut path = self.data_path.clone().into_os_string();
        path.push(&self.sorted_suffix);
        PathBuf::from(path)
    }
}
