#[derive(Debug, Clone)]
pub struct Config {
    pub max_file_size: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let max_file_size_mb = std::env::var("MAX_FILE_SIZE_MB")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(25);

        Self {
            max_file_size: max_file_size_mb * 1024 * 1024,
        }
    }
}
