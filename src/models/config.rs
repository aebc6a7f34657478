//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

fn default_page_size() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_view_page_size() -> usize {
    50
}

fn default_seed_reference_data() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings for one engine session.
pub struct EngineConfig {
    /// Page size used by plain listings when none is requested.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Page size the client list screen fetches before filtering and sorting.
    #[serde(default = "default_view_page_size")]
    pub view_page_size: usize,
    /// Artificial delay applied to every data source call.
    #[serde(default)]
    pub simulated_latency_ms: u64,
    /// Start the session with the six reference clients.
    #[serde(default = "default_seed_reference_data")]
    pub seed_reference_data: bool,
}

impl EngineConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            view_page_size: default_view_page_size(),
            simulated_latency_ms: 0,
            seed_reference_data: default_seed_reference_data(),
        }
    }
}

#[cfg(feature = "cli")]
impl EngineConfig {
    /// Layers `{dir}/default.yaml`, `{dir}/{app_env}.yaml` and `APP_*`
    /// environment variables. Both files are optional.
    pub fn load(dir: &std::path::Path, app_env: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(dir.join("default.yaml")).required(false))
            .add_source(config::File::from(dir.join(format!("{app_env}.yaml"))).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load(dir.path(), "test").unwrap();
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.view_page_size, 50);
        assert!(config.seed_reference_data);
        assert_eq!(config.simulated_latency(), Duration::ZERO);
    }

    #[test]
    fn environment_file_overrides_default_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.yaml"),
            "default_page_size: 10\nsimulated_latency_ms: 1000\n",
        )
        .unwrap();
        fs::write(dir.path().join("demo.yaml"), "seed_reference_data: false\n").unwrap();

        let config = EngineConfig::load(dir.path(), "demo").unwrap();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.simulated_latency(), Duration::from_secs(1));
        assert!(!config.seed_reference_data);
    }
}
