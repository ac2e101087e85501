use std::{env, fs, path::PathBuf};

use crate::error::AppError;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct Config {
    pub synthesizer: SynthesizerConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SynthesizerConfig {
    pub model_path: PathBuf,
    pub model_config_path: PathBuf,
    pub vocoder_path: Option<PathBuf>,
    pub vocoder_config_path: Option<PathBuf>,
    #[serde(default)]
    pub use_cuda: bool,
}

impl Default for SynthesizerConfig {
    fn default() -> SynthesizerConfig {
        SynthesizerConfig {
            model_path: PathBuf::new(),
            model_config_path: PathBuf::new(),
            vocoder_path: None,
            vocoder_config_path: None,
            use_cuda: false,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct DashboardConfig {
    pub default_rows: usize,
    pub seed: u64,
}

impl Default for DashboardConfig {
    fn default() -> DashboardConfig {
        DashboardConfig {
            default_rows: 500,
            seed: 42,
        }
    }
}

impl Config {
    pub fn from_config() -> Result<Config, AppError> {
        let config_file = {
            if let Ok(path) = env::var("SHOWCASE_API_CONFIG_PATH") {
                PathBuf::from(path)
            } else {
                dirs::config_dir().expect("Failed to find config directory")
            }
        };
        let config_file = config_file.join("showcase_api_config.toml");

        let config = fs::read_to_string(&config_file)
            .map_err(|e| AppError::FileNotFound(config_file.clone(), e))?;

        let config: Config = toml::from_str(&config)
            .map_err(|e| AppError::ConfigDeserializationError(config_file, e))?;

        Ok(config)
    }
}
