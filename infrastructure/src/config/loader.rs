//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`MEDLEY_` prefix, `__` as separator)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./medley.toml` or `./.medley.toml`
    /// 4. XDG config: `~/.config/medley/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        for filename in &["medley.toml", ".medley.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("MEDLEY_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("medley").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medley_application::SelectionMode;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.orchestrator.policy, SelectionMode::Priority);
        assert_eq!(config.orchestrator.priority.len(), 3);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("medley"));
    }

    #[test]
    fn file_and_env_merge_over_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "medley.toml",
                r#"
                [orchestrator]
                timeout_secs = 10

                [providers.openai]
                model = "gpt-4o-mini"
                "#,
            )?;
            jail.set_env("MEDLEY_ORCHESTRATOR__POLICY", "judge");

            let config = ConfigLoader::load(None).expect("config should load");
            assert_eq!(config.orchestrator.timeout_secs, 10);
            assert_eq!(config.orchestrator.policy, SelectionMode::Judge);
            assert_eq!(config.providers.openai.model, "gpt-4o-mini");
            // Everything else stays default
            assert_eq!(config.providers.gemini.model, "gemini-1.5-flash");
            Ok(())
        });
    }
}
