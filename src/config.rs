use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level import configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ImportConfig {
    /// Settings for building recipe drafts
    #[serde(default)]
    pub draft: DraftConfig,
    /// Settings for ingredient catalog resolution
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Settings used when building a [`RecipeDraft`](crate::RecipeDraft)
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DraftConfig {
    /// Maximum number of characters taken from the instructions when no
    /// description is supplied
    #[serde(default = "default_description_excerpt_chars")]
    pub description_excerpt_chars: usize,
    /// Appended to the generated description excerpt
    #[serde(default = "default_description_suffix")]
    pub description_suffix: String,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            description_excerpt_chars: default_description_excerpt_chars(),
            description_suffix: default_description_suffix(),
        }
    }
}

/// Settings for matching parsed ingredients against the catalog
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Category given to ingredients created during an import
    #[serde(default = "default_category")]
    pub default_category: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
        }
    }
}

// Default value functions
fn default_description_excerpt_chars() -> usize {
    200
}

fn default_description_suffix() -> String {
    "...".to_string()
}

fn default_category() -> String {
    "other".to_string()
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FORAGE__ prefix
    /// 2. forage.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FORAGE__DRAFT__DESCRIPTION_EXCERPT_CHARS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ImportConfig::load`] for the source priority.
pub fn load_config() -> Result<ImportConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("forage").required(false))
        // Use double underscore for nested: FORAGE__CATALOG__DEFAULT_CATEGORY
        .add_source(
            Environment::with_prefix("FORAGE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        assert_eq!(default_description_excerpt_chars(), 200);
        assert_eq!(default_description_suffix(), "...");
        assert_eq!(default_category(), "other");
    }

    #[test]
    fn test_import_config_default() {
        let config = ImportConfig::default();
        assert_eq!(config.draft, DraftConfig::default());
        assert_eq!(config.catalog.default_category, "other");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ImportConfig = Config::builder()
            .add_source(File::from_str(
                "[draft]\ndescription_excerpt_chars = 80\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.draft.description_excerpt_chars, 80);
        assert_eq!(config.draft.description_suffix, "...");
        assert_eq!(config.catalog.default_category, "other");
    }

    #[test]
    fn test_empty_sources_deserialize_to_defaults() {
        let config: ImportConfig = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.draft, DraftConfig::default());
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_load_config_without_file() {
        // Loading without a forage.toml falls back to defaults
        let result = load_config();
        assert!(result.is_ok());
    }
}
