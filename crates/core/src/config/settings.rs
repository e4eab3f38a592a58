use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::validation::{ConfigValidator, DefaultConfigValidator};

/// File names searched for, in order, in each directory
pub const CONFIG_FILE_NAMES: [&str; 2] = [".kgen.json", "kgen.json"];

/// Well-known symbols the generators match against and emit.
///
/// Every field has a default reproducing the published library, so an empty
/// JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct GeneratorConfig {
    /// Marker annotation placed on container block classes
    pub annotation: String,
    /// Package receiving the runtime library and aggregate initializer
    pub lib_package: String,
    /// Name of the aggregate initializer object
    pub initializer_name: String,

    pub settings_type: String,
    pub identifier_type: String,
    pub world_type: String,
    pub position_type: String,
    pub boolean_type: String,

    pub gui_type: String,
    pub container_gui_type: String,
    pub ui_state_type: String,
    pub screen_handler_interface: String,

    /// Channel the storage entity sends state updates on, `namespace:path`
    pub state_channel: String,
    /// Block whose settings seed the default block instance
    pub block_template: String,
    /// Item group for auto-registered block items
    pub item_group: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            annotation: "nipah.minecraft.ui.annotations.BlockAsContainer".to_string(),
            lib_package: "nipah.minecraft.ui.lib".to_string(),
            initializer_name: "NipahUIModInitializer".to_string(),
            settings_type: "net.fabricmc.fabric.api.object.builder.v1.block.FabricBlockSettings"
                .to_string(),
            identifier_type: "net.minecraft.util.Identifier".to_string(),
            world_type: "net.minecraft.world.World".to_string(),
            position_type: "net.minecraft.util.math.BlockPos".to_string(),
            boolean_type: "kotlin.Boolean".to_string(),
            gui_type: "nipah.minecraft.ui.lib.GUI".to_string(),
            container_gui_type: "nipah.minecraft.ui.lib.ContainerGUI".to_string(),
            ui_state_type: "nipah.minecraft.ui.lib.UIState".to_string(),
            screen_handler_interface: "nipah.minecraft.ui.lib.NipahUIScreenHandler".to_string(),
            state_channel: "nipah-minecraft-ui:state".to_string(),
            block_template: "net.minecraft.block.Blocks.BREWING_STAND".to_string(),
            item_group: "ItemGroup.BREWING".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        DefaultConfigValidator::new().validate(self)
    }

    /// Walk up from `start_path` looking for a config file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config file above `start_path`, or the defaults
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("Loading generator config from {:?}", path);
                Self::load_from_file(&path)
            }
            None => {
                tracing::debug!("No config file found above {:?}, using defaults", start_path);
                Ok(Self::default())
            }
        }
    }

    /// Simple name of a configured qualified name
    pub fn simple_name(qualified_name: &str) -> &str {
        qualified_name.rsplit('.').next().unwrap_or(qualified_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_json_yields_defaults() {
        let config: GeneratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"lib_package": "my.ui.lib", "item_group": "ItemGroup.MISC"}"#)
                .unwrap();
        assert_eq!(config.lib_package, "my.ui.lib");
        assert_eq!(config.item_group, "ItemGroup.MISC");
        assert_eq!(config.initializer_name, "NipahUIModInitializer");
    }

    #[test]
    fn test_save_and_discover() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src").join("main");
        std::fs::create_dir_all(&nested).unwrap();

        let config = GeneratorConfig {
            initializer_name: "MyModInit".to_string(),
            ..GeneratorConfig::default()
        };
        config.save_to_file(&temp_dir.path().join(".kgen.json")).unwrap();

        let found = GeneratorConfig::find_config_file(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join(".kgen.json"));
        assert_eq!(GeneratorConfig::discover(&nested).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kgen.json");
        std::fs::write(&path, r#"{"lib_package": "not a package"}"#).unwrap();

        assert!(matches!(
            GeneratorConfig::load_from_file(&path),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(GeneratorConfig::simple_name("nipah.minecraft.ui.lib.GUI"), "GUI");
        assert_eq!(GeneratorConfig::simple_name("GUI"), "GUI");
    }
}
