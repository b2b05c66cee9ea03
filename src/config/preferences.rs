use crate::error::CatalogError;
use crate::lookup::{check, Category};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = ".dc-aws-metadata";
const CONFIG_FILE: &str = "config.json";

/// Defaults remembered between runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Default AWS region for new environments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_region: Option<String>,

    /// Default EC2 instance type for product nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_instance_type: Option<String>,

    /// Default RDS instance class for the product database
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_db_instance_type: Option<String>,

    /// When the file was last written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Preferences {
    /// Get the preferences file path
    pub fn config_file_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load preferences from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load preferences from a file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let prefs: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(prefs)
    }

    /// Save preferences to the default location
    pub fn save(&mut self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save preferences to a file, creating its directory if needed
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        self.updated_at = Some(Utc::now());
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Set default region, checked against the catalog
    pub fn set_default_region(&mut self, region: &str) -> Result<(), CatalogError> {
        self.default_region = Some(check(Category::Region, region)?.to_string());
        Ok(())
    }

    /// Set default instance type, checked against the catalog
    pub fn set_default_instance_type(&mut self, instance_type: &str) -> Result<(), CatalogError> {
        self.default_instance_type = Some(check(Category::Instance, instance_type)?.to_string());
        Ok(())
    }

    /// Set default database instance type, checked against the catalog
    pub fn set_default_db_instance_type(
        &mut self,
        db_instance_type: &str,
    ) -> Result<(), CatalogError> {
        self.default_db_instance_type =
            Some(check(Category::Database, db_instance_type)?.to_string());
        Ok(())
    }

    /// Clear one default by option name
    pub fn clear(&mut self, option: &str) -> Result<(), CatalogError> {
        match option {
            "region" => self.default_region = None,
            "instance-type" => self.default_instance_type = None,
            "db-instance-type" => self.default_db_instance_type = None,
            _ => return Err(CatalogError::UnknownOption(option.to_string())),
        }
        Ok(())
    }

    /// Check if any defaults are set
    pub fn is_empty(&self) -> bool {
        self.default_region.is_none()
            && self.default_instance_type.is_none()
            && self.default_db_instance_type.is_none()
    }
}
