use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use anamnesis_assist::model::DEFAULT_MODEL_ID;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_REGION: &str = "us-east-1";

const MODEL_ID_ENV: &str = "ANAMNESIS_MODEL_ID";
const REGION_ENV: &str = "AWS_REGION";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnamnesisConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub region: String,
    /// Bedrock model or inference profile id. Added in v1.
    pub model_id: String,
    pub credentials: CredentialSource,
    pub created_at: jiff::Timestamp,
}

impl Default for AnamnesisConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            credentials: CredentialSource::DefaultChain,
            created_at: jiff::Timestamp::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Profile { profile_name: String },
    DefaultChain,
}

/// Printable view of the config.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigInfo {
    pub path: String,
    pub config_version: u32,
    pub region: String,
    pub model_id: String,
    pub created_at: String,
    pub credential_type: String,
    pub profile_name: Option<String>,
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.anamnesis.cli"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the user config, falling back to defaults when none exists, then
/// apply environment overrides.
pub fn load_config() -> eyre::Result<AnamnesisConfig> {
    let path = config_path()?;
    let config = if path.exists() {
        load_config_from(&path)?
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        AnamnesisConfig::default()
    };
    Ok(apply_overrides(
        config,
        std::env::var(MODEL_ID_ENV).ok(),
        std::env::var(REGION_ENV).ok(),
    ))
}

pub fn load_config_from(path: &Path) -> eyre::Result<AnamnesisConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so migrations run before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(version) => u32::try_from(version).map_err(|_| {
            eyre::eyre!("config_version {version} is out of range in {}", path.display())
        })?,
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: AnamnesisConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update anamnesis."
        ));
    }

    // v0 -> v1: add model_id
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("model_id")
            .or_insert(serde_json::Value::String(DEFAULT_MODEL_ID.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 -> v1 (added model_id)");
    }

    Ok(json)
}

/// Non-empty override values replace the loaded ones.
pub fn apply_overrides(
    mut config: AnamnesisConfig,
    model_id: Option<String>,
    region: Option<String>,
) -> AnamnesisConfig {
    if let Some(model_id) = model_id.filter(|v| !v.trim().is_empty()) {
        config.model_id = model_id;
    }
    if let Some(region) = region.filter(|v| !v.trim().is_empty()) {
        config.region = region;
    }
    config
}

pub fn save_config(config: &AnamnesisConfig) -> eyre::Result<PathBuf> {
    save_config_in(&config_dir()?, config)
}

/// Write `config.json` into `dir` atomically.
pub fn save_config_in(dir: &Path, config: &AnamnesisConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}

pub fn config_info(config: &AnamnesisConfig, path: &Path) -> ConfigInfo {
    let (credential_type, profile_name) = match &config.credentials {
        CredentialSource::Profile { profile_name } => {
            ("profile".to_string(), Some(profile_name.clone()))
        }
        CredentialSource::DefaultChain => ("default_chain".to_string(), None),
    };

    ConfigInfo {
        path: path.display().to_string(),
        config_version: config.config_version,
        region: config.region.clone(),
        model_id: config.model_id.clone(),
        created_at: config.created_at.to_string(),
        credential_type,
        profile_name,
    }
}
