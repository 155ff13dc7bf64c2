// Node properties: the configuration mapping supplied by the execution context

use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

use super::constants::{
    DEFAULT_HEAP_SIZE_GAP_MB, DEFAULT_INSTALL_PATH, DEFAULT_MINIMUM_DISK_GB,
    DEFAULT_MINIMUM_MEMORY_MB, DEFAULT_SUPPORTED_DISTROS, DEFAULT_SUPPORTED_VERSIONS,
    DEFAULT_URL_TIMEOUT_SECS,
};

/// Named properties the validator reads
///
/// Every field has a default except `es_heap_size`, which is required and
/// checked when thresholds are built (see `Thresholds::from_properties`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NodeProperties {
    /// Bypass mode: report findings but never abort
    #[serde(deserialize_with = "deserialize_truthy")]
    pub ignore_bootstrap_validations: bool,
    pub es_heap_size: Option<String>,
    pub manager_resources_package: Option<String>,
    pub minimum_required_total_physical_memory_in_mb: u64,
    pub minimum_required_available_disk_space_in_gb: u64,
    pub allowed_heap_size_gap_in_mb: u64,
    #[serde(deserialize_with = "deserialize_list")]
    pub supported_distros: Vec<String>,
    #[serde(deserialize_with = "deserialize_list")]
    pub supported_distro_versions: Vec<String>,
    pub install_path: PathBuf,
    pub resources_package_timeout_secs: u64,
}

impl Default for NodeProperties {
    fn default() -> Self {
        Self {
            ignore_bootstrap_validations: false,
            es_heap_size: None,
            manager_resources_package: None,
            minimum_required_total_physical_memory_in_mb: DEFAULT_MINIMUM_MEMORY_MB,
            minimum_required_available_disk_space_in_gb: DEFAULT_MINIMUM_DISK_GB,
            allowed_heap_size_gap_in_mb: DEFAULT_HEAP_SIZE_GAP_MB,
            supported_distros: DEFAULT_SUPPORTED_DISTROS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            supported_distro_versions: DEFAULT_SUPPORTED_VERSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            install_path: PathBuf::from(DEFAULT_INSTALL_PATH),
            resources_package_timeout_secs: DEFAULT_URL_TIMEOUT_SECS,
        }
    }
}

/// Boolean-like strings accepted for flags ("True", "yes", "on", "1")
pub fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "on" | "1"
    )
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    Int(i64),
    Text(String),
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match BoolLike::deserialize(deserializer)? {
        BoolLike::Bool(b) => b,
        BoolLike::Int(i) => i != 0,
        BoolLike::Text(s) => is_truthy(&s),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Int(i) => i.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListLike {
    List(Vec<Scalar>),
    Single(Scalar),
}

/// Accept a sequence or a comma-separated string (env vars carry the latter)
fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match ListLike::deserialize(deserializer)? {
        ListLike::List(items) => items.into_iter().map(Scalar::into_string).collect(),
        ListLike::Single(Scalar::Text(s)) => s
            .split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect(),
        ListLike::Single(other) => vec![other.into_string()],
    };
    Ok(items)
}
