//! Shared types for the input and output contracts of the step.
//!
//! `ActionInputs` is the configuration handed to the transfer engine and
//! `OperationResult` is what the engine hands back. Neither type carries any
//! behaviour beyond construction and display.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Region used when the host supplies an empty `region` input.
pub const DEFAULT_REGION: &str = "cn-north-4";

/// Transfer direction requested by the workflow.
///
/// Unrecognized values are carried verbatim in `Other`; validation is left to
/// the transfer engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Operation {
    #[default]
    Upload,
    Download,
    Other(String),
}

impl Operation {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Upload => "upload",
            Self::Download => "download",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Operation {
    fn from(raw: &str) -> Self {
        match raw {
            "upload" => Self::Upload,
            "download" => Self::Download,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Object storage class applied to uploaded objects.
///
/// Same leniency as [`Operation`]: any string is accepted and passed through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StorageClass {
    #[default]
    Standard,
    Warm,
    Cold,
    DeepArchive,
    Other(String),
}

impl StorageClass {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard => "STANDARD",
            Self::Warm => "WARM",
            Self::Cold => "COLD",
            Self::DeepArchive => "DEEP_ARCHIVE",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for StorageClass {
    fn from(raw: &str) -> Self {
        match raw {
            "STANDARD" => Self::Standard,
            "WARM" => Self::Warm,
            "COLD" => Self::Cold,
            "DEEP_ARCHIVE" => Self::DeepArchive,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StorageClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Fully resolved step configuration.
///
/// Built once by [`crate::inputs::resolve_inputs`] and never mutated. The
/// credentials are excluded from both `Debug` and serialized output.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ActionInputs {
    #[serde(skip_serializing)]
    pub access_key: String,
    #[serde(skip_serializing)]
    pub secret_key: String,
    pub region: String,
    pub bucket_name: String,
    pub operation: Operation,
    pub local_path: Option<String>,
    pub obs_path: Option<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub preserve_structure: bool,
    pub concurrency: i64,
    pub retry_count: i64,
    pub dry_run: bool,
    pub progress: bool,
    pub checksum_validation: bool,
    pub storage_class: StorageClass,
    pub public_read: bool,
    /// Transfer timeout in seconds.
    pub timeout: i64,
}

impl fmt::Debug for ActionInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionInputs")
            .field("access_key", &"***")
            .field("secret_key", &"***")
            .field("region", &self.region)
            .field("bucket_name", &self.bucket_name)
            .field("operation", &self.operation)
            .field("local_path", &self.local_path)
            .field("obs_path", &self.obs_path)
            .field("include", &self.include)
            .field("exclude", &self.exclude)
            .field("preserve_structure", &self.preserve_structure)
            .field("concurrency", &self.concurrency)
            .field("retry_count", &self.retry_count)
            .field("dry_run", &self.dry_run)
            .field("progress", &self.progress)
            .field("checksum_validation", &self.checksum_validation)
            .field("storage_class", &self.storage_class)
            .field("public_read", &self.public_read)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Summary produced by the transfer engine after an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    pub files_processed: u64,
    pub bytes_transferred: u64,
    /// Wall-clock duration in seconds.
    pub operation_time: f64,
    pub success_count: u64,
    pub error_count: u64,
    #[serde(default)]
    pub file_list: Vec<String>,
    #[serde(default)]
    pub upload_urls: Option<Vec<String>>,
}
