use crate::error::ApprovalError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

pub const APPROVED_SUFFIX: &str = ".approved.txt";
pub const RECEIVED_SUFFIX: &str = ".received.txt";

/// Where approval files live and what happens to them on a passing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApprovalsConfig {
    pub root: PathBuf,
    pub cleanup_received_on_pass: bool,
}

impl ApprovalsConfig {
    pub fn new() -> Self {
        Self {
            root: PathBuf::new(),
            cleanup_received_on_pass: true,
        }
    }

    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            ..Self::new()
        }
    }

    pub fn keep_received(mut self) -> Self {
        self.cleanup_received_on_pass = false;
        self
    }

    /// Defaults overridden by `APPROVALS_DIR` and `APPROVALS_KEEP_RECEIVED`.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(root) = env::var("APPROVALS_DIR") {
            if !root.trim().is_empty() {
                config.root = PathBuf::from(root);
            }
        }

        if let Ok(keep) = env::var("APPROVALS_KEEP_RECEIVED") {
            if matches!(keep.trim().to_lowercase().as_str(), "1" | "true" | "yes") {
                config.cleanup_received_on_pass = false;
            }
        }

        debug!(
            "Approvals config from env: root={:?}, cleanup_received_on_pass={}",
            config.root, config.cleanup_received_on_pass
        );
        config
    }

    #[instrument]
    pub fn load(path: &Path) -> Result<Self, ApprovalError> {
        if !path.exists() {
            return Err(ApprovalError::ConfigFileNotFound {
                path: path.to_string_lossy().to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ApprovalError::io(path, e))?;

        serde_json::from_str(&content).map_err(|e| ApprovalError::ConfigParse {
            message: e.to_string(),
        })
    }

    pub fn approved_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}{}", name, APPROVED_SUFFIX))
    }

    pub fn received_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}{}", name, RECEIVED_SUFFIX))
    }
}

impl Default for ApprovalsConfig {
    fn default() -> Self {
        Self::new()
    }
}
