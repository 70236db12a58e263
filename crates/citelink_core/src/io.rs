/*
SPDX-License-Identifier: MPL-2.0
*/

use std::fs;
use std::path::Path;

use crate::{LinkerError, References};

/// Load a reference table from a file.
/// Supports YAML and JSON, chosen by extension (YAML is the fallback).
pub fn load_references(path: &Path) -> Result<References, LinkerError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "json" => {
            // Check for syntax errors first
            let _: serde_json::Value =
                serde_json::from_slice(&bytes).map_err(|e| LinkerError::Parse {
                    format: "JSON".to_string(),
                    message: e.to_string(),
                })?;

            serde_json::from_slice::<References>(&bytes).map_err(|e| LinkerError::Parse {
                format: "JSON".to_string(),
                message: e.to_string(),
            })
        }
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            // Check for syntax errors first
            let _: serde_yaml::Value =
                serde_yaml::from_str(&content).map_err(|e| LinkerError::Parse {
                    format: "YAML".to_string(),
                    message: e.to_string(),
                })?;

            serde_yaml::from_str::<References>(&content).map_err(|e| LinkerError::Parse {
                format: "YAML".to_string(),
                message: e.to_string(),
            })
        }
    }
}
