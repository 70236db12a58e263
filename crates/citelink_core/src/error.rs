/*
SPDX-License-Identifier: MPL-2.0
*/

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{format} parse error: {message}")]
    Parse { format: String, message: String },
}
