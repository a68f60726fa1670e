// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::kernel::Format;
use thiserror::Error;

/// Result type for kernel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by a geometry kernel
#[derive(Error, Debug)]
pub enum Error {
    /// The document could not be read as the requested format
    #[error("{format} parse error: {message}")]
    Parse { format: Format, message: String },

    /// The document parsed but contains no shapes
    #[error("document contains no shapes")]
    EmptyDocument,

    /// A single face could not be triangulated; recoverable per face
    #[error("face tessellation failed: {0}")]
    Tessellation(String),
}

impl Error {
    /// Build a parse error from any message-like value
    pub fn parse(format: Format, message: impl Into<String>) -> Self {
        Error::Parse {
            format,
            message: message.into(),
        }
    }
}
