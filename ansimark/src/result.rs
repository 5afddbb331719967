//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for exporting converted output.
//!
//! Conversion itself never fails. Errors only arise when choosing an output
//! format by name or writing a finished document to a sink.

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while exporting converted output.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Writing the document to its sink failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested output format name is not recognized.
    #[error("Unknown output format: {0:?}")]
    UnknownFormat(String),
}
