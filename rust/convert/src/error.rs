// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use linebim_core::CatalogKind;
use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a conversion run
#[derive(Error, Debug)]
pub enum Error {
    /// A required catalog entry is missing. Fatal: the run aborts before
    /// any transaction begins.
    #[error("no {kind} named '{name}' in the document catalog")]
    CatalogEntryNotFound { kind: CatalogKind, name: String },

    #[error("selection cancelled")]
    SelectionCancelled,

    /// An unbound curve reached synthesis. The pipeline filters unbound
    /// curves beforehand, so this only signals caller misuse.
    #[error("cannot synthesize an element from an unbound curve")]
    UnboundCurve,

    #[error("document error: {0}")]
    Document(#[from] linebim_core::Error),
}
