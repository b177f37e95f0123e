// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ids::ElementId;
use thiserror::Error;

/// Result type for document operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while mutating a document
#[derive(Error, Debug)]
pub enum Error {
    #[error("transaction '{0}' rejected: document is read-only")]
    TransactionRejected(String),

    #[error("element creation rejected: {0}")]
    CreationRejected(String),

    #[error("unknown view {0}")]
    UnknownView(ElementId),

    #[error("unknown element {0}")]
    UnknownElement(ElementId),
}
