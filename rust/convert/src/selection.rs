// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Selection acquisition
//!
//! The selection step is the one interactive seam of the pipeline, so it
//! is injected rather than ambient. Implementations may block on user
//! input; returning an empty set is valid and yields a no-op run.

use crate::error::Result;
use linebim_core::{Document, ElementId};

/// Source of the element selection for a conversion run
pub trait SelectionProvider {
    /// Produce a selection set, possibly empty.
    ///
    /// Returns [`crate::Error::SelectionCancelled`] when the user cancels; the
    /// run then terminates with no mutation.
    fn pick_elements(&mut self, doc: &Document) -> Result<Vec<ElementId>>;
}

/// A scripted, fixed selection
pub struct FixedSelection(pub Vec<ElementId>);

impl SelectionProvider for FixedSelection {
    fn pick_elements(&mut self, _doc: &Document) -> Result<Vec<ElementId>> {
        Ok(self.0.clone())
    }
}

/// Select every curve element in the document (batch runs)
pub struct AllCurveElements;

impl SelectionProvider for AllCurveElements {
    fn pick_elements(&mut self, doc: &Document) -> Result<Vec<ElementId>> {
        Ok(doc.curve_elements().iter().map(|curve| curve.id).collect())
    }
}
