// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Atomic mutation batches
//!
//! A [`ScopedTransaction`] stages document mutations and applies them as a
//! whole at [`commit`](ScopedTransaction::commit). Every other exit path,
//! including `?`-propagated errors and panics, drops the transaction and
//! with it the entire staged batch. Element ids are allocated at staging
//! time and are not reused after a rollback.

use crate::catalog::CatalogKind;
use crate::document::Document;
use crate::elements::ModelElement;
use crate::error::{Error, Result};
use crate::geometry::{CurveGeometry, Point3D};
use crate::ids::ElementId;

enum StagedOp {
    Create(ModelElement),
    Hide {
        view: ElementId,
        ids: Vec<ElementId>,
    },
}

/// An open mutation batch over a document.
///
/// Obtained from [`Document::begin`]; at most one exists at a time because
/// it holds the document's unique mutable borrow.
pub struct ScopedTransaction<'a> {
    doc: &'a mut Document,
    label: String,
    staged: Vec<StagedOp>,
}

impl<'a> ScopedTransaction<'a> {
    pub(crate) fn new(doc: &'a mut Document, label: &str) -> Self {
        Self {
            doc,
            label: label.to_string(),
            staged: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of staged operations
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    fn require_catalog_ref(&self, kind: CatalogKind, id: ElementId) -> Result<()> {
        if self.doc.catalog_contains(kind, id) {
            Ok(())
        } else {
            Err(Error::CreationRejected(format!(
                "{} {} is not in the document catalog",
                kind, id
            )))
        }
    }

    /// Stage a wall along the full curve path, anchored to `level`.
    pub fn create_wall(
        &mut self,
        curve: CurveGeometry,
        wall_type: ElementId,
        level: ElementId,
        height: f64,
        base_offset: f64,
        flipped: bool,
        structural: bool,
    ) -> Result<ElementId> {
        self.require_catalog_ref(CatalogKind::WallType, wall_type)?;
        self.require_catalog_ref(CatalogKind::Level, level)?;
        if !curve.is_bound() {
            return Err(Error::CreationRejected(
                "wall curve must be bound".to_string(),
            ));
        }
        if height <= 0.0 {
            return Err(Error::CreationRejected(format!(
                "wall height must be positive, got {}",
                height
            )));
        }
        let id = self.doc.allocate_element_id();
        self.staged.push(StagedOp::Create(ModelElement::Wall {
            id,
            curve,
            wall_type,
            level,
            height,
            base_offset,
            flipped,
            structural,
        }));
        Ok(id)
    }

    /// Stage a duct segment spanning `start` to `end` as a straight run.
    pub fn create_duct(
        &mut self,
        system_type: ElementId,
        duct_type: ElementId,
        level: ElementId,
        start: Point3D,
        end: Point3D,
    ) -> Result<ElementId> {
        self.require_catalog_ref(CatalogKind::MepSystemType, system_type)?;
        self.require_catalog_ref(CatalogKind::DuctType, duct_type)?;
        self.require_catalog_ref(CatalogKind::Level, level)?;
        Self::require_run(&start, &end)?;
        let id = self.doc.allocate_element_id();
        self.staged.push(StagedOp::Create(ModelElement::Duct {
            id,
            system_type,
            duct_type,
            level,
            start,
            end,
        }));
        Ok(id)
    }

    /// Stage a pipe segment spanning `start` to `end` as a straight run.
    pub fn create_pipe(
        &mut self,
        system_type: ElementId,
        pipe_type: ElementId,
        level: ElementId,
        start: Point3D,
        end: Point3D,
    ) -> Result<ElementId> {
        self.require_catalog_ref(CatalogKind::MepSystemType, system_type)?;
        self.require_catalog_ref(CatalogKind::PipeType, pipe_type)?;
        self.require_catalog_ref(CatalogKind::Level, level)?;
        Self::require_run(&start, &end)?;
        let id = self.doc.allocate_element_id();
        self.staged.push(StagedOp::Create(ModelElement::Pipe {
            id,
            system_type,
            pipe_type,
            level,
            start,
            end,
        }));
        Ok(id)
    }

    fn require_run(start: &Point3D, end: &Point3D) -> Result<()> {
        if start.distance_to(end) <= f64::EPSILON {
            return Err(Error::CreationRejected(
                "segment run is degenerate (start equals end)".to_string(),
            ));
        }
        Ok(())
    }

    /// Stage hiding of `ids` in `view`.
    ///
    /// Every id must refer to an existing element; the view must exist.
    pub fn hide_elements(&mut self, view: ElementId, ids: &[ElementId]) -> Result<()> {
        if self.doc.view(view).is_none() {
            return Err(Error::UnknownView(view));
        }
        for &id in ids {
            if !self.doc.contains_element(id) {
                return Err(Error::UnknownElement(id));
            }
        }
        self.staged.push(StagedOp::Hide {
            view,
            ids: ids.to_vec(),
        });
        Ok(())
    }

    /// Apply the whole staged batch to the document.
    ///
    /// Staged operations were validated when staged, so applying them
    /// cannot half-fail: after `commit` returns, either everything is in
    /// the document or (had an earlier error aborted the batch) nothing is.
    pub fn commit(self) -> Result<()> {
        let doc = self.doc;
        for op in self.staged {
            match op {
                StagedOp::Create(element) => doc.model_elements.push(element),
                StagedOp::Hide { view, ids } => {
                    // view existence was checked at staging time
                    if let Some(v) = doc.views.iter_mut().find(|v| v.id == view) {
                        v.hidden.extend(ids);
                    }
                }
            }
        }
        Ok(())
    }

    /// Discard the staged batch. Equivalent to dropping the transaction.
    pub fn rollback(self) {
        drop(self);
    }
}
