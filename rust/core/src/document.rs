// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The in-memory model document
//!
//! A [`Document`] owns the catalogs, curve elements, synthesized model
//! elements and views of one project. It is a single shared mutable
//! resource: all mutation goes through a [`ScopedTransaction`] obtained
//! from [`Document::begin`], and there is only one writer at a time by
//! construction.

use crate::catalog::{CatalogKind, NamedCatalogEntry};
use crate::elements::{CurveElement, CurveElementKind, ModelElement};
use crate::error::{Error, Result};
use crate::geometry::{CurveGeometry, Point3D};
use crate::ids::ElementId;
use crate::transaction::ScopedTransaction;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// A document view with its own hidden-element set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct View {
    pub id: ElementId,
    pub name: String,
    pub hidden: FxHashSet<ElementId>,
}

/// In-memory building model document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    name: String,
    catalog: FxHashMap<CatalogKind, Vec<NamedCatalogEntry>>,
    pub(crate) curve_elements: Vec<CurveElement>,
    pub(crate) model_elements: Vec<ModelElement>,
    pub(crate) views: Vec<View>,
    active_view: ElementId,
    next_id: u64,
    read_only: bool,
}

impl Document {
    /// Create an empty document with a single active floor plan view
    pub fn new(name: impl Into<String>) -> Self {
        let mut doc = Self {
            name: name.into(),
            catalog: FxHashMap::default(),
            curve_elements: Vec::new(),
            model_elements: Vec::new(),
            views: Vec::new(),
            active_view: ElementId(0),
            next_id: 1,
            read_only: false,
        };
        let view = doc.add_view("Level 1 - Floor Plan");
        doc.active_view = view;
        doc
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn allocate_element_id(&mut self) -> ElementId {
        self.allocate_id()
    }

    // --- catalog ---

    fn add_catalog_entry(&mut self, kind: CatalogKind, name: impl Into<String>) -> ElementId {
        let id = self.allocate_id();
        self.catalog
            .entry(kind)
            .or_default()
            .push(NamedCatalogEntry::new(id, name));
        id
    }

    pub fn add_level(&mut self, name: impl Into<String>) -> ElementId {
        self.add_catalog_entry(CatalogKind::Level, name)
    }

    pub fn add_wall_type(&mut self, name: impl Into<String>) -> ElementId {
        self.add_catalog_entry(CatalogKind::WallType, name)
    }

    pub fn add_duct_type(&mut self, name: impl Into<String>) -> ElementId {
        self.add_catalog_entry(CatalogKind::DuctType, name)
    }

    pub fn add_pipe_type(&mut self, name: impl Into<String>) -> ElementId {
        self.add_catalog_entry(CatalogKind::PipeType, name)
    }

    pub fn add_mep_system_type(&mut self, name: impl Into<String>) -> ElementId {
        self.add_catalog_entry(CatalogKind::MepSystemType, name)
    }

    /// Read-only enumeration of one catalog kind (order unspecified)
    pub fn catalog(&self, kind: CatalogKind) -> &[NamedCatalogEntry] {
        self.catalog.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `id` is an entry of the given catalog kind
    pub fn catalog_contains(&self, kind: CatalogKind, id: ElementId) -> bool {
        self.catalog(kind).iter().any(|entry| entry.id == id)
    }

    // --- curve elements ---

    fn add_curve_element(
        &mut self,
        kind: CurveElementKind,
        line_style: impl Into<String>,
        geometry: CurveGeometry,
    ) -> ElementId {
        let id = self.allocate_id();
        self.curve_elements.push(CurveElement {
            id,
            kind,
            line_style: line_style.into(),
            geometry,
        });
        id
    }

    pub fn add_model_line(
        &mut self,
        line_style: impl Into<String>,
        start: Point3D,
        end: Point3D,
    ) -> ElementId {
        self.add_curve_element(
            CurveElementKind::ModelCurve,
            line_style,
            CurveGeometry::line(start, end),
        )
    }

    pub fn add_model_arc(
        &mut self,
        line_style: impl Into<String>,
        start: Point3D,
        end: Point3D,
        center: Point3D,
    ) -> ElementId {
        self.add_curve_element(
            CurveElementKind::ModelCurve,
            line_style,
            CurveGeometry::arc(start, end, center),
        )
    }

    pub fn add_unbound_model_line(
        &mut self,
        line_style: impl Into<String>,
        origin: Point3D,
        direction: Point3D,
    ) -> ElementId {
        self.add_curve_element(
            CurveElementKind::ModelCurve,
            line_style,
            CurveGeometry::unbound_line(origin, direction),
        )
    }

    pub fn add_detail_line(
        &mut self,
        line_style: impl Into<String>,
        start: Point3D,
        end: Point3D,
    ) -> ElementId {
        self.add_curve_element(
            CurveElementKind::DetailCurve,
            line_style,
            CurveGeometry::line(start, end),
        )
    }

    pub fn curve_elements(&self) -> &[CurveElement] {
        &self.curve_elements
    }

    pub fn curve_element(&self, id: ElementId) -> Option<&CurveElement> {
        self.curve_elements.iter().find(|c| c.id == id)
    }

    // --- model elements ---

    pub fn model_elements(&self) -> &[ModelElement] {
        &self.model_elements
    }

    pub fn model_element(&self, id: ElementId) -> Option<&ModelElement> {
        self.model_elements.iter().find(|e| e.id() == id)
    }

    /// Whether `id` refers to any curve or model element
    pub fn contains_element(&self, id: ElementId) -> bool {
        self.curve_element(id).is_some() || self.model_element(id).is_some()
    }

    // --- views ---

    pub fn add_view(&mut self, name: impl Into<String>) -> ElementId {
        let id = self.allocate_id();
        self.views.push(View {
            id,
            name: name.into(),
            hidden: FxHashSet::default(),
        });
        id
    }

    pub fn view(&self, id: ElementId) -> Option<&View> {
        self.views.iter().find(|v| v.id == id)
    }

    pub fn active_view(&self) -> ElementId {
        self.active_view
    }

    pub fn set_active_view(&mut self, id: ElementId) -> Result<()> {
        if self.view(id).is_none() {
            return Err(Error::UnknownView(id));
        }
        self.active_view = id;
        Ok(())
    }

    /// Whether `element` is hidden in `view` (false for unknown views)
    pub fn is_hidden(&self, view: ElementId, element: ElementId) -> bool {
        self.view(view)
            .map(|v| v.hidden.contains(&element))
            .unwrap_or(false)
    }

    // --- transactions ---

    /// Mark the document as rejecting all further transactions
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Open an atomic mutation batch.
    ///
    /// Staged operations apply only at [`ScopedTransaction::commit`];
    /// dropping the transaction discards them all.
    pub fn begin(&mut self, label: &str) -> Result<ScopedTransaction<'_>> {
        if self.read_only {
            return Err(Error::TransactionRejected(label.to_string()));
        }
        Ok(ScopedTransaction::new(self, label))
    }
}
