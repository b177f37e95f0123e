// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # LineBIM Core Document
//!
//! In-memory building model document for the LineBIM toolchain.
//!
//! ## Overview
//!
//! This crate provides the document side of the line-to-element workflow:
//!
//! - **Catalogs**: named, typed templates (levels, wall/duct/pipe types,
//!   MEP system types) with exact-match name lookup
//! - **Curve Elements**: selectable line-like geometry carrying a line style
//! - **Model Elements**: synthesized walls, duct segments and pipe segments
//! - **Views**: per-view element visibility
//! - **Transactions**: atomic batched mutation via [`ScopedTransaction`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linebim_core::{Document, Point3D};
//!
//! let mut doc = Document::new("Project1");
//! let level = doc.add_level("Level 1");
//! let wall_type = doc.add_wall_type("Generic - 8\" Masonry");
//!
//! let curve = linebim_core::CurveGeometry::line(
//!     Point3D::new(0.0, 0.0, 0.0),
//!     Point3D::new(10.0, 0.0, 0.0),
//! );
//!
//! let mut tx = doc.begin("Create Elements")?;
//! tx.create_wall(curve, wall_type, level, 20.0, 0.0, false, false)?;
//! tx.commit()?;
//! ```
//!
//! Mutations staged in a transaction are applied only at [`ScopedTransaction::commit`];
//! dropping the transaction on any error path rolls the whole batch back.

pub mod catalog;
pub mod document;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod transaction;

pub use catalog::{find_by_name, CatalogKind, NamedCatalogEntry};
pub use document::{Document, View};
pub use elements::{CurveElement, CurveElementKind, ModelElement};
pub use error::{Error, Result};
pub use geometry::{CurveGeometry, Point3D};
pub use ids::ElementId;
pub use transaction::ScopedTransaction;
