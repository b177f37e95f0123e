// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Catalog resolution
//!
//! The fixed set of catalog entries a run needs is resolved once, up
//! front, by exact display name. Any miss is a fatal precondition
//! failure: the run must abort before a transaction is opened, leaving
//! the document untouched.

use crate::config::ConversionConfig;
use crate::error::{Error, Result};
use linebim_core::{find_by_name, CatalogKind, Document, ElementId};

/// Catalog handles resolved for one conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCatalog {
    pub level: ElementId,
    pub exterior_wall_type: ElementId,
    pub interior_wall_type: ElementId,
    pub duct_system_type: ElementId,
    pub duct_type: ElementId,
    pub pipe_system_type: ElementId,
    pub pipe_type: ElementId,
}

/// Resolve every catalog entry named in `config`, failing on the first miss
pub fn resolve_catalog(doc: &Document, config: &ConversionConfig) -> Result<ResolvedCatalog> {
    Ok(ResolvedCatalog {
        level: lookup(doc, CatalogKind::Level, &config.level_name)?,
        exterior_wall_type: lookup(doc, CatalogKind::WallType, &config.exterior_wall_type)?,
        interior_wall_type: lookup(doc, CatalogKind::WallType, &config.interior_wall_type)?,
        duct_system_type: lookup(doc, CatalogKind::MepSystemType, &config.duct_system_type)?,
        duct_type: lookup(doc, CatalogKind::DuctType, &config.duct_type)?,
        pipe_system_type: lookup(doc, CatalogKind::MepSystemType, &config.pipe_system_type)?,
        pipe_type: lookup(doc, CatalogKind::PipeType, &config.pipe_type)?,
    })
}

fn lookup(doc: &Document, kind: CatalogKind, name: &str) -> Result<ElementId> {
    find_by_name(doc.catalog(kind), name)
        .map(|entry| entry.id)
        .ok_or_else(|| Error::CatalogEntryNotFound {
            kind,
            name: name.to_string(),
        })
}
