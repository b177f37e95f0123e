// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Selection-to-conversion pipeline
//!
//! The run moves through fixed phases: filter the selection, resolve the
//! catalog, convert in one batch, hide the originals in a second batch.
//! A failure in either batch drops that batch only; a failed hide leaves
//! the converted elements created and visible.

use crate::config::ConversionConfig;
use crate::error::Result;
use crate::synthesize::synthesize;
use crate::resolve::resolve_catalog;
use linebim_core::{CurveElement, Document, ElementId};
use serde::Serialize;
use tracing::{debug, info};

/// Aggregate outcome of one conversion run
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ConversionResult {
    /// Elements in the original selection
    pub selected: usize,
    /// Selected elements that are model-geometry curves
    pub model_curves: usize,
    /// Model curves skipped because they are unbound
    pub skipped_unbound: usize,
    /// Curves converted into building elements
    pub converted: usize,
    /// Ids of the created building elements
    pub created: Vec<ElementId>,
    /// Ids of curves whose style matched nothing
    pub unrecognized: Vec<ElementId>,
    /// Originally selected elements hidden in the active view
    pub hidden: usize,
}

/// Run the conversion pipeline over an already-obtained selection.
///
/// Catalog resolution happens before any transaction: a missing entry
/// aborts the run with the document untouched. Conversion is atomic; the
/// subsequent hide batch covers **every** originally selected element,
/// recognized or not (unbound curves are therefore hidden too, even
/// though they never enter the unrecognized set).
pub fn run_conversion(
    doc: &mut Document,
    selection: &[ElementId],
    config: &ConversionConfig,
) -> Result<ConversionResult> {
    let mut result = ConversionResult {
        selected: selection.len(),
        ..ConversionResult::default()
    };

    // Phase 1: retain only model-geometry curves
    let model_curves: Vec<CurveElement> = selection
        .iter()
        .filter_map(|&id| doc.curve_element(id))
        .filter(|curve| curve.is_model_curve())
        .cloned()
        .collect();
    result.model_curves = model_curves.len();
    debug!(
        selected = result.selected,
        model_curves = result.model_curves,
        "filtered selection"
    );

    // Phase 2: resolve the catalog, fatal before any mutation
    let types = resolve_catalog(doc, config)?;

    // Phase 3: classify and synthesize in one atomic batch
    let mut tx = doc.begin("Create Elements")?;
    for curve in &model_curves {
        if !curve.geometry.is_bound() {
            result.skipped_unbound += 1;
            debug!(curve = %curve.id, "skipped unbound curve");
            continue;
        }
        let class = config.style_map.classify(&curve.line_style);
        match synthesize(&mut tx, class, &curve.geometry, &types, config)? {
            Some(id) => {
                debug!(curve = %curve.id, element = %id, ?class, "converted");
                result.created.push(id);
                result.converted += 1;
            }
            None => {
                debug!(curve = %curve.id, style = %curve.line_style, "unrecognized style");
                result.unrecognized.push(curve.id);
            }
        }
    }
    tx.commit()?;

    // Phase 4: hide every originally selected element in the active view
    let view = doc.active_view();
    let mut tx = doc.begin("Hide Lines in View")?;
    tx.hide_elements(view, selection)?;
    tx.commit()?;
    result.hidden = selection.len();

    info!(
        converted = result.converted,
        unrecognized = result.unrecognized.len(),
        skipped_unbound = result.skipped_unbound,
        hidden = result.hidden,
        "conversion run complete"
    );
    Ok(result)
}
