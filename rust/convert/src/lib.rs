// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Selection-to-conversion pipeline for drafting lines
//!
//! This crate turns user-selected line geometry into typed building
//! elements based on each line's display style:
//!
//! 1. Filter the selection to model-geometry curves
//! 2. Resolve the required catalog entries by name (fatal if any is missing)
//! 3. Classify each bounded curve by its line-style name and synthesize the
//!    matching wall, duct segment or pipe segment in one atomic batch
//! 4. Hide every originally selected element in the active view
//!
//! # Usage
//!
//! ```rust,ignore
//! use linebim_convert::{convert_selection, AllCurveElements, ConversionConfig};
//!
//! let config = ConversionConfig::default();
//! let result = convert_selection(&mut doc, &mut AllCurveElements, &config)?;
//! println!("converted {} of {} curves", result.converted, result.model_curves);
//! ```
//!
//! The default configuration mirrors the common drafting convention:
//! `A-GLAZ` and `A-WALL` become exterior and interior walls, `M-DUCT`
//! becomes a duct run, `P-PIPE` a pipe run; anything else is left
//! unconverted and only hidden.

pub mod classify;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod resolve;
pub mod selection;
pub mod synthesize;

pub use classify::{LineClass, StyleMap};
pub use config::ConversionConfig;
pub use error::{Error, Result};
pub use pipeline::{run_conversion, ConversionResult};
pub use resolve::{resolve_catalog, ResolvedCatalog};
pub use selection::{AllCurveElements, FixedSelection, SelectionProvider};
pub use synthesize::synthesize;

use linebim_core::Document;

/// Obtain a selection from `provider` and run the conversion pipeline.
///
/// An empty selection is a valid no-op run. A cancelled selection aborts
/// with [`Error::SelectionCancelled`] before any document mutation.
pub fn convert_selection(
    doc: &mut Document,
    provider: &mut dyn SelectionProvider,
    config: &ConversionConfig,
) -> Result<ConversionResult> {
    let selection = provider.pick_elements(doc)?;
    run_conversion(doc, &selection, config)
}
