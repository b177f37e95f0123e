// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element synthesis
//!
//! Maps a classified curve to the staged creation of its building
//! element. Walls follow the full curve path; duct and pipe segments span
//! only the curve's endpoints, so a curved source becomes a straight run.

use crate::classify::LineClass;
use crate::config::ConversionConfig;
use crate::error::{Error, Result};
use crate::resolve::ResolvedCatalog;
use linebim_core::{CurveGeometry, ElementId, ScopedTransaction};

/// Stage the building element for one classified curve.
///
/// Returns the new element id, or `None` for
/// [`LineClass::Unrecognized`] (the caller records the curve for hiding).
/// The curve must be bound; the pipeline guarantees this.
pub fn synthesize(
    tx: &mut ScopedTransaction<'_>,
    class: LineClass,
    curve: &CurveGeometry,
    types: &ResolvedCatalog,
    config: &ConversionConfig,
) -> Result<Option<ElementId>> {
    match class {
        LineClass::WallExterior => {
            let id = tx.create_wall(
                curve.clone(),
                types.exterior_wall_type,
                types.level,
                config.wall_height,
                config.wall_base_offset,
                false,
                false,
            )?;
            Ok(Some(id))
        }
        LineClass::WallInterior => {
            let id = tx.create_wall(
                curve.clone(),
                types.interior_wall_type,
                types.level,
                config.wall_height,
                config.wall_base_offset,
                false,
                false,
            )?;
            Ok(Some(id))
        }
        LineClass::Duct => {
            let (start, end) = curve.endpoints().ok_or(Error::UnboundCurve)?;
            let id = tx.create_duct(types.duct_system_type, types.duct_type, types.level, start, end)?;
            Ok(Some(id))
        }
        LineClass::Pipe => {
            let (start, end) = curve.endpoints().ok_or(Error::UnboundCurve)?;
            let id = tx.create_pipe(types.pipe_system_type, types.pipe_type, types.level, start, end)?;
            Ok(Some(id))
        }
        LineClass::Unrecognized => Ok(None),
    }
}
