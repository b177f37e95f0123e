// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion configuration

use crate::classify::StyleMap;
use serde::{Deserialize, Serialize};

/// Configuration for one conversion run.
///
/// All `*_name` fields are display names resolved against the document
/// catalog before any mutation begins; a missing name aborts the run.
/// Lengths are in document units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConversionConfig {
    /// Level every synthesized element is anchored to
    pub level_name: String,
    /// Wall type for curves classified as exterior walls
    pub exterior_wall_type: String,
    /// Wall type for curves classified as interior walls
    pub interior_wall_type: String,
    /// MEP system type for duct runs
    pub duct_system_type: String,
    /// Duct type for duct runs
    pub duct_type: String,
    /// MEP system type for pipe runs
    pub pipe_system_type: String,
    /// Pipe type for pipe runs
    pub pipe_type: String,
    /// Unconnected height of synthesized walls
    pub wall_height: f64,
    /// Base offset of synthesized walls from the level
    pub wall_base_offset: f64,
    /// Style-name dispatch table
    pub style_map: StyleMap,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            level_name: "Level 1".to_string(),
            exterior_wall_type: "Storefront".to_string(),
            interior_wall_type: "Generic - 8\" Masonry".to_string(),
            duct_system_type: "Supply Air".to_string(),
            duct_type: "Default".to_string(),
            pipe_system_type: "Domestic Hot Water".to_string(),
            pipe_type: "Default".to_string(),
            wall_height: 20.0,
            wall_base_offset: 0.0,
            style_map: StyleMap::default(),
        }
    }
}
