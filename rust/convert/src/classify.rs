// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line-style classification
//!
//! Classification is a pure function of the line-style name: an exact,
//! case-sensitive lookup in a data-driven table. The table is
//! configuration, not logic; it can be replaced wholesale from a config
//! file without touching code.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Conversion outcome for one line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineClass {
    WallExterior,
    WallInterior,
    Duct,
    Pipe,
    Unrecognized,
}

/// Style-name to element-class dispatch table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    map: FxHashMap<String, LineClass>,
}

impl StyleMap {
    /// Empty table: every style classifies as [`LineClass::Unrecognized`]
    pub fn empty() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, LineClass)>,
        S: Into<String>,
    {
        Self {
            map: pairs.into_iter().map(|(s, c)| (s.into(), c)).collect(),
        }
    }

    pub fn insert(&mut self, style: impl Into<String>, class: LineClass) {
        self.map.insert(style.into(), class);
    }

    /// Classify a line-style name. Exact match, case-sensitive; unknown
    /// names (and entries mapped to nothing) are `Unrecognized`.
    pub fn classify(&self, style_name: &str) -> LineClass {
        self.map
            .get(style_name)
            .copied()
            .unwrap_or(LineClass::Unrecognized)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for StyleMap {
    /// The standard drafting-discipline table
    fn default() -> Self {
        Self::from_pairs([
            ("A-GLAZ", LineClass::WallExterior),
            ("A-WALL", LineClass::WallInterior),
            ("M-DUCT", LineClass::Duct),
            ("P-PIPE", LineClass::Pipe),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_matches_drafting_convention() {
        let map = StyleMap::default();
        assert_eq!(map.classify("A-GLAZ"), LineClass::WallExterior);
        assert_eq!(map.classify("A-WALL"), LineClass::WallInterior);
        assert_eq!(map.classify("M-DUCT"), LineClass::Duct);
        assert_eq!(map.classify("P-PIPE"), LineClass::Pipe);
        assert_eq!(map.classify("X-FOO"), LineClass::Unrecognized);
    }

    #[test]
    fn classification_is_exact_and_case_sensitive() {
        let map = StyleMap::default();
        assert_eq!(map.classify("a-glaz"), LineClass::Unrecognized);
        assert_eq!(map.classify("A-GLAZ "), LineClass::Unrecognized);
        assert_eq!(map.classify("A-GLA"), LineClass::Unrecognized);
        assert_eq!(map.classify(""), LineClass::Unrecognized);
    }

    #[test]
    fn classification_depends_only_on_the_name() {
        let map = StyleMap::default();
        // repeated calls with the same name always agree
        for _ in 0..3 {
            assert_eq!(map.classify("M-DUCT"), LineClass::Duct);
        }
    }

    #[test]
    fn custom_table_overrides_everything() {
        let map = StyleMap::from_pairs([("S-WALL", LineClass::WallInterior)]);
        assert_eq!(map.classify("S-WALL"), LineClass::WallInterior);
        assert_eq!(map.classify("A-WALL"), LineClass::Unrecognized);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn table_round_trips_through_json() {
        let map = StyleMap::default();
        let json = serde_json::to_string(&map).unwrap();
        let back: StyleMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
