// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named catalog entries and exact-match lookup

use crate::ids::ElementId;
use serde::{Deserialize, Serialize};

/// The kinds of typed templates a document catalog holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogKind {
    Level,
    WallType,
    DuctType,
    PipeType,
    MepSystemType,
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CatalogKind::Level => "level",
            CatalogKind::WallType => "wall type",
            CatalogKind::DuctType => "duct type",
            CatalogKind::PipeType => "pipe type",
            CatalogKind::MepSystemType => "MEP system type",
        };
        f.write_str(name)
    }
}

/// A handle into a document catalog: an opaque identity plus the display
/// name it is looked up by. Names are unique within one kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedCatalogEntry {
    pub id: ElementId,
    pub name: String,
}

impl NamedCatalogEntry {
    pub fn new(id: ElementId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Find the first entry whose display name matches `name` exactly.
///
/// Case-sensitive, no partial matching, no side effects. Enumeration order
/// of the input is host-defined and not guaranteed stable, so callers must
/// not rely on the ordinal position of the match.
pub fn find_by_name<'a>(
    entries: &'a [NamedCatalogEntry],
    name: &str,
) -> Option<&'a NamedCatalogEntry> {
    entries.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<NamedCatalogEntry> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| NamedCatalogEntry::new(ElementId(i as u64 + 1), *n))
            .collect()
    }

    #[test]
    fn exact_match_wins() {
        let catalog = entries(&["Storefront", "Generic - 8\" Masonry", "Default"]);
        let found = find_by_name(&catalog, "Default").unwrap();
        assert_eq!(found.id, ElementId(3));
    }

    #[test]
    fn lookup_is_order_independent_for_unique_names() {
        let mut catalog = entries(&["Supply Air", "Return Air", "Domestic Hot Water"]);
        let forward = find_by_name(&catalog, "Domestic Hot Water").unwrap().id;
        catalog.reverse();
        let reversed = find_by_name(&catalog, "Domestic Hot Water").unwrap().id;
        assert_eq!(forward, reversed);
    }

    #[test]
    fn lookup_is_case_sensitive_and_exact() {
        let catalog = entries(&["Level 1"]);
        assert!(find_by_name(&catalog, "level 1").is_none());
        assert!(find_by_name(&catalog, "Level").is_none());
        assert!(find_by_name(&catalog, "Level 1 ").is_none());
        assert!(find_by_name(&catalog, "Level 1").is_some());
    }

    #[test]
    fn missing_name_is_none() {
        let catalog = entries(&["Level 1", "Level 2"]);
        assert!(find_by_name(&catalog, "Level 3").is_none());
        assert!(find_by_name(&[], "Level 1").is_none());
    }
}
