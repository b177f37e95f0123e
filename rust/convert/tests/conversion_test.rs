// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end tests of the selection-to-conversion pipeline.

use linebim_convert::{
    convert_selection, run_conversion, ConversionConfig, Error, FixedSelection, SelectionProvider,
};
use linebim_core::{CatalogKind, Document, ElementId, ModelElement, Point3D};

/// Document seeded with the full default catalog
fn seeded_doc() -> Document {
    let mut doc = Document::new("Project1");
    doc.add_level("Level 1");
    doc.add_wall_type("Storefront");
    doc.add_wall_type("Generic - 8\" Masonry");
    doc.add_mep_system_type("Supply Air");
    doc.add_mep_system_type("Domestic Hot Water");
    doc.add_duct_type("Default");
    doc.add_pipe_type("Default");
    doc
}

fn line(doc: &mut Document, style: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> ElementId {
    doc.add_model_line(style, Point3D::new(x0, y0, 0.0), Point3D::new(x1, y1, 0.0))
}

#[test]
fn glaz_line_becomes_exterior_wall_and_is_hidden() {
    // Scenario: one bounded line styled "A-GLAZ"
    let mut doc = seeded_doc();
    let id = line(&mut doc, "A-GLAZ", 0.0, 0.0, 10.0, 0.0);

    let result = run_conversion(&mut doc, &[id], &ConversionConfig::default()).unwrap();

    assert_eq!(result.converted, 1);
    assert!(result.unrecognized.is_empty());
    assert_eq!(result.skipped_unbound, 0);
    assert_eq!(doc.model_elements().len(), 1);

    let storefront = doc
        .catalog(CatalogKind::WallType)
        .iter()
        .find(|e| e.name == "Storefront")
        .unwrap()
        .id;
    match &doc.model_elements()[0] {
        ModelElement::Wall {
            wall_type,
            height,
            structural,
            ..
        } => {
            assert_eq!(*wall_type, storefront);
            assert_eq!(*height, 20.0);
            assert!(!structural);
        }
        other => panic!("expected wall, got {:?}", other),
    }

    // the original line is hidden in the active view, not deleted
    assert!(doc.is_hidden(doc.active_view(), id));
    assert!(doc.curve_element(id).is_some());
}

#[test]
fn unknown_style_creates_nothing_but_is_still_hidden() {
    // Scenario: one bounded line styled "X-FOO"
    let mut doc = seeded_doc();
    let id = line(&mut doc, "X-FOO", 0.0, 0.0, 10.0, 0.0);

    let result = run_conversion(&mut doc, &[id], &ConversionConfig::default()).unwrap();

    assert_eq!(result.converted, 0);
    assert!(doc.model_elements().is_empty());
    assert_eq!(result.unrecognized, vec![id]);
    assert!(doc.is_hidden(doc.active_view(), id));
}

#[test]
fn unbound_duct_line_is_skipped_yet_hidden() {
    // Scenario: an unbound curve styled "M-DUCT". It is excluded from both
    // conversion and the unrecognized set, but the hide pass operates on
    // the original selection and hides it anyway.
    let mut doc = seeded_doc();
    let id = doc.add_unbound_model_line(
        "M-DUCT",
        Point3D::new(0.0, 0.0, 0.0),
        Point3D::new(1.0, 0.0, 0.0),
    );

    let result = run_conversion(&mut doc, &[id], &ConversionConfig::default()).unwrap();

    assert_eq!(result.converted, 0);
    assert_eq!(result.skipped_unbound, 1);
    assert!(result.unrecognized.is_empty());
    assert!(doc.model_elements().is_empty());
    assert!(doc.is_hidden(doc.active_view(), id));
}

#[test]
fn missing_level_aborts_before_any_mutation() {
    // Scenario: catalog has no "Level 1"
    let mut doc = Document::new("Project1");
    doc.add_wall_type("Storefront");
    doc.add_wall_type("Generic - 8\" Masonry");
    doc.add_mep_system_type("Supply Air");
    doc.add_mep_system_type("Domestic Hot Water");
    doc.add_duct_type("Default");
    doc.add_pipe_type("Default");
    let id = line(&mut doc, "A-GLAZ", 0.0, 0.0, 10.0, 0.0);

    let err = run_conversion(&mut doc, &[id], &ConversionConfig::default())
        .err()
        .unwrap();

    assert!(matches!(
        err,
        Error::CatalogEntryNotFound {
            kind: CatalogKind::Level,
            ..
        }
    ));
    // document left unmodified: nothing created, nothing hidden
    assert!(doc.model_elements().is_empty());
    assert!(!doc.is_hidden(doc.active_view(), id));
}

#[test]
fn empty_selection_is_a_successful_no_op() {
    let mut doc = seeded_doc();

    let result = run_conversion(&mut doc, &[], &ConversionConfig::default()).unwrap();

    assert_eq!(result.selected, 0);
    assert_eq!(result.converted, 0);
    assert_eq!(result.hidden, 0);
    assert!(doc.model_elements().is_empty());
}

#[test]
fn mixed_selection_converts_each_recognized_style() {
    let mut doc = seeded_doc();
    let glaz = line(&mut doc, "A-GLAZ", 0.0, 0.0, 10.0, 0.0);
    let wall = line(&mut doc, "A-WALL", 0.0, 2.0, 10.0, 2.0);
    let duct = line(&mut doc, "M-DUCT", 0.0, 4.0, 10.0, 4.0);
    let pipe = line(&mut doc, "P-PIPE", 0.0, 6.0, 10.0, 6.0);
    let foo = line(&mut doc, "X-FOO", 0.0, 8.0, 10.0, 8.0);
    let selection = vec![glaz, wall, duct, pipe, foo];

    let result = run_conversion(&mut doc, &selection, &ConversionConfig::default()).unwrap();

    assert_eq!(result.selected, 5);
    assert_eq!(result.model_curves, 5);
    assert_eq!(result.converted, 4);
    assert_eq!(result.unrecognized, vec![foo]);
    assert_eq!(result.created.len(), 4);

    let elements = doc.model_elements();
    assert_eq!(elements.iter().filter(|e| e.is_wall()).count(), 2);
    assert_eq!(elements.iter().filter(|e| e.is_duct()).count(), 1);
    assert_eq!(elements.iter().filter(|e| e.is_pipe()).count(), 1);

    // every original, converted or not, is hidden
    for id in selection {
        assert!(doc.is_hidden(doc.active_view(), id));
    }
}

#[test]
fn detail_curves_are_filtered_out_but_hidden() {
    let mut doc = seeded_doc();
    // a detail line with a convertible style still must not convert
    let detail = doc.add_detail_line(
        "A-WALL",
        Point3D::new(0.0, 0.0, 0.0),
        Point3D::new(5.0, 0.0, 0.0),
    );
    let model = line(&mut doc, "A-WALL", 0.0, 1.0, 5.0, 1.0);

    let result =
        run_conversion(&mut doc, &[detail, model], &ConversionConfig::default()).unwrap();

    assert_eq!(result.selected, 2);
    assert_eq!(result.model_curves, 1);
    assert_eq!(result.converted, 1);
    assert!(doc.is_hidden(doc.active_view(), detail));
    assert!(doc.is_hidden(doc.active_view(), model));
}

#[test]
fn arc_model_curve_becomes_a_wall_along_the_full_path() {
    let mut doc = seeded_doc();
    let arc = doc.add_model_arc(
        "A-WALL",
        Point3D::new(4.0, 0.0, 0.0),
        Point3D::new(-4.0, 0.0, 0.0),
        Point3D::new(0.0, 0.0, 0.0),
    );

    let result = run_conversion(&mut doc, &[arc], &ConversionConfig::default()).unwrap();
    assert_eq!(result.converted, 1);

    let source = doc.curve_element(arc).unwrap().geometry.clone();
    match &doc.model_elements()[0] {
        ModelElement::Wall { curve, .. } => assert_eq!(curve, &source),
        other => panic!("expected wall, got {:?}", other),
    }
}

#[test]
fn running_twice_creates_two_independent_element_sets() {
    // no deduplication by design
    let mut doc = seeded_doc();
    let id = line(&mut doc, "A-WALL", 0.0, 0.0, 10.0, 0.0);
    let config = ConversionConfig::default();

    let first = run_conversion(&mut doc, &[id], &config).unwrap();
    let second = run_conversion(&mut doc, &[id], &config).unwrap();

    assert_eq!(first.converted, 1);
    assert_eq!(second.converted, 1);
    assert_eq!(doc.model_elements().len(), 2);
    assert_ne!(first.created, second.created);
}

#[test]
fn creation_failure_rolls_back_the_whole_batch() {
    // element 2 of 2 is rejected by the document (degenerate duct run);
    // the already-staged wall must not survive
    let mut doc = seeded_doc();
    let good = line(&mut doc, "A-GLAZ", 0.0, 0.0, 10.0, 0.0);
    let degenerate = line(&mut doc, "M-DUCT", 3.0, 3.0, 3.0, 3.0);

    let err = run_conversion(&mut doc, &[good, degenerate], &ConversionConfig::default())
        .err()
        .unwrap();

    assert!(matches!(err, Error::Document(_)));
    assert!(doc.model_elements().is_empty());
    assert!(!doc.is_hidden(doc.active_view(), good));
}

#[test]
fn read_only_document_rejects_the_run_before_mutation() {
    let mut doc = seeded_doc();
    let id = line(&mut doc, "A-WALL", 0.0, 0.0, 10.0, 0.0);
    doc.set_read_only(true);

    let err = run_conversion(&mut doc, &[id], &ConversionConfig::default())
        .err()
        .unwrap();

    assert!(matches!(err, Error::Document(_)));
    assert!(doc.model_elements().is_empty());
    assert!(!doc.is_hidden(doc.active_view(), id));
}

#[test]
fn custom_style_table_drives_dispatch() {
    let mut doc = seeded_doc();
    let id = line(&mut doc, "S-WALL", 0.0, 0.0, 10.0, 0.0);

    let mut config = ConversionConfig::default();
    config
        .style_map
        .insert("S-WALL", linebim_convert::LineClass::WallInterior);

    let result = run_conversion(&mut doc, &[id], &config).unwrap();
    assert_eq!(result.converted, 1);

    let masonry = doc
        .catalog(CatalogKind::WallType)
        .iter()
        .find(|e| e.name == "Generic - 8\" Masonry")
        .unwrap()
        .id;
    match &doc.model_elements()[0] {
        ModelElement::Wall { wall_type, .. } => assert_eq!(*wall_type, masonry),
        other => panic!("expected wall, got {:?}", other),
    }
}

struct CancellingSelection;

impl SelectionProvider for CancellingSelection {
    fn pick_elements(&mut self, _doc: &Document) -> linebim_convert::Result<Vec<ElementId>> {
        Err(Error::SelectionCancelled)
    }
}

#[test]
fn cancelled_selection_terminates_without_mutation() {
    let mut doc = seeded_doc();
    let id = line(&mut doc, "A-GLAZ", 0.0, 0.0, 10.0, 0.0);

    let err = convert_selection(
        &mut doc,
        &mut CancellingSelection,
        &ConversionConfig::default(),
    )
    .err()
    .unwrap();

    assert!(matches!(err, Error::SelectionCancelled));
    assert!(doc.model_elements().is_empty());
    assert!(!doc.is_hidden(doc.active_view(), id));
}

#[test]
fn convert_selection_with_fixed_provider_matches_direct_run() {
    let mut doc = seeded_doc();
    let id = line(&mut doc, "P-PIPE", 0.0, 0.0, 10.0, 0.0);
    let config = ConversionConfig::default();

    let result =
        convert_selection(&mut doc, &mut FixedSelection(vec![id]), &config).unwrap();

    assert_eq!(result.converted, 1);
    assert_eq!(doc.model_elements().len(), 1);
    assert!(doc.model_elements()[0].is_pipe());
}
