// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Curve elements and synthesized model elements

use crate::geometry::{CurveGeometry, Point3D};
use crate::ids::ElementId;
use serde::{Deserialize, Serialize};

/// What a curve element represents in the document.
///
/// Only model curves are convertible; detail curves are view-specific
/// annotation and are filtered out of the conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveElementKind {
    ModelCurve,
    DetailCurve,
}

/// A selectable line-like element: geometry plus its line-style name.
///
/// The style name is a string tag indicating the intended real-world
/// discipline (e.g. "A-WALL", "M-DUCT").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurveElement {
    pub id: ElementId,
    pub kind: CurveElementKind,
    pub line_style: String,
    pub geometry: CurveGeometry,
}

impl CurveElement {
    pub fn is_model_curve(&self) -> bool {
        self.kind == CurveElementKind::ModelCurve
    }
}

/// A building element synthesized from a classified curve.
///
/// Walls keep the full defining curve path; duct and pipe segments span
/// only the start and end points of their source curve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ModelElement {
    Wall {
        id: ElementId,
        curve: CurveGeometry,
        wall_type: ElementId,
        level: ElementId,
        height: f64,
        base_offset: f64,
        flipped: bool,
        structural: bool,
    },
    Duct {
        id: ElementId,
        system_type: ElementId,
        duct_type: ElementId,
        level: ElementId,
        start: Point3D,
        end: Point3D,
    },
    Pipe {
        id: ElementId,
        system_type: ElementId,
        pipe_type: ElementId,
        level: ElementId,
        start: Point3D,
        end: Point3D,
    },
}

impl ModelElement {
    pub fn id(&self) -> ElementId {
        match self {
            ModelElement::Wall { id, .. } => *id,
            ModelElement::Duct { id, .. } => *id,
            ModelElement::Pipe { id, .. } => *id,
        }
    }

    pub fn level(&self) -> ElementId {
        match self {
            ModelElement::Wall { level, .. } => *level,
            ModelElement::Duct { level, .. } => *level,
            ModelElement::Pipe { level, .. } => *level,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, ModelElement::Wall { .. })
    }

    pub fn is_duct(&self) -> bool {
        matches!(self, ModelElement::Duct { .. })
    }

    pub fn is_pipe(&self) -> bool {
        matches!(self, ModelElement::Pipe { .. })
    }
}
