// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Geometry Constructions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form constructions: conic tangents and normals, line algebra,
//! collinearity, direction cosines, planes, bounded areas.

pub mod circle;
pub mod collinear;
pub mod direction;
pub mod hyperbola;
pub mod line_ops;
pub mod plane;
pub mod region;
pub mod tangent_lines;
pub mod triangle;
