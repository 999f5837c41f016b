// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Render Crate
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Raster figure rendering.
//!
//! A [`figure::Figure`] maps a world rectangle onto an RGB pixel buffer,
//! offers polyline / marker / filled-polygon primitives plus axes and a
//! grid, and saves to PNG. [`iso3d`] adds an orthographic projection for
//! the handful of three-dimensional scenes.

pub mod config;
pub mod figure;
pub mod iso3d;

pub use config::FigureConfig;
pub use figure::Figure;
