// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Error Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("Singular matrix: the system has no unique solution")]
    SingularMatrix,

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("No real solution: {0}")]
    NoRealSolution(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GeoResult<T> = Result<T, GeoError>;
