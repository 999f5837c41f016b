//! Mathematical primitives for the Matgeo workbench.

pub mod eigen;
pub mod linalg;
pub mod quadratic;
pub mod quadrature;
pub mod similarity;
