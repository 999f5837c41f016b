// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Worked Examples
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Console formatting and figure-path helpers shared by the worked
//! example binaries under `src/bin/`.

use std::path::PathBuf;

use matgeo_render::config::Rgb;

pub const BLUE: Rgb = [31, 119, 180];
pub const ORANGE: Rgb = [255, 127, 14];
pub const GREEN: Rgb = [44, 160, 44];
pub const RED: Rgb = [214, 39, 40];

/// Problem banner: id and statement, matching the console style of the
/// collection.
pub fn banner(id: &str, statement: &str) {
    println!("── Problem {id} ──");
    println!("{statement}");
    println!();
}

/// Print a labelled row-major matrix.
pub fn print_matrix(label: &str, rows: &[&[f64]]) {
    println!("{label} =");
    for row in rows {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:10.4}")).collect();
        println!("  [{}]", cells.join(" "));
    }
}

/// Print a labelled vector on one line.
pub fn print_vec(label: &str, v: &[f64]) {
    let cells: Vec<String> = v.iter().map(|v| format!("{v:.4}")).collect();
    println!("{label} = ({})", cells.join(", "));
}

/// Output path `figs/<name>.png`; `Figure::save` creates the directory.
pub fn fig_path(name: &str) -> PathBuf {
    PathBuf::from("figs").join(format!("{name}.png"))
}
