//! End-to-end run on the unit square, with the orthant regions standing in
//! for the external arrangement builder.
//!
//! Run: `cargo run -p monodiam --example square`

use monodiam::api::{
    edge_directions, hyperplane_normals, monotone_diameter, representative,
    square_orthant_regions, unit_square,
};

fn main() -> monodiam::Result<()> {
    let g = unit_square();
    let dirs = edge_directions(&g)?;
    println!("edge-direction classes: {}", dirs.len());
    for n in hyperplane_normals(&dirs) {
        println!("  arrangement normal: {:?}", n.iter().collect::<Vec<_>>());
    }

    let orientations = square_orthant_regions()
        .iter()
        .map(representative)
        .collect::<monodiam::Result<Vec<_>>>()?;
    let report = monotone_diameter(&g, &orientations)?;
    println!("orientations: {}", report.orientation_count);
    println!("monotone diameter: {}", report.diameter);
    Ok(())
}
