//! Fatigue Solver Example - Notched Bracket Under Cyclic Load

use std::collections::HashMap;

use anyhow::Context;
use fatigue_solver::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Fatigue Solver Example: Notched Bracket ===\n");

    // 42CrMo4, quenched and tempered (MPa)
    let material = MaterialProperties::new("42CrMo4", 1100.0, 900.0, 210_000.0, 0.3)?
        .with_fatigue_strength_coefficient(1600.0)?;

    // Two linear quads sharing the edge 2-5
    //
    //     N4 ---- N5 ---- N6
    //     |  E10  |  E20  |
    //     N1 ---- N2 ---- N3
    //
    let node_ids = vec![1, 2, 3, 4, 5, 6];
    let coords = Mat::from_row_slice(
        6,
        3,
        &[
            0.0, 0.0, 0.0, //
            10.0, 0.0, 0.0, //
            20.0, 0.0, 0.0, //
            0.0, 10.0, 0.0, //
            10.0, 10.0, 0.0, //
            20.0, 10.0, 0.0,
        ],
    );
    let connectivity = HashMap::from([(10, vec![1, 2, 5, 4]), (20, vec![2, 3, 6, 5])]);

    // Nodal stresses at the load peak [Sxx, Syy, Szz, Sxy, Syz, Szx]
    let max = Mat::from_row_slice(
        6,
        6,
        &[
            180.0, 20.0, 0.0, 35.0, 0.0, 0.0, //
            420.0, 60.0, 0.0, 80.0, 0.0, 0.0, //
            150.0, 15.0, 0.0, 20.0, 0.0, 0.0, //
            90.0, 10.0, 0.0, 15.0, 0.0, 0.0, //
            260.0, 40.0, 0.0, 45.0, 0.0, 0.0, //
            110.0, 12.0, 0.0, 18.0, 0.0, 0.0,
        ],
    );
    // Load ratio R = -0.2
    let min = &max * -0.2;

    let mut model = FEModel::new(vec![10, 20], node_ids, coords, max.clone(), connectivity)?
        .with_stress_envelope(min, max)?;

    for correction in [
        CorrectionKind::Goodman,
        CorrectionKind::Gerber,
        CorrectionKind::Swt,
        CorrectionKind::Morrow,
    ] {
        let options = AnalysisOptions::manson_mcknight(correction).with_logging();
        run(&material, &mut model, &options, None)
            .with_context(|| format!("Manson-McKnight with {:?} failed", correction))?;
    }

    let dang_van = DangVan::new(0.3, 400.0);
    let options = AnalysisOptions::dang_van(dang_van.alpha, dang_van.tau_limit);
    run(&material, &mut model, &options, None)?;

    println!("--- Equivalent Stresses (MPa) ---");
    for label in model.column_labels() {
        if let Some(summary) = model.eq_stress_summary(label) {
            println!(
                "{:<26} max = {:>8.2} at node {}, mean = {:>8.2}",
                label,
                summary.max,
                model.node_ids()[summary.max_point],
                summary.mean
            );
        }
    }

    let dv = model
        .column_by_label("Dang Van")
        .context("Dang Van column missing")?;
    let utilization = dang_van.utilization(&dv)?;
    println!("\n--- Dang Van Utilization ---");
    for (node, u) in model.node_ids().iter().zip(utilization.iter()) {
        println!("  N{}: {:.3}", node, u);
    }

    println!("\nElements at critical node N2: {:?}", model.node_elements(2)?);
    println!("Stress table: {} x {}", model.num_points(), model.num_columns());

    Ok(())
}
