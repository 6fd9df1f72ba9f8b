//! Headless walkthrough of the crowdmesh kernel: seeds the reference
//! layout, applies a few obstacle transforms, and prints how the mesh and
//! the occupant population react to each edit.

use std::f64::consts::FRAC_PI_4;

use crowdmesh::simulation::{ObstacleTransform, SimulationParams, SimulationState};

fn report(label: &str, state: &SimulationState) {
    println!(
        "{label:<16} {:3} vertices  {:3} triangles  {:3} edges  {:3} occupants",
        state.mesh().vertices().len(),
        state.mesh().triangles().len(),
        state.mesh().edges().len(),
        state.occupants().len(),
    );
}

fn main() -> crowdmesh::Result<()> {
    let mut state = SimulationState::new(SimulationParams::default());
    state.reset(&mut rand::thread_rng());
    report("seeded", &state);

    state.transform_obstacle(ObstacleTransform::Translate { dx: -0.3, dy: -0.3 })?;
    report("translated", &state);

    state.transform_obstacle(ObstacleTransform::Rotate { angle: FRAC_PI_4 })?;
    report("rotated", &state);

    // Growing the obstacle engulfs nearby occupants; the rebuild cycle
    // prunes them.
    state.transform_obstacle(ObstacleTransform::Scale { factor: 1.8 })?;
    report("scaled", &state);

    println!("occupancy per triangle: {:?}", state.triangle_occupancy());
    Ok(())
}
