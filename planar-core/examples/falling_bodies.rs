//! Headless demo: steel boundaries, a rain of bodies, a pool of water.
//!
//! Runs the background simulation loop for a moment, prints where
//! everything ended up, then shuts the loop down cleanly. A renderer would
//! consume the same snapshots this example prints.

use std::time::Duration;

use planar_core::{Body, Shape, Simulation, World};
use planar_types::{Liquid, Material, SimulationConfig, Vec2};

fn build_scene() -> World {
    let mut world = World::new(SimulationConfig::default());

    let steel = Material::steel();

    // Floor: world extents x in [-40, 40], top face at y = -14.
    world.add_body(
        Body::box_from_corners(Vec2::new(-40.0, -29.0), Vec2::new(40.0, -31.0), 0.2, true, steel)
            .unwrap(),
    );
    // Side walls.
    world.add_body(
        Body::box_from_corners(Vec2::new(-86.0, -20.0), Vec2::new(-82.0, 20.0), 0.8, true, steel)
            .unwrap(),
    );
    world.add_body(
        Body::box_from_corners(Vec2::new(82.0, -20.0), Vec2::new(86.0, 20.0), 0.8, true, steel)
            .unwrap(),
    );

    // A mix of circles: birch floats, glass and steel sink.
    let drops = [
        (Vec2::new(-6.0, 2.0), 0.6, Material::birch()),
        (Vec2::new(-2.0, 4.0), 0.4, Material::glass()),
        (Vec2::new(2.0, 6.0), 0.8, Material::birch()),
        (Vec2::new(6.0, 3.0), 0.5, Material::steel()),
        (Vec2::new(0.0, 8.0), 1.0, Material::glass()),
    ];
    for (position, radius, material) in drops {
        world.add_body(Body::circle(position, radius, 0.8, false, material).unwrap());
    }

    // A couple of spinning-friendly squares.
    for (x, angle) in [(-10.0, 0.4), (10.0, 0.9)] {
        let mut square =
            Body::regular_polygon(4, Vec2::new(x, 5.0), 1.5, 0.4, false, Material::birch())
                .unwrap();
        square.rotate(angle);
        world.add_body(square);
    }

    // The pool sits on the floor, surface at y = -8.
    world.add_liquid(Liquid::water(vec![
        Vec2::new(-40.0, -8.0),
        Vec2::new(40.0, -8.0),
        Vec2::new(40.0, -14.0),
        Vec2::new(-40.0, -14.0),
    ]));

    world
}

fn main() {
    tracing_subscriber::fmt().init();

    let simulation = Simulation::new(build_scene());
    let loop_thread = simulation.spawn();

    std::thread::sleep(Duration::from_secs(2));

    simulation.request_stop();
    loop_thread
        .join()
        .unwrap_or_else(|_| panic!("simulation thread panicked"));

    let snapshot = simulation.snapshot();
    println!("{} bodies after 2 s:", snapshot.bodies.len());
    for (index, body) in snapshot.bodies.iter().enumerate() {
        let kind = match &body.shape {
            Shape::Circle { radius } => format!("circle r={radius}"),
            Shape::Polygon { vertices } => format!("polygon n={}", vertices.len()),
        };
        println!(
            "  #{index} {kind:<14} {:<9} at {}",
            format!("{:?}", body.material.kind),
            body.position
        );
    }
    for (index, liquid) in snapshot.liquids.iter().enumerate() {
        println!(
            "  liquid #{index} surface at y = {}",
            liquid.highest_boundary_y
        );
    }
}
