//! Lifecycle and snapshot behavior of the concurrent simulation loop.

use std::time::Duration;

use planar_core::{Body, Simulation, World};
use planar_types::{Liquid, Material, SimulationConfig, Vec2};

#[test]
fn loop_advances_bodies_and_stops_cleanly() {
    let mut world = World::new(SimulationConfig::default());
    world.add_body(
        Body::circle(Vec2::new(0.0, 100.0), 0.5, 0.5, false, Material::glass()).unwrap(),
    );

    let simulation = Simulation::new(world);
    let handle = simulation.spawn();

    std::thread::sleep(Duration::from_millis(100));
    let mid_flight = simulation.body(0).unwrap();

    simulation.request_stop();
    handle.join().unwrap();
    assert!(!simulation.is_running());

    // Gravity acted while the loop ran.
    assert!(mid_flight.position.y < 100.0);
    assert!(mid_flight.linear_velocity.y < 0.0);

    // After the join no further ticks can run: state is frozen.
    let settled = simulation.body(0).unwrap();
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(simulation.body(0).unwrap().position, settled.position);
}

#[test]
fn snapshot_is_a_coherent_copy() {
    let mut world = World::new(SimulationConfig::default().zero_gravity());
    for i in 0..3 {
        #[allow(clippy::cast_precision_loss)]
        world.add_body(
            Body::circle(Vec2::new(i as f64 * 5.0, 0.0), 0.5, 0.5, false, Material::oak())
                .unwrap(),
        );
    }
    world.add_liquid(Liquid::water(vec![
        Vec2::new(-1.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(-1.0, -1.0),
    ]));

    let simulation = Simulation::new(world);

    let snapshot = simulation.snapshot();
    assert_eq!(snapshot.bodies.len(), 3);
    assert_eq!(snapshot.liquids.len(), 1);
    assert_eq!(snapshot.bodies[2].position, Vec2::new(10.0, 0.0));

    // The snapshot is a copy: the live world is unaffected by holding it,
    // and index accessors agree with it.
    assert_eq!(simulation.body_count(), 3);
    assert_eq!(simulation.liquid_count(), 1);
    assert!(simulation.body(3).is_none());
    assert!(simulation.liquid(1).is_none());

    simulation.request_stop();
}

#[test]
fn manual_nudges_reach_the_running_world() {
    let mut world = World::new(SimulationConfig::default().zero_gravity());
    world.add_body(
        Body::circle(Vec2::ZERO, 0.5, 0.5, false, Material::birch()).unwrap(),
    );

    let simulation = Simulation::new(world);
    let handle = simulation.spawn();

    // Arrow-key style nudging while the loop runs.
    for _ in 0..10 {
        assert!(simulation.move_body(0, Vec2::new(0.1, 0.0)));
        std::thread::sleep(Duration::from_millis(2));
    }

    simulation.request_stop();
    handle.join().unwrap();

    let body = simulation.body(0).unwrap();
    assert!((body.position.x - 1.0).abs() < 1e-9);
    assert!(!simulation.move_body(5, Vec2::new(1.0, 0.0)));
}
