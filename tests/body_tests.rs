use versics::{Body, BodyError, Bounds, SolverConfig, Vec2};

const EPSILON: f64 = 1e-9;

fn no_gravity(iterations: usize) -> SolverConfig {
    SolverConfig::new()
        .with_gravity(Vec2::ZERO)
        .with_iterations(iterations)
}

#[test]
fn stretched_link_relaxes_halfway_from_each_end() {
    // Rest length 5 is captured here; dragging particle 1 to x = 10 stretches the link.
    let mut body = Body::at_rest(&[Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0)], &[(0, 1)], &[])
        .unwrap()
        .with_solver(no_gravity(1));
    body.pin(1, Vec2::new(10.0, 0.0)).unwrap();
    body.unpin(1).unwrap();

    body.satisfy_constraints(Bounds::new(900.0, 900.0));

    let p = body.positions();
    assert!((p[0].x - 2.5).abs() < EPSILON, "a.x = {}", p[0].x);
    assert!((p[1].x - 7.5).abs() < EPSILON, "b.x = {}", p[1].x);
    assert!((p[0].distance(p[1]) - 5.0).abs() < EPSILON);
}

#[test]
fn later_links_see_positions_moved_earlier_in_the_pass() {
    let mut body = Body::at_rest(
        &[Vec2::new(0.0, 50.0), Vec2::new(5.0, 50.0), Vec2::new(10.0, 50.0)],
        &[(0, 1), (1, 2)],
        &[],
    )
    .unwrap()
    .with_solver(no_gravity(1));
    body.pin(1, Vec2::new(10.0, 50.0)).unwrap();
    body.pin(2, Vec2::new(20.0, 50.0)).unwrap();
    body.unpin(1).unwrap();
    body.unpin(2).unwrap();

    body.satisfy_constraints(Bounds::new(900.0, 900.0));

    // Link (0, 1) moves x1 to 7.5, so link (1, 2) corrects a 12.5 span, not 10
    let p = body.positions();
    assert!((p[0].x - 2.5).abs() < EPSILON, "x0 = {}", p[0].x);
    assert!((p[1].x - 11.25).abs() < EPSILON, "x1 = {}", p[1].x);
    assert!((p[2].x - 16.25).abs() < EPSILON, "x2 = {}", p[2].x);
}

#[test]
fn right_wall_bounce_scenario() {
    let mut body = Body::new(&[Vec2::new(905.0, 50.0)], &[Vec2::new(900.0, 50.0)], &[], &[])
        .unwrap()
        .with_solver(no_gravity(1).with_bounce(0.25));

    body.satisfy_constraints(Bounds::new(900.0, 900.0));

    let p = body.particles()[0];
    assert_eq!(p.position.x, 900.0);
    assert!((p.previous_position.x - 901.25).abs() < EPSILON);
}

#[test]
fn wall_contact_reverses_horizontal_motion() {
    let mut body = Body::new(&[Vec2::new(898.0, 50.0)], &[Vec2::new(894.0, 50.0)], &[], &[])
        .unwrap()
        .with_solver(no_gravity(6));
    let bounds = Bounds::new(900.0, 900.0);

    // Moving right at 4 per step: crosses the wall on this step
    body.integrate(1.0 / 60.0);
    body.satisfy_constraints(bounds);
    let p = body.particles()[0];
    assert_eq!(p.position.x, 900.0);
    assert!(p.previous_position.x > p.position.x);

    body.integrate(1.0 / 60.0);
    assert!(body.particles()[0].position.x < 900.0);
}

#[test]
fn integrate_leaves_locked_particles_alone() {
    let positions = [Vec2::new(100.0, 100.0), Vec2::new(120.0, 100.0)];
    let previous = [Vec2::new(95.0, 97.0), Vec2::new(120.0, 100.0)];
    let mut body = Body::new(&positions, &previous, &[(0, 1)], &[0]).unwrap();

    for _ in 0..10 {
        body.integrate(1.0 / 60.0);
    }
    assert_eq!(body.particles()[0].position, Vec2::new(100.0, 100.0));
    assert_eq!(body.particles()[0].previous_position, Vec2::new(95.0, 97.0));
    assert!(body.particles()[1].position.y > 100.0);
}

#[test]
fn boundary_still_moves_locked_particles() {
    let mut body = Body::at_rest(&[Vec2::new(100.0, 100.0)], &[], &[]).unwrap();
    body.pin(0, Vec2::new(950.0, -20.0)).unwrap();

    body.satisfy_constraints(Bounds::new(900.0, 900.0));

    assert!(body.is_locked(0));
    assert_eq!(body.particles()[0].position, Vec2::new(900.0, 0.0));
}

#[test]
fn relaxation_converges_toward_rest_lengths() {
    // A square with one diagonal brace, then skewed by dragging one corner
    let square = [
        Vec2::new(100.0, 100.0),
        Vec2::new(150.0, 100.0),
        Vec2::new(150.0, 150.0),
        Vec2::new(100.0, 150.0),
    ];
    let mut body = Body::at_rest(&square, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)], &[])
        .unwrap()
        .with_solver(no_gravity(1));
    body.pin(2, Vec2::new(170.0, 160.0)).unwrap();
    body.unpin(2).unwrap();

    let bounds = Bounds::new(900.0, 900.0);
    let initial_error = body.link_error();
    for _ in 0..200 {
        body.satisfy_constraints(bounds);
    }
    assert!(body.link_error() < initial_error * 1e-4, "error = {}", body.link_error());
}

#[test]
fn incremental_construction_keeps_indices() {
    let mut body = Body::at_rest(&[Vec2::new(10.0, 10.0)], &[], &[0]).unwrap();
    let b = body.add_particle(Vec2::new(10.0, 40.0));
    let c = body.add_particle(Vec2::new(40.0, 40.0));
    body.add_link(0, b).unwrap();
    body.add_link(b, c).unwrap();

    assert_eq!((b, c), (1, 2));
    assert_eq!(body.link_count(), 2);
    assert_eq!(body.links()[1].a, 1);
    assert_eq!(body.links()[1].b, 2);
    assert!((body.links()[1].rest_length - 30.0).abs() < EPSILON);
    assert_eq!(body.add_link(c, c).unwrap_err(), BodyError::SelfLink { index: 2 });
}

#[test]
fn out_of_range_indices_are_rejected() {
    let mut body = Body::at_rest(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)], &[], &[]).unwrap();
    let before = body.positions();

    assert_eq!(
        body.pin(2, Vec2::new(5.0, 5.0)).unwrap_err(),
        BodyError::IndexOutOfRange { index: 2, count: 2 }
    );
    assert_eq!(
        body.unpin(2).unwrap_err(),
        BodyError::IndexOutOfRange { index: 2, count: 2 }
    );
    assert_eq!(body.positions(), before);
    assert!(body.locked_indices().is_empty());
}

#[test]
fn unpin_of_free_particle_reports_not_locked() {
    let mut body = Body::at_rest(&[Vec2::new(0.0, 0.0)], &[], &[]).unwrap();
    assert_eq!(body.unpin(0).unwrap_err(), BodyError::NotLocked { index: 0 });
    assert!(!body.is_locked(0));
}

#[test]
fn closest_particle_prefers_lower_index_on_ties() {
    let body = Body::at_rest(
        &[Vec2::new(0.0, 10.0), Vec2::new(0.0, -10.0), Vec2::new(10.0, 0.0)],
        &[],
        &[],
    )
    .unwrap();
    // All three are exactly 10 away from the origin
    assert_eq!(body.closest_particle_within(Vec2::ZERO, 15.0), Some(0));
    assert_eq!(body.closest_particle_within(Vec2::ZERO, 9.0), None);
}
