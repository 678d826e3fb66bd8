use approx::assert_relative_eq;
use planet_merge::{
    bodies::{RankId, RankTable, RANK_COUNT},
    integration::{integrate, VerletParams, VerletState},
    math::{self, Aabb, Vector2},
};

#[test]
fn test_aabb_from_circle() {
    let aabb = Aabb::from_circle(Vector2::new(10.0, 20.0), 5.0);

    assert_eq!(aabb.min, Vector2::new(5.0, 15.0));
    assert_eq!(aabb.max, Vector2::new(15.0, 25.0));
    assert_eq!(aabb, Aabb::new(Vector2::new(5.0, 15.0), Vector2::new(15.0, 25.0)));
}

#[test]
fn test_aabb_intersection() {
    let a = Aabb::from_circle(Vector2::new(0.0, 0.0), 40.0);
    let touching = Aabb::from_circle(Vector2::new(80.0, 0.0), 40.0);
    let apart = Aabb::from_circle(Vector2::new(80.5, 0.0), 40.0);
    let diagonal = Aabb::from_circle(Vector2::new(70.0, 70.0), 40.0);

    assert!(a.intersects(&touching));
    assert!(!a.intersects(&apart));
    assert!(a.intersects(&diagonal));

    // Separated on one axis only is still separated
    let below = Aabb::from_circle(Vector2::new(0.0, 100.0), 40.0);
    assert!(!a.intersects(&below));
}

#[test]
fn test_direction_and_midpoint() {
    let a = Vector2::new(3.0, 4.0);
    let b = Vector2::zeros();

    let n = math::direction_or(&a, &b, Vector2::new(0.0, -1.0));
    assert_relative_eq!(n.x, 0.6);
    assert_relative_eq!(n.y, 0.8);

    // Coincident points fall back instead of producing NaN
    let fallback = math::direction_or(&a, &a, Vector2::new(0.0, -1.0));
    assert_eq!(fallback, Vector2::new(0.0, -1.0));

    assert_eq!(math::midpoint(&a, &b), Vector2::new(1.5, 2.0));
    assert!(math::approx_zero(1.0e-7));
    assert!(!math::approx_eq(1.0, 1.001));
}

#[test]
fn test_verlet_integration_lags_velocity() {
    let params = VerletParams::default();
    let mut state = VerletState::new(Vector2::zeros(), 40.0);

    integrate(&mut state, &params);
    assert_eq!(state.velocity, Vector2::zeros());
    assert_relative_eq!(state.position.y, 2.5);

    integrate(&mut state, &params);
    assert_relative_eq!(state.velocity.y, 2.0);
    assert_relative_eq!(state.previous_position.y, 2.5);
    assert_relative_eq!(state.position.y, 7.0);
    assert_relative_eq!(state.position.x, 0.0);
}

#[test]
fn test_verlet_position_edits_become_velocity() {
    let params = VerletParams {
        friction: 0.8,
        gravity: Vector2::zeros(),
    };
    let mut state = VerletState::new(Vector2::new(100.0, 100.0), 40.0);

    // A correction pushes the point; the next step reads it as motion
    state.position.x += 10.0;
    integrate(&mut state, &params);

    assert_relative_eq!(state.velocity.x, 8.0);
    assert_relative_eq!(state.position.x, 118.0);
}

#[test]
fn test_pinned_state_is_frozen() {
    let params = VerletParams::default();
    let mut state = VerletState::new(Vector2::new(5.0, 5.0), 40.0);
    state.pinned = true;

    for _ in 0..10 {
        integrate(&mut state, &params);
    }

    assert_eq!(state.position, Vector2::new(5.0, 5.0));
    assert_eq!(state.velocity, Vector2::zeros());
}

#[test]
fn test_mass_derives_from_radius() {
    let state = VerletState::new(Vector2::zeros(), 65.0);
    assert_relative_eq!(state.mass(), 6.5);
}

#[test]
fn test_teleport_keeps_point_at_rest() {
    let params = VerletParams {
        friction: 0.8,
        gravity: Vector2::zeros(),
    };
    let mut state = VerletState::new(Vector2::zeros(), 40.0);
    state.teleport(Vector2::new(50.0, 0.0));
    integrate(&mut state, &params);

    assert_eq!(state.velocity, Vector2::zeros());
    assert_eq!(state.position, Vector2::new(50.0, 0.0));
}

#[test]
fn test_rank_progression() {
    assert_eq!(RankId::PLUTO.next(), Some(RankId::MOON));
    assert_eq!(RankId::SUN.next(), None);
    assert_eq!(RankId::SUN.previous(), Some(RankId::JUPITER));
    assert_eq!(RankId::PLUTO.previous(), None);
    assert_eq!(RankId::new(RANK_COUNT), None);
    assert_eq!(RankId::new(5), Some(RankId::EARTH));
    assert_eq!(RankId::all().count(), RANK_COUNT);
    assert_eq!(RankId::NEPTUNE.to_string(), "Neptune");
}

#[test]
fn test_rank_table_defaults() {
    let table = RankTable::default();

    assert_relative_eq!(table.radius(RankId::PLUTO), 40.0);
    assert_relative_eq!(table.radius(RankId::SUN), 90.0);
    assert_eq!(table.score(RankId::MOON), 12);
    assert_eq!(table.score(RankId::SUN), 30);

    let radii: Vec<f32> = RankId::all().map(|r| table.radius(r)).collect();
    assert!(radii.windows(2).all(|w| w[0] < w[1]));
}
