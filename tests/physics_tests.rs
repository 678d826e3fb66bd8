use approx::assert_relative_eq;
use planet_merge::{
    arena::{Container, Floor, NO_GATE},
    bodies::{Body, RankId, RankTable},
    constraints::{Constraint, ConstraintHandler, ContainerConstraint, FloorConstraint, ScreenConstraint},
    core::{ArenaConfig, GameMode, Scene},
    error::GameError,
    integration::VerletParams,
    math::Vector2,
};

fn body(rank: RankId, x: f32, y: f32) -> Body {
    Body::new(rank, Vector2::new(x, y), &RankTable::default())
}

fn default_floors() -> Vec<Floor> {
    let arena = ArenaConfig::default();
    Floor::layout(arena.floor_count, &arena.ranks_per_floor, arena.floor_height, arena.top_margin)
        .expect("default layout is valid")
}

#[test]
fn test_body_creation() {
    let pluto = body(RankId::PLUTO, 10.0, 20.0);

    assert_eq!(pluto.rank(), RankId::PLUTO);
    assert_relative_eq!(pluto.radius(), 40.0);
    assert_relative_eq!(pluto.mass(), 4.0);
    assert_eq!(pluto.score(), 10);
    assert!(!pluto.is_pinned());
    assert!(!pluto.has_collided());

    let pinned = Body::new_pinned(RankId::SUN, Vector2::zeros(), &RankTable::default());
    assert!(pinned.is_pinned());
    assert_relative_eq!(pinned.mass(), 9.0);
}

#[test]
fn test_body_falls_under_gravity() {
    let params = VerletParams::default();
    let mut falling = body(RankId::MARS, 300.0, 100.0);

    for _ in 0..30 {
        falling.update(&params);
    }

    assert!(falling.position().y > 100.0);
    assert_relative_eq!(falling.position().x, 300.0);
    // Lagged velocity approaches friction * gravity / (1 - friction) = 10
    assert!(falling.velocity().y < 10.0);
}

#[test]
fn test_rank_table_rejects_bad_radii() {
    let scores = [1; 11];
    let mut radii = [30.0; 11];
    assert!(RankTable::new(radii, scores).is_ok());

    radii[4] = 0.0;
    assert!(matches!(RankTable::new(radii, scores), Err(GameError::InvalidParameter(_))));

    radii[4] = -10.0;
    assert!(matches!(RankTable::new(radii, scores), Err(GameError::InvalidParameter(_))));

    radii[4] = f32::NAN;
    assert!(matches!(RankTable::new(radii, scores), Err(GameError::InvalidParameter(_))));

    assert!(RankTable::default().validate().is_ok());
}

#[test]
fn test_collided_flag_sticks() {
    let mut b = body(RankId::MOON, 0.0, 0.0);
    b.mark_collided();
    b.update(&VerletParams::default());
    assert!(b.has_collided());
}

#[test]
fn test_container_layout_per_mode() {
    let arena = ArenaConfig::default();

    let single = Container::new(GameMode::Ascending, &arena);
    assert_relative_eq!(single.left(), 175.0);
    assert_relative_eq!(single.right(), 625.0);
    assert_relative_eq!(single.top(), 120.0);
    assert_relative_eq!(single.bottom(), 830.0);
    assert_relative_eq!(single.width(), 450.0);
    assert_eq!(single.bottom_right, Vector2::new(625.0, 830.0));

    let tower = Container::new(GameMode::Descending, &arena);
    assert_relative_eq!(tower.bottom(), 120.0 + 4.0 * 700.0);
    assert_relative_eq!(tower.left(), 175.0);
}

#[test]
fn test_screen_constraint() {
    let mut b = body(RankId::PLUTO, 300.0, 10.0);
    ScreenConstraint.apply(&mut b);
    assert_relative_eq!(b.position().y, 40.0);

    let mut low = body(RankId::PLUTO, 300.0, 500.0);
    ScreenConstraint.apply(&mut low);
    assert_relative_eq!(low.position().y, 500.0);
}

#[test]
fn test_container_constraint() {
    let container = Container::new(GameMode::Ascending, &ArenaConfig::default());
    let walls = ContainerConstraint::new(&container);

    let mut left = body(RankId::PLUTO, 100.0, 900.0);
    walls.apply(&mut left);
    assert_eq!(left.position(), Vector2::new(215.0, 790.0));

    let mut right = body(RankId::SUN, 700.0, 400.0);
    walls.apply(&mut right);
    assert_eq!(right.position(), Vector2::new(535.0, 400.0));
}

#[test]
fn test_constraints_are_idempotent() {
    let container = Container::new(GameMode::Ascending, &ArenaConfig::default());
    let walls = ContainerConstraint::new(&container);

    let cases = [(-50.0, -50.0), (1000.0, 2000.0), (300.0, 300.0), (175.0, 830.0)];

    for (x, y) in cases {
        let mut once = body(RankId::VENUS, x, y);
        ScreenConstraint.apply(&mut once);
        walls.apply(&mut once);

        let mut twice = once.clone();
        ScreenConstraint.apply(&mut twice);
        walls.apply(&mut twice);

        assert_eq!(once.position(), twice.position());
    }
}

#[test]
fn test_floor_layout_thresholds() {
    let floors = default_floors();

    assert_eq!(floors.len(), 4);
    assert_eq!(floors[0].next_rank_threshold, 7);
    assert_eq!(floors[1].next_rank_threshold, 4);
    assert_eq!(floors[2].next_rank_threshold, 0);
    assert_eq!(floors[3].next_rank_threshold, NO_GATE);
    assert!(floors[3].is_last());

    assert_relative_eq!(floors[0].start_y, 120.0);
    assert_relative_eq!(floors[0].end_y, 820.0);
    assert_relative_eq!(floors[3].start_y, 2220.0);
    assert_relative_eq!(floors[3].end_y, 2920.0);
    assert_eq!(floors[2].index, 2);
}

#[test]
fn test_floor_layout_stops_at_zero() {
    let floors = Floor::layout(2, &[10, 1], 700.0, 120.0).expect("valid layout");
    assert_eq!(floors[0].next_rank_threshold, 0);
    assert_eq!(floors[1].next_rank_threshold, NO_GATE);

    let floors = Floor::layout(3, &[5, 5, 1], 700.0, 120.0).expect("valid layout");
    let thresholds: Vec<i32> = floors.iter().map(|f| f.next_rank_threshold).collect();
    assert_eq!(thresholds, vec![5, 0, NO_GATE]);
}

#[test]
fn test_floor_layout_validation() {
    let invalid: [(usize, &[usize]); 6] = [
        (1, &[11]),
        (11, &[1; 11]),
        (4, &[3, 3, 5]),
        (4, &[3, 3, 0, 5]),
        (4, &[3, 3, 4, 2]),
        (4, &[3, 3, 3, 2]),
    ];

    for (count, per_floor) in invalid {
        let result = Floor::layout(count, per_floor, 700.0, 120.0);
        assert!(
            matches!(result, Err(GameError::InvalidFloorLayout(_))),
            "layout {:?} over {} floors should be rejected",
            per_floor,
            count
        );
    }
}

#[test]
fn test_floor_gates() {
    let floors = default_floors();

    assert!(floors[0].lets_through(RankId::URANUS));
    assert!(!floors[0].lets_through(RankId::SATURN));
    assert!(floors[1].lets_through(RankId::VENUS));
    assert!(!floors[1].lets_through(RankId::EARTH));
    assert!(floors[2].lets_through(RankId::PLUTO));
    assert!(!floors[3].lets_through(RankId::PLUTO));
}

#[test]
fn test_floor_constraint() {
    let floors = default_floors();
    let gate = FloorConstraint::new(&floors, 50.0);

    // Too big for the top gate: rests on it
    let mut sun = body(RankId::SUN, 400.0, 800.0);
    gate.apply(&mut sun);
    assert_relative_eq!(sun.position().y, 820.0 - 50.0 - 90.0);

    // Small enough to fall through
    let mut pluto = body(RankId::PLUTO, 400.0, 800.0);
    gate.apply(&mut pluto);
    assert_relative_eq!(pluto.position().y, 800.0);

    // Above every floor: untouched
    let mut high = body(RankId::SUN, 400.0, 50.0);
    gate.apply(&mut high);
    assert_relative_eq!(high.position().y, 50.0);

    // The bottom floor stops everything
    let mut bottom = body(RankId::PLUTO, 400.0, 2900.0);
    gate.apply(&mut bottom);
    assert_relative_eq!(bottom.position().y, 2920.0 - 50.0 - 40.0);

    let mut again = bottom.clone();
    gate.apply(&mut again);
    assert_eq!(again.position(), bottom.position());
}

#[test]
fn test_scene_floor_lookup() {
    let arena = ArenaConfig::default();
    let scene = Scene::with_floors(Container::new(GameMode::Descending, &arena), default_floors());

    assert_eq!(scene.floor_at(100.0), None);
    assert_eq!(scene.floor_at(120.0).map(|f| f.index), Some(0));
    assert_eq!(scene.floor_at(1000.0).map(|f| f.index), Some(1));
    // Shared boundaries belong to the upper floor
    assert_eq!(scene.floor_at(820.0).map(|f| f.index), Some(0));
}

#[test]
fn test_constraint_handler_clamps_every_body() {
    let arena = ArenaConfig::default();
    let mut scene = Scene::new(Container::new(GameMode::Ascending, &arena));
    let a = scene.add_body(body(RankId::PLUTO, 0.0, 0.0));
    let b = scene.add_body(body(RankId::MOON, 900.0, 2000.0));

    ConstraintHandler::new(50.0).apply_all(&mut scene);

    assert_eq!(scene.body(a).map(Body::position), Some(Vector2::new(215.0, 40.0)));
    assert_eq!(scene.body(b).map(Body::position), Some(Vector2::new(580.0, 785.0)));
}

#[test]
fn test_scene_update_skips_pinned() {
    let arena = ArenaConfig::default();
    let table = RankTable::default();
    let mut scene = Scene::new(Container::new(GameMode::Ascending, &arena));
    let pinned = scene.add_body(Body::new_pinned(RankId::PLUTO, Vector2::new(400.0, 40.0), &table));
    let free = scene.add_body(body(RankId::PLUTO, 300.0, 300.0));

    scene.update(&VerletParams::default());

    assert_eq!(scene.body(pinned).map(Body::position), Some(Vector2::new(400.0, 40.0)));
    assert_eq!(scene.body(free).map(Body::position), Some(Vector2::new(300.0, 302.5)));

    assert!(scene.remove_body(free).is_some());
    assert!(scene.remove_body(free).is_none());
    assert_eq!(scene.body_count(), 1);

    scene.clear_bodies();
    assert_eq!(scene.body_count(), 0);
}
