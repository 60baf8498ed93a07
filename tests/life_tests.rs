use lifeview::cell::Cell;
use lifeview::cell::Coord;
use lifeview::cell::LiveSet;
use lifeview::cell::live_set;
use lifeview::life;
use lifeview::life::Life;
use lifeview::pattern::Pattern;
use proptest::prelude::*;

fn translate(set: &LiveSet, dx: Coord, dy: Coord) -> LiveSet {
    set.iter().map(|c| c.translate(dx, dy)).collect()
}

#[test]
fn block_is_still() {
    let block = live_set(&[(0, 0), (0, 1), (1, 0), (1, 1)]);

    assert_eq!(life::step(&block), block);
}

#[test]
fn blinker_has_period_two() {
    let horizontal = live_set(&[(0, 0), (1, 0), (2, 0)]);
    let vertical = live_set(&[(1, -1), (1, 0), (1, 1)]);

    assert_eq!(life::step(&horizontal), vertical);
    assert_eq!(life::step(&vertical), horizontal);
}

#[test]
fn glider_moves_diagonally() {
    let glider = Pattern::Glider.cells();

    let mut life = Life::new(glider.clone());
    life.advance(4);

    assert_eq!(life.cells(), &translate(&glider, 1, 1));
    assert_eq!(life.generation(), 4);
}

#[test]
fn glider_travels_far_from_origin() {
    let glider = Pattern::Glider.cells();

    let mut life = Life::new(glider.clone());
    life.advance(400);

    assert_eq!(life.cells(), &translate(&glider, 100, 100));
}

#[test]
fn patterns_work_near_coordinate_limits() {
    let far = i64::MAX / 2;
    let block = translate(&Pattern::Block.cells(), -far, far);

    assert_eq!(life::step(&block), block);
}

#[test]
fn the_world_ends_at_the_coordinate_limits() {
    // a block in the bottom right corner stays a block
    let block = translate(&Pattern::Block.cells(), i64::MAX - 1, i64::MAX - 1);
    assert_eq!(life::step(&block), block);

    // a blinker across the top edge can't grow past it, and doesn't wrap to the bottom
    let blinker = live_set(&[(-1, i64::MIN), (0, i64::MIN), (1, i64::MIN)]);
    assert_eq!(life::step(&blinker), live_set(&[(0, i64::MIN), (0, i64::MIN + 1)]));
}

#[test]
fn empty_is_absorbing() {
    assert!(life::step(&LiveSet::new()).is_empty());

    let mut life = Life::new(live_set(&[(0, 0)]));
    life.advance(10);

    assert_eq!(life.population(), 0);
    assert_eq!(life.generation(), 10);
}

#[test]
fn gosper_gun_keeps_growing() {
    let mut life = Life::new(Pattern::GosperGun.cells());
    life.advance(300);

    // one glider leaves the gun every 30 generations
    assert!(life.population() > 60, "population {}", life.population());
}

#[test]
fn r_pentomino_is_not_static() {
    let r = Pattern::RPentomino.cells();

    assert_ne!(life::step(&r), r);
}

fn cells() -> impl Strategy<Value = LiveSet> {
    prop::collection::hash_set((-20i64..20, -20i64..20).prop_map(Cell::from), 0..80)
}

proptest! {
    #[test]
    fn step_does_not_mutate_input(set in cells()) {
        let before = set.clone();
        let _ = life::step(&set);

        prop_assert_eq!(set, before);
    }

    #[test]
    fn step_commutes_with_translation(set in cells(), dx in -1000i64..1000, dy in -1000i64..1000) {
        prop_assert_eq!(
            life::step(&translate(&set, dx, dy)),
            translate(&life::step(&set), dx, dy)
        );
    }

    #[test]
    fn births_stay_next_to_live_cells(set in cells()) {
        let next = life::step(&set);

        for cell in next.difference(&set) {
            prop_assert!(cell.neighbors().any(|n| set.contains(&n)));
        }
    }

    #[test]
    fn toggle_twice_is_identity(set in cells(), x in -30i64..30, y in -30i64..30) {
        let mut life = Life::new(set.clone());
        let cell = Cell::new(x, y);

        life.toggle(cell);
        life.toggle(cell);

        prop_assert_eq!(life.cells(), &set);
    }
}
