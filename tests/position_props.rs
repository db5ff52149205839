use game_position::{msb_index, Position, PositionError, MAX_POSITION_DEPTH};
use proptest::prelude::*;

/// Any position inside the tree.
fn arb_position(max_depth: u32) -> impl Strategy<Value = Position> {
    (0..=max_depth).prop_flat_map(|depth| {
        (0..(1u64 << depth)).prop_map(move |index| Position::new(depth, index))
    })
}

/// A depth, a start index and a step count that stays inside that depth.
fn arb_walk() -> impl Strategy<Value = (u32, u64, u64)> {
    (0u32..=20).prop_flat_map(|depth| {
        let size = 1u64 << depth;
        (0..size).prop_flat_map(move |start| {
            let room = (size - 1 - start).min(64);
            (Just(depth), Just(start), 0..=room)
        })
    })
}

proptest! {
    #[test]
    fn prop_gindex_round_trip(pos in arb_position(MAX_POSITION_DEPTH)) {
        let back = Position::from_gindex(pos.to_gindex()).unwrap();
        prop_assert_eq!(back, pos);
        prop_assert!(back.is_valid());
    }

    #[test]
    fn prop_gindex_order_matches_breadth_first(
        a in arb_position(20),
        b in arb_position(20),
    ) {
        let bfs = (a.depth(), a.index_at_depth()).cmp(&(b.depth(), b.index_at_depth()));
        prop_assert_eq!(a.to_gindex().cmp(&b.to_gindex()), bfs);
        prop_assert_eq!(a.cmp(&b), bfs);
    }

    #[test]
    fn prop_attack_descends_left(pos in arb_position(MAX_POSITION_DEPTH - 1)) {
        let attacked = pos.attack().unwrap();
        prop_assert_eq!(attacked.depth(), pos.depth() + 1);
        prop_assert_eq!(attacked.index_at_depth(), pos.index_at_depth() * 2);
        prop_assert_eq!(attacked.parent().unwrap(), pos);
    }

    #[test]
    fn prop_defend_lands_under_right_sibling(pos in arb_position(MAX_POSITION_DEPTH - 1)) {
        prop_assume!(!pos.is_root());
        let defended = pos.defend().unwrap();
        prop_assert_eq!(defended.depth(), pos.depth() + 1);
        prop_assert_eq!(defended.index_at_depth(), (pos.index_at_depth() | 1) << 1);
    }

    #[test]
    fn prop_move_right_composes((depth, start, k) in arb_walk()) {
        let mut pos = Position::new(depth, start);
        for _ in 0..k {
            pos = pos.move_right().unwrap();
        }
        prop_assert_eq!(pos, Position::new(depth, start + k));
    }

    #[test]
    fn prop_move_right_stops_at_last_index(depth in 0u32..=MAX_POSITION_DEPTH) {
        let last = Position::new(depth, (1u64 << depth) - 1);
        prop_assert_eq!(
            last.move_right(),
            Err(PositionError::IndexOutOfRange { depth, index_at_depth: 1u64 << depth })
        );
    }

    #[test]
    fn prop_trace_index_of_leaf_is_index(pos in arb_position(MAX_POSITION_DEPTH)) {
        prop_assert_eq!(pos.trace_index(pos.depth()).unwrap(), pos.index_at_depth());
    }

    #[test]
    fn prop_trace_index_is_rightmost_leaf(pos in arb_position(16), extra in 0u32..8) {
        let max_depth = pos.depth() + extra;
        let mut rightmost = pos;
        for _ in 0..extra {
            // right child
            rightmost = Position::from_gindex(rightmost.to_gindex() * 2 + 1).unwrap();
        }
        prop_assert_eq!(pos.trace_index(max_depth).unwrap(), rightmost.index_at_depth());
    }

    #[test]
    fn prop_only_root_is_root(pos in arb_position(10)) {
        prop_assert_eq!(pos.is_root(), pos.depth() == 0 && pos.index_at_depth() == 0);
        prop_assert_eq!(pos.is_root(), pos == Position::root());
    }

    #[test]
    fn prop_msb_index_is_floor_log2(x in 1u64..=u64::MAX) {
        let msb = msb_index(x);
        prop_assert!(x >> msb == 1);
    }
}

#[test]
fn gindex_is_bijective_for_small_trees() {
    let mut expected = 1u64;
    for depth in 0..=10u32 {
        for index in 0..(1u64 << depth) {
            let pos = Position::new(depth, index);
            assert_eq!(pos.to_gindex(), expected);
            expected += 1;
        }
    }
}

#[test]
fn msb_index_examples() {
    assert_eq!(msb_index(1), 0);
    assert_eq!(msb_index(2), 1);
    assert_eq!(msb_index(7), 2);
    assert_eq!(msb_index(8), 3);
}

#[test]
fn root_trace_index_fans_out_right() {
    assert_eq!(Position::root().trace_index(3).unwrap(), 0b111);
}

#[test]
fn attack_and_defend_from_right_child() {
    let pos = Position::new(2, 1);
    assert_eq!(pos.attack().unwrap(), Position::new(3, 2));
    assert_eq!(pos.defend().unwrap(), Position::new(3, 2));
}

#[test]
fn invalid_navigation_is_an_error() {
    assert_eq!(Position::from_gindex(0), Err(PositionError::ZeroGIndex));
    assert_eq!(Position::root().parent(), Err(PositionError::RootHasNoParent));
    assert!(matches!(
        Position::new(3, 7).move_right(),
        Err(PositionError::IndexOutOfRange { depth: 3, index_at_depth: 8 })
    ));
}
