use proptest::prelude::*;
use tile3d_geom::IVec3;
use tile3d_grid::BlockGrid;

#[derive(Clone, Debug)]
enum Op {
    Create(IVec3, Option<IVec3>),
    Destroy(IVec3),
    Snapshot,
    Restore,
}

fn small_pos() -> impl Strategy<Value = IVec3> {
    (-3i32..=3, -1i32..=1, -3i32..=3).prop_map(|(x, y, z)| IVec3::new(x, y, z))
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (small_pos(), proptest::option::of(small_pos())).prop_map(|(p, c)| Op::Create(p, c)),
        3 => small_pos().prop_map(Op::Destroy),
        1 => Just(Op::Snapshot),
        1 => Just(Op::Restore),
    ]
}

proptest! {
    // Index and sequence agree after any mix of edits and snapshot restores,
    // and the sequence order matches a plain ordered model
    #[test]
    fn index_tracks_sequence(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut grid = BlockGrid::new();
        let mut model: Vec<IVec3> = Vec::new();
        let mut saved: Option<(Vec<tile3d_blocks::Block>, Vec<IVec3>)> = None;

        for op in ops {
            match op {
                Op::Create(p, c) => {
                    grid.create(p, c);
                    if !model.contains(&p) {
                        model.push(p);
                    }
                }
                Op::Destroy(p) => {
                    grid.destroy(p);
                    model.retain(|q| *q != p);
                }
                Op::Snapshot => saved = Some((grid.blocks().to_vec(), model.clone())),
                Op::Restore => {
                    if let Some((blocks, m)) = saved.clone() {
                        *grid.blocks_mut() = blocks;
                        grid.rebuild_index();
                        model = m;
                    }
                }
            }
            prop_assert!(grid.is_index_consistent());
            let order: Vec<IVec3> = grid.iter().map(|b| b.position).collect();
            prop_assert_eq!(&order, &model);
            for p in &model {
                prop_assert_eq!(grid.at(*p).map(|b| b.position), Some(*p));
            }
            prop_assert_eq!(grid.stats().indexed, model.len());
        }
    }

    // Destroy then lookup yields absent whether or not the block existed
    #[test]
    fn destroy_then_at_is_absent(seed in prop::collection::vec(small_pos(), 0..16), target in small_pos()) {
        let mut grid = BlockGrid::new();
        for p in seed {
            grid.create(p, None);
        }
        grid.destroy(target);
        prop_assert!(grid.at(target).is_none());
        prop_assert!(!grid.contains(target));
    }
}
