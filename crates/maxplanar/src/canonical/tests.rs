use super::*;
use crate::gen::{icosahedron, octahedron, random_triangulation, tetrahedron, StackedCfg};
use crate::graph::Graph;
use crate::membership::{Backend, BitSet, MembershipSet, SortedSet, TreeSet};
use proptest::prelude::*;

fn k5_with_pendant_pair() -> Graph {
    // K5 on 0..5 plus vertex 5 joined to 0 and 1: E = 12 = 3*6-6, contains K5
    let mut edges: Vec<(usize, usize)> = (0..5)
        .flat_map(|a| (a + 1..5).map(move |b| (a, b)))
        .collect();
    edges.extend([(5, 0), (5, 1)]);
    Graph::from_edges(6, edges).unwrap()
}

fn k33_with_triangle() -> Graph {
    // K3,3 between {0,1,2} and {3,4,5} plus triangle 0-1-2: E = 12, contains K3,3
    let mut edges: Vec<(usize, usize)> = (0..3)
        .flat_map(|a| (3..6).map(move |b| (a, b)))
        .collect();
    edges.extend([(0, 1), (1, 2), (0, 2)]);
    Graph::from_edges(6, edges).unwrap()
}

fn cycle(n: usize) -> Graph {
    Graph::from_edges(n, (0..n).map(|i| (i, (i + 1) % n))).unwrap()
}

fn seed(v1: usize, v2: usize, vn: usize) -> SeedTriangle {
    SeedTriangle { v1, v2, vn }
}

fn index_of(boundary: &[usize]) -> PositionIndex {
    let mut idx = PositionIndex::new(16);
    idx.rebuild(boundary);
    idx
}

// ---- consecutive-run test ----

#[test]
fn consecutive_run_at_start_middle_and_end() {
    let b = [10, 11, 12, 13, 14];
    let idx = index_of(&b);
    assert_eq!(are_consecutive(&[10, 11], &b, &idx), Some(Run { lb: 0, hb: 1 }));
    assert_eq!(
        are_consecutive(&[13, 11, 12], &b, &idx),
        Some(Run { lb: 1, hb: 3 })
    );
    assert_eq!(are_consecutive(&[14, 13], &b, &idx), Some(Run { lb: 3, hb: 4 }));
    assert_eq!(
        are_consecutive(&[10, 11, 12, 13, 14], &b, &idx),
        Some(Run { lb: 0, hb: 4 })
    );
}

#[test]
fn consecutive_run_rejects_wrap_gaps_and_strangers() {
    let b = [10, 11, 12, 13, 14];
    let idx = index_of(&b);
    // the boundary is a path; last-to-first is not adjacent
    assert_eq!(are_consecutive(&[14, 10], &b, &idx), None);
    assert_eq!(are_consecutive(&[13, 14, 10], &b, &idx), None);
    assert_eq!(are_consecutive(&[11, 13], &b, &idx), None);
    assert_eq!(are_consecutive(&[11, 15], &b, &idx), None);
    assert_eq!(are_consecutive(&[], &b, &idx), None);
    assert_eq!(are_consecutive(&[10, 11, 12], &b[..2], &index_of(&b[..2])), None);
}

#[test]
fn position_index_forgets_buried_vertices() {
    let mut idx = PositionIndex::new(8);
    idx.rebuild(&[0, 3, 5, 1]);
    assert_eq!(idx.get(5), Some(2));
    idx.rebuild(&[0, 7, 1]);
    assert_eq!(idx.get(5), None);
    assert_eq!(idx.get(3), None);
    assert_eq!(idx.get(7), Some(1));
    assert_eq!(idx.get(100), None);
}

// ---- ordering builder ----

#[test]
fn builder_orders_tetrahedron_back_to_front() {
    let g = tetrahedron();
    let order = canonical_order::<SortedSet>(&g, seed(0, 3, 1)).unwrap();
    // vn is eliminated first and lands in the last slot
    assert_eq!(order.as_slice(), &[0, 3, 2, 1]);
}

#[test]
fn builder_orders_icosahedron() {
    let g = icosahedron();
    let order = canonical_order::<SortedSet>(&g, seed(0, 5, 1)).unwrap();
    assert_eq!(
        order.into_vec(),
        vec![0, 5, 4, 9, 10, 11, 8, 7, 6, 3, 2, 1]
    );
}

#[test]
fn builder_fails_without_link_vertex() {
    let g = k5_with_pendant_pair();
    let err = canonical_order::<SortedSet>(&g, seed(0, 5, 1)).unwrap_err();
    assert_eq!(err, OrderFailure { placed: 1 });
}

#[test]
fn builder_outputs_a_permutation() {
    let t = random_triangulation(
        StackedCfg {
            vertices: 50,
            flips: 120,
        },
        11,
    )
    .unwrap();
    let r = recognize::<SortedSet>(&t.graph, RecognizeCfg::default());
    let mut order = r.witness.unwrap().order.into_vec();
    order.sort_unstable();
    assert_eq!(order, (0..50).collect::<Vec<_>>());
}

// ---- replay ----

#[test]
fn replay_ends_on_the_seed_triangle() {
    let g = octahedron();
    let order = canonical_order::<SortedSet>(&g, seed(0, 5, 1)).unwrap();
    assert_eq!(order.as_slice(), &[0, 5, 4, 3, 2, 1]);
    // the last vertex (vn) sees the whole boundary, leaving [v1, vn, v2]
    assert_eq!(replay::<SortedSet>(&g, &order), Ok(vec![0, 1, 5]));
}

#[test]
fn replay_rejects_non_contiguous_attachment() {
    let g = k33_with_triangle();
    let order = canonical_order::<SortedSet>(&g, seed(0, 5, 1)).unwrap();
    assert_eq!(order.as_slice(), &[0, 5, 2, 4, 3, 1]);
    assert_eq!(
        replay::<SortedSet>(&g, &order),
        Err(ReplayFailure::ConsecutiveRun { step: 4, vertex: 3 })
    );
}

#[test]
fn replay_rejects_single_attachment_point() {
    // triangle 0-1-2 with vertex 3 hanging off 0
    let g = Graph::from_edges(4, [(0, 1), (1, 2), (0, 2), (0, 3)]).unwrap();
    let order = CanonicalOrder::from_vec(vec![0, 1, 2, 3]);
    assert_eq!(
        replay::<TreeSet>(&g, &order),
        Err(ReplayFailure::ConsecutiveRun { step: 3, vertex: 3 })
    );
}

#[test]
fn replay_rejects_vertex_without_earlier_neighbors() {
    // triangle 0-1-2 and a separate edge 3-4: vertex 3 sees nothing placed
    let g = Graph::from_edges(5, [(0, 1), (1, 2), (0, 2), (3, 4)]).unwrap();
    let order = CanonicalOrder::from_vec(vec![0, 1, 2, 3, 4]);
    assert_eq!(
        replay::<BitSet>(&g, &order),
        Err(ReplayFailure::ConsecutiveRun { step: 3, vertex: 3 })
    );
}

#[test]
fn replay_checks_order_shape() {
    let g = tetrahedron();
    assert_eq!(
        replay::<SortedSet>(&g, &CanonicalOrder::from_vec(vec![0, 1, 2])),
        Err(ReplayFailure::OrderLength {
            expected: 4,
            found: 3
        })
    );
    assert_eq!(
        replay::<SortedSet>(&g, &CanonicalOrder::from_vec(vec![0, 1, 2, 9])),
        Err(ReplayFailure::VertexOutOfRange { vertex: 9 })
    );
}

// ---- recognizer ----

#[test]
fn tetrahedron_is_maximal_planar() {
    let r = recognize::<SortedSet>(&tetrahedron(), RecognizeCfg::default());
    assert_eq!(r.verdict, Verdict::MaximalPlanar);
    assert_eq!(r.rejection, None);
    assert_eq!(r.seeds_tried(), 1);
    let w = r.witness.unwrap();
    assert_eq!(w.seed, seed(0, 3, 1));
    assert_eq!(w.order.as_slice(), &[0, 3, 2, 1]);
}

#[test]
fn octahedron_and_icosahedron_are_maximal_planar() {
    for g in [octahedron(), icosahedron()] {
        for backend in Backend::ALL {
            assert!(recognize_with(&g, backend, RecognizeCfg::default()).is_maximal_planar());
        }
    }
}

#[test]
fn triangle_is_maximal_planar() {
    let g = Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap();
    assert!(is_maximal_planar(&g));
}

#[test]
fn five_cycle_fails_edge_gate_without_seed_search() {
    let r = recognize::<SortedSet>(&cycle(5), RecognizeCfg::default());
    assert_eq!(r.verdict, Verdict::NotMaximalPlanar);
    assert_eq!(
        r.rejection,
        Some(Rejection::EdgeCount {
            expected: Some(9),
            found: 5
        })
    );
    assert!(r.attempts.is_empty());
    assert_eq!(r.seeds_tried(), 0);
}

#[test]
fn tiny_graphs_are_rejected_by_the_gate() {
    let k2 = Graph::from_edges(2, [(0, 1)]).unwrap();
    assert_eq!(
        recognize::<SortedSet>(&k2, RecognizeCfg::default()).rejection,
        Some(Rejection::EdgeCount {
            expected: Some(0),
            found: 1
        })
    );
    assert_eq!(
        recognize::<SortedSet>(&Graph::empty(1), RecognizeCfg::default()).rejection,
        Some(Rejection::EdgeCount {
            expected: None,
            found: 0
        })
    );
    // two isolated vertices pass the count (3*2-6 = 0) but have no seed
    let r = recognize::<SortedSet>(&Graph::empty(2), RecognizeCfg::default());
    assert_eq!(r.rejection, Some(Rejection::SeedsExhausted));
    assert!(r.attempts.is_empty());
}

#[test]
fn edge_gate_holds_for_every_backend() {
    // a triangulation minus one edge
    let g = octahedron();
    let edges: Vec<(usize, usize)> = g.edges().skip(1).map(|(a, b, _)| (a, b)).collect();
    let h = Graph::from_edges(6, edges).unwrap();
    for backend in Backend::ALL {
        let r = recognize_with(&h, backend, RecognizeCfg::default());
        assert!(!r.is_maximal_planar());
        assert_eq!(r.seeds_tried(), 0);
    }
}

#[test]
fn k5_subgraph_with_matching_edge_count_is_rejected() {
    let r = recognize::<SortedSet>(&k5_with_pendant_pair(), RecognizeCfg::default());
    assert_eq!(r.verdict, Verdict::NotMaximalPlanar);
    assert_eq!(r.rejection, Some(Rejection::SeedsExhausted));
    assert_eq!(r.seeds_tried(), 1);
    assert_eq!(
        r.attempts[0],
        SeedAttempt {
            seed: seed(0, 5, 1),
            outcome: SeedOutcome::OrderFailed(OrderFailure { placed: 1 }),
        }
    );
    assert!(r.attempts[1..]
        .iter()
        .all(|a| a.outcome == SeedOutcome::NotTriangle));
}

#[test]
fn k33_subgraph_with_matching_edge_count_is_rejected() {
    for backend in Backend::ALL {
        let r = recognize_with(&k33_with_triangle(), backend, RecognizeCfg::default());
        assert_eq!(r.rejection, Some(Rejection::SeedsExhausted));
        assert_eq!(r.seeds_tried(), 2);
        assert!(r
            .attempts
            .iter()
            .filter(|a| a.outcome != SeedOutcome::NotTriangle)
            .all(|a| matches!(a.outcome, SeedOutcome::Invalid(_))));
    }
}

#[test]
fn non_triangle_candidates_are_recorded_but_not_tried() {
    let cfg = RecognizeCfg {
        pivot: PivotChoice::Smallest,
        ..RecognizeCfg::default()
    };
    // icosahedron: v1 = 0, v2 = 1; vn = 2 wins immediately
    let r = recognize::<SortedSet>(&icosahedron(), cfg);
    assert!(r.is_maximal_planar());
    assert_eq!(r.witness.unwrap().seed, seed(0, 1, 2));
    // K3,3 + triangle: 3 and 4 are not adjacent to the pivot 5
    let r = recognize::<SortedSet>(&k33_with_triangle(), RecognizeCfg::default());
    let skipped: Vec<usize> = r
        .attempts
        .iter()
        .filter(|a| a.outcome == SeedOutcome::NotTriangle)
        .map(|a| a.seed.vn)
        .collect();
    assert_eq!(skipped, vec![3, 4]);
}

#[test]
fn seed_budget_stops_the_search() {
    let cfg = RecognizeCfg {
        max_seed_attempts: Some(0),
        ..RecognizeCfg::default()
    };
    let r = recognize::<BitSet>(&tetrahedron(), cfg);
    assert_eq!(r.rejection, Some(Rejection::SeedBudgetExhausted { budget: 0 }));
    assert_eq!(r.seeds_tried(), 0);

    let cfg = RecognizeCfg {
        max_seed_attempts: Some(1),
        ..RecognizeCfg::default()
    };
    assert!(recognize::<BitSet>(&tetrahedron(), cfg).is_maximal_planar());
}

#[test]
fn recognition_is_idempotent() {
    let t = random_triangulation(
        StackedCfg {
            vertices: 60,
            flips: 150,
        },
        5,
    )
    .unwrap();
    let a = recognize::<TreeSet>(&t.graph, RecognizeCfg::default());
    let b = recognize::<TreeSet>(&t.graph, RecognizeCfg::default());
    assert!(a.is_maximal_planar());
    assert_eq!(a, b);
}

#[test]
fn random_triangulations_are_recognized_with_either_pivot() {
    for s in 0..20u64 {
        let t = random_triangulation(
            StackedCfg {
                vertices: 8 + (s as usize) * 3,
                flips: 40,
            },
            s,
        )
        .unwrap();
        for pivot in [PivotChoice::Largest, PivotChoice::Smallest] {
            let cfg = RecognizeCfg {
                pivot,
                ..RecognizeCfg::default()
            };
            assert!(
                recognize::<SortedSet>(&t.graph, cfg).is_maximal_planar(),
                "seed {s}, pivot {pivot:?}"
            );
        }
    }
}

#[test]
fn edge_count_formula() {
    assert_eq!(triangulation_edge_count(0), None);
    assert_eq!(triangulation_edge_count(1), None);
    assert_eq!(triangulation_edge_count(2), Some(0));
    assert_eq!(triangulation_edge_count(12), Some(30));
    assert_eq!(triangulation_edge_count(usize::MAX), None);
}

// ---- backend equivalence ----

fn orders_for_all_seeds<S: MembershipSet>(g: &Graph) -> Vec<Option<(Vec<usize>, bool)>> {
    let v1 = g.low_degree_vertex(5).unwrap();
    let nbrs = g.neighbors(v1);
    let v2 = *nbrs.last().unwrap();
    nbrs.iter()
        .filter(|&&vn| vn != v2 && g.has_edge(v2, vn))
        .map(|&vn| {
            canonical_order::<S>(g, seed(v1, v2, vn))
                .ok()
                .map(|o| {
                    let ok = replay::<S>(g, &o).is_ok();
                    (o.into_vec(), ok)
                })
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn backends_build_identical_orders(n in 4usize..80, flips in 0usize..200, s in any::<u64>()) {
        let t = random_triangulation(StackedCfg { vertices: n, flips }, s).unwrap();
        let sorted = orders_for_all_seeds::<SortedSet>(&t.graph);
        prop_assert_eq!(&orders_for_all_seeds::<TreeSet>(&t.graph), &sorted);
        prop_assert_eq!(&orders_for_all_seeds::<BitSet>(&t.graph), &sorted);

        let reference = recognize::<SortedSet>(&t.graph, RecognizeCfg::default());
        prop_assert!(reference.is_maximal_planar());
        for backend in Backend::ALL {
            prop_assert_eq!(&recognize_with(&t.graph, backend, RecognizeCfg::default()), &reference);
        }
    }
}
