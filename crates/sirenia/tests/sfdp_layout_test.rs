use sirenia::algo::sfdp::sfdp_layout;
use sirenia::{
    Algorithm, CoarseningMethod, Error, Extent, Graph, GraphOptions, Positions, Properties,
    RandomOptions, SfdpOptions,
};

fn grid(side: usize) -> Graph {
    let mut edges: Vec<(usize, usize)> = Vec::new();
    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            if c + 1 < side {
                edges.push((v, v + 1));
            }
            if r + 1 < side {
                edges.push((v, v + side));
            }
        }
    }
    Graph::from_edges(GraphOptions::default(), side * side, edges).unwrap()
}

fn multilevel(seed: u64) -> SfdpOptions {
    SfdpOptions {
        random_seed: seed,
        multilevel: Some(true),
        ..Default::default()
    }
}

fn assert_complete(g: &Graph, p: &Positions, dim: usize) {
    assert_eq!(p.len(), g.vertex_count());
    assert_eq!(p.dim(), dim);
    assert!(p.as_flat().iter().all(|x| x.is_finite()));
}

#[test]
fn multilevel_layout_positions_every_vertex() {
    let g = grid(10);
    let p = sfdp_layout(&g, &Properties::default(), &multilevel(1)).unwrap();
    assert_complete(&g, &p, 2);
}

#[test]
fn every_coarsening_method_positions_every_vertex() {
    let g = grid(8);
    for method in [
        CoarseningMethod::Ec,
        CoarseningMethod::Mivs,
        CoarseningMethod::Hybrid,
    ] {
        let mut opts = multilevel(3);
        opts.coarsening.method = method;
        let p = sfdp_layout(&g, &Properties::default(), &opts).unwrap();
        assert_complete(&g, &p, 2);
    }
}

#[test]
fn three_dimensional_multilevel_layout() {
    let g = grid(6);
    let mut opts = multilevel(5);
    opts.dim = 3;
    let p = sfdp_layout(&g, &Properties::default(), &opts).unwrap();
    assert_complete(&g, &p, 3);
}

#[test]
fn weighted_coarsening_positions_every_vertex() {
    let g = grid(8);
    let mut opts = multilevel(2);
    opts.coarsening.weighted_coarse = true;
    let vertex_weight = vec![1.0; g.vertex_count()];
    let edge_weight: Vec<f64> = (0..g.edge_count()).map(|e| 1.0 + (e % 3) as f64).collect();
    let props = Properties {
        vertex_weight: Some(&vertex_weight),
        edge_weight: Some(&edge_weight),
        ..Default::default()
    };
    let p = sfdp_layout(&g, &props, &opts).unwrap();
    assert_complete(&g, &p, 2);
}

#[test]
fn empty_and_single_vertex_graphs() {
    let empty = Graph::new(GraphOptions::default());
    assert!(
        sfdp_layout(&empty, &Properties::default(), &multilevel(0))
            .unwrap()
            .is_empty()
    );

    let one = Graph::with_vertices(GraphOptions::default(), 1);
    let p = sfdp_layout(&one, &Properties::default(), &multilevel(0)).unwrap();
    assert_eq!(p.get(0), &[0.0, 0.0]);
}

#[test]
fn two_vertices_sit_on_the_unit_diagonal() {
    let g = Graph::from_edges(GraphOptions::default(), 2, [(0, 1)]).unwrap();
    let p = sfdp_layout(&g, &Properties::default(), &SfdpOptions::default()).unwrap();
    assert_eq!(p.get(0), &[0.0, 0.0]);
    assert_eq!(p.get(1), &[1.0, 1.0]);

    let opts = SfdpOptions {
        dim: 3,
        ..Default::default()
    };
    let p = sfdp_layout(&g, &Properties::default(), &opts).unwrap();
    assert_eq!(p.get(1), &[1.0, 1.0, 1.0]);
}

#[test]
fn path_of_three_gets_distinct_positions_without_multilevel() {
    let g = Graph::from_edges(GraphOptions::default(), 3, [(0, 1), (1, 2)]).unwrap();
    let opts = SfdpOptions {
        multilevel: Some(false),
        random_seed: 4,
        ..Default::default()
    };
    let p = sfdp_layout(&g, &Properties::default(), &opts).unwrap();
    assert_complete(&g, &p, 2);
    assert!(p.distance(0, 1) > 0.0);
    assert!(p.distance(1, 2) > 0.0);
    assert!(p.distance(0, 2) > 0.0);
}

#[test]
fn fixed_seed_is_reproducible() {
    let g = grid(9);
    let a = sfdp_layout(&g, &Properties::default(), &multilevel(42)).unwrap();
    let b = sfdp_layout(&g, &Properties::default(), &multilevel(42)).unwrap();
    assert_eq!(a, b);

    let c = sfdp_layout(&g, &Properties::default(), &multilevel(43)).unwrap();
    assert_ne!(a, c);
}

#[test]
fn level_cap_of_one_is_a_single_placement() {
    let g = grid(5);
    let mut opts = multilevel(8);
    opts.coarsening.max_levels = Some(1);
    let p = sfdp_layout(&g, &Properties::default(), &opts).unwrap();
    assert_complete(&g, &p, 2);
}

#[test]
fn random_layout_of_an_edgeless_graph_stays_in_the_unit_box() {
    let g = Graph::with_vertices(GraphOptions::default(), 40);
    let algorithm = Algorithm::Random(RandomOptions {
        random_seed: 12,
        dim: 2,
        shape: Some(vec![Extent::Range(0.0, 1.0), Extent::Range(0.0, 1.0)]),
    });
    let result = sirenia::layout(&g, &Properties::default(), &algorithm).unwrap();
    assert_eq!(result.positions.len(), 40);
    assert!(
        result
            .positions
            .as_flat()
            .iter()
            .all(|x| (0.0..=1.0).contains(x))
    );
}

#[test]
fn layout_dispatches_to_sfdp() {
    let g = grid(4);
    let algorithm = Algorithm::Sfdp(SfdpOptions {
        random_seed: 6,
        ..Default::default()
    });
    let result = sirenia::layout(&g, &Properties::default(), &algorithm).unwrap();
    assert_eq!(result.positions.len(), 16);
}

#[test]
fn options_loaded_from_json_drive_a_layout() {
    let opts: SfdpOptions = serde_json::from_str(
        r#"{
            "randomSeed": 9,
            "multilevel": true,
            "coarsening": { "method": "ec", "maxLevels": 3 },
            "placement": { "maxIter": 40 }
        }"#,
    )
    .unwrap();
    let g = grid(6);
    let p = sfdp_layout(&g, &Properties::default(), &opts).unwrap();
    assert_complete(&g, &p, 2);

    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(36));
}

#[test]
fn shape_with_the_wrong_dimension_is_rejected() {
    let g = Graph::with_vertices(GraphOptions::default(), 3);
    let algorithm = Algorithm::Random(RandomOptions {
        dim: 2,
        shape: Some(vec![Extent::Size(1.0); 3]),
        ..Default::default()
    });
    assert!(matches!(
        sirenia::layout(&g, &Properties::default(), &algorithm),
        Err(Error::ShapeDimension {
            expected: 2,
            got: 3
        })
    ));
}

#[test]
fn pins_with_multilevel_are_rejected_before_any_work() {
    let g = grid(4);
    let pin = vec![true; 16];
    let props = Properties {
        pin: Some(&pin),
        ..Default::default()
    };
    assert!(matches!(
        sfdp_layout(&g, &props, &multilevel(0)),
        Err(Error::PinnedMultilevel)
    ));
}

#[test]
fn weights_of_the_wrong_length_are_rejected() {
    let g = grid(3);
    let w = vec![1.0; 2];
    let props = Properties {
        edge_weight: Some(&w),
        ..Default::default()
    };
    assert!(matches!(
        sfdp_layout(&g, &props, &SfdpOptions::default()),
        Err(Error::LengthMismatch { .. })
    ));

    let w = vec![-1.0; 9];
    let props = Properties {
        vertex_weight: Some(&w),
        ..Default::default()
    };
    assert!(matches!(
        sfdp_layout(&g, &props, &SfdpOptions::default()),
        Err(Error::InvalidOption {
            name: "vertexWeight",
            ..
        })
    ));
}
