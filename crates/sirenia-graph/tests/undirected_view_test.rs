use sirenia_graph::alg;
use sirenia_graph::{Graph, GraphOptions};

fn path(n: usize) -> Graph {
    Graph::from_edges(GraphOptions::default(), n, (1..n).map(|v| (v - 1, v))).unwrap()
}

#[test]
fn directed_edges_are_traversed_both_ways() {
    let g = Graph::from_edges(GraphOptions { directed: true }, 3, [(0, 1), (1, 2)]).unwrap();
    let view = g.undirected();

    let mut n1: Vec<usize> = view.neighbors(1).collect();
    n1.sort();
    assert_eq!(n1, vec![0, 2]);
    assert_eq!(view.neighbors(2).collect::<Vec<_>>(), vec![1]);
    assert_eq!(view.degree(0), 1);
}

#[test]
fn vertex_filter_hides_incident_edges() {
    let g = path(4);
    let keep = [true, false, true, true];
    let view = g.undirected().with_vertex_filter(&keep).unwrap();

    assert_eq!(view.vertex_count(), 3);
    assert_eq!(view.vertices().collect::<Vec<_>>(), vec![0, 2, 3]);
    assert_eq!(view.degree(0), 0);
    assert_eq!(view.degree(1), 0);
    assert_eq!(view.neighbors(2).collect::<Vec<_>>(), vec![3]);
    assert_eq!(view.edges().map(|(e, _, _)| e).collect::<Vec<_>>(), vec![2]);

    let base = view.unfiltered();
    assert_eq!(base.vertex_count(), 4);
    assert_eq!(base.degree(1), 2);
}

#[test]
fn filters_of_wrong_length_are_rejected() {
    let g = path(3);
    assert!(g.undirected().with_vertex_filter(&[true]).is_err());
    assert!(g.undirected().with_edge_filter(&[true, true, true]).is_err());
}

#[test]
fn self_loops_are_listed_once() {
    let g = Graph::from_edges(GraphOptions::default(), 2, [(0, 0), (0, 1)]).unwrap();
    let incident: Vec<(usize, usize)> = g.undirected().incident(0).collect();
    assert_eq!(incident, vec![(0, 0), (1, 1)]);
}

#[test]
fn matched_edges_contract_pairs_into_half_as_many_vertices() {
    let g = path(8);
    let matching = alg::maximum_weight_matching(g.undirected(), None).unwrap();
    let view = g.undirected().with_edge_filter(&matching).unwrap();
    let components = alg::label_components(view);
    let partition: Vec<usize> = components
        .labels
        .iter()
        .map(|l| l.expect("unfiltered vertices are labelled"))
        .collect();

    let c = alg::condense(&g, &partition, &[1.0; 8], &[1.0; 7]).unwrap();
    assert_eq!(c.graph.vertex_count(), 4);
    assert!(c.vertex_weight.iter().all(|&w| w == 2.0));
    // Three crossing edges remain between the four pairs.
    assert_eq!(c.graph.edge_count(), 3);
    assert_eq!(c.edge_weight.iter().sum::<f64>(), 3.0);
}

#[test]
fn independent_set_labels_cover_every_vertex() {
    let g = path(7);
    let set = alg::maximal_independent_set(g.undirected(), true);
    let members = g.undirected().with_vertex_filter(&set).unwrap();
    let mut labels = alg::label_components(members).labels;
    let infected = alg::infect_labels(g.undirected(), &mut labels, &set);

    assert_eq!(infected, set.iter().filter(|&&s| !s).count());
    assert!(labels.iter().all(Option::is_some));
}
