use sirenia::{
    AlgorithmFailure, GraphAttributes, LayeredLayout, LayoutError, LayoutModule,
    PreconditionViolation,
};

// Two ranks, two nodes each, edges crossing in the initial order.
fn crossing_pair() -> GraphAttributes {
    let mut attrs = GraphAttributes::new();
    let n0 = attrs.add_node(0);
    let n1 = attrs.add_node(0);
    let n2 = attrs.add_node(1);
    let n3 = attrs.add_node(1);
    attrs.add_edge(n0, n3);
    attrs.add_edge(n1, n2);
    attrs
}

#[test]
fn layered_layout_removes_the_crossing() {
    let mut attrs = crossing_pair();
    LayeredLayout::new().call(&mut attrs).unwrap();

    // Rank 1 flipped: node 3 now precedes node 2.
    assert_eq!(attrs.node(3).unwrap().order, 0);
    assert_eq!(attrs.node(2).unwrap().order, 1);
    assert_eq!(attrs.node(3).unwrap().x, 0.0);
    assert_eq!(attrs.node(2).unwrap().x, 50.0);
}

#[test]
fn layered_layout_assigns_rank_coordinates() {
    let mut attrs = crossing_pair();
    LayeredLayout::new().call(&mut attrs).unwrap();

    assert_eq!(attrs.node(0).unwrap().y, 0.0);
    assert_eq!(attrs.node(2).unwrap().y, 50.0);
}

#[test]
fn layered_layout_accepts_an_empty_drawing() {
    let mut attrs = GraphAttributes::new();
    assert!(LayeredLayout::new().call(&mut attrs).is_ok());
}

#[test]
fn layered_layout_reorders_across_three_ranks() {
    let mut attrs = GraphAttributes::new();
    let a = attrs.add_node(0);
    let b = attrs.add_node(0);
    let c = attrs.add_node(1);
    let d = attrs.add_node(1);
    let e = attrs.add_node(2);
    let f = attrs.add_node(2);
    attrs.add_edge(a, d);
    attrs.add_edge(b, c);
    attrs.add_edge(c, f);
    attrs.add_edge(d, e);

    LayeredLayout::new().call(&mut attrs).unwrap();

    // Both crossings disappear: d before c, e before f follows from a,b.
    let order = |v: usize| attrs.node(v).unwrap().order;
    assert!(order(d) < order(c));
    assert!(order(e) < order(f));
}

#[test]
fn quick_layout_keeps_the_input_order() {
    let mut attrs = crossing_pair();
    LayeredLayout::quick().call(&mut attrs).unwrap();

    assert_eq!(attrs.node(2).unwrap().order, 0);
    assert_eq!(attrs.node(3).unwrap().order, 1);
    assert_eq!(attrs.node(2).unwrap().x, 0.0);
    assert_eq!(attrs.node(3).unwrap().x, 50.0);
}

#[test]
fn self_loops_violate_the_preconditions() {
    let mut attrs = GraphAttributes::new();
    let v = attrs.add_node(0);
    attrs.add_edge(v, v);

    let err = LayeredLayout::new().call(&mut attrs).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::Precondition {
            kind: PreconditionViolation::SelfLoop,
            ..
        }
    ));
}

#[test]
fn edges_between_non_adjacent_ranks_are_rejected() {
    let mut attrs = GraphAttributes::new();
    let a = attrs.add_node(0);
    let b = attrs.add_node(2);
    attrs.add_edge(a, b);

    let err = LayeredLayout::new().call(&mut attrs).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::Algorithm {
            kind: AlgorithmFailure::IllegalParameter,
            ..
        }
    ));
    assert!(err.detail().unwrap().contains("not adjacent"));
}

#[test]
fn disjoint_subgraphs_do_not_force_a_swap() {
    // Ungated, this layout flips rank 1; with the two edges on different
    // overlaid graphs the crossing does not count and the order stays.
    let mut attrs = crossing_pair();
    attrs.add_edge_to_subgraph(0, 0);
    attrs.add_edge_to_subgraph(1, 1);

    LayeredLayout::new().call(&mut attrs).unwrap();

    assert_eq!(attrs.node(2).unwrap().order, 0);
    assert_eq!(attrs.node(3).unwrap().order, 1);
}

#[test]
fn shared_subgraphs_behave_like_a_plain_drawing() {
    let mut attrs = crossing_pair();
    attrs.add_edge_to_subgraph(0, 0);
    attrs.add_edge_to_subgraph(1, 0);

    LayeredLayout::new().call(&mut attrs).unwrap();

    assert_eq!(attrs.node(3).unwrap().order, 0);
    assert_eq!(attrs.node(2).unwrap().order, 1);
}

#[test]
fn attributes_serialize_for_debug_dumps() {
    let mut attrs = crossing_pair();
    LayeredLayout::new().call(&mut attrs).unwrap();

    let dump = serde_json::to_value(&attrs).unwrap();
    assert_eq!(dump["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(dump["edges"][0]["source"], 0);
    assert_eq!(dump["nodes"][3]["order"], 0);
    assert_eq!(dump["nodesep"], 50.0);
}
