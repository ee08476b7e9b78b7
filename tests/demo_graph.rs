use topocheck::prelude::*;

fn demo_validator() -> GraphValidator {
    let mut validator = GraphValidator::new();
    validator.load_demo();
    validator
}

#[test]
fn demo_accepts_alphabetical_order() {
    let validator = demo_validator();
    assert_eq!(
        validator.validate_order(["A", "B", "C", "D", "E", "F"]),
        Ok(())
    );
}

#[test]
fn demo_accepts_swapped_siblings() {
    let validator = demo_validator();
    assert_eq!(
        validator.validate_order(["A", "C", "B", "D", "E", "F"]),
        Ok(())
    );
}

#[test]
fn demo_rejects_b_before_a() {
    let validator = demo_validator();
    let err = validator
        .validate_order(["B", "A", "C", "D", "E", "F"])
        .unwrap_err();
    match err {
        OrderError::OrderViolation(edges) => assert!(edges.contains(&Edge::new("A", "B"))),
        other => panic!("expected an order violation, got {other:?}"),
    }
}

#[test]
fn demo_reports_missing_f() {
    let validator = demo_validator();
    assert_eq!(
        validator.validate_order(["A", "B", "C", "D", "E"]),
        Err(OrderError::MissingVertices(vec!["F".to_string()]))
    );
}

#[test]
fn back_edge_makes_a_cycle() {
    let mut validator = GraphValidator::new();
    validator.add_vertex("A").unwrap();
    validator.add_edge("A", "B").unwrap();
    assert!(!validator.detect_cycle());
    validator.add_edge("B", "A").unwrap();
    assert!(validator.detect_cycle());
    assert_eq!(
        validator.validate_order(["A", "B"]),
        Err(OrderError::HasCycle)
    );
}

#[test]
fn clear_behaves_like_a_fresh_graph() {
    let mut validator = demo_validator();
    validator.clear();
    assert!(!validator.detect_cycle());
    assert_eq!(
        validator.validate_order(["A", "B", "C", "D", "E", "F"]),
        Err(OrderError::EmptyGraph)
    );
    assert_eq!(validator.graph(), &DirectedGraph::new());
}

#[test]
fn duplicate_edge_is_rejected_once_recorded() {
    let mut validator = demo_validator();
    let before = validator.graph().clone();
    assert_eq!(
        validator.add_edge("A", "B").err(),
        Some(GraphInteractionError::DuplicateEdge {
            from: "A".into(),
            to: "B".into()
        })
    );
    assert_eq!(validator.graph(), &before);
    assert_eq!(validator.graph().neighbors("A").unwrap(), ["B", "C"]);
}

#[test]
fn edge_to_new_label_adds_exactly_one_vertex() {
    let mut validator = demo_validator();
    let n_vertices = validator.graph().n_vertices();
    validator.add_edge("F", "g").unwrap();
    assert_eq!(validator.graph().n_vertices(), n_vertices + 1);
    validator.add_edge("A", "G").unwrap();
    assert_eq!(validator.graph().n_vertices(), n_vertices + 1);
}

#[test]
fn lowercase_labels_collide_with_uppercase() {
    let mut validator = demo_validator();
    assert_eq!(
        validator.add_vertex("a"),
        Err(GraphInteractionError::DuplicateVertex("A".into()))
    );
    assert_eq!(
        validator.request_validation(|| Some("a, b, c, d, e, f".into())),
        Ok(())
    );
}

#[test]
fn suggested_order_is_accepted() {
    let validator = demo_validator();
    let order = validator.graph().topological_order().unwrap();
    assert_eq!(validator.validate_order(order), Ok(()));
}
