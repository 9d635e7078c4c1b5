use dagplan::{DependencyGraph, TaskId};

fn ids(raw: &[i64]) -> Vec<TaskId> {
    raw.iter().copied().map(TaskId).collect()
}

#[test]
fn empty_graph_has_no_components() {
    let graph = DependencyGraph::new();
    assert_eq!(graph.task_count(), 0);
    assert!(graph.into_components().is_empty());
}

#[test]
fn isolated_tasks_become_singleton_components() {
    let mut graph = DependencyGraph::new();
    graph.insert_task(TaskId(3));
    graph.insert_task(TaskId(1));
    graph.insert_task(TaskId(2));

    let components = graph.into_components();
    assert_eq!(components.len(), 3);

    // Ordered by smallest member, which for singletons is the member itself.
    let members: Vec<Vec<TaskId>> = components.iter().map(|c| c.members().to_vec()).collect();
    assert_eq!(members, vec![ids(&[1]), ids(&[2]), ids(&[3])]);

    for component in &components {
        assert_eq!(component.node_count(), 1);
        assert_eq!(component.in_degree_of(component.members()[0]), 0);
    }
}

#[test]
fn edges_build_adjacency_and_in_degrees() {
    let mut graph = DependencyGraph::new();

    // DAG: 1 -> 2 -> 3 (2 waits on 1, 3 waits on 2)
    assert!(graph.insert_edge(TaskId(1), TaskId(2)));
    assert!(graph.insert_edge(TaskId(2), TaskId(3)));

    assert_eq!(graph.task_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.contains(TaskId(3)));
    assert!(!graph.contains(TaskId(99)));

    assert_eq!(graph.dependents_of(TaskId(1)), &[TaskId(2)]);
    assert_eq!(graph.dependents_of(TaskId(2)), &[TaskId(3)]);
    assert!(graph.dependents_of(TaskId(3)).is_empty());

    assert_eq!(graph.in_degree_of(TaskId(1)), 0);
    assert_eq!(graph.in_degree_of(TaskId(2)), 1);
    assert_eq!(graph.in_degree_of(TaskId(3)), 1);
}

#[test]
fn duplicate_edges_collapse() {
    let mut graph = DependencyGraph::new();

    assert!(graph.insert_edge(TaskId(1), TaskId(2)));
    assert!(!graph.insert_edge(TaskId(1), TaskId(2)));

    assert_eq!(graph.edge_count(), 1);
    // The prerequisite is only counted once.
    assert_eq!(graph.in_degree_of(TaskId(2)), 1);
    assert_eq!(graph.dependents_of(TaskId(1)), &[TaskId(2)]);
}

#[test]
fn insert_task_is_idempotent_and_keeps_degrees() {
    let mut graph = DependencyGraph::new();

    graph.insert_edge(TaskId(1), TaskId(2));
    assert!(!graph.insert_task(TaskId(2)));

    // Re-registering an endpoint must not reset its in-degree.
    assert_eq!(graph.in_degree_of(TaskId(2)), 1);
}

#[test]
fn unconnected_edge_sets_split_into_components() {
    let mut graph = DependencyGraph::new();

    // Two separate chains plus one isolated task.
    graph.insert_edge(TaskId(1), TaskId(2));
    graph.insert_edge(TaskId(10), TaskId(11));
    graph.insert_edge(TaskId(11), TaskId(12));
    graph.insert_task(TaskId(5));

    let components = graph.into_components();
    let members: Vec<Vec<TaskId>> = components.iter().map(|c| c.members().to_vec()).collect();
    assert_eq!(
        members,
        vec![ids(&[1, 2]), ids(&[5]), ids(&[10, 11, 12])],
    );

    // Component-local adjacency only reaches inside the component.
    let chain = &components[2];
    assert_eq!(chain.dependents_of(TaskId(10)), &[TaskId(11)]);
    assert_eq!(chain.in_degree_of(TaskId(12)), 1);
    assert!(chain.dependents_of(TaskId(1)).is_empty());
    assert_eq!(chain.in_degree_of(TaskId(1)), 0);
}

#[test]
fn self_loop_is_recorded() {
    let mut graph = DependencyGraph::new();

    assert!(graph.insert_edge(TaskId(4), TaskId(4)));
    assert_eq!(graph.task_count(), 1);
    assert_eq!(graph.in_degree_of(TaskId(4)), 1);
    assert_eq!(graph.dependents_of(TaskId(4)), &[TaskId(4)]);
}
