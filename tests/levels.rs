// tests/levels.rs

use dagplan::{
    compute_levels, ComponentGraph, DagplanError, DependencyGraph, PlanScope, TaskId,
    WorkflowStatus,
};

fn scope() -> PlanScope {
    PlanScope::new(WorkflowStatus::ToDo, None)
}

fn level(raw: &[i64]) -> Vec<TaskId> {
    raw.iter().copied().map(TaskId).collect()
}

/// Build a graph from `(depends_on, task)` pairs plus extra edge-less tasks,
/// asserting it forms exactly one component.
fn single_component(tasks: &[i64], edges: &[(i64, i64)]) -> ComponentGraph {
    let mut graph = DependencyGraph::new();
    for &t in tasks {
        graph.insert_task(TaskId(t));
    }
    for &(d, t) in edges {
        graph.insert_edge(TaskId(d), TaskId(t));
    }

    let mut components = graph.into_components();
    assert_eq!(components.len(), 1, "scenario must form one component");
    components.remove(0)
}

#[test]
fn chain_levelizes_one_task_per_level() {
    // DAG: 1 -> 2 -> 3
    let component = single_component(&[], &[(1, 2), (2, 3)]);

    let levels = compute_levels(&component, &scope()).unwrap();
    assert_eq!(levels, vec![level(&[1]), level(&[2]), level(&[3])]);
}

#[test]
fn diamond_levelizes_middle_in_parallel() {
    // DAG: 1 -> 2 -> 4, 1 -> 3 -> 4
    let component = single_component(&[], &[(1, 2), (1, 3), (2, 4), (3, 4)]);

    let levels = compute_levels(&component, &scope()).unwrap();
    assert_eq!(levels, vec![level(&[1]), level(&[2, 3]), level(&[4])]);
}

#[test]
fn task_freed_mid_level_waits_for_next_level() {
    // DAG: 1 -> 2, 1 -> 3, 2 -> 3. Processing 1 drops 3's in-degree while
    // level 0 is still being drained; 3 must still land after 2.
    let component = single_component(&[], &[(1, 2), (1, 3), (2, 3)]);

    let levels = compute_levels(&component, &scope()).unwrap();
    assert_eq!(levels, vec![level(&[1]), level(&[2]), level(&[3])]);
}

#[test]
fn wide_levels_are_sorted_ascending() {
    // DAG: 9 -> 2, 9 -> 7, 9 -> 4
    let component = single_component(&[], &[(9, 2), (9, 7), (9, 4)]);

    let levels = compute_levels(&component, &scope()).unwrap();
    assert_eq!(levels, vec![level(&[9]), level(&[2, 4, 7])]);
}

#[test]
fn two_cycle_is_rejected() {
    let component = single_component(&[], &[(1, 2), (2, 1)]);

    let err = compute_levels(&component, &scope()).unwrap_err();
    match err {
        DagplanError::CycleDetected { scope, tasks } => {
            assert_eq!(tasks, level(&[1, 2]));
            assert_eq!(scope.status, WorkflowStatus::ToDo);
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn self_loop_is_a_one_task_cycle() {
    let component = single_component(&[], &[(7, 7)]);

    let err = compute_levels(&component, &scope()).unwrap_err();
    match err {
        DagplanError::CycleDetected { tasks, .. } => {
            assert_eq!(tasks, level(&[7]));
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn cycle_error_names_only_the_cyclic_tasks() {
    // DAG: 1 -> 2 <-> 3 -> 4. Task 4 is blocked behind the 2/3 cycle and
    // task 1 levelizes fine; only 2 and 3 are actually cyclic.
    let component = single_component(&[], &[(1, 2), (2, 3), (3, 2), (3, 4)]);

    let err = compute_levels(&component, &scope()).unwrap_err();
    match err {
        DagplanError::CycleDetected { tasks, .. } => {
            assert_eq!(tasks, level(&[2, 3]));
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn cycle_error_message_identifies_scope() {
    let component = single_component(&[], &[(1, 2), (2, 1)]);
    let scope = PlanScope::new(WorkflowStatus::InProgress, None);

    let err = compute_levels(&component, &scope).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("cycle detected"), "message: {message}");
    assert!(message.contains("1, 2"), "message: {message}");
    assert!(message.contains("status=in-progress"), "message: {message}");
}

#[test]
fn singleton_component_is_one_level() {
    let component = single_component(&[42], &[]);

    let levels = compute_levels(&component, &scope()).unwrap();
    assert_eq!(levels, vec![level(&[42])]);
}
