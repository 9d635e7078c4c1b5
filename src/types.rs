use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a task in the tracker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a project grouping tasks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProjectId(pub i64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Workflow status a task currently sits in.
///
/// Planning is always scoped to exactly one status: dependency edges are only
/// meaningful while both endpoints share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowStatus {
    ToDo,
    InProgress,
    Done,
    Blocked,
}

impl WorkflowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStatus::ToDo => "to-do",
            WorkflowStatus::InProgress => "in-progress",
            WorkflowStatus::Done => "done",
            WorkflowStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "to-do" | "todo" => Ok(WorkflowStatus::ToDo),
            "in-progress" | "inprogress" => Ok(WorkflowStatus::InProgress),
            "done" => Ok(WorkflowStatus::Done),
            "blocked" => Ok(WorkflowStatus::Blocked),
            other => Err(format!(
                "invalid workflow status: {other} (expected \"to-do\", \"in-progress\", \"done\" or \"blocked\")"
            )),
        }
    }
}

/// One row of the dependency relation as reported by a data source.
///
/// Reads as `depends_on_id -> task_id`: `task_id` cannot proceed until
/// `depends_on_id` is resolved. Both endpoint statuses are included so a
/// caller can check that the row is fully inside the status it plans for;
/// sources are not trusted to have filtered both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub task_id: TaskId,
    pub depends_on_id: TaskId,
    pub task_status: WorkflowStatus,
    pub depends_on_status: WorkflowStatus,
}

impl DependencyEdge {
    /// Row where both endpoints share `status`: `task` waits for `depends_on`.
    pub fn homogeneous(depends_on: TaskId, task: TaskId, status: WorkflowStatus) -> Self {
        Self {
            task_id: task,
            depends_on_id: depends_on,
            task_status: status,
            depends_on_status: status,
        }
    }

    /// Whether both endpoints of this row sit in `status`.
    pub fn is_homogeneous(&self, status: WorkflowStatus) -> bool {
        self.task_status == status && self.depends_on_status == status
    }
}

/// Identifies one planning scope (status plus optional project filter) in
/// errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanScope {
    pub status: WorkflowStatus,
    pub project: Option<ProjectId>,
}

impl PlanScope {
    pub fn new(status: WorkflowStatus, project: Option<ProjectId>) -> Self {
        Self { status, project }
    }
}

impl fmt::Display for PlanScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.project {
            Some(project) => write!(f, "status={} project={}", self.status, project),
            None => write!(f, "status={} all-projects", self.status),
        }
    }
}
