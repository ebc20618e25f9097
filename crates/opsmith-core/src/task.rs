use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Package,
    Service,
    File,
    Config,
    Command,
}

impl TaskType {
    pub const ALL: &[TaskType] = &[
        TaskType::Package,
        TaskType::Service,
        TaskType::File,
        TaskType::Config,
        TaskType::Command,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Package => "package",
            TaskType::Service => "service",
            TaskType::File => "file",
            TaskType::Config => "config",
            TaskType::Command => "command",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskType::Package => "Package",
            TaskType::Service => "Service",
            TaskType::File => "File",
            TaskType::Config => "Config",
            TaskType::Command => "Command",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "package" => Some(TaskType::Package),
            "service" => Some(TaskType::Service),
            "file" => Some(TaskType::File),
            "config" => Some(TaskType::Config),
            "command" => Some(TaskType::Command),
            _ => None,
        }
    }

    /// The verbs a task of this type may carry. The first entry is the
    /// default used when the type changes without an explicit action.
    pub fn allowed_actions(&self) -> &'static [&'static str] {
        match self {
            TaskType::Package => &["install", "remove"],
            TaskType::Service => &["start", "stop", "restart", "enable", "disable"],
            TaskType::File => &["create", "remove"],
            TaskType::Config => &["configure"],
            TaskType::Command => &["run"],
        }
    }

    pub fn default_action(&self) -> &'static str {
        self.allowed_actions()[0]
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific hints attached to a task. One variant per task type so
/// consumers read known fields instead of probing an untyped map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskDetails {
    Package {
        state: String,
    },
    Service {
        state: Option<String>,
        enabled: Option<bool>,
    },
    File {
        kind: Option<String>,
        path: Option<String>,
        state: Option<String>,
    },
    Config {
        path: String,
        requires: Vec<String>,
    },
    Command {
        command: String,
    },
}

impl TaskDetails {
    /// Empty details of the right variant for a task type.
    pub fn default_for(task_type: TaskType) -> Self {
        match task_type {
            TaskType::Package => TaskDetails::Package {
                state: "present".to_string(),
            },
            TaskType::Service => TaskDetails::Service {
                state: None,
                enabled: None,
            },
            TaskType::File => TaskDetails::File {
                kind: None,
                path: None,
                state: None,
            },
            TaskType::Config => TaskDetails::Config {
                path: String::new(),
                requires: Vec::new(),
            },
            TaskType::Command => TaskDetails::Command {
                command: String::new(),
            },
        }
    }

    pub fn task_type(&self) -> TaskType {
        match self {
            TaskDetails::Package { .. } => TaskType::Package,
            TaskDetails::Service { .. } => TaskType::Service,
            TaskDetails::File { .. } => TaskType::File,
            TaskDetails::Config { .. } => TaskType::Config,
            TaskDetails::Command { .. } => TaskType::Command,
        }
    }
}

/// One discrete configuration step, extracted from a requirement or added
/// by hand. Order within a list is significant: it is the order tasks are
/// emitted in the assembled playbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTask {
    pub id: String,
    pub task_type: TaskType,
    pub action: String,
    pub target: String,
    /// The source fragment this task was derived from, original casing kept.
    pub original_text: String,
    pub details: TaskDetails,
}

impl ParsedTask {
    pub fn new(
        task_type: TaskType,
        action: impl Into<String>,
        target: impl Into<String>,
        original_text: impl Into<String>,
        details: TaskDetails,
    ) -> Self {
        Self {
            id: new_task_id(),
            task_type,
            action: action.into(),
            target: target.into(),
            original_text: original_text.into(),
            details,
        }
    }

    /// A task needs a non-empty target before it may be assembled or saved.
    pub fn is_saveable(&self) -> bool {
        !self.target.trim().is_empty()
    }

    pub fn action_allowed(&self) -> bool {
        self.task_type
            .allowed_actions()
            .contains(&self.action.as_str())
    }
}

/// Fresh unique id for a task, stable for the lifetime of its list.
pub fn new_task_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
