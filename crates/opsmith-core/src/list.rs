use serde::{Deserialize, Serialize};

use crate::task::{new_task_id, ParsedTask, TaskDetails, TaskType};

/// Partial update applied to a single task. Absent fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    pub task_type: Option<TaskType>,
    pub action: Option<String>,
    pub target: Option<String>,
    pub original_text: Option<String>,
    pub details: Option<TaskDetails>,
}

/// Append a blank package/install task. The result is not saveable until
/// the caller fills in a target.
pub fn add_task(list: &[ParsedTask]) -> Vec<ParsedTask> {
    let mut out = list.to_vec();
    out.push(ParsedTask {
        id: new_task_id(),
        task_type: TaskType::Package,
        action: TaskType::Package.default_action().to_string(),
        target: String::new(),
        original_text: String::new(),
        details: TaskDetails::default_for(TaskType::Package),
    });
    out
}

/// Merge a patch into the task matching `id`. When the patch changes the
/// type, the action resets to the new type's default and the details to the
/// new type's variant, unless the patch supplies them explicitly.
pub fn update_task(list: &[ParsedTask], id: &str, patch: TaskPatch) -> Vec<ParsedTask> {
    list.iter()
        .map(|task| {
            if task.id != id {
                return task.clone();
            }
            let mut task = task.clone();
            if let Some(new_type) = patch.task_type {
                if new_type != task.task_type {
                    task.action = new_type.default_action().to_string();
                    task.details = TaskDetails::default_for(new_type);
                }
                task.task_type = new_type;
            }
            if let Some(ref action) = patch.action {
                task.action = action.clone();
            }
            if let Some(ref target) = patch.target {
                task.target = target.clone();
            }
            if let Some(ref text) = patch.original_text {
                task.original_text = text.clone();
            }
            if let Some(ref details) = patch.details {
                task.details = details.clone();
            }
            task
        })
        .collect()
}

/// Remove the task matching `id`; no-op when absent.
pub fn delete_task(list: &[ParsedTask], id: &str) -> Vec<ParsedTask> {
    list.iter().filter(|t| t.id != id).cloned().collect()
}

/// Move one element from `from` to `to`, keeping everyone else's relative
/// order. Out-of-range indices are a no-op, never a panic.
pub fn reorder_task(list: &[ParsedTask], from: usize, to: usize) -> Vec<ParsedTask> {
    let mut out = list.to_vec();
    if from >= out.len() || to >= out.len() {
        return out;
    }
    let task = out.remove(from);
    out.insert(to, task);
    out
}
