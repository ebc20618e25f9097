use opsmith_core::{FileMap, ParsedTask, TaskDetails, TaskType};
use serde::Deserialize;

use crate::error::GenError;

/// Files a multi-file response must contain to be usable.
pub const REQUIRED_FILES: &[&str] = &["site.yml", "group_vars/all.yml", "roles/main/tasks/main.yml"];

/// Parse a multi-file response blob into a path -> content map.
///
/// The blob is expected to hold repeated `# <path>.yml` marker lines, each
/// followed by that file's content up to the next marker or end of input.
/// Segment whitespace is trimmed and empty segments are dropped, so a
/// required file with no content still fails the required-file check.
pub fn parse_multi_file_response(response: &str) -> Result<FileMap, GenError> {
    let mut files = FileMap::new();
    let mut marker_count = 0usize;
    let mut current: Option<String> = None;
    let mut content = String::new();

    for line in response.lines() {
        if let Some(path) = marker_path(line) {
            marker_count += 1;
            flush_segment(&mut files, current.take(), &content);
            content.clear();
            current = Some(path.to_string());
        } else if current.is_some() {
            content.push_str(line);
            content.push('\n');
        }
    }
    flush_segment(&mut files, current.take(), &content);

    if marker_count == 0 {
        return Err(GenError::NoFilesFound);
    }
    for required in REQUIRED_FILES {
        if !files.contains(required) {
            return Err(GenError::MissingRequiredFile(required.to_string()));
        }
    }
    Ok(files)
}

fn flush_segment(files: &mut FileMap, path: Option<String>, content: &str) {
    if let Some(path) = path {
        let trimmed = content.trim();
        if !trimmed.is_empty() {
            files.insert(path, trimmed);
        }
    }
}

/// A marker is a line of the form `# <relative/path>.yml` with nothing else
/// on it. Returns the path when the line is one.
fn marker_path(line: &str) -> Option<&str> {
    let line = line.trim_end();
    let rest = line.strip_prefix('#')?;
    let path = rest.trim_start();
    if path.is_empty() || !path.ends_with(".yml") {
        return None;
    }
    if !path
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '.' | '-'))
    {
        return None;
    }
    Some(path)
}

/// One task as the text service reports it: the closed type tag plus an
/// open details object read defensively below.
#[derive(Debug, Deserialize)]
struct RawTask {
    #[serde(rename = "type")]
    task_type: String,
    action: String,
    target: String,
    #[serde(default)]
    details: serde_json::Value,
}

/// Parse the JSON task array the task-generation prompt asks for, assigning
/// fresh ids. Markdown code fences around the JSON are tolerated.
pub fn parse_task_response(response: &str) -> Result<Vec<ParsedTask>, GenError> {
    let cleaned = clean_json_response(response);
    let raw: Vec<RawTask> =
        serde_json::from_str(cleaned).map_err(|e| GenError::TaskParse(e.to_string()))?;

    raw.into_iter()
        .map(|task| {
            let task_type = TaskType::from_str(&task.task_type)
                .ok_or_else(|| GenError::TaskParse(format!("unknown task type: {}", task.task_type)))?;
            let details = details_from_value(task_type, &task.target, &task.details);
            let original_text = format!("{} {}", task.action, task.target);
            Ok(ParsedTask::new(
                task_type,
                task.action,
                task.target,
                original_text,
                details,
            ))
        })
        .collect()
}

/// Strip surrounding markdown code-block markers.
fn clean_json_response(response: &str) -> &str {
    let s = response.trim();
    let s = s
        .strip_prefix("```json")
        .or_else(|| s.strip_prefix("```"))
        .unwrap_or(s);
    let s = s.strip_suffix("```").unwrap_or(s);
    s.trim()
}

fn details_from_value(task_type: TaskType, target: &str, value: &serde_json::Value) -> TaskDetails {
    let str_field = |key: &str| value.get(key).and_then(|v| v.as_str()).map(str::to_string);
    match task_type {
        TaskType::Package => TaskDetails::Package {
            state: str_field("state").unwrap_or_else(|| "present".to_string()),
        },
        TaskType::Service => TaskDetails::Service {
            state: str_field("state"),
            enabled: value.get("enabled").and_then(|v| v.as_bool()),
        },
        TaskType::File => TaskDetails::File {
            kind: str_field("type").or_else(|| str_field("kind")),
            path: str_field("path"),
            state: str_field("state"),
        },
        TaskType::Config => TaskDetails::Config {
            path: str_field("path").unwrap_or_else(|| format!("/etc/{target}")),
            requires: value
                .get("requires")
                .and_then(|v| v.as_array())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| item.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default(),
        },
        TaskType::Command => TaskDetails::Command {
            command: str_field("command").unwrap_or_default(),
        },
    }
}
