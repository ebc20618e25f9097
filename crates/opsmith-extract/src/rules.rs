use opsmith_core::{ParsedTask, TaskDetails, TaskType};

use crate::fragment::Fragment;

/// One extraction rule: a named pattern that may yield any number of tasks
/// from a fragment. Priority and overlap behavior live in the [`RULES`]
/// table, not in the rules themselves.
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&Fragment) -> Vec<ParsedTask>,
}

/// The rule table, evaluated top to bottom for every fragment. Every rule
/// that matches contributes tasks; a fragment may legitimately yield tasks
/// from more than one rule.
pub const RULES: &[Rule] = &[
    Rule {
        name: "install",
        apply: install_rule,
    },
    Rule {
        name: "service",
        apply: service_rule,
    },
    Rule {
        name: "config",
        apply: config_rule,
    },
    Rule {
        name: "file",
        apply: file_rule,
    },
];

const SERVICE_VERBS: &[&str] = &["start", "stop", "restart", "enable", "disable"];

const CONFIG_VERBS: &[&str] = &["configure", "setup"];

const CONFIG_SUBJECTS: &[&str] = &[
    "ssl",
    "nginx",
    "apache",
    "mysql",
    "postgresql",
    "php",
    "python",
    "certificates",
    "config",
];

const FILE_VERBS: &[&str] = &["create", "remove", "delete"];

const FILE_KINDS: &[&str] = &["directory", "file", "folder"];

/// Keywords that promote an otherwise unmatched fragment to a raw command.
const FALLBACK_KEYWORDS: &[&str] = &[
    "install",
    "configure",
    "setup",
    "start",
    "enable",
    "create",
];

/// `install|add <name>[, <name>...][ and <name>]` -> one package task per
/// listed name. Items that carry configure phrasing are left for the config
/// rule.
fn install_rule(frag: &Fragment) -> Vec<ParsedTask> {
    let Some(verb_idx) = frag.find_word(&["install", "add"]) else {
        return Vec::new();
    };

    split_object_list(frag.tail_after(verb_idx))
        .into_iter()
        .map(|name| {
            ParsedTask::new(
                TaskType::Package,
                "install",
                name,
                frag.original(),
                TaskDetails::Package {
                    state: "present".to_string(),
                },
            )
        })
        .collect()
}

/// Split a comma/"and"/"with"-joined object list into individual names.
fn split_object_list(tail: &str) -> Vec<String> {
    tail.split(',')
        .flat_map(|piece| piece.split(" and "))
        .flat_map(|piece| piece.split(" with "))
        .map(str::trim)
        .filter(|piece| !piece.is_empty() && !piece.contains("configure"))
        .map(str::to_string)
        .collect()
}

/// `start|stop|restart|enable|disable <name>[ service]` -> one service task
/// per verb occurrence.
fn service_rule(frag: &Fragment) -> Vec<ParsedTask> {
    let mut tasks = Vec::new();
    for i in 0..frag.token_count() {
        let verb = match frag.token(i) {
            Some(t) if SERVICE_VERBS.contains(&t) => t,
            _ => continue,
        };
        let name = match frag.token(i + 1) {
            // A bare "enable service" has no name to act on.
            Some(next) if next != "service" => next,
            _ => continue,
        };
        let (state, enabled) = match verb {
            "enable" => (None, Some(true)),
            "disable" => (None, Some(false)),
            verb => (Some(verb.to_string()), None),
        };
        tasks.push(ParsedTask::new(
            TaskType::Service,
            verb,
            name,
            frag.original(),
            TaskDetails::Service { state, enabled },
        ));
    }
    tasks
}

/// `configure|setup|set up` + a recognized subject -> one config task per
/// subject present in the fragment.
fn config_rule(frag: &Fragment) -> Vec<ParsedTask> {
    let has_verb = frag.find_word(CONFIG_VERBS).is_some() || has_set_up(frag);
    if !has_verb {
        return Vec::new();
    }

    CONFIG_SUBJECTS
        .iter()
        .filter(|subject| frag.contains_word(subject))
        .map(|subject| {
            let path = if *subject == "ssl" {
                "/etc/ssl".to_string()
            } else {
                format!("/etc/{subject}")
            };
            let requires = if *subject == "ssl" {
                vec!["openssl".to_string()]
            } else {
                Vec::new()
            };
            ParsedTask::new(
                TaskType::Config,
                "configure",
                *subject,
                frag.original(),
                TaskDetails::Config { path, requires },
            )
        })
        .collect()
}

fn has_set_up(frag: &Fragment) -> bool {
    (0..frag.token_count())
        .any(|i| frag.token(i) == Some("set") && frag.token(i + 1) == Some("up"))
}

/// `create|remove|delete directory|file|folder <path>` -> one file task.
/// `delete` is normalized to the `remove` action.
fn file_rule(frag: &Fragment) -> Vec<ParsedTask> {
    let mut tasks = Vec::new();
    for i in 0..frag.token_count() {
        let verb = match frag.token(i) {
            Some(t) if FILE_VERBS.contains(&t) => t,
            _ => continue,
        };
        let kind = match frag.token(i + 1) {
            Some(t) if FILE_KINDS.contains(&t) => t,
            _ => continue,
        };
        let Some(path) = frag.token(i + 2) else {
            continue;
        };
        let action = if verb == "delete" { "remove" } else { verb };
        tasks.push(ParsedTask::new(
            TaskType::File,
            action,
            path,
            frag.original(),
            TaskDetails::File {
                kind: Some(kind.to_string()),
                path: Some(path.to_string()),
                state: None,
            },
        ));
    }
    tasks
}

/// Last resort for fragments no rule recognized: if the fragment still
/// carries an action keyword, keep it as a raw command so the requirement
/// is not silently dropped.
pub fn fallback_rule(frag: &Fragment) -> Option<ParsedTask> {
    if !FALLBACK_KEYWORDS.iter().any(|k| frag.contains_word(k)) {
        return None;
    }
    Some(ParsedTask::new(
        TaskType::Command,
        "run",
        "custom",
        frag.original(),
        TaskDetails::Command {
            command: frag.original().to_string(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_splits_comma_and_joined_names() {
        let frag = Fragment::new("Please install nginx, git and curl");
        let tasks = install_rule(&frag);
        let targets: Vec<_> = tasks.iter().map(|t| t.target.as_str()).collect();
        assert_eq!(targets, vec!["nginx", "git", "curl"]);
        for task in &tasks {
            assert_eq!(task.task_type, TaskType::Package);
            assert_eq!(task.action, "install");
            assert_eq!(task.original_text, "Please install nginx, git and curl");
            assert_eq!(
                task.details,
                TaskDetails::Package {
                    state: "present".to_string()
                }
            );
        }
    }

    #[test]
    fn install_skips_configure_items() {
        let frag = Fragment::new("Install nginx and configure ssl");
        let tasks = install_rule(&frag);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].target, "nginx");
    }

    #[test]
    fn install_requires_the_verb() {
        let frag = Fragment::new("Remove the temporary files");
        assert!(install_rule(&frag).is_empty());
    }

    #[test]
    fn service_sets_state_for_plain_verbs() {
        let frag = Fragment::new("Start nginx service");
        let tasks = service_rule(&frag);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].action, "start");
        assert_eq!(tasks[0].target, "nginx");
        assert_eq!(
            tasks[0].details,
            TaskDetails::Service {
                state: Some("start".to_string()),
                enabled: None,
            }
        );
    }

    #[test]
    fn service_enable_sets_enabled_not_state() {
        let frag = Fragment::new("enable postgresql");
        let tasks = service_rule(&frag);
        assert_eq!(
            tasks[0].details,
            TaskDetails::Service {
                state: None,
                enabled: Some(true),
            }
        );
    }

    #[test]
    fn service_restart_yields_one_task_only() {
        let frag = Fragment::new("Restart nginx");
        let tasks = service_rule(&frag);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].action, "restart");
    }

    #[test]
    fn config_ssl_gets_requires_and_fixed_path() {
        let frag = Fragment::new("Configure ssl for the web server");
        let tasks = config_rule(&frag);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].target, "ssl");
        assert_eq!(
            tasks[0].details,
            TaskDetails::Config {
                path: "/etc/ssl".to_string(),
                requires: vec!["openssl".to_string()],
            }
        );
    }

    #[test]
    fn config_matches_set_up_phrasing() {
        let frag = Fragment::new("Set up mysql on the host");
        let tasks = config_rule(&frag);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].target, "mysql");
        assert_eq!(
            tasks[0].details,
            TaskDetails::Config {
                path: "/etc/mysql".to_string(),
                requires: Vec::new(),
            }
        );
    }

    #[test]
    fn config_without_recognized_subject_yields_nothing() {
        let frag = Fragment::new("Configure the firewall");
        assert!(config_rule(&frag).is_empty());
    }

    #[test]
    fn file_delete_normalizes_to_remove() {
        let frag = Fragment::new("Delete directory /tmp/build");
        let tasks = file_rule(&frag);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].action, "remove");
        assert_eq!(tasks[0].target, "/tmp/build");
        assert_eq!(
            tasks[0].details,
            TaskDetails::File {
                kind: Some("directory".to_string()),
                path: Some("/tmp/build".to_string()),
                state: None,
            }
        );
    }

    #[test]
    fn file_requires_kind_keyword() {
        let frag = Fragment::new("create /var/www");
        assert!(file_rule(&frag).is_empty());
    }

    #[test]
    fn fallback_keeps_keyword_fragments_as_commands() {
        let frag = Fragment::new("Setup the monitoring agent");
        let task = fallback_rule(&frag).unwrap();
        assert_eq!(task.task_type, TaskType::Command);
        assert_eq!(task.action, "run");
        assert_eq!(task.target, "custom");
        assert_eq!(
            task.details,
            TaskDetails::Command {
                command: "Setup the monitoring agent".to_string()
            }
        );
    }

    #[test]
    fn fallback_ignores_keyword_free_fragments() {
        let frag = Fragment::new("The server should be fast");
        assert!(fallback_rule(&frag).is_none());
    }
}
