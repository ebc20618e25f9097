//! Local playbook assembly: turns a [`GenerationRequest`] into a single
//! document or a fixed set of interrelated files, applying the complexity
//! policy's directives.
//!
//! Assembly is pure and deterministic; it assumes well-formed tasks
//! (non-empty targets) and does not re-validate them.

mod multi;
mod policy;
mod render;
mod single;

pub use multi::assemble_multi;
pub use policy::{directives, Directives};
pub use single::assemble_single;

use opsmith_core::{GeneratedPlaybook, GenerationRequest, Structure};

/// Assemble a playbook locally according to the request's layout mode.
pub fn assemble(req: &GenerationRequest) -> GeneratedPlaybook {
    match req.structure {
        Structure::Single => GeneratedPlaybook::Single(assemble_single(req)),
        Structure::Multi => GeneratedPlaybook::Multi(assemble_multi(req)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsmith_core::{Complexity, ParsedTask, TaskDetails, TaskType};

    fn config_task(target: &str) -> ParsedTask {
        ParsedTask::new(
            TaskType::Config,
            "configure",
            target,
            format!("configure {target}"),
            TaskDetails::Config {
                path: format!("/etc/{target}"),
                requires: Vec::new(),
            },
        )
    }

    fn service_task(action: &str, target: &str) -> ParsedTask {
        ParsedTask::new(
            TaskType::Service,
            action,
            target,
            format!("{action} {target}"),
            TaskDetails::Service {
                state: Some(action.to_string()),
                enabled: None,
            },
        )
    }

    fn request(
        tasks: Vec<ParsedTask>,
        complexity: Complexity,
        structure: Structure,
    ) -> GenerationRequest {
        GenerationRequest {
            description: "test".to_string(),
            tasks,
            complexity,
            structure,
        }
    }

    #[test]
    fn basic_single_has_no_handlers_or_vars() {
        let req = request(
            vec![service_task("restart", "nginx")],
            Complexity::Basic,
            Structure::Single,
        );
        let doc = assemble_single(&req);
        assert!(doc.starts_with("---\n- name: Basic Playbook\n"));
        assert!(doc.contains("  hosts: all\n"));
        assert!(doc.contains("  become: yes\n"));
        assert!(doc.contains("        state: restart\n"));
        assert!(!doc.contains("handlers:"));
        assert!(!doc.contains("vars:"));
        assert!(!doc.contains("pre_tasks:"));
    }

    #[test]
    fn assembly_is_deterministic() {
        let req = request(
            vec![config_task("nginx"), service_task("start", "nginx")],
            Complexity::Advanced,
            Structure::Single,
        );
        assert_eq!(assemble_single(&req), assemble_single(&req));
    }

    #[test]
    fn advanced_single_emits_vars_pre_tasks_and_handlers() {
        let req = request(vec![config_task("nginx")], Complexity::Advanced, Structure::Single);
        let doc = assemble_single(&req);
        assert!(doc.contains("  vars:\n    nginx_port: 80\n    nginx_root: /var/www/nginx\n"));
        assert!(doc.contains("  pre_tasks:\n    - name: Update package cache\n"));
        assert!(doc.contains("  handlers:\n    - name: Restart nginx\n"));
        assert!(doc.contains("      notify: Restart nginx\n"));
    }

    #[test]
    fn handlers_need_a_config_task() {
        let req = request(
            vec![service_task("start", "nginx")],
            Complexity::Advanced,
            Structure::Single,
        );
        assert!(!assemble_single(&req).contains("handlers:"));
    }

    #[test]
    fn intermediate_notifies_without_a_handlers_block() {
        let req = request(
            vec![config_task("nginx")],
            Complexity::Intermediate,
            Structure::Single,
        );
        let doc = assemble_single(&req);
        assert!(doc.contains("notify: Restart nginx"));
        assert!(!doc.contains("handlers:"));
        assert!(doc.contains("any_errors_fatal: true"));
    }

    #[test]
    fn task_order_is_preserved() {
        let req = request(
            vec![service_task("stop", "apache"), service_task("start", "nginx")],
            Complexity::Basic,
            Structure::Single,
        );
        let doc = assemble_single(&req);
        let stop = doc.find("stop apache service").unwrap();
        let start = doc.find("start nginx service").unwrap();
        assert!(stop < start);
    }

    #[test]
    fn multi_basic_emits_entry_and_tasks_files_only() {
        let req = request(
            vec![config_task("nginx")],
            Complexity::Basic,
            Structure::Multi,
        );
        let files = assemble_multi(&req);
        let paths: Vec<_> = files.paths().collect();
        assert_eq!(paths, vec!["main.yml", "tasks/main.yml"]);
        assert!(files
            .get("main.yml")
            .unwrap()
            .contains("import_playbook: tasks/main.yml"));
    }

    #[test]
    fn multi_advanced_emits_vars_and_handlers_files() {
        let req = request(
            vec![config_task("nginx"), config_task("mysql")],
            Complexity::Advanced,
            Structure::Multi,
        );
        let files = assemble_multi(&req);
        let paths: Vec<_> = files.paths().collect();
        assert_eq!(
            paths,
            vec!["main.yml", "tasks/main.yml", "vars/main.yml", "handlers/main.yml"]
        );
        let vars = files.get("vars/main.yml").unwrap();
        assert!(vars.contains("nginx_port: 80"));
        assert!(vars.contains("mysql_root: /var/www/mysql"));
        let handlers = files.get("handlers/main.yml").unwrap();
        assert!(handlers.contains("- name: Restart nginx"));
        assert!(handlers.contains("- name: Restart mysql"));
    }

    #[test]
    fn multi_without_config_tasks_skips_vars_and_handlers() {
        let req = request(
            vec![service_task("start", "nginx")],
            Complexity::Advanced,
            Structure::Multi,
        );
        let files = assemble_multi(&req);
        assert!(!files.contains("vars/main.yml"));
        assert!(!files.contains("handlers/main.yml"));
    }

    #[test]
    fn assemble_dispatches_on_structure() {
        let single = request(vec![], Complexity::Basic, Structure::Single);
        assert!(matches!(assemble(&single), GeneratedPlaybook::Single(_)));
        let multi = request(vec![], Complexity::Basic, Structure::Multi);
        assert!(matches!(assemble(&multi), GeneratedPlaybook::Multi(_)));
    }
}
