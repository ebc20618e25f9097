use opsmith_core::{ParsedTask, TaskDetails, TaskType};

use crate::policy::Directives;

/// Render the YAML directive for one task, indented for the `tasks:` list.
pub fn append_task(out: &mut String, task: &ParsedTask, directives: &Directives) {
    match task.task_type {
        TaskType::Package => append_package(out, task),
        TaskType::Service => append_service(out, task, directives),
        TaskType::File => append_file(out, task, directives),
        TaskType::Config => append_config(out, task, directives),
        TaskType::Command => append_command(out, task),
    }
}

fn append_package(out: &mut String, task: &ParsedTask) {
    out.push_str(&format!("    - name: Install {}\n", task.target));
    out.push_str("      package:\n");
    out.push_str(&format!("        name: {}\n", task.target));
    out.push_str("        state: present\n");
}

fn append_service(out: &mut String, task: &ParsedTask, directives: &Directives) {
    let (state, enabled) = match &task.details {
        TaskDetails::Service { state, enabled } => (state.as_deref(), *enabled),
        _ => (None, None),
    };
    out.push_str(&format!("    - name: {} {} service\n", task.action, task.target));
    out.push_str("      service:\n");
    out.push_str(&format!("        name: {}\n", task.target));
    out.push_str(&format!("        state: {}\n", state.unwrap_or("started")));
    match enabled {
        Some(enabled) => out.push_str(&format!("        enabled: {enabled}\n")),
        // Deeper state: advanced playbooks pin services to start on boot.
        None if directives.deep_state => out.push_str("        enabled: true\n"),
        None => {}
    }
}

fn append_file(out: &mut String, task: &ParsedTask, directives: &Directives) {
    let (path, state) = match &task.details {
        TaskDetails::File { path, state, .. } => (path.as_deref(), state.as_deref()),
        _ => (None, None),
    };
    out.push_str(&format!("    - name: {} {}\n", task.action, task.target));
    out.push_str("      file:\n");
    out.push_str(&format!("        path: {}\n", path.unwrap_or(&task.target)));
    out.push_str(&format!("        state: {}\n", state.unwrap_or("directory")));
    out.push_str("        mode: '0755'\n");
    if directives.deep_state {
        out.push_str("        owner: root\n");
        out.push_str("        group: root\n");
    }
}

fn append_config(out: &mut String, task: &ParsedTask, directives: &Directives) {
    out.push_str(&format!("    - name: Configure {}\n", task.target));
    out.push_str("      template:\n");
    out.push_str(&format!("        src: {}.conf.j2\n", task.target));
    out.push_str(&format!(
        "        dest: /etc/{target}/{target}.conf\n",
        target = task.target
    ));
    out.push_str("        mode: '0644'\n");
    if directives.notify_handlers {
        out.push_str(&format!("      notify: Restart {}\n", task.target));
    }
}

fn append_command(out: &mut String, task: &ParsedTask) {
    let command = match &task.details {
        TaskDetails::Command { command } if !command.is_empty() => command.as_str(),
        _ => task.target.as_str(),
    };
    out.push_str("    - name: Execute command\n");
    out.push_str(&format!("      command: {command}\n"));
}

/// Distinct config-task targets in first-appearance order; vars and
/// handlers carry one entry each per target.
pub fn config_targets(tasks: &[ParsedTask]) -> Vec<&str> {
    let mut targets: Vec<&str> = Vec::new();
    for task in tasks {
        if task.task_type == TaskType::Config && !targets.contains(&task.target.as_str()) {
            targets.push(&task.target);
        }
    }
    targets
}
