use opsmith_core::GenerationRequest;

use crate::policy::directives;
use crate::render::{append_task, config_targets};

/// Render one self-contained playbook document: header, optional vars and
/// pre_tasks, every task in list order, optional handlers.
pub fn assemble_single(req: &GenerationRequest) -> String {
    let d = directives(req.complexity);
    let targets = config_targets(&req.tasks);

    let mut out = String::new();
    out.push_str("---\n");
    out.push_str(&format!("- name: {} Playbook\n", req.complexity.display_name()));
    out.push_str("  hosts: all\n");
    out.push_str("  become: yes\n");

    if d.error_handling {
        out.push_str("  # stop on the first failed task\n");
        out.push_str("  any_errors_fatal: true\n");
    }

    if d.variables && !targets.is_empty() {
        out.push_str("\n  vars:\n");
        for target in &targets {
            out.push_str(&format!("    {target}_port: 80\n"));
            out.push_str(&format!("    {target}_root: /var/www/{target}\n"));
        }
    }

    if d.pre_tasks {
        out.push_str("\n  pre_tasks:\n");
        out.push_str("    - name: Update package cache\n");
        out.push_str("      apt:\n");
        out.push_str("        update_cache: yes\n");
        out.push_str("      when: ansible_os_family == \"Debian\"\n");
    }

    out.push_str("\n  tasks:\n");
    for task in &req.tasks {
        append_task(&mut out, task, &d);
    }

    if d.handlers && !targets.is_empty() {
        out.push_str("\n  handlers:\n");
        for target in &targets {
            out.push_str(&format!("    - name: Restart {target}\n"));
            out.push_str("      service:\n");
            out.push_str(&format!("        name: {target}\n"));
            out.push_str("        state: restarted\n");
        }
    }

    out
}
