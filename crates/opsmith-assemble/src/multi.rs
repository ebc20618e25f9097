use opsmith_core::{FileMap, GenerationRequest};

use crate::policy::directives;
use crate::render::config_targets;
use crate::single::assemble_single;

/// Render the fixed multi-file layout: an entry playbook importing the
/// tasks file, plus vars and handlers files when config tasks exist and
/// the tier asks for them. File names are convention, not configuration.
pub fn assemble_multi(req: &GenerationRequest) -> FileMap {
    let d = directives(req.complexity);
    let targets = config_targets(&req.tasks);

    let mut files = FileMap::new();
    files.insert(
        "main.yml",
        "---\n- name: Main Playbook\n  import_playbook: tasks/main.yml\n",
    );
    files.insert("tasks/main.yml", assemble_single(req));

    if !targets.is_empty() {
        if d.variables {
            let mut vars = String::from("---\n");
            for target in &targets {
                vars.push_str(&format!("{target}_port: 80\n"));
                vars.push_str(&format!("{target}_root: /var/www/{target}\n"));
            }
            files.insert("vars/main.yml", vars);
        }
        if d.handlers {
            let mut handlers = String::from("---\n");
            for target in &targets {
                handlers.push_str(&format!("- name: Restart {target}\n"));
                handlers.push_str("  service:\n");
                handlers.push_str(&format!("    name: {target}\n"));
                handlers.push_str("    state: restarted\n");
            }
            files.insert("handlers/main.yml", handlers);
        }
    }

    files
}
