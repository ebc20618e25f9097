//! Prompt builders for the external text-generation service.

mod complexity;
mod multi;
mod single;
mod tasks;

pub use tasks::task_generation_prompt;

use opsmith_core::{GenerationRequest, ParsedTask, Structure};

/// Assemble the playbook-generation prompt for a request.
pub fn playbook_prompt(req: &GenerationRequest) -> String {
    let mut prompt = String::new();
    match req.structure {
        Structure::Single => {
            single::append_prompt(&mut prompt, &req.description, &req.tasks, req.complexity)
        }
        Structure::Multi => {
            multi::append_prompt(&mut prompt, &req.description, &req.tasks, req.complexity)
        }
    }
    prompt
}

/// Render every task as `- <action> <target> (<type>)`, one per line.
fn append_task_list(prompt: &mut String, tasks: &[ParsedTask]) {
    for task in tasks {
        prompt.push_str(&format!(
            "- {} {} ({})\n",
            task.action, task.target, task.task_type
        ));
    }
}
