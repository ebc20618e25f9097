use opsmith_core::{Complexity, ParsedTask};

use crate::complexity;
use crate::append_task_list;

/// Append the prompt asking for one self-contained playbook document.
pub fn append_prompt(
    prompt: &mut String,
    description: &str,
    tasks: &[ParsedTask],
    tier: Complexity,
) {
    prompt.push_str(&format!(
        "Generate an Ansible playbook for the following requirement: {description}\n\n"
    ));
    prompt.push_str("Tasks to include:\n");
    append_task_list(prompt, tasks);
    prompt.push_str("\nRequirements:");
    complexity::append_instructions(prompt, tier);
    prompt.push_str(
        "\n- Ensure idempotency\
         \n- Use proper YAML syntax\n\n\
         Output the playbook in YAML format without any additional text or markdown.",
    );
}
