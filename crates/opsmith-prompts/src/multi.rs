use opsmith_core::{Complexity, ParsedTask};

use crate::append_task_list;
use crate::complexity;

/// Append the prompt asking for the structured multi-file layout. The
/// response must carry each file under a `# <path>` marker line so the
/// response parser can split it back apart.
pub fn append_prompt(
    prompt: &mut String,
    description: &str,
    tasks: &[ParsedTask],
    tier: Complexity,
) {
    prompt.push_str(&format!(
        "Generate a well-structured Ansible playbook for: {description}\n\n"
    ));
    prompt.push_str("Tasks to include:\n");
    append_task_list(prompt, tasks);
    prompt.push_str("\nCreate the following files following Ansible best practices:\n\n");
    prompt.push_str(concat!(
        "1. site.yml - Main playbook file that:\n",
        "   - Includes proper metadata (author, description)\n",
        "   - Imports other playbooks\n",
        "   - Sets global variables\n",
        "\n",
        "2. group_vars/all.yml - Common variables:\n",
        "   - Default values\n",
        "   - Global settings\n",
        "   - Common paths\n",
        "\n",
        "3. roles/main/defaults/main.yml - Role default variables:\n",
        "   - Override-able defaults\n",
        "   - Package versions\n",
        "   - Configuration options\n",
        "\n",
        "4. roles/main/vars/main.yml - Role variables:\n",
        "   - Fixed role variables\n",
        "   - Internal role settings\n",
        "\n",
        "5. roles/main/tasks/main.yml - Main tasks:\n",
        "   - Organized by functionality\n",
        "   - Tagged appropriately\n",
        "   - Include proper error handling\n",
        "\n",
        "6. roles/main/handlers/main.yml - Event handlers:\n",
        "   - Service restarts\n",
        "   - Configuration reloads\n",
        "   - Cleanup tasks\n",
        "\n",
        "7. roles/main/templates/ - Configuration templates:\n",
        "   - Generate template files for each service\n",
        "   - Use proper variable substitution\n",
        "   - Include comments\n",
    ));
    prompt.push_str("\nRequirements:");
    complexity::append_instructions(prompt, tier);
    prompt.push_str(concat!(
        "\n- Ensure idempotency",
        "\n- Use proper YAML syntax",
        "\n- Follow Ansible directory structure",
        "\n- Implement proper variable precedence",
        "\n- Use meaningful tags",
        "\n- Include proper documentation",
        "\n\n",
        "Output each file's content with its path as a comment, like:\n",
        "# site.yml\n",
        "(content)\n",
        "# group_vars/all.yml\n",
        "(content)\n",
        "etc.",
    ));
}
