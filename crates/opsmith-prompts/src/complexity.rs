use opsmith_core::Complexity;

/// Append the per-tier instruction bullets shared by both prompt shapes.
pub fn append_instructions(prompt: &mut String, complexity: Complexity) {
    match complexity {
        Complexity::Basic => prompt.push_str(
            "\n- Use simple, straightforward tasks\
             \n- Include basic error checking\
             \n- Add essential comments\
             \n- Focus on core functionality",
        ),
        Complexity::Intermediate => prompt.push_str(
            "\n- Use variables for common values\
             \n- Include comprehensive error handling\
             \n- Add detailed comments and descriptions\
             \n- Implement basic handlers for service restarts\
             \n- Follow Ansible best practices",
        ),
        Complexity::Advanced => prompt.push_str(
            "\n- Implement full error handling and recovery\
             \n- Use templates for complex configurations\
             \n- Include pre and post tasks\
             \n- Add extensive logging and notifications\
             \n- Implement handlers for all state changes\
             \n- Use tags for selective execution\
             \n- Optimize for performance and reliability\
             \n- Follow all Ansible best practices",
        ),
    }
}
