/// Prompt asking the text service to break a requirement into a JSON task
/// array; the generation pipeline parses the reply back into `ParsedTask`s.
pub fn task_generation_prompt(description: &str) -> String {
    let mut prompt = String::from(concat!(
        "Given the following automation requirement, generate a list of ",
        "specific tasks needed to fulfill it. Format the response as a JSON ",
        "array of tasks.\n",
        "\n",
        "Each task should have:\n",
        "- type: 'package' | 'service' | 'file' | 'config' | 'command'\n",
        "- action: specific action to take\n",
        "- target: what the action applies to\n",
        "- details: additional configuration needed\n",
        "\n",
        "Example output format:\n",
        "[\n",
        "  {\n",
        "    \"type\": \"package\",\n",
        "    \"action\": \"install\",\n",
        "    \"target\": \"nginx\",\n",
        "    \"details\": { \"state\": \"present\" }\n",
        "  }\n",
        "]\n",
        "\n",
        "Requirement: ",
    ));
    prompt.push_str(description);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_ends_with_the_requirement() {
        let prompt = task_generation_prompt("Install nginx");
        assert!(prompt.ends_with("Requirement: Install nginx"));
        assert!(prompt.contains("JSON array of tasks"));
    }
}
