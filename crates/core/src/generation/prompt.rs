/// Wrap the user's idea in the instruction template sent to the model.
pub fn build_generation_prompt(idea: &str) -> String {
    format!(
        r#"Analyze the following idea: "{idea}".
First, determine what type of business or industry it refers to.
Then generate a JSON object with realistic content for a landing page for that industry.
The object must have exactly three top-level keys: "hero", "about" and "contact".

{{
  "hero": {{
    "title": "Dynamic, industry-relevant headline",
    "subtitle": "Engaging line that fits the business type",
    "cta": "1-2 word call-to-action based on the idea"
  }},
  "about": {{
    "heading": "About section heading",
    "text": "Realistic paragraph explaining the business or product"
  }},
  "contact": {{
    "heading": "Contact heading",
    "email": "a realistic email",
    "phone": "a realistic phone number",
    "address": "a realistic address"
  }}
}}

The content must match the industry identified from the prompt.
Return ONLY valid raw JSON. Do NOT include any explanation, markdown, or code block formatting. The response MUST start with '{{' and end with '}}'."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_forge_extract::parse_response;

    #[test]
    fn embeds_the_idea() {
        let prompt = build_generation_prompt("vegan food truck in Austin");
        assert!(prompt.starts_with("Analyze the following idea: \"vegan food truck in Austin\"."));
    }

    #[test]
    fn states_the_format_constraints() {
        let prompt = build_generation_prompt("x");
        assert!(prompt.contains("Return ONLY valid raw JSON"));
        assert!(prompt.contains("MUST start with '{' and end with '}'"));
        assert!(prompt.contains("\"hero\", \"about\" and \"contact\""));
    }

    #[test]
    fn example_object_is_valid_json() {
        let prompt = build_generation_prompt("x");
        let start = prompt.find("\n{\n").unwrap() + 1;
        let end = prompt.find("\n}\n").unwrap() + 2;
        let example = parse_response(&prompt[start..end]).unwrap();
        let keys: Vec<&str> = example.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["hero", "about", "contact"]);
    }
}
