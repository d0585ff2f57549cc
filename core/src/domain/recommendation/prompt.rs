pub const SYMPTOMS_PLACEHOLDER: &str = "{symptoms}";

pub const ADVISOR_PROMPT_TEMPLATE: &str = r#"You are a careful supplement advisor. Suggest evidence-based supplements for the following symptoms or health concerns: "{symptoms}"

Rules:
- Recommend only supplements with solid research behind them.
- Give research-based dosages.
- List relevant precautions and interactions.
- Stay conservative.
- Always include a medical disclaimer.
- Rate your confidence in each recommendation from 0 to 100.
- Prefer natural, widely available supplements.
- Put safety first.

Return between 3 and 5 recommendations, most relevant first."#;

pub fn render_advisor_prompt(symptoms: &str) -> String {
    ADVISOR_PROMPT_TEMPLATE.replace(SYMPTOMS_PLACEHOLDER, symptoms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_inserts_symptoms_once() {
        let prompt = render_advisor_prompt("tired after lunch");
        assert!(prompt.contains("\"tired after lunch\""));
        assert!(!prompt.contains(SYMPTOMS_PLACEHOLDER));
    }

    #[test]
    fn test_render_does_not_expand_placeholder_inside_input() {
        let prompt = render_advisor_prompt("{symptoms}");
        assert_eq!(prompt.matches("{symptoms}").count(), 1);
    }
}
