//! Prompt constants and builders for the two narrative documents.
//!
//! Each prompt spells out the exact JSON schema the parser expects, which
//! keeps downstream parse failures (and therefore fallbacks) rare.

use crate::models::profile::{CandidateAttributes, Category};

/// Sampling temperature for both narrative calls.
pub const NARRATIVE_TEMPERATURE: f32 = 0.7;

/// System prompt for the skill analysis document.
pub const ANALYSIS_SYSTEM: &str =
    "You are an expert in software development careers and technology stack analysis. \
    You analyze a developer's skills and experience and provide tailored feedback. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Analysis prompt template.
/// Replace: {role}, {career}, {education}, {major}, {skills}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Here is the profile of a {role}:

- Career level: {career}
- Education: {education}
- Major: {major}
- Tech stack: {skills}

Analyze this developer's tech stack and experience and provide the following in JSON:

1. "strengths": strengths of the skills they hold (each item has skill and description)
2. "market": standing relative to industry demand (each item has skill, level, and description; level is "missing" or "weak")
3. "careerAnalysis": assessment of their career level (a string)

The response must match this EXACT JSON schema:

{
  "strengths": [
    {
      "skill": "skill name",
      "description": "what the skill is and why it is a strength"
    }
  ],
  "market": [
    {
      "skill": "skill name",
      "level": "missing or weak",
      "description": "what the skill is and its market demand"
    }
  ],
  "careerAnalysis": "career assessment text"
}"#;

/// System prompt for the learning roadmap document.
pub const ROADMAP_SYSTEM: &str =
    "You are a software development career coach. \
    You analyze a developer's current tech stack and provide a learning roadmap for career growth. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Roadmap prompt template.
/// Replace: {role}, {career}, {education}, {major}, {skills}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Here is the profile of a {role}:

- Career level: {career}
- Education: {education}
- Major: {major}
- Tech stack: {skills}

Provide a learning roadmap to advance this developer's career, in JSON:

1. "prioritySkills": recommended skills to learn (a string)
2. "roadmap": a step-by-step learning plan (each item has title and description)

The response must match this EXACT JSON schema:

{
  "prioritySkills": "comma-separated list of recommended skills",
  "roadmap": [
    {
      "title": "learning step title",
      "description": "what the step covers"
    }
  ]
}"#;

const NOT_PROVIDED: &str = "not provided";

/// Fills a prompt template with the candidate's category, attributes, and
/// comma-joined skill names. Absent attributes render as "not provided".
pub fn render_prompt(
    template: &str,
    category: Category,
    attributes: &CandidateAttributes,
    skill_names: &[String],
) -> String {
    let skills = if skill_names.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        skill_names.join(", ")
    };

    template
        .replace("{role}", category.role_label())
        .replace(
            "{career}",
            attributes.career.as_deref().unwrap_or(NOT_PROVIDED),
        )
        .replace(
            "{education}",
            attributes.education.as_deref().unwrap_or(NOT_PROVIDED),
        )
        .replace("{major}", attributes.major.as_deref().unwrap_or(NOT_PROVIDED))
        .replace("{skills}", &skills)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs() -> CandidateAttributes {
        CandidateAttributes {
            career: Some("junior".to_string()),
            education: Some("bachelor".to_string()),
            major: None,
        }
    }

    #[test]
    fn test_render_fills_all_placeholders() {
        let prompt = render_prompt(
            ANALYSIS_PROMPT_TEMPLATE,
            Category::Frontend,
            &attrs(),
            &["React".to_string(), "HTML5".to_string()],
        );
        assert!(prompt.contains("frontend developer"));
        assert!(prompt.contains("Career level: junior"));
        assert!(prompt.contains("Major: not provided"));
        assert!(prompt.contains("Tech stack: React, HTML5"));
        assert!(!prompt.contains("{role}"));
        assert!(!prompt.contains("{skills}"));
    }

    #[test]
    fn test_render_empty_skills_is_not_provided() {
        let prompt = render_prompt(ROADMAP_PROMPT_TEMPLATE, Category::Backend, &attrs(), &[]);
        assert!(prompt.contains("Tech stack: not provided"));
        assert!(prompt.contains("backend developer"));
    }

    #[test]
    fn test_templates_spell_out_schema_fields() {
        assert!(ANALYSIS_PROMPT_TEMPLATE.contains("\"careerAnalysis\""));
        assert!(ANALYSIS_PROMPT_TEMPLATE.contains("missing or weak"));
        assert!(ROADMAP_PROMPT_TEMPLATE.contains("\"prioritySkills\""));
        assert!(ROADMAP_PROMPT_TEMPLATE.contains("\"roadmap\""));
    }

    #[test]
    fn test_other_category_renders_generic_role() {
        let prompt = render_prompt(ANALYSIS_PROMPT_TEMPLATE, Category::Other, &attrs(), &[]);
        assert!(prompt.contains("software developer"));
    }
}
