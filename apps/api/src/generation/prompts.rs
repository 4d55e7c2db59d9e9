// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Resume content prompt template.
/// Replace: {job_description}, {profile}, {projects}, {size_guidance},
///          {no_formatting_instruction}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer. Tailor a professional summary and project descriptions for the candidate below so they speak directly to the target role.

JOB DESCRIPTION:
{job_description}

CANDIDATE PROFILE:
{profile}

SELECTED PROJECTS:
{projects}

LENGTH GUIDANCE:
{size_guidance}

Return a JSON object with this EXACT schema (no extra fields):
{
  "summary": "Tailored professional summary",
  "projects": [
    {
      "title": "Project title exactly as listed above",
      "description": "Tailored project description",
      "tech": "Comma-separated technologies relevant to the role"
    }
  ]
}

HARD RULES:
1. Include one entry in "projects" for EACH selected project, in the same order, keeping its title unchanged
2. Use ONLY facts from the profile and project descriptions, no invented employers, metrics or dates
3. Emphasize the skills and responsibilities the job description asks for
4. "tech" is a single string, never an array

{no_formatting_instruction}"#;
