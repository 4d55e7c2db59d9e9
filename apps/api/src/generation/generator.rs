//! Resume Generation: tailors a summary and project descriptions to a job description.
//!
//! Flow: resolve size → build prompt → LLM complete → strip fences →
//!       parse JSON → validate shape → return `ResumeResult`.
//!
//! One model call per request. No retries.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::GenerationError;
use crate::generation::prompts::RESUME_PROMPT_TEMPLATE;
use crate::generation::sizing::ContentSize;
use crate::llm_client::output::{into_typed, parse_reply};
use crate::llm_client::prompts::{fill_template, or_not_provided, NO_FORMATTING_INSTRUCTION};
use crate::llm_client::TextGenerator;

const UNTITLED_PROJECT: &str = "Untitled Project";
const NO_DESCRIPTION: &str = "No description";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

/// A project selected for the resume. Accepts either `title` or `name`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProjectInput {
    pub fn display_title(&self) -> &str {
        non_blank(self.title.as_deref())
            .or_else(|| non_blank(self.name.as_deref()))
            .unwrap_or(UNTITLED_PROJECT)
    }

    pub fn display_description(&self) -> &str {
        non_blank(self.description.as_deref()).unwrap_or(NO_DESCRIPTION)
    }
}

/// Request body for resume content generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResumeRequest {
    pub job_description: String,
    pub user_profile: UserProfile,
    #[serde(default)]
    pub projects: Vec<ProjectInput>,
    /// `small` | `medium` | `large`; anything else resolves to `medium`.
    #[serde(default)]
    pub size: Option<String>,
}

/// One tailored project in the generated resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProject {
    pub title: String,
    pub description: String,
    pub tech: String,
}

/// Generated resume content. Field names are a downstream contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeResult {
    pub summary: String,
    pub projects: Vec<ResumeProject>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Generates tailored resume content with a single model call.
pub async fn generate_resume(
    llm: &dyn TextGenerator,
    request: &GenerateResumeRequest,
) -> Result<ResumeResult, GenerationError> {
    let size = ContentSize::resolve(request.size.as_deref());
    info!(
        "Generating {} resume content for {} with {} projects",
        size.as_str(),
        request.user_profile.name,
        request.projects.len()
    );

    let prompt = build_resume_prompt(request, size);

    let reply = llm
        .complete(&prompt)
        .await
        .map_err(|e| GenerationError::Provider(e.to_string()))?;

    let result = interpret_resume_reply(&reply)?;

    info!(
        "Generated resume summary ({} chars) and {} project descriptions",
        result.summary.len(),
        result.projects.len()
    );

    Ok(result)
}

/// Parses and validates a raw model reply into a `ResumeResult`.
pub fn interpret_resume_reply(reply: &str) -> Result<ResumeResult, GenerationError> {
    let value = parse_reply(reply)?;
    validate_resume_shape(&value)?;
    into_typed(value, "resume projects must each carry text title, description and tech")
}

fn validate_resume_shape(value: &Value) -> Result<(), GenerationError> {
    let summary_ok = value
        .get("summary")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());
    if !summary_ok {
        return Err(GenerationError::Shape(
            "expected a non-empty \"summary\" string".to_string(),
        ));
    }

    if !value.get("projects").is_some_and(Value::is_array) {
        return Err(GenerationError::Shape(
            "expected a \"projects\" array".to_string(),
        ));
    }

    Ok(())
}

/// Builds the generation prompt by filling the template with the request.
pub fn build_resume_prompt(request: &GenerateResumeRequest, size: ContentSize) -> String {
    let profile = render_profile(&request.user_profile);
    let projects = render_projects(&request.projects);
    fill_template(
        RESUME_PROMPT_TEMPLATE,
        &[
            ("job_description", request.job_description.trim()),
            ("profile", profile.as_str()),
            ("projects", projects.as_str()),
            ("size_guidance", size.guidance()),
            ("no_formatting_instruction", NO_FORMATTING_INSTRUCTION),
        ],
    )
}

fn render_profile(profile: &UserProfile) -> String {
    let skills = profile
        .skills
        .as_ref()
        .filter(|s| !s.is_empty())
        .map(|s| s.join(", "));

    format!(
        "Name: {}\nEmail: {}\nBio: {}\nSkills: {}",
        profile.name.trim(),
        or_not_provided(profile.email.as_deref()),
        or_not_provided(profile.bio.as_deref()),
        or_not_provided(skills.as_deref()),
    )
}

fn render_projects(projects: &[ProjectInput]) -> String {
    if projects.is_empty() {
        return "(none selected, return an empty \"projects\" array)".to_string();
    }
    projects
        .iter()
        .map(|p| format!("- {}: {}", p.display_title(), p.display_description()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
