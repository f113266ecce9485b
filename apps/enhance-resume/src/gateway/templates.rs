//! Versioned prompt templates.
//!
//! A `PromptTemplates` set maps each kind to a `PromptTemplate` (body plus
//! content-fidelity clause). The built-in set can be partially overridden by a
//! JSON file keyed by kind name, so a prompt variant is configuration rather
//! than a second copy of the gateway.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::gateway::prompts::*;
use crate::gateway::request::{
    EducationContext, EducationField, ExperienceContext, PromptKind, PromptPayload, PromptRequest,
};

const NOT_SPECIFIED: &str = "Not specified";
const NOT_PROVIDED: &str = "Not provided";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z_]+)\}").expect("static regex"));

/// One kind's prompt: the body and the clause spliced into `{fidelity}`.
/// An override that leaves `fidelity` empty keeps the built-in clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub body: String,
    #[serde(default)]
    pub fidelity: String,
}

impl PromptTemplate {
    fn builtin(body: &str, fidelity: &str) -> Self {
        Self {
            body: body.to_string(),
            fidelity: fidelity.to_string(),
        }
    }

    /// Fills the body. The fidelity clause is included only when `preserve` is set.
    pub fn render(&self, preserve: bool, vars: &[(&str, &str)]) -> String {
        let fidelity = if preserve { self.fidelity.as_str() } else { "" };
        let mut all = Vec::with_capacity(vars.len() + 1);
        all.push(("fidelity", fidelity));
        all.extend_from_slice(vars);
        fill(&self.body, &all)
    }
}

/// Single-pass `{name}` substitution. Unknown placeholders are left as-is, and
/// substituted values are never re-scanned.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            vars.iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PromptTemplates {
    pub version: String,
    pub summarize: PromptTemplate,
    pub ats_scan: PromptTemplate,
    pub summary: PromptTemplate,
    pub skills: PromptTemplate,
    pub improve: PromptTemplate,
    pub experience_description: PromptTemplate,
    pub education_degree: PromptTemplate,
    pub education_institution: PromptTemplate,
    pub education_description: PromptTemplate,
    pub education_dates: PromptTemplate,
    pub full_resume: PromptTemplate,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            version: BUILTIN_VERSION.to_string(),
            summarize: PromptTemplate::builtin(SUMMARIZE_PROMPT_TEMPLATE, SUMMARIZE_FIDELITY),
            ats_scan: PromptTemplate::builtin(ATS_SCAN_PROMPT_TEMPLATE, ATS_SCAN_FIDELITY),
            summary: PromptTemplate::builtin(SUMMARY_PROMPT_TEMPLATE, SUMMARY_FIDELITY),
            skills: PromptTemplate::builtin(SKILLS_PROMPT_TEMPLATE, SKILLS_FIDELITY),
            improve: PromptTemplate::builtin(IMPROVE_PROMPT_TEMPLATE, IMPROVE_FIDELITY),
            experience_description: PromptTemplate::builtin(
                EXPERIENCE_PROMPT_TEMPLATE,
                EXPERIENCE_FIDELITY,
            ),
            education_degree: PromptTemplate::builtin(
                EDUCATION_DEGREE_PROMPT_TEMPLATE,
                EDUCATION_DEGREE_FIDELITY,
            ),
            education_institution: PromptTemplate::builtin(
                EDUCATION_INSTITUTION_PROMPT_TEMPLATE,
                EDUCATION_INSTITUTION_FIDELITY,
            ),
            education_description: PromptTemplate::builtin(
                EDUCATION_DESCRIPTION_PROMPT_TEMPLATE,
                EDUCATION_DESCRIPTION_FIDELITY,
            ),
            education_dates: PromptTemplate::builtin(
                EDUCATION_DATES_PROMPT_TEMPLATE,
                EDUCATION_DATES_FIDELITY,
            ),
            full_resume: PromptTemplate::builtin(FULL_RESUME_PROMPT_TEMPLATE, FULL_RESUME_FIDELITY),
        }
    }
}

impl PromptTemplates {
    /// Built-in set, overlaid with the JSON file at `path` when given.
    /// Kinds missing from the file keep their built-in template. Every body
    /// must carry `{fidelity}` so `preserveUserContent` keeps working.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read prompt templates from {}", path.display()))?;
        let mut templates: PromptTemplates = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid prompt templates file {}", path.display()))?;

        let builtin = Self::default();
        for kind in PromptKind::ALL {
            let template = templates.template_mut(kind);
            ensure!(
                !template.body.trim().is_empty(),
                "Prompt template for '{kind}' has an empty body"
            );
            ensure!(
                template.body.contains("{fidelity}"),
                "Prompt template for '{kind}' is missing the {{fidelity}} placeholder"
            );
            if template.fidelity.trim().is_empty() {
                template.fidelity = builtin.template(kind).fidelity.clone();
            }
        }

        Ok(templates)
    }

    pub fn template(&self, kind: PromptKind) -> &PromptTemplate {
        match kind {
            PromptKind::Summarize => &self.summarize,
            PromptKind::AtsScan => &self.ats_scan,
            PromptKind::Summary => &self.summary,
            PromptKind::Skills => &self.skills,
            PromptKind::Improve => &self.improve,
            PromptKind::ExperienceDescription => &self.experience_description,
            PromptKind::EducationDegree => &self.education_degree,
            PromptKind::EducationInstitution => &self.education_institution,
            PromptKind::EducationDescription => &self.education_description,
            PromptKind::EducationDates => &self.education_dates,
            PromptKind::FullResume => &self.full_resume,
        }
    }

    fn template_mut(&mut self, kind: PromptKind) -> &mut PromptTemplate {
        match kind {
            PromptKind::Summarize => &mut self.summarize,
            PromptKind::AtsScan => &mut self.ats_scan,
            PromptKind::Summary => &mut self.summary,
            PromptKind::Skills => &mut self.skills,
            PromptKind::Improve => &mut self.improve,
            PromptKind::ExperienceDescription => &mut self.experience_description,
            PromptKind::EducationDegree => &mut self.education_degree,
            PromptKind::EducationInstitution => &mut self.education_institution,
            PromptKind::EducationDescription => &mut self.education_description,
            PromptKind::EducationDates => &mut self.education_dates,
            PromptKind::FullResume => &mut self.full_resume,
        }
    }

    /// Renders the prompt for a validated request.
    pub fn render(&self, request: &PromptRequest) -> Result<String, AppError> {
        let template = self.template(request.kind());
        let preserve = request.preserve_user_content;

        let prompt = match &request.payload {
            PromptPayload::Summarize { text } | PromptPayload::AtsScan { text } => {
                template.render(preserve, &[("text", text.as_str())])
            }
            PromptPayload::Summary { experience, skills } => {
                let skills = if skills.is_empty() {
                    NOT_PROVIDED.to_string()
                } else {
                    skills.join(", ")
                };
                template.render(
                    preserve,
                    &[
                        ("experience", experience.join("\n").as_str()),
                        ("skills", skills.as_str()),
                    ],
                )
            }
            PromptPayload::Skills { experience } => {
                template.render(preserve, &[("experience", experience.join("\n").as_str())])
            }
            PromptPayload::Improve { description } => {
                template.render(preserve, &[("description", description.as_str())])
            }
            PromptPayload::ExperienceDescription(context) => {
                render_experience(template, preserve, context)
            }
            PromptPayload::Education { field, context } => {
                render_education(template, preserve, *field, context)
            }
            PromptPayload::FullResume {
                source_data,
                resume_template,
            } => {
                let source = serde_json::to_string_pretty(source_data).map_err(|e| {
                    AppError::Internal(anyhow::anyhow!("Failed to serialize source data: {e}"))
                })?;
                template.render(
                    preserve,
                    &[
                        ("source_data", source.as_str()),
                        ("resume_template", resume_template.as_str()),
                    ],
                )
            }
        };

        Ok(prompt)
    }
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

fn render_experience(template: &PromptTemplate, preserve: bool, ctx: &ExperienceContext) -> String {
    template.render(
        preserve,
        &[
            ("title", or_default(&ctx.title, NOT_SPECIFIED)),
            ("company", or_default(&ctx.company, NOT_SPECIFIED)),
            ("location", or_default(&ctx.location, NOT_SPECIFIED)),
            ("start_date", or_default(&ctx.start_date, NOT_SPECIFIED)),
            ("end_date", or_default(&ctx.end_date, "Present")),
            (
                "description",
                or_default(&ctx.description, "No previous description provided"),
            ),
        ],
    )
}

fn render_education(
    template: &PromptTemplate,
    preserve: bool,
    field: EducationField,
    ctx: &EducationContext,
) -> String {
    let institution = or_default(&ctx.institution, NOT_SPECIFIED);
    let study_field = or_default(&ctx.field, NOT_SPECIFIED);
    let location = or_default(&ctx.location, NOT_SPECIFIED);

    match field {
        EducationField::Degree => template.render(
            preserve,
            &[
                ("institution", institution),
                ("field", study_field),
                ("level", or_default(&ctx.level, "Bachelor's")),
            ],
        ),
        EducationField::Institution => template.render(
            preserve,
            &[
                ("degree", or_default(&ctx.degree, NOT_SPECIFIED)),
                ("location", location),
                ("field", study_field),
            ],
        ),
        EducationField::Description => template.render(
            preserve,
            &[
                ("degree", or_default(&ctx.degree, NOT_SPECIFIED)),
                ("institution", institution),
                ("field", study_field),
            ],
        ),
        EducationField::Dates => {
            let year = Utc::now().year().to_string();
            template.render(
                preserve,
                &[
                    ("degree", or_default(&ctx.degree, "Bachelor's")),
                    ("status", or_default(&ctx.status, "Graduated")),
                    ("current_year", year.as_str()),
                ],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn request(value: serde_json::Value) -> PromptRequest {
        PromptRequest::from_json(value.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn test_fill_is_single_pass() {
        let out = fill("A {text} B {other}", &[("text", "{other}"), ("other", "X")]);
        assert_eq!(out, "A {other} B X");
    }

    #[test]
    fn test_fill_keeps_unknown_placeholders_and_json() {
        let out = fill("{\"a\": 1} {unknown} {text}", &[("text", "t")]);
        assert_eq!(out, "{\"a\": 1} {unknown} t");
    }

    /// One minimal valid body per kind.
    fn minimal_requests() -> [serde_json::Value; 11] {
        [
            json!({"type": "summarize", "text": "t"}),
            json!({"type": "ats-scan", "text": "t"}),
            json!({"type": "summary", "experience": ["e"], "skills": ["s"]}),
            json!({"type": "skills", "experience": ["e"]}),
            json!({"type": "improve", "description": "d"}),
            json!({"type": "experience-description", "experienceContext": {}}),
            json!({"type": "education-degree", "educationContext": {}}),
            json!({"type": "education-institution", "educationContext": {}}),
            json!({"type": "education-description", "educationContext": {}}),
            json!({"type": "education-dates", "educationContext": {}}),
            json!({"type": "full-resume", "linkedinData": {}}),
        ]
    }

    #[test]
    fn test_builtin_templates_have_no_leftover_placeholders() {
        let templates = PromptTemplates::default();
        for raw in minimal_requests() {
            let prompt = templates.render(&request(raw.clone())).unwrap();
            assert!(
                !PLACEHOLDER.is_match(&prompt),
                "unfilled placeholder for {raw}: {prompt}"
            );
        }
    }

    #[test]
    fn test_fidelity_clause_follows_flag() {
        let templates = PromptTemplates::default();

        let plain = templates
            .render(&request(json!({"type": "improve", "description": "Ran payroll"})))
            .unwrap();
        assert!(plain.contains("Ran payroll"));
        assert!(!plain.contains(IMPROVE_FIDELITY));

        let preserved = templates
            .render(&request(json!({
                "type": "improve",
                "description": "Ran payroll",
                "preserveUserContent": true
            })))
            .unwrap();
        assert!(preserved.contains(IMPROVE_FIDELITY));
    }

    #[test]
    fn test_every_kind_honors_the_fidelity_flag() {
        let templates = PromptTemplates::default();
        let fidelity_clauses = [
            (PromptKind::Summarize, SUMMARIZE_FIDELITY),
            (PromptKind::AtsScan, ATS_SCAN_FIDELITY),
            (PromptKind::Summary, SUMMARY_FIDELITY),
            (PromptKind::Skills, SKILLS_FIDELITY),
            (PromptKind::Improve, IMPROVE_FIDELITY),
            (PromptKind::ExperienceDescription, EXPERIENCE_FIDELITY),
            (PromptKind::EducationDegree, EDUCATION_DEGREE_FIDELITY),
            (PromptKind::EducationInstitution, EDUCATION_INSTITUTION_FIDELITY),
            (PromptKind::EducationDescription, EDUCATION_DESCRIPTION_FIDELITY),
            (PromptKind::EducationDates, EDUCATION_DATES_FIDELITY),
            (PromptKind::FullResume, FULL_RESUME_FIDELITY),
        ];

        for raw in minimal_requests() {
            let plain = request(raw.clone());
            let kind = plain.kind();
            let clause = fidelity_clauses
                .iter()
                .find(|(k, _)| *k == kind)
                .map(|(_, clause)| *clause)
                .unwrap();

            let mut preserved = plain.clone();
            preserved.preserve_user_content = true;

            assert!(
                !templates.render(&plain).unwrap().contains(clause),
                "{kind} includes its fidelity clause without the flag"
            );
            assert!(
                templates.render(&preserved).unwrap().contains(clause),
                "{kind} drops its fidelity clause with the flag"
            );
        }
    }

    #[test]
    fn test_summary_lists_experience_and_skills() {
        let prompt = PromptTemplates::default()
            .render(&request(json!({
                "type": "summary",
                "experience": ["Built APIs", "Ran on-call"],
                "skills": ["Rust", "Go"]
            })))
            .unwrap();
        assert!(prompt.contains("Built APIs\nRan on-call"));
        assert!(prompt.contains("Rust, Go"));

        let prompt = PromptTemplates::default()
            .render(&request(json!({"type": "summary", "experience": ["Built APIs"]})))
            .unwrap();
        assert!(prompt.contains(NOT_PROVIDED));
    }

    #[test]
    fn test_experience_context_defaults() {
        let prompt = PromptTemplates::default()
            .render(&request(json!({
                "type": "experience-description",
                "experienceContext": {"title": "SRE", "startDate": "03 2021"}
            })))
            .unwrap();
        assert!(prompt.contains("Job Title: SRE"));
        assert!(prompt.contains("Company: Not specified"));
        assert!(prompt.contains("Duration: 03 2021 to Present"));
    }

    #[test]
    fn test_education_dates_mentions_current_year() {
        let prompt = PromptTemplates::default()
            .render(&request(json!({"type": "education-dates", "educationContext": {}})))
            .unwrap();
        assert!(prompt.contains(&Utc::now().year().to_string()));
        assert!(prompt.contains("Current Status: Graduated"));
    }

    #[test]
    fn test_full_resume_embeds_source_and_layout() {
        let prompt = PromptTemplates::default()
            .render(&request(json!({
                "type": "full-resume",
                "linkedinData": {"name": "Grace Hopper"},
                "resumeTemplate": "classic"
            })))
            .unwrap();
        assert!(prompt.contains("\"name\": \"Grace Hopper\""));
        assert!(prompt.contains("TARGET LAYOUT: classic"));
    }

    #[test]
    fn test_user_text_is_not_reexpanded() {
        let prompt = PromptTemplates::default()
            .render(&request(json!({"type": "summarize", "text": "literal {fidelity} here"})))
            .unwrap();
        assert!(prompt.contains("literal {fidelity} here"));
    }

    #[test]
    fn test_load_without_path_is_builtin() {
        let templates = PromptTemplates::load(None).unwrap();
        assert_eq!(templates, PromptTemplates::default());
        assert_eq!(templates.version, BUILTIN_VERSION);
    }

    #[test]
    fn test_load_overrides_only_given_kinds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            json!({
                "version": "concise-v1",
                "skills": {"body": "List skills from:\n{experience}\n{fidelity}"}
            })
        )
        .unwrap();

        let templates = PromptTemplates::load(Some(file.path())).unwrap();
        assert_eq!(templates.version, "concise-v1");
        assert_eq!(templates.skills.fidelity, SKILLS_FIDELITY);
        assert_eq!(templates.summary, PromptTemplates::default().summary);

        let prompt = templates
            .render(&request(json!({"type": "skills", "experience": ["Ran ETL jobs"]})))
            .unwrap();
        assert_eq!(prompt, "List skills from:\nRan ETL jobs\n");
    }

    #[test]
    fn test_load_keeps_custom_fidelity_clause() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            json!({"improve": {"body": "Improve: {description} {fidelity}", "fidelity": "NO NEW FACTS"}})
        )
        .unwrap();

        let templates = PromptTemplates::load(Some(file.path())).unwrap();
        let prompt = templates
            .render(&request(json!({
                "type": "improve",
                "description": "Ran payroll",
                "preserveUserContent": true
            })))
            .unwrap();
        assert_eq!(prompt, "Improve: Ran payroll NO NEW FACTS");
    }

    #[test]
    fn test_load_rejects_body_without_fidelity_placeholder() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json!({"summarize": {"body": "Summarize: {text}"}})).unwrap();

        let err = PromptTemplates::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("{fidelity}"), "error was: {err}");
    }

    #[test]
    fn test_load_rejects_empty_body() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json!({"improve": {"body": "  "}})).unwrap();
        assert!(PromptTemplates::load(Some(file.path())).is_err());
    }
}
