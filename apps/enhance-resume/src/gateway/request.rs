//! Request decoding and validation.
//!
//! The wire body is a loose bag of optional fields keyed by `type`. It is
//! decoded as a JSON object and then narrowed into exactly one
//! `PromptPayload` variant. Only the fields the kind uses are decoded; any
//! other key is ignored whatever its type. Every kind requires its top-level
//! payload. Nested context records are typed: wrongly-typed fields are
//! rejected, and absent fields default when the prompt is rendered.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Kinds
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    Summarize,
    AtsScan,
    Summary,
    Skills,
    Improve,
    ExperienceDescription,
    EducationDegree,
    EducationInstitution,
    EducationDescription,
    EducationDates,
    FullResume,
}

impl PromptKind {
    pub const ALL: [PromptKind; 11] = [
        PromptKind::Summarize,
        PromptKind::AtsScan,
        PromptKind::Summary,
        PromptKind::Skills,
        PromptKind::Improve,
        PromptKind::ExperienceDescription,
        PromptKind::EducationDegree,
        PromptKind::EducationInstitution,
        PromptKind::EducationDescription,
        PromptKind::EducationDates,
        PromptKind::FullResume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::Summarize => "summarize",
            PromptKind::AtsScan => "ats-scan",
            PromptKind::Summary => "summary",
            PromptKind::Skills => "skills",
            PromptKind::Improve => "improve",
            PromptKind::ExperienceDescription => "experience-description",
            PromptKind::EducationDegree => "education-degree",
            PromptKind::EducationInstitution => "education-institution",
            PromptKind::EducationDescription => "education-description",
            PromptKind::EducationDates => "education-dates",
            PromptKind::FullResume => "full-resume",
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::Validation(format!("Unsupported 'type' parameter: '{s}'")))
    }
}

/// The single sub-field an `education-*` request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Degree,
    Institution,
    Description,
    Dates,
}

// ────────────────────────────────────────────────────────────────────────────
// Context records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceContext {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationContext {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub level: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire body
// ────────────────────────────────────────────────────────────────────────────

/// Raw inbound body: a JSON object whose fields are decoded on demand.
/// `PromptRequest::try_from` takes only the ones the kind actually needs.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct EnhanceRequestBody {
    fields: Map<String, Value>,
}

impl EnhanceRequestBody {
    /// Removes and decodes `key`. Absent and `null` are both `None`.
    fn take<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, AppError> {
        match self.fields.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| AppError::Validation(format!("Invalid '{key}' parameter: {e}"))),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Validated request
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum PromptPayload {
    Summarize {
        text: String,
    },
    AtsScan {
        text: String,
    },
    Summary {
        experience: Vec<String>,
        skills: Vec<String>,
    },
    Skills {
        experience: Vec<String>,
    },
    Improve {
        description: String,
    },
    ExperienceDescription(ExperienceContext),
    Education {
        field: EducationField,
        context: EducationContext,
    },
    FullResume {
        source_data: Map<String, Value>,
        resume_template: String,
    },
}

/// A validated request: one payload plus the content-fidelity flag.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub payload: PromptPayload,
    pub preserve_user_content: bool,
}

impl PromptRequest {
    /// Decodes and validates a raw JSON body.
    pub fn from_json(body: &[u8]) -> Result<Self, AppError> {
        let body: EnhanceRequestBody = serde_json::from_slice(body)
            .map_err(|e| AppError::Validation(format!("Invalid JSON in request body: {e}")))?;
        Self::try_from(body)
    }

    pub fn kind(&self) -> PromptKind {
        match &self.payload {
            PromptPayload::Summarize { .. } => PromptKind::Summarize,
            PromptPayload::AtsScan { .. } => PromptKind::AtsScan,
            PromptPayload::Summary { .. } => PromptKind::Summary,
            PromptPayload::Skills { .. } => PromptKind::Skills,
            PromptPayload::Improve { .. } => PromptKind::Improve,
            PromptPayload::ExperienceDescription(_) => PromptKind::ExperienceDescription,
            PromptPayload::Education { field, .. } => match field {
                EducationField::Degree => PromptKind::EducationDegree,
                EducationField::Institution => PromptKind::EducationInstitution,
                EducationField::Description => PromptKind::EducationDescription,
                EducationField::Dates => PromptKind::EducationDates,
            },
            PromptPayload::FullResume { .. } => PromptKind::FullResume,
        }
    }
}

impl TryFrom<EnhanceRequestBody> for PromptRequest {
    type Error = AppError;

    fn try_from(mut body: EnhanceRequestBody) -> Result<Self, Self::Error> {
        let tag: Option<String> = match body.take("type")? {
            Some(tag) => Some(tag),
            None => body.take("kind")?,
        };
        let kind: PromptKind = tag
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AppError::Validation("Missing 'type' parameter in request".to_string()))?
            .parse()?;

        let payload = match kind {
            PromptKind::Summarize => PromptPayload::Summarize {
                text: require_text(body.take("text")?, "text", kind)?,
            },
            PromptKind::AtsScan => PromptPayload::AtsScan {
                text: require_text(body.take("text")?, "text", kind)?,
            },
            PromptKind::Summary => PromptPayload::Summary {
                experience: require_entries(body.take("experience")?, kind)?,
                skills: non_blank(body.take::<Vec<String>>("skills")?.unwrap_or_default()),
            },
            PromptKind::Skills => PromptPayload::Skills {
                experience: require_entries(body.take("experience")?, kind)?,
            },
            PromptKind::Improve => PromptPayload::Improve {
                description: require_text(body.take("description")?, "description", kind)?,
            },
            PromptKind::ExperienceDescription => PromptPayload::ExperienceDescription(
                body.take::<ExperienceContext>("experienceContext")?
                    .ok_or_else(|| missing("experienceContext", kind))?,
            ),
            PromptKind::EducationDegree
            | PromptKind::EducationInstitution
            | PromptKind::EducationDescription
            | PromptKind::EducationDates => {
                let field = match kind {
                    PromptKind::EducationDegree => EducationField::Degree,
                    PromptKind::EducationInstitution => EducationField::Institution,
                    PromptKind::EducationDescription => EducationField::Description,
                    _ => EducationField::Dates,
                };
                PromptPayload::Education {
                    field,
                    context: body
                        .take::<EducationContext>("educationContext")?
                        .ok_or_else(|| missing("educationContext", kind))?,
                }
            }
            PromptKind::FullResume => {
                let source_data = match body.take::<Value>("linkedinData")? {
                    Some(Value::Object(map)) => map,
                    Some(_) => {
                        return Err(AppError::Validation(
                            "'linkedinData' must be a JSON object".to_string(),
                        ))
                    }
                    None => return Err(missing("linkedinData", kind)),
                };
                PromptPayload::FullResume {
                    source_data,
                    resume_template: body
                        .take::<String>("resumeTemplate")?
                        .map(|t| t.trim().to_string())
                        .filter(|t| !t.is_empty())
                        .unwrap_or_else(|| "modern".to_string()),
                }
            }
        };

        Ok(PromptRequest {
            payload,
            preserve_user_content: body.take::<bool>("preserveUserContent")?.unwrap_or(false),
        })
    }
}

fn missing(field: &str, kind: PromptKind) -> AppError {
    AppError::Validation(format!("Missing '{field}' parameter for {kind}"))
}

fn require_text(value: Option<String>, field: &str, kind: PromptKind) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| missing(field, kind))
}

fn require_entries(value: Option<Vec<String>>, kind: PromptKind) -> Result<Vec<String>, AppError> {
    let entries = non_blank(value.unwrap_or_default());
    if entries.is_empty() {
        return Err(AppError::Validation(format!(
            "Insufficient experience data for {kind}: 'experience' must be a non-empty list"
        )));
    }
    Ok(entries)
}

fn non_blank(values: Vec<String>) -> Vec<String> {
    values.into_iter().filter(|v| !v.trim().is_empty()).collect()
}
