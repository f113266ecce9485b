use serde::Serialize;
use serde_json::{Map, Value};

/// Response body for a successful enhancement. Serialized untagged, so each
/// variant's JSON is exactly the shape the client expects for its kind.
///
/// The JSON kinds carry the object the model embedded in its reply as-is:
/// keys the client does not know about pass through, and nothing is added
/// except `projects` on a full resume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PromptResult {
    /// `summarize`, `summary`
    Summary { summary: String },
    /// `improve`
    Improved { improved: String },
    /// `experience-description`, `education-description`
    Description { description: String },
    Degree { degree: String },
    Institution { institution: String },
    EducationDates {
        #[serde(rename = "startDate")]
        start_date: String,
        #[serde(rename = "endDate")]
        end_date: String,
    },
    /// `{technical, soft}`
    Skills(Map<String, Value>),
    /// `{score, metrics, strengths, improvements, keywords, ...}`
    AtsScan(Map<String, Value>),
    FullResume {
        #[serde(rename = "enhancedResume")]
        enhanced_resume: Map<String, Value>,
    },
}
