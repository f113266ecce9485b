//! Prompt Gateway. A validated request is rendered into a prompt, sent as one
//! completion call, and the reply is normalized into a typed result.
//!
//! Stateless. The only suspension point is the completion call; nothing is
//! written anywhere, so a dropped future needs no cleanup.

pub mod normalize;
pub mod prompts;
pub mod request;
pub mod templates;

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::models::result::PromptResult;

use self::normalize::{default_projects, format_bullets, parse_embedded_object, split_date_range};
use self::request::{PromptKind, PromptRequest};
use self::templates::PromptTemplates;

#[derive(Clone)]
pub struct PromptGateway {
    client: Arc<dyn CompletionClient>,
    templates: Arc<PromptTemplates>,
}

impl PromptGateway {
    pub fn new(client: Arc<dyn CompletionClient>, templates: PromptTemplates) -> Self {
        Self {
            client,
            templates: Arc::new(templates),
        }
    }

    pub fn templates_version(&self) -> &str {
        &self.templates.version
    }

    /// Decodes a raw JSON body and handles it. Validation failures return
    /// before the completion client is touched.
    pub async fn handle_json(&self, body: &[u8]) -> Result<PromptResult, AppError> {
        let request = PromptRequest::from_json(body)?;
        tracing::Span::current().record("kind", request.kind().as_str());
        self.handle(&request).await
    }

    pub async fn handle(&self, request: &PromptRequest) -> Result<PromptResult, AppError> {
        let kind = request.kind();
        let prompt = self.templates.render(request)?;

        info!(
            "Generating {kind} with completion API (templates: {})",
            self.templates.version
        );
        let reply = self.client.complete(&prompt).await?;
        debug!("Completion for {kind}: {} chars", reply.len());

        let result = normalize_reply(kind, &reply)?;
        info!("Successfully generated {kind}");
        Ok(result)
    }
}

/// Coerces completion text into the result shape for `kind`.
pub fn normalize_reply(kind: PromptKind, reply: &str) -> Result<PromptResult, AppError> {
    let result = match kind {
        PromptKind::Summarize | PromptKind::Summary => PromptResult::Summary {
            summary: format_bullets(reply),
        },
        PromptKind::Improve => PromptResult::Improved {
            improved: format_bullets(reply),
        },
        PromptKind::ExperienceDescription => PromptResult::Description {
            description: format_bullets(reply),
        },
        PromptKind::Skills => PromptResult::Skills(parse_embedded_object(reply, "skills")?),
        PromptKind::AtsScan => PromptResult::AtsScan(parse_embedded_object(reply, "ATS scan")?),
        PromptKind::FullResume => {
            let mut resume = parse_embedded_object(reply, "resume")?;
            default_projects(&mut resume);
            PromptResult::FullResume {
                enhanced_resume: resume,
            }
        }
        PromptKind::EducationDegree => PromptResult::Degree {
            degree: reply.trim().to_string(),
        },
        PromptKind::EducationInstitution => PromptResult::Institution {
            institution: reply.trim().to_string(),
        },
        PromptKind::EducationDescription => PromptResult::Description {
            description: reply.trim().to_string(),
        },
        PromptKind::EducationDates => {
            let (start_date, end_date) = split_date_range(reply)?;
            PromptResult::EducationDates {
                start_date,
                end_date,
            }
        }
    };
    Ok(result)
}
