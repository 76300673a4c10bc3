use std::future::Future;

use reqwest::Client;

use crate::api::error::GenerationError;
use crate::api::types::{GenerationRequest, ReplyPayload};

/// Path of the generation endpoint, relative to the configured base URL.
pub const GENERATE_PATH: &str = "/api/email/generate";

/// Anything that can turn a request into a reply.
///
/// The HTTP client is the production implementation; tests substitute
/// in-process fakes.
pub trait ReplyGenerator: Send + Sync + 'static {
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<ReplyPayload, GenerationError>> + Send;
}

/// Posts requests to `{base_url}/api/email/generate`.
///
/// No timeout is configured beyond reqwest's own defaults, and failures
/// are never retried.
#[derive(Debug, Clone)]
pub struct HttpReplyGenerator {
    client: Client,
    endpoint: String,
}

impl HttpReplyGenerator {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("replydraft/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint_url(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ReplyGenerator for HttpReplyGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<ReplyPayload, GenerationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|source| GenerationError::Transport {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| GenerationError::Body { source })?;

        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ReplyPayload::from_body(&body))
    }
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), GENERATE_PATH)
}
