//! HTTP client for the LexiCare analysis backend.
//!
//! Two operations: `POST {base}/analyze/` (multipart, field `files`) and
//! `POST {base}/feedback/` (JSON). Both treat any non-2xx status as a
//! failure.

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::config::{API_BASE_URL, UPLOAD_FIELD_NAME};
use crate::state::PendingFile;
use crate::{AnalyzeResponse, AppError, AppResult, FeedbackRequest};

/// Remote collaborator behind the upload form and the feedback form.
#[allow(async_fn_in_trait)]
pub trait ReportBackend {
    /// File handle accepted by `analyze`.
    type File: PendingFile;

    async fn analyze(&self, files: &[Self::File]) -> AppResult<AnalyzeResponse>;

    async fn submit_feedback(&self, request: &FeedbackRequest) -> AppResult<()>;
}

/// Browser client built on `gloo-net`.
#[derive(Clone, Debug)]
pub struct LexicareApi {
    base_url: String,
}

impl LexicareApi {
    /// Client for the build-time configured base URL.
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `{base}/{name}/`, tolerating a trailing slash on the base.
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}/", self.base_url.trim_end_matches('/'), name)
    }
}

impl Default for LexicareApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBackend for LexicareApi {
    type File = File;

    async fn analyze(&self, files: &[File]) -> AppResult<AnalyzeResponse> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Request(format!("Failed to create FormData: {:?}", e)))?;

        for file in files {
            form_data
                .append_with_blob_and_filename(UPLOAD_FIELD_NAME, file, &file.name())
                .map_err(|e| AppError::Request(format!("Failed to append file: {:?}", e)))?;
        }

        let url = self.endpoint("analyze");
        log::info!("📤 Sending {} report(s) to {}", files.len(), url);

        let request = Request::post(&url)
            .body(form_data)
            .map_err(|e| AppError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let response = ensure_success(response).await?;

        response
            .json::<AnalyzeResponse>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }

    async fn submit_feedback(&self, request: &FeedbackRequest) -> AppResult<()> {
        let url = self.endpoint("feedback");
        log::info!("📝 Sending feedback for report {}", request.report_id);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| AppError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        // Body is not inspected beyond the status
        ensure_success(response).await.map(|_| ())
    }
}

async fn ensure_success(response: Response) -> AppResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(AppError::Server { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let api = LexicareApi::with_base_url("http://localhost:8006/api");
        assert_eq!(api.endpoint("analyze"), "http://localhost:8006/api/analyze/");
        assert_eq!(api.endpoint("feedback"), "http://localhost:8006/api/feedback/");

        let relative = LexicareApi::with_base_url("/api/");
        assert_eq!(relative.endpoint("analyze"), "/api/analyze/");
    }
}
