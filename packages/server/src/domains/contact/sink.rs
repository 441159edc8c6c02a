use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::domains::contact::models::ContactSubmission;

/// Where accepted submissions go.
///
/// The production system would hand submissions to a mail or CRM
/// collaborator; that integration is supplied behind this seam, not guessed
/// at. The shipped implementation only records the submission for operator
/// visibility.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<()>;
}

/// Diagnostic-only sink: logs the submission and drops it.
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
        tracing::info!(
            name = submission.name.as_deref().unwrap_or_default(),
            email = submission.email.as_deref().unwrap_or_default(),
            subject = submission.subject.as_deref().unwrap_or_default(),
            body = submission.message.as_deref().unwrap_or_default(),
            "Contact form submission"
        );
        Ok(())
    }
}

/// Default sink wiring for the server binary.
pub fn create_submission_sink() -> Arc<dyn SubmissionSink> {
    Arc::new(LogSink)
}
