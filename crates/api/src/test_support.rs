//! Fakes shared by router tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use fxreport_core::model::{ModelCallError, ModelInvoker, TextModel};
use fxreport_core::reports::ReportGenerator;

/// Answers every call with the same canned result.
pub struct CannedModel {
    reply: Result<String, ModelCallError>,
}

#[async_trait]
impl TextModel for CannedModel {
    async fn generate(&self, _model: &str, _prompt: &str) -> Result<String, ModelCallError> {
        self.reply.clone()
    }
}

/// A configured generator over two fake model identifiers.
pub fn generator(reply: Result<&str, ModelCallError>) -> ReportGenerator {
    let model = CannedModel {
        reply: reply.map(str::to_string),
    };
    ReportGenerator::new(ModelInvoker::new(
        Arc::new(model),
        vec!["fake-primary".into(), "fake-backup".into()],
        Duration::from_secs(5),
    ))
}
