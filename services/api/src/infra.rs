use async_trait::async_trait;
use focus_recruitment::workflows::contact::{ContactMessage, DispatchError, EmailDispatcher};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Prints the EmailJS template parameters instead of sending them.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct DryRunDispatcher;

#[async_trait]
impl EmailDispatcher for DryRunDispatcher {
    async fn dispatch(&self, message: &ContactMessage) -> Result<(), DispatchError> {
        let rendered = serde_json::to_string_pretty(message)
            .map_err(|err| DispatchError::Network(err.to_string()))?;
        info!(contact_type = %message.kind, "dry run, contact message not sent");
        println!("{rendered}");
        Ok(())
    }
}
