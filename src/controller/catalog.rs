//! Initial catalog load

use crate::log_api_result;
use crate::model::DashboardError;

use super::AppController;

impl AppController {
    /// Fetch the whole catalog once. Failures end up in the error banner; nothing retries.
    pub async fn load_catalog(&self) -> Result<usize, DashboardError> {
        tracing::info!("Loading song catalog");
        self.model.lock().await.set_loading(true);

        // The model stays unlocked while the request is in flight.
        let result = self.service.fetch_all().await;
        log_api_result!("fetch_all", result);

        let mut model = self.model.lock().await;
        model.set_loading(false);
        let outcome = model.finish_load(result);
        match &outcome {
            Ok(count) => tracing::info!(count, "Catalog loaded"),
            Err(e) => {
                tracing::error!(error = %e, cause = e.cause().unwrap_or("-"), "Catalog load failed")
            }
        }
        outcome
    }
}
