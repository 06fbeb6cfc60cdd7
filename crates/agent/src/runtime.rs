use std::sync::Arc;

use tracing::{debug, warn};

use frota_core::{classify, extract, formatter, Action, VehicleFilter};
use frota_db::VehicleRepository;

/// Drives one conversation turn end to end: extract criteria, classify
/// the action, query the catalog, render the reply.
pub struct AgentRuntime {
    catalog: Arc<dyn VehicleRepository>,
}

impl AgentRuntime {
    pub fn new(catalog: Arc<dyn VehicleRepository>) -> Self {
        Self { catalog }
    }

    /// Always returns a reply. Catalog failures degrade to a fixed
    /// apology instead of surfacing an error to the caller.
    pub async fn handle_turn(&self, text: &str) -> String {
        let criteria = extract(text);
        let action = classify(text, &criteria);
        debug!(?action, ?criteria, "classified turn");

        match action {
            Action::ListBrands => match self.catalog.distinct_brands().await {
                Ok(brands) => formatter::render_brands(&brands),
                Err(error) => degrade("distinct_brands", &error),
            },
            Action::ListAll => self.search_and_render(&VehicleFilter::default()).await,
            Action::FilteredSearch => {
                self.search_and_render(&frota_core::filter::build(&criteria)).await
            }
            Action::Unrecognized => formatter::render_help().to_string(),
        }
    }

    async fn search_and_render(&self, filter: &VehicleFilter) -> String {
        match self.catalog.search(filter).await {
            Ok(records) if records.is_empty() => formatter::render_no_matches().to_string(),
            Ok(records) => formatter::render_vehicles(&records),
            Err(error) => degrade("search", &error),
        }
    }
}

fn degrade(operation: &str, error: &frota_db::RepositoryError) -> String {
    warn!(operation, %error, "catalog unavailable, degrading reply");
    formatter::render_catalog_failure().to_string()
}
