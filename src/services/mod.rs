//! Service layer
//!
//! Business logic over the database and storage layers: the wizard flow,
//! event publication and listing, and the pure filter/sort engine.

pub mod events;
pub mod filters;
pub mod wizard;

pub use events::{build_create_request, group_events, EventService};
pub use filters::{
    derive_route_list, filter_routes, sort_routes, RouteFilters, SortOption,
};
pub use wizard::WizardService;

use std::sync::Arc;

use crate::config::Settings;
use crate::database::DatabaseService;
use crate::state::{DraftStorage, KeyValueStore};

/// Factory wiring every service to the shared database pool and store
#[derive(Clone)]
pub struct ServiceFactory {
    pub wizard: WizardService,
    pub events: EventService,
}

impl ServiceFactory {
    pub fn new(
        database: &DatabaseService,
        store: Arc<dyn KeyValueStore>,
        settings: &Settings,
    ) -> Self {
        let drafts = DraftStorage::from_config(store.clone(), &settings.redis);

        Self {
            wizard: WizardService::new(drafts.clone()),
            events: EventService::new(
                database.events.clone(),
                database.routes.clone(),
                drafts,
                store,
                settings.events.clone(),
                &settings.redis.prefix,
            ),
        }
    }
}

impl std::fmt::Debug for ServiceFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceFactory").finish_non_exhaustive()
    }
}
