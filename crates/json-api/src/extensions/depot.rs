//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::{observability::REQUEST_ID_DEPOT_KEY, state::State};

/// Typed access to values stored in the depot by middleware.
pub(crate) trait DepotExt {
    /// The injected application state, or a logged 500 when it is missing.
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError>;

    /// The id assigned to the current request by the logging middleware.
    fn request_id(&self) -> Option<&str>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map_err(|_missing| {
            error!("application state was not injected");

            StatusError::internal_server_error()
        })
    }

    fn request_id(&self) -> Option<&str> {
        self.get::<String>(REQUEST_ID_DEPOT_KEY)
            .ok()
            .map(String::as_str)
    }
}
