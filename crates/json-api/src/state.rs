//! State

use std::sync::Arc;

use hospital_app::context::AppContext;

/// Shared handler state: the services behind every route.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
