use std::sync::Arc;

use crate::config::Config;
use crate::gateway::Gateway;
use crate::notify::Notifier;

/// Capabilities handed to every page controller. Holds no page data.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn Gateway>,
    pub notifier: Arc<dyn Notifier>,
    pub config: Config,
}
