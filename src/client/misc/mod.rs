//! Endpoints that belong to no wallet family.

use std::sync::Arc;

use super::http::Transport;

mod network;
mod node;
mod proxy;
mod settings;
mod utils;

pub use network::Network;
pub use node::Node;
pub use proxy::Proxy;
pub use settings::Settings;
pub use utils::Utils;

#[derive(Debug, Clone)]
pub struct Misc {
    http: Arc<dyn Transport>,
}

impl Misc {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        Self { http }
    }

    #[must_use]
    pub fn network(&self) -> Network {
        Network::new(Arc::clone(&self.http))
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings::new(Arc::clone(&self.http))
    }

    #[must_use]
    pub fn utils(&self) -> Utils {
        Utils::new(Arc::clone(&self.http))
    }

    #[must_use]
    pub fn proxy(&self) -> Proxy {
        Proxy::new(Arc::clone(&self.http))
    }

    #[must_use]
    pub fn node(&self) -> Node {
        Node::new(Arc::clone(&self.http))
    }
}
