//! Context the hosting shell installs before any chart page mounts.

use std::rc::Rc;

use api::{ClientConfig, HttpClient, PresenceSource};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::charts::ChartEnvironment;

/// Data access shared by every chart page.
#[derive(Clone)]
pub struct DashboardEnvironment {
    pub source: Rc<dyn PresenceSource>,
    pub config: ClientConfig,
}

impl DashboardEnvironment {
    /// Talk to the real backend described by `config`.
    pub fn http(config: ClientConfig) -> Self {
        let client = HttpClient::new(config);
        Self {
            config: client.config().clone(),
            source: Rc::new(client),
        }
    }

    /// Serve pages from any other source (fixtures, previews).
    pub fn with_source(source: Rc<dyn PresenceSource>, config: ClientConfig) -> Self {
        Self { source, config }
    }

    pub fn avatar_src(&self, uri: &str) -> String {
        self.config.resolve_asset(uri)
    }
}

/// Install the HTTP-backed [`DashboardEnvironment`] and the default
/// [`ChartEnvironment`] for the current subtree. Call once from the root
/// component of a shell.
pub fn use_dashboard_environment(config: ClientConfig) -> DashboardEnvironment {
    let env = use_context_provider(move || {
        tracing::info!(base_url = %config.base_url, "dashboard environment installed");
        DashboardEnvironment::http(config)
    });
    use_context_provider(ChartEnvironment::default);
    env
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_origin_avatars_are_untouched() {
        let env = DashboardEnvironment::http(ClientConfig::same_origin());
        assert_eq!(env.avatar_src("/static/a.png"), "/static/a.png");
    }

    #[test]
    fn native_avatars_resolve_against_backend() {
        let env = DashboardEnvironment::http(ClientConfig::new("http://127.0.0.1:5000/"));
        assert_eq!(
            env.avatar_src("/static/a.png"),
            "http://127.0.0.1:5000/static/a.png"
        );
        assert_eq!(
            env.avatar_src("https://cdn.example/a.png"),
            "https://cdn.example/a.png"
        );
    }
}
