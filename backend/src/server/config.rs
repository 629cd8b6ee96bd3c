//! HTTP server configuration object and helpers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use planned_production::domain::ports::PlannedProductionLookup;
use planned_production::outbound::lookup::InMemoryPlannedProductionLookup;
use planned_production::settings::ServiceSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) lookup: Option<Arc<dyn PlannedProductionLookup>>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            lookup: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Build configuration from loaded settings, reading the seed snapshot
    /// when one is configured.
    ///
    /// # Errors
    /// Returns [`io::Error`] when the bind address is invalid or the seed
    /// cannot be loaded.
    pub fn from_settings(settings: &ServiceSettings) -> io::Result<Self> {
        let bind_addr = settings.bind_addr().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid bind host {}: {err}", settings.host()),
            )
        })?;
        let config = Self::new(bind_addr);
        match settings.seed_path() {
            Some(path) => {
                let lookup = InMemoryPlannedProductionLookup::load(path)
                    .map_err(|err| io::Error::other(err.to_string()))?;
                Ok(config.with_lookup(Arc::new(lookup)))
            }
            None => Ok(config),
        }
    }

    /// Attach the lookup adapter serving documents.
    ///
    /// Without one, the fixture lookup answers every request with absence.
    #[must_use]
    pub fn with_lookup(mut self, lookup: Arc<dyn PlannedProductionLookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(
            dead_code,
            reason = "Exercised by unit tests; retained for fixture access"
        )
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    ///
    /// When absent, `create_server` builds a default middleware.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(
            dead_code,
            reason = "Exercised by unit tests behind feature flags"
        )
    )]
    #[must_use]
    pub fn with_metrics(mut self, prometheus: PrometheusMetrics) -> Self {
        self.prometheus = Some(prometheus);
        self
    }
}
