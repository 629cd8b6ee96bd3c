//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `PLANNED_PRODUCTION_*` environment variables,
//! or a configuration file, in OrthoConfig's usual precedence.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Configuration values for the planned production service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PLANNED_PRODUCTION")]
pub struct ServiceSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// JSON snapshot served by the in-memory lookup. Without it every
    /// well-formed request is answered with 500.
    pub seed_path: Option<PathBuf>,
}

impl ServiceSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Return the socket address to bind.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host().trim().parse()?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    /// Return the configured seed path, if any.
    pub fn seed_path(&self) -> Option<&Path> {
        self.seed_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for service configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const DEFAULT_PORT: u16 = 8080;

    fn load_from_empty_args() -> ServiceSettings {
        ServiceSettings::load_from_iter([OsString::from("planned-production")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("PLANNED_PRODUCTION_HOST", None::<String>),
            ("PLANNED_PRODUCTION_PORT", None::<String>),
            ("PLANNED_PRODUCTION_SEED_PATH", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        );
        assert!(settings.seed_path().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PLANNED_PRODUCTION_HOST", Some("127.0.0.1".to_owned())),
            ("PLANNED_PRODUCTION_PORT", Some("9191".to_owned())),
            (
                "PLANNED_PRODUCTION_SEED_PATH",
                Some("/tmp/planned_production_seed.json".to_owned()),
            ),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("address parses"),
            SocketAddr::from(([127, 0, 0, 1], 9191))
        );
        assert_eq!(
            settings.seed_path(),
            Some(Path::new("/tmp/planned_production_seed.json"))
        );
    }

    #[rstest]
    fn hostnames_are_rejected_as_bind_addresses() {
        let settings = ServiceSettings {
            host: Some("localhost".to_owned()),
            port: DEFAULT_PORT,
            seed_path: None,
        };
        assert!(settings.bind_addr().is_err());
    }
}
