use error_stack::{Report, Result, ResultExt};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::num::NonZeroUsize;
use validator::{Validate, ValidateError};

use super::ParseError;
use crate::util::{figment::FigmentErrorAttachable, validator::IntoValidatorReport};

#[derive(Debug, Deserialize)]
pub struct Server {
    /// Address the HTTP server binds to.
    ///
    /// **Environment variables**:
    /// - `ROSTER_IP`
    #[serde(default = "Server::default_ip")]
    pub ip: IpAddr,
    /// Port the HTTP server listens on.
    ///
    /// **Environment variables**:
    /// - `ROSTER_PORT` or `PORT`
    #[serde(default = "Server::default_port")]
    pub port: u16,
    /// Amount of worker threads serving requests.
    ///
    /// **Environment variables**:
    /// - `ROSTER_WORKERS`
    #[serde(default = "Server::default_workers")]
    pub workers: NonZeroUsize,
    /// Raises log verbosity from INFO to DEBUG.
    ///
    /// **Environment variables**:
    /// - `ROSTER_DEBUG` or `DEBUG`
    #[serde(default)]
    pub debug: bool,
    /// Informational deployment environment name, echoed by `/api/stats`.
    ///
    /// **Environment variables**:
    /// - `ROSTER_ENVIRONMENT` or `ENVIRONMENT`
    #[serde(default = "Server::default_environment")]
    pub environment: String,
}

impl Server {
    pub fn load() -> Result<Self, ParseError> {
        dotenvy::dotenv().ok();

        let config = Self::figment()
            .extract::<Self>()
            .map_err(|e| Report::new(ParseError).attach_figment_error(e))?;

        config
            .validate()
            .into_validator_report()
            .change_context(ParseError)?;

        Ok(config)
    }

    /// Configuration for exercising the service in tests.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            ip: Self::default_ip(),
            port: 0,
            workers: NonZeroUsize::MIN,
            debug: true,
            environment: "test".to_string(),
        }
    }
}

impl Validate for Server {
    fn validate(&self) -> std::result::Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();
        fields.insert("environment", {
            let mut error = ValidateError::msg_builder();
            if self.environment.is_empty() {
                error.insert("Environment name must not be empty");
            }
            error.build()
        });
        fields.build().into_result()
    }
}

impl Server {
    const DEFAULT_CONFIG_FILE: &'static str = "roster.toml";
    const DEFAULT_PORT: u16 = 8086;

    const MAX_DEFAULT_WORKERS: NonZeroUsize = match NonZeroUsize::new(4) {
        Some(n) => n,
        None => panic!("MAX_DEFAULT_WORKERS is accidentally set to 0"),
    };

    /// Creates a default [`figment::Figment`] object to load server
    /// configuration. This function is there for implementing
    /// [`Server::load`] and testing.
    pub(crate) fn figment() -> figment::Figment {
        use figment::{
            providers::{Env, Format, Toml},
            Figment,
        };

        Figment::new()
            .merge(Toml::file(Self::DEFAULT_CONFIG_FILE))
            .merge(Env::prefixed("ROSTER_"))
            // Environment variable aliases read by the deployment manifests
            .merge(Env::raw().map(|v| match v.as_str() {
                "PORT" => "port".into(),
                "DEBUG" => "debug".into(),
                "ENVIRONMENT" => "environment".into(),
                _ => v.into(),
            }))
    }

    const fn default_ip() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    const fn default_port() -> u16 {
        Self::DEFAULT_PORT
    }

    fn default_workers() -> NonZeroUsize {
        std::thread::available_parallelism()
            .map(|n| n.min(Self::MAX_DEFAULT_WORKERS))
            .unwrap_or(NonZeroUsize::MIN)
    }

    fn default_environment() -> String {
        "development".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults() {
        Jail::expect_with(|_jail| {
            let config: Server = Server::figment().extract()?;
            assert_eq!(config.ip, IpAddr::V4(Ipv4Addr::LOCALHOST));
            assert_eq!(config.port, 8086);
            assert!(!config.debug);
            assert_eq!(config.environment, "development");
            Ok(())
        });
    }

    #[test]
    fn env_aliases() {
        Jail::expect_with(|jail| {
            jail.set_env("PORT", "9000");
            jail.set_env("DEBUG", "true");
            jail.set_env("ENVIRONMENT", "staging");

            let config: Server = Server::figment().extract()?;
            assert_eq!(config.port, 9000);
            assert!(config.debug);
            assert_eq!(config.environment, "staging");

            Ok(())
        });
    }

    #[test]
    fn bare_aliases_win_over_prefixed_vars() {
        Jail::expect_with(|jail| {
            jail.set_env("ROSTER_PORT", "1024");
            jail.set_env("PORT", "2048");

            let config: Server = Server::figment().extract()?;
            assert_eq!(config.port, 2048);

            Ok(())
        });
    }

    #[test]
    fn rejects_blank_environment() {
        let mut config = Server::for_tests();
        config.environment = String::new();
        assert!(config.validate().is_err());
    }
}
