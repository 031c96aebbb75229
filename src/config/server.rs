use error_stack::{Report, Result};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};

use super::ParseError;
use crate::util::figment::FigmentErrorAttachable;

#[derive(Debug, Deserialize)]
pub struct Server {
    /// Address the HTTP server binds to.
    ///
    /// **Environment variables**:
    /// - `USUARIOS_IP`
    #[serde(default = "Server::default_ip")]
    pub ip: IpAddr,
    /// Port the HTTP server listens on.
    ///
    /// **Environment variables**:
    /// - `USUARIOS_PORT` or `PORT`
    #[serde(default = "Server::default_port")]
    pub port: u16,
    /// How many actix workers serve requests.
    ///
    /// **Environment variables**:
    /// - `USUARIOS_WORKERS`
    #[serde(default = "Server::default_workers")]
    pub workers: usize,
    #[serde(default)]
    pub db: super::Database,
}

impl Server {
    pub fn load() -> Result<Self, ParseError> {
        dotenvy::dotenv().ok();

        let config = Self::figment()
            .extract::<Self>()
            .map_err(|e| Report::new(ParseError).attach_figment_error(e))?;

        Ok(config)
    }
}

impl Server {
    const DEFAULT_PORT: u16 = 3001;

    /// Creates the default [`figment::Figment`] object to load server
    /// configuration. Split out from [`Server::load`] for testing.
    pub(crate) fn figment() -> figment::Figment {
        use figment::{providers::Env, Figment};

        Figment::new()
            .merge(Env::prefixed("USUARIOS_").map(|v| match v.as_str() {
                // One big con about figment (env provider to be specific)
                // especially these fields with underscore in it.
                "DB_POOL_SIZE" => "db.pool_size".into(),
                "DB_TIMEOUT_SECS" => "db.timeout_secs".into(),
                _ => v.as_str().replace('_', ".").into(),
            }))
            // Bare aliases (PORT, DB_HOST, ...) are accepted too so
            // plain .env files work without the prefix.
            .merge(Env::raw().map(|v| match v.as_str() {
                "PORT" => "port".into(),
                "DB_HOST" => "db.host".into(),
                "DB_PORT" => "db.port".into(),
                "DB_USER" => "db.user".into(),
                "DB_PASSWORD" => "db.password".into(),
                "DB_NAME" => "db.name".into(),
                _ => v.into(),
            }))
    }

    const fn default_ip() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    const fn default_port() -> u16 {
        Self::DEFAULT_PORT
    }

    const fn default_workers() -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::num::{NonZeroU32, NonZeroU64};

    #[test]
    fn defaults() {
        Jail::expect_with(|_jail| {
            let config: Server = Server::figment().extract()?;
            assert_eq!(config.ip, IpAddr::V4(Ipv4Addr::LOCALHOST));
            assert_eq!(config.port, 3001);
            assert_eq!(config.workers, 1);

            assert_eq!(config.db.host, "localhost");
            assert_eq!(config.db.port, 5432);
            assert_eq!(config.db.user, "postgres");
            assert!(config.db.password.is_none());
            assert_eq!(config.db.name, "usuariosDB");
            assert_eq!(config.db.pool_size, NonZeroU32::new(10).unwrap());
            assert_eq!(config.db.timeout_secs, NonZeroU64::new(5).unwrap());

            Ok(())
        });
    }

    #[test]
    fn env_aliases() {
        Jail::expect_with(|jail| {
            jail.set_env("PORT", "8099");
            jail.set_env("DB_HOST", "db.internal");
            jail.set_env("DB_PORT", "5433");
            jail.set_env("DB_USER", "banca");
            jail.set_env("DB_PASSWORD", "hello world!");
            jail.set_env("DB_NAME", "banca_virtual");

            let config: Server = Server::figment().extract()?;
            assert_eq!(config.port, 8099);
            assert_eq!(config.db.host, "db.internal");
            assert_eq!(config.db.port, 5433);
            assert_eq!(config.db.user, "banca");
            assert_eq!(
                config.db.password.as_ref().unwrap().as_str(),
                "hello world!"
            );
            assert_eq!(config.db.name, "banca_virtual");

            Ok(())
        });
    }

    #[test]
    fn prefixed_vars() {
        Jail::expect_with(|jail| {
            jail.set_env("USUARIOS_IP", "0.0.0.0");
            jail.set_env("USUARIOS_PORT", "3002");
            jail.set_env("USUARIOS_WORKERS", "4");
            jail.set_env("USUARIOS_DB_POOL_SIZE", "25");
            jail.set_env("USUARIOS_DB_TIMEOUT_SECS", "30");

            let config: Server = Server::figment().extract()?;
            assert_eq!(config.ip, "0.0.0.0".parse::<IpAddr>().unwrap());
            assert_eq!(config.port, 3002);
            assert_eq!(config.workers, 4);
            assert_eq!(config.db.pool_size, NonZeroU32::new(25).unwrap());
            assert_eq!(config.db.timeout_secs, NonZeroU64::new(30).unwrap());

            Ok(())
        });
    }
}
