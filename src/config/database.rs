use serde::Deserialize;
use std::num::{NonZeroU32, NonZeroU64};

use crate::util::Sensitive;

/// Configuration for connecting to the Postgres database
/// holding the `usuarios` table.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Database {
    /// **Environment variables**:
    /// - `USUARIOS_DB_HOST` or `DB_HOST`
    pub host: String,
    /// **Environment variables**:
    /// - `USUARIOS_DB_PORT` or `DB_PORT`
    pub port: u16,
    /// **Environment variables**:
    /// - `USUARIOS_DB_USER` or `DB_USER`
    pub user: String,
    /// Password for the configured database user. There is no
    /// fallback value on purpose; leaving it unset connects without
    /// a password (trust/peer auth setups).
    ///
    /// **Environment variables**:
    /// - `USUARIOS_DB_PASSWORD` or `DB_PASSWORD`
    pub password: Option<Sensitive<String>>,
    /// **Environment variables**:
    /// - `USUARIOS_DB_NAME` or `DB_NAME`
    pub name: String,
    /// Maximum amount of pool connections the database can handle.
    /// Excess acquisitions queue until one frees up.
    ///
    /// **Environment variables**:
    /// - `USUARIOS_DB_POOL_SIZE`
    pub pool_size: NonZeroU32,
    /// How long this server can wait until its time limit where the
    /// database connection takes a while to acknowledge or
    /// successfully established.
    ///
    /// **Environment variables**:
    /// - `USUARIOS_DB_TIMEOUT_SECS`
    pub timeout_secs: NonZeroU64,
}

impl Database {
    const DEFAULT_POOL_SIZE: u32 = 10;
    const DEFAULT_POOL_TIMEOUT_SECS: u64 = 5;

    const fn default_pool_size() -> NonZeroU32 {
        match NonZeroU32::new(Self::DEFAULT_POOL_SIZE) {
            Some(n) => n,
            None => panic!("DEFAULT_POOL_SIZE is accidentally set to 0"),
        }
    }

    const fn default_pool_timeout_secs() -> NonZeroU64 {
        match NonZeroU64::new(Self::DEFAULT_POOL_TIMEOUT_SECS) {
            Some(n) => n,
            None => panic!("DEFAULT_POOL_TIMEOUT_SECS is accidentally set to 0"),
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            user: "postgres".into(),
            password: None,
            name: "usuariosDB".into(),
            pool_size: Self::default_pool_size(),
            timeout_secs: Self::default_pool_timeout_secs(),
        }
    }
}
