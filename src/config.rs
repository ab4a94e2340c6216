use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let max_connections = match lookup("NUMEROLOGY_DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| {
                    format!("NUMEROLOGY_DB_MAX_CONNECTIONS must be a positive integer, got {raw:?}")
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            max_connections,
        })
    }

    pub async fn connect(&self) -> anyhow::Result<PgPool> {
        let database_url = self
            .database_url
            .as_deref()
            .context("DATABASE_URL must be set to a Postgres instance")?;

        tracing::debug!(max_connections = self.max_connections, "connecting to Postgres");
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect(database_url)
            .await
            .context("failed to connect to Postgres")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let settings = settings(&[]).unwrap();
        assert!(settings.database_url.is_none());
        assert_eq!(settings.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn reads_database_url_and_pool_size() {
        let settings = settings(&[
            ("DATABASE_URL", "postgres://localhost/numerology"),
            ("NUMEROLOGY_DB_MAX_CONNECTIONS", "12"),
        ])
        .unwrap();
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/numerology")
        );
        assert_eq!(settings.max_connections, 12);
    }

    #[test]
    fn rejects_bad_pool_size() {
        assert!(settings(&[("NUMEROLOGY_DB_MAX_CONNECTIONS", "zero")]).is_err());
        assert!(settings(&[("NUMEROLOGY_DB_MAX_CONNECTIONS", "0")]).is_err());
    }

    #[test]
    fn blank_database_url_counts_as_missing() {
        let settings = settings(&[("DATABASE_URL", "  ")]).unwrap();
        assert!(settings.database_url.is_none());
    }
}
