use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// The single user every page acts as.
    pub current_user_id: i32,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => compose_database_url(&lookup),
        };
        let max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);
        let current_user_id = match lookup("APP_USER_ID") {
            Some(v) => v
                .parse::<i32>()
                .map_err(|e| anyhow::anyhow!("APP_USER_ID must be an integer: {e}"))?,
            None => 1,
        };
        let seed_demo_data = lookup("SEED_DEMO_DATA")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);

        Ok(Self {
            database_url,
            max_connections,
            current_user_id,
            seed_demo_data,
        })
    }
}

fn compose_database_url<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".into());
    let port = lookup("DB_PORT").unwrap_or_else(|| "5432".into());
    let name = lookup("DB_NAME").unwrap_or_else(|| "fitness_tracker".into());
    let user = lookup("DB_USER").unwrap_or_else(|| "postgres".into());
    match lookup("DB_PASS") {
        Some(pass) => format!("postgres://{user}:{pass}@{host}:{port}/{name}"),
        None => format!("postgres://{user}@{host}:{port}/{name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(
            cfg.database_url,
            "postgres://postgres@localhost:5432/fitness_tracker"
        );
        assert_eq!(cfg.max_connections, 10);
        assert_eq!(cfg.current_user_id, 1);
        assert!(cfg.seed_demo_data);
    }

    #[test]
    fn database_url_wins_over_parts() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://a:b@db:6543/x"),
            ("DB_HOST", "ignored"),
        ]))
        .unwrap();
        assert_eq!(cfg.database_url, "postgres://a:b@db:6543/x");
    }

    #[test]
    fn composes_url_from_parts() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("DB_HOST", "pg"),
            ("DB_PORT", "5433"),
            ("DB_NAME", "fit"),
            ("DB_USER", "coach"),
            ("DB_PASS", "secret"),
        ]))
        .unwrap();
        assert_eq!(cfg.database_url, "postgres://coach:secret@pg:5433/fit");
    }

    #[test]
    fn seed_flag_and_user_id_parse() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("SEED_DEMO_DATA", "false"),
            ("APP_USER_ID", "7"),
            ("DB_MAX_CONNECTIONS", "3"),
        ]))
        .unwrap();
        assert!(!cfg.seed_demo_data);
        assert_eq!(cfg.current_user_id, 7);
        assert_eq!(cfg.max_connections, 3);
    }

    #[test]
    fn rejects_non_numeric_user_id() {
        let err = AppConfig::from_lookup(lookup_from(&[("APP_USER_ID", "alice")])).unwrap_err();
        assert!(err.to_string().contains("APP_USER_ID"));
    }
}
