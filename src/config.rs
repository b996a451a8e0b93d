use std::env;

pub const DEFAULT_DATABASE_URL: &str = "ecommerce.db";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Settings read from the process environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `DATABASE_URL`, `ADDRESS` and `PORT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let address = lookup("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            database_url,
            address,
            port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| values.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "/var/lib/shop/shop.db"),
            ("ADDRESS", "0.0.0.0"),
            ("PORT", "9000"),
        ]));

        assert_eq!(config.database_url, "/var/lib/shop/shop.db");
        assert_eq!(config.address, "0.0.0.0");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn unparseable_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));

        assert_eq!(config.port, DEFAULT_PORT);
    }
}
