use std::env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct DataConfig {
    pub seed: bool,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub data: DataConfig,
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|raw_port| match raw_port.parse::<u16>() {
                Ok(port) => Some(port),
                Err(err) => {
                    tracing::warn!("Invalid PORT number {raw_port:?}, falling back to 5000: {err}");
                    None
                }
            })
            .unwrap_or(5000);
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let seed = env::var("SEED_DATA")
            .ok()
            .and_then(|raw_seed| parse_flag(&raw_seed))
            .unwrap_or(true);

        Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            data: DataConfig { seed },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_production_environment_only() {
        assert_eq!(
            AppEnvironment::from("production".to_string()),
            AppEnvironment::Production
        );
        assert_eq!(
            AppEnvironment::from("staging".to_string()),
            AppEnvironment::Development
        );
    }

    #[test]
    fn parses_seed_flags() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
