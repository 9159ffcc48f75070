use crate::{env::EnvManager, error::CliError};
use paginator::repository::DEFAULT_TABLE;
use tracing::debug;
use url::Url;

const DB_VARS: [&str; 7] = [
    "DATABASE_URL",
    "DB_DRIVER",
    "DB_HOST",
    "DB_PORT",
    "DB_USER",
    "DB_PASSWORD",
    "DB_NAME",
];

/// Where the records live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub url: String,
    pub table: String,
}

impl DbSettings {
    /// Resolves the connection from `DATABASE_URL`, or from the `DB_*`
    /// variables when it is unset. `url_override` wins over both.
    pub fn from_env(env: &EnvManager, url_override: Option<&str>) -> Result<Self, CliError> {
        for key in DB_VARS {
            if let Some(value) = env.get(key) {
                let shown = if env.is_sensitive(key) { "****" } else { value };
                debug!("{} = {}", key, shown);
            }
        }

        let url = match url_override.or_else(|| env.get("DATABASE_URL")) {
            Some(url) => url.to_string(),
            None => build_url(env)?,
        };
        let table = env.get_or("PAGE_TABLE", DEFAULT_TABLE).to_string();

        Ok(DbSettings { url, table })
    }

    /// The connection URL with any password masked, for logs and messages.
    pub fn redacted_url(&self) -> String {
        match Url::parse(&self.url) {
            Ok(mut url) => {
                if url.password().is_some() && url.set_password(Some("****")).is_err() {
                    return "<redacted>".to_string();
                }
                url.to_string()
            }
            Err(_) => "<redacted>".to_string(),
        }
    }
}

fn build_url(env: &EnvManager) -> Result<String, CliError> {
    let (scheme, default_port) = match env.get_or("DB_DRIVER", "mysql").to_lowercase().as_str() {
        "mysql" | "mariadb" => ("mysql", "3306"),
        "pg" | "postgres" | "postgresql" => ("postgres", "5432"),
        other => return Err(CliError::Config(format!("Unknown DB_DRIVER '{other}'"))),
    };

    let host = env.get_or("DB_HOST", "localhost");
    let port = env.get_or("DB_PORT", default_port);
    port.parse::<u16>()
        .map_err(|_| CliError::Config(format!("Invalid DB_PORT '{port}'")))?;

    let mut url = Url::parse(&format!("{scheme}://{host}:{port}"))
        .map_err(|e| CliError::Config(format!("Invalid DB_HOST '{host}': {e}")))?;

    // The setters percent-encode, so credentials may contain any character.
    if let Some(user) = env.get("DB_USER") {
        url.set_username(user)
            .map_err(|_| CliError::Config("Cannot set DB_USER on this URL".into()))?;
    }
    if let Some(password) = env.get("DB_PASSWORD") {
        url.set_password(Some(password))
            .map_err(|_| CliError::Config("Cannot set DB_PASSWORD on this URL".into()))?;
    }
    if let Some(name) = env.get("DB_NAME") {
        url.set_path(&format!("/{name}"));
    }

    Ok(url.to_string())
}
