use clap::{App, Arg, ArgMatches};
use failure::{ensure, format_err, Error};
use std::{fmt, time::Duration};

pub const DEFAULT_ADDRESS: &str = "0.0.0.0:8086";
pub const DEFAULT_API_URL: &str = "https://api.producthunt.com/v1";
pub const DEFAULT_TIMEOUT_SECS: &str = "3";

/// Runtime settings for the skill server.
#[derive(Debug, Clone)]
pub struct Config {
    pub address: String,
    pub api_url: String,
    pub timeout: Duration,
    pub credentials: Credentials,
}

/// Product Hunt client identity. The secret never shows up in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("product-hunt-skill")
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("address")
                .long("address")
                .short("a")
                .takes_value(true)
                .default_value(DEFAULT_ADDRESS)
                .help("Address the skill server binds to"),
        )
        .arg(
            Arg::with_name("api-url")
                .long("api-url")
                .takes_value(true)
                .default_value(DEFAULT_API_URL)
                .help("Base URL of the Product Hunt API"),
        )
        .arg(
            Arg::with_name("timeout")
                .long("timeout")
                .short("t")
                .takes_value(true)
                .default_value(DEFAULT_TIMEOUT_SECS)
                .help("Seconds to wait on each call to Product Hunt"),
        )
        .arg(
            Arg::with_name("api-key")
                .long("api-key")
                .takes_value(true)
                .env("API_KEY")
                .hide_env_values(true)
                .required(true)
                .help("Product Hunt client id"),
        )
        .arg(
            Arg::with_name("api-secret")
                .long("api-secret")
                .takes_value(true)
                .env("API_SECRET")
                .hide_env_values(true)
                .required(true)
                .help("Product Hunt client secret"),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Config, Error> {
        let value = |name: &str| {
            matches
                .value_of(name)
                .map(str::to_owned)
                .ok_or_else(|| format_err!("Missing value for --{}", name))
        };

        let raw_timeout = value("timeout")?;
        let secs = raw_timeout
            .parse::<u64>()
            .map_err(|e| format_err!("Invalid timeout {:?}: {}", raw_timeout, e))?;
        ensure!(secs > 0, "Timeout must be at least one second");

        let credentials = Credentials {
            client_id: value("api-key")?,
            client_secret: value("api-secret")?,
        };
        ensure!(
            !credentials.client_id.is_empty() && !credentials.client_secret.is_empty(),
            "Product Hunt credentials must not be empty"
        );

        Ok(Config {
            address: value("address")?,
            api_url: value("api-url")?.trim_end_matches('/').to_owned(),
            timeout: Duration::from_secs(secs),
            credentials,
        })
    }
}
