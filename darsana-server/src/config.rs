use std::env;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
	#[error("Configuration Error: {name}='{value}' is not a valid {expected}")]
	Invalid {
		name: &'static str,
		value: String,
		expected: &'static str,
	},
}

/// Server settings, read from environment variables.
///
/// A `.env` file in the working directory is honored (loaded by `main`
/// through `dotenvy` before `from_env` runs).
///
/// | Variable                 | Default        |
/// |--------------------------|----------------|
/// | `DARSANA_HOST`           | `127.0.0.1`    |
/// | `DARSANA_PORT`           | `5000`         |
/// | `DARSANA_WORKERS`        | number of CPUs |
/// | `DARSANA_MAX_BODY_BYTES` | 1 MiB          |
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	/// Number of actix worker threads.
	pub workers: usize,
	/// Upper bound on JSON request bodies.
	pub max_body_bytes: usize,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: DEFAULT_HOST.to_owned(),
			port: DEFAULT_PORT,
			workers: num_cpus::get(),
			max_body_bytes: DEFAULT_MAX_BODY_BYTES,
		}
	}
}

impl ServerConfig {
	/// Loads the configuration from the process environment.
	///
	/// # Errors
	/// Returns an error if a numeric variable is set but does not parse,
	/// or if a count is zero.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| env::var(name).ok())
	}

	/// Loads the configuration through an arbitrary variable lookup.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let defaults = Self::default();
		Ok(Self {
			host: lookup("DARSANA_HOST").unwrap_or(defaults.host),
			port: parse_var(&lookup, "DARSANA_PORT", "port number")?.unwrap_or(defaults.port),
			workers: parse_positive(&lookup, "DARSANA_WORKERS")?.unwrap_or(defaults.workers),
			max_body_bytes: parse_positive(&lookup, "DARSANA_MAX_BODY_BYTES")?.unwrap_or(defaults.max_body_bytes),
		})
	}
}

fn parse_var<F, T>(lookup: &F, name: &'static str, expected: &'static str) -> Result<Option<T>, ConfigError>
where
	F: Fn(&str) -> Option<String>,
	T: FromStr,
{
	match lookup(name) {
		None => Ok(None),
		Some(value) => value
			.trim()
			.parse::<T>()
			.map(Some)
			.map_err(|_| ConfigError::Invalid { name, value, expected }),
	}
}

fn parse_positive<F>(lookup: &F, name: &'static str) -> Result<Option<usize>, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	const EXPECTED: &str = "positive integer";
	match parse_var::<F, usize>(lookup, name, EXPECTED)? {
		Some(0) => Err(ConfigError::Invalid { name, value: "0".to_owned(), expected: EXPECTED }),
		other => Ok(other),
	}
}
