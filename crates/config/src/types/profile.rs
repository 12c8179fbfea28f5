//! Runtime environment profiles.
//!
//! Responsibilities:
//! - Enumerate the supported runtime environments.
//! - Parse profile names from CLI arguments and environment variables.
//! - Map each profile to its secrets file and its documented extra keys.
//!
//! Does NOT handle:
//! - Loading the secrets file (see `loader::secrets`).
//! - Merging configuration layers (see `loader::builder`).
//!
//! Invariants:
//! - `Profile::as_str()` is the literal written to the `TRUE_ENV` key.
//! - Development and test share the local secrets file; production has its own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{LOCAL_SECRETS_FILE, PRODUCTION_SECRETS_FILE};
use crate::loader::ConfigError;

/// Runtime environment that selects flags and secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Development,
    Test,
    Production,
}

/// Keys added on top of the common defaults by the development profile.
const DEVELOPMENT_KEYS: &[&str] = &[
    "DB_DEV_DATABASE_NAME",
    "DB_DEV_HOST",
    "DB_DEV_PASSWORD",
    "DB_DEV_PORT",
    "DB_DEV_USER",
    "LOG_LEVEL",
    "NEXT_PUBLIC_API_MOCKING",
    "NEXT_TELEMETRY_DISABLED",
    "PORT",
    "TRUE_ENV",
    "USE_NEXTKEY",
];

/// Keys added on top of the common defaults by the test profile.
const TEST_KEYS: &[&str] = &[
    "DB_DEV_DATABASE_NAME",
    "DB_DEV_HOST",
    "DB_DEV_PASSWORD",
    "DB_DEV_PORT",
    "DB_DEV_USER",
    "LOG_LEVEL",
    "NEXT_PUBLIC_API_MOCKING",
    "NEXT_TELEMETRY_DISABLED",
    "PORT",
    "TRUE_ENV",
    "URL_DEV",
    "URL_LOCAL",
    "USE_NEXTKEY",
];

/// Keys added on top of the common defaults by the production profile.
const PRODUCTION_KEYS: &[&str] = &[
    "DB_PROD_DATABASE_NAME",
    "DB_PROD_HOST",
    "DB_PROD_PASSWORD",
    "DB_PROD_PORT",
    "DB_PROD_USER",
    "LOG_LEVEL",
    "NEXT_PUBLIC_API_MOCKING",
    "NEXT_TELEMETRY_DISABLED",
    "PORT",
    "TRUE_ENV",
    "USE_NEXTKEY",
];

impl Profile {
    /// All profiles, in promotion order.
    pub const ALL: [Profile; 3] = [Profile::Development, Profile::Test, Profile::Production];

    /// The canonical lowercase profile name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Test => "test",
            Profile::Production => "production",
        }
    }

    /// File name (inside the secrets directory) this profile reads secrets from.
    pub const fn secrets_file_name(self) -> &'static str {
        match self {
            Profile::Development | Profile::Test => LOCAL_SECRETS_FILE,
            Profile::Production => PRODUCTION_SECRETS_FILE,
        }
    }

    /// Whether this profile runs against the local developer database.
    pub const fn uses_local_database(self) -> bool {
        matches!(self, Profile::Development | Profile::Test)
    }

    /// Keys a resolved map for this profile carries beyond the common defaults.
    pub fn additional_keys(self) -> &'static [&'static str] {
        match self {
            Profile::Development => DEVELOPMENT_KEYS,
            Profile::Test => TEST_KEYS,
            Profile::Production => PRODUCTION_KEYS,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "test" => Ok(Profile::Test),
            "production" | "prod" => Ok(Profile::Production),
            _ => Err(ConfigError::InvalidProfile(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_aliases_and_case() {
        assert_eq!("dev".parse::<Profile>().unwrap(), Profile::Development);
        assert_eq!("Development".parse::<Profile>().unwrap(), Profile::Development);
        assert_eq!(" TEST ".parse::<Profile>().unwrap(), Profile::Test);
        assert_eq!("prod".parse::<Profile>().unwrap(), Profile::Production);
        assert_eq!("production".parse::<Profile>().unwrap(), Profile::Production);
    }

    #[test]
    fn test_parse_rejects_unknown_profile() {
        let err = "staging".parse::<Profile>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProfile(ref name) if name == "staging"));
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for profile in Profile::ALL {
            assert_eq!(profile.to_string().parse::<Profile>().unwrap(), profile);
        }
    }

    #[test]
    fn test_secrets_file_selection() {
        assert_eq!(Profile::Development.secrets_file_name(), ".secrets.json");
        assert_eq!(Profile::Test.secrets_file_name(), ".secrets.json");
        assert_eq!(
            Profile::Production.secrets_file_name(),
            ".production.secrets.json"
        );
    }

    #[test]
    fn test_only_test_profile_adds_url_keys() {
        assert!(Profile::Test.additional_keys().contains(&"URL_LOCAL"));
        assert!(!Profile::Development.additional_keys().contains(&"URL_LOCAL"));
        assert!(!Profile::Production.additional_keys().contains(&"URL_DEV"));
    }
}
