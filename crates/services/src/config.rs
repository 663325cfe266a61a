use std::env;

use crate::error::ConfigError;

pub const DB_URL_VAR: &str = "QUIZ_DB_URL";
pub const SEED_VAR: &str = "QUIZ_SEED";
pub const DEFAULT_DB_URL: &str = "sqlite:quiz.sqlite3?mode=rwc";

/// Runtime configuration for the quiz services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub db_url: String,
    /// Fixed seed for question generation; random when unset.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.into(),
            seed: None,
        }
    }
}

impl QuizConfig {
    /// Read `QUIZ_DB_URL` and `QUIZ_SEED`, falling back to defaults when unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `QUIZ_SEED` is not a `u64`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let db_url = lookup(DB_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_URL.into());

        let seed = match lookup(SEED_VAR) {
            Some(raw) if !raw.trim().is_empty() => {
                Some(raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    var: SEED_VAR,
                    raw,
                })?)
            }
            _ => None,
        };

        Ok(Self { db_url, seed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = QuizConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn reads_url_and_seed() {
        let config = QuizConfig::from_lookup(lookup(&[
            (DB_URL_VAR, "sqlite::memory:"),
            (SEED_VAR, " 42 "),
        ]))
        .unwrap();
        assert_eq!(config.db_url, "sqlite::memory:");
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn rejects_bad_seed() {
        let err = QuizConfig::from_lookup(lookup(&[(SEED_VAR, "abc")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: SEED_VAR,
                raw: "abc".into()
            }
        );
    }
}
