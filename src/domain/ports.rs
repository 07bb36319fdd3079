//! Ports through which the resolver reads its inputs.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Key/value lookup the configuration resolver reads from
///
/// The production implementation reads the process environment
/// (`infrastructure::config::ProcessEnv`). Tests pass a map or a closure so
/// they never touch process-global state.
pub trait EnvSource {
    /// Return the raw value stored under `key`, or `None` if it is not set
    ///
    /// Implementations return empty strings as-is; treating them as absent is
    /// the resolver's job.
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        Self::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        Self::get(self, key).cloned()
    }
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_lookup() {
        let mut env = HashMap::new();
        env.insert("SERVER_PORT".to_string(), "9090".to_string());

        assert_eq!(EnvSource::get(&env, "SERVER_PORT").as_deref(), Some("9090"));
        assert_eq!(EnvSource::get(&env, "ENVIRONMENT"), None);
    }

    #[test]
    fn test_btree_map_keeps_empty_values() {
        let env = BTreeMap::from([("WORKER_COUNT".to_string(), String::new())]);
        assert_eq!(EnvSource::get(&env, "WORKER_COUNT").as_deref(), Some(""));
    }

    #[test]
    fn test_closure_lookup() {
        let env = |key: &str| (key == "ENVIRONMENT").then(|| "staging".to_string());

        assert_eq!(env.get("ENVIRONMENT").as_deref(), Some("staging"));
        assert_eq!(env.get("DATABASE_PATH"), None);
    }
}
