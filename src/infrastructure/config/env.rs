use crate::domain::ports::EnvSource;

/// [`EnvSource`] backed by the real process environment
///
/// Reads only; it never sets or removes variables. The environment is
/// process-global, so values changed by another thread while a resolution is
/// running may or may not be observed. Hosts that mutate their environment at
/// runtime must order those writes before calling the resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    /// Values that are not valid Unicode are converted lossily rather than
    /// treated as unset.
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}
