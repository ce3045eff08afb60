//! Resolver configuration.

/// Environment variable overriding [`ResolverConfig::max_passes`].
pub const MAX_PASSES_ENV: &str = "QUILL_MAX_PASSES";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolverConfig {
    /// Passes to run before giving up on pending nodes. At least 1.
    pub max_passes: usize,
}

impl ResolverConfig {
    pub const DEFAULT_MAX_PASSES: usize = 32;

    pub fn with_max_passes(max_passes: usize) -> Self {
        ResolverConfig {
            max_passes: max_passes.max(1),
        }
    }

    /// Default configuration, with `max_passes` taken from `QUILL_MAX_PASSES`
    /// when it holds a positive integer.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MAX_PASSES_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value.and_then(|v| v.trim().parse::<usize>().ok()) {
            Some(passes) if passes > 0 => Self::with_max_passes(passes),
            Some(_) | None => Self::default(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            max_passes: Self::DEFAULT_MAX_PASSES,
        }
    }
}
