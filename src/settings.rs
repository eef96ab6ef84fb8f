use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};

/// What a probe pass does when a descriptor cannot be fetched.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorPolicy {
    /// Record the failure in the snapshot, log it, and go on with the next descriptor.
    CatchAndLog,
    /// Abort the pass and return the failure to the caller.
    Propagate,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        ErrorPolicy::CatchAndLog
    }
}

/// Probe pass settings.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ProbeConfig {
    pub error_policy: ErrorPolicy,
    /// Emit a warning when no descriptor of the registry applies to the context.
    pub warn_on_empty: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            error_policy: ErrorPolicy::CatchAndLog,
            warn_on_empty: true,
        }
    }
}

impl ProbeConfig {
    /// Reads the `probe.*` keys. Missing keys keep their default value.
    pub fn from_config(cfg: &Config) -> Result<ProbeConfig, ConfigError> {
        let mut probe_cfg = ProbeConfig::default();

        match cfg.get::<String>("probe.error_policy") {
            Ok(policy) => {
                probe_cfg.error_policy = match policy.as_str() {
                    "log" => ErrorPolicy::CatchAndLog,
                    "propagate" => ErrorPolicy::Propagate,
                    other => {
                        return Err(ConfigError::Message(format!(
                            "probe.error_policy: unknown policy `{}` (expected `log` or `propagate`)",
                            other
                        )))
                    }
                }
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        match cfg.get::<bool>("probe.warn_on_empty") {
            Ok(v) => probe_cfg.warn_on_empty = v,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        Ok(probe_cfg)
    }
}

/// Adds environment overrides (`CAPS_PROBE__ERROR_POLICY=propagate`, ...) to a config builder.
pub fn load_environment_config(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("CAPS")
            .prefix_separator("_")
            .separator("__"),
    )
}
