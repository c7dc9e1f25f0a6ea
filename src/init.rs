use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Options for the console subscriber installed by [`init_diagnostics_with_config`].
///
/// **Fields**
/// - `with_target`: print the event target (`remote_log_sender`) in front
///   of each diagnostic line.
/// - `ansi`: colorize output.
#[derive(Clone, Debug)]
pub struct DiagnosticsConfig {
    pub with_target: bool,
    pub ansi: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            with_target: false,
            ansi: true,
        }
    }
}

/// Install a global `tracing` subscriber that prints this crate's
/// diagnostics (and any other events) to stdout.
///
/// Applications that already configure `tracing` should skip this; the
/// sender's diagnostics then flow into their subscriber.
///
/// **Returns**
/// - `Err(..)` if a global default subscriber is already set.
pub fn init_diagnostics_with_config(
    config: DiagnosticsConfig,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(config.with_target)
        .with_ansi(config.ansi);
    let subscriber = Registry::default().with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
}

/// [`init_diagnostics_with_config`] with [`DiagnosticsConfig::default`].
pub fn init_diagnostics() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    init_diagnostics_with_config(DiagnosticsConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_an_error_not_a_panic() {
        let _ = init_diagnostics();
        assert!(init_diagnostics().is_err());
    }
}
