use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

/// Builds the log filter. Non-empty `rust_log` directives win over `verbose`;
/// otherwise only this crate logs, at `debug` or `warn`.
pub(crate) fn build_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if verbose { "debug" } else { "warn" };
    let default_filter = || EnvFilter::new(format!("tokenswap={level}"));

    match rust_log.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|_| default_filter()),
        None => default_filter(),
    }
}

/// Installs the global subscriber writing to stderr. `RUST_LOG` overrides the
/// level picked by `verbose`.
pub fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(verbose, rust_log.as_deref());

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_verbose_picks_crate_level() {
        assert_eq!(
            build_filter(false, None).max_level_hint(),
            Some(LevelFilter::WARN)
        );
        assert_eq!(
            build_filter(true, None).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_rust_log_overrides_verbose() {
        assert_eq!(
            build_filter(false, Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            build_filter(true, Some("error")).max_level_hint(),
            Some(LevelFilter::ERROR)
        );
        assert_eq!(
            build_filter(false, Some("tokenswap=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn test_blank_rust_log_is_ignored() {
        assert_eq!(
            build_filter(false, Some("  ")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }
}
