//! Logger setup shared by the driver binary and the test suites.
//!
//! All crate output goes through the `log` facade with `env_logger` as the
//! backend, so `RUST_LOG` can narrow or widen what is shown (for example
//! `RUST_LOG=flock::boid=trace` to watch boids turning back from water).
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default filter for the driver: per-tick detail only when `verbose`.
#[must_use]
pub const fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger for the driver.
///
/// Calling this more than once is harmless; later calls keep the first
/// logger.
pub fn init(verbose: bool) {
    let mut builder = builder(verbose);
    builder.format_timestamp_millis();
    install(&mut builder);
}

/// Installs a logger whose output is captured by the test harness.
pub fn init_for_tests() {
    let mut builder = builder(true);
    builder.is_test(true);
    install(&mut builder);
}

fn builder(verbose: bool) -> Builder {
    let env = Env::default().default_filter_or(level_for(verbose).to_string());
    Builder::from_env(env)
}

fn install(builder: &mut Builder) {
    if builder.try_init().is_err() {
        log::debug!("logger already installed; keeping the existing one");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_selects_debug() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Info);
    }

    #[test]
    fn repeated_initialisation_is_harmless() {
        init_for_tests();
        init_for_tests();
        init(false);
    }
}
