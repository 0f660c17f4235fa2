use tracing_subscriber::EnvFilter;

/// Environment variable holding a full filter directive (`RUST_LOG` syntax)
pub const LOG_ENV: &str = "MICROTOPO_LOG";

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "microtopo=warn",
        1 => "microtopo=info",
        2 => "microtopo=debug",
        _ => "microtopo=trace",
    }
}

/// Install the stderr subscriber. `MICROTOPO_LOG` wins over `-v`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Fails only when a global subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_count_raises_level() {
        assert_eq!(default_directive(0), "microtopo=warn");
        assert_eq!(default_directive(1), "microtopo=info");
        assert_eq!(default_directive(2), "microtopo=debug");
        assert_eq!(default_directive(7), "microtopo=trace");
    }
}
