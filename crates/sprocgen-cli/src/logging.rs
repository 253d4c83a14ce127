use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. `RUST_LOG` overrides the default level,
/// which is `warn`, or `info` with `--verbose`.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };

    let mut filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // rustyline logs every keystroke at debug
    if let Ok(directive) = "rustyline=off".parse() {
        filter = filter.add_directive(directive);
    }

    if let Err(e) = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(filter)
        .try_init()
    {
        eprintln!("unable to set up logging: {e}");
    }
}
