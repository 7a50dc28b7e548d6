use crate::cli::Args;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never interleave with the game on stdout. `RUST_LOG`
/// overrides the default level.
pub fn init(args: &Args) {
    let default_directive = if args.verbose {
        "eratosthenes_solo=info"
    } else {
        "eratosthenes_solo=warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(
            default_directive
                .parse()
                .expect("Failed to parse the default logging directive."),
        )
    });
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
