use tracing_subscriber::EnvFilter;

/// Map the -v count onto a tracing filter. Logs always go to stderr:
/// stdout belongs to the relayed child process and the list/check
/// reports.
pub fn setup_logging(verbose_level: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        // Use RUST_LOG if set
        EnvFilter::from_default_env()
    } else {
        let filter_str = match verbose_level {
            0 => "warn,coldcase=info,dispatch=info",
            1 => "info,coldcase=debug,dispatch=debug",
            _ => "debug,coldcase=trace,dispatch=trace",
        };
        EnvFilter::new(filter_str)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
