pub fn setup_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // stdout belongs to the menu.
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .json()
        .init();
}
