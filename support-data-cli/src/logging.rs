use slog::{o, Drain, Level, LevelFilter, Logger};

/// Maps `-v` occurrences to the lowest level that is emitted.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::Info,
        1 => Level::Debug,
        _ => Level::Trace,
    }
}

/// Terminal logger on stderr, so stdout carries only command output.
pub fn init(verbose: u8) -> Logger {
    let decorator = slog_term::PlainSyncDecorator::new(std::io::stderr());
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = LevelFilter::new(drain, level_for(verbose)).fuse();
    Logger::root(drain, o!("version" => env!("CARGO_PKG_VERSION")))
}
