pub mod core;
pub mod display;
pub mod game;
pub mod player;
pub mod selfplay;
pub mod ui;

mod search_tests;

/// stderr へのログ出力を初期化する (`RUST_LOG` で制御, 既定は warn)
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
