use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .json(),
            )
            .with(filter)
            .init();
    });
}

#[allow(dead_code)]
pub fn fixture(name: &str) -> &'static str {
    match name {
        "contoso_ntstatus.toml" => include_str!("../fixtures/contoso_ntstatus.toml"),
        "collides_win32.toml" => include_str!("../fixtures/collides_win32.toml"),
        other => panic!("unknown fixture: {other}"),
    }
}
