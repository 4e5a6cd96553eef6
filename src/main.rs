use node_selector::{build_selector, Config, Router, SelectOptions};
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

const CONFIG_PATH: &str = "config/selector.yaml";

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false)
        .with_ansi(true)
        .init();
}

fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = Config::load(CONFIG_PATH)?;
    info!(
        "Starting node selector: preferred={} fallback={}",
        config.selector.preferred_host, config.selector.fallback
    );

    let router = Router::new(Box::new(build_selector(&config.selector)));

    // Usage: node-selector <rounds> <addr>...
    let mut args = std::env::args().skip(1);
    let rounds: usize = match args.next() {
        Some(raw) => raw.parse()?,
        None => 1,
    };
    let candidates: Vec<String> = args.collect();

    let opts = SelectOptions::new();
    for round in 1..=rounds {
        match router.next_node(&candidates, &opts) {
            Ok(node) => println!("{} {}", round, node),
            Err(e) => {
                error!("Selection failed: {}", e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}
