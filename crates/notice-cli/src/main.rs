//! `notice` binary entry point

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let matches = notice_cli::build_cli().get_matches();
    if let Some(output) = notice_cli::run(&matches).await? {
        println!("{output}");
    }
    Ok(())
}
