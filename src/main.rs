use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "shelf-mcp", version, about = "Personal book library as an MCP server")]
struct Cli {
    /// Library file (JSON array of books)
    #[arg(default_value = "library.txt")]
    library: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdoutはMCPトランスポートなのでログはstderrへ
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    shelf_mcp::interface::mcp::run(cli.library).await
}
