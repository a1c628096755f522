use bench_compare::cli::{execute_compare, execute_inspect, Cli, Commands};
use bench_compare::core::ComparisonError;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(verbose: bool) {
    // RUST_LOGが設定されていればそちらを優先
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Compare(args) => execute_compare(args).await,
        Commands::Inspect(args) => execute_inspect(args).await,
    };

    if let Err(error) = result {
        eprintln!("❌ エラー: {error:#}");
        if let Some(suggestion) = error
            .downcast_ref::<ComparisonError>()
            .and_then(|e| e.context().suggestion)
        {
            eprintln!("💡 {suggestion}");
        }
        std::process::exit(1);
    }
}
