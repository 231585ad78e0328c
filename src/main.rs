use anyhow::Context;
use clap::Parser;
use nwkcheck::cli::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let report = cli.run().with_context(|| {
        format!(
            "validation against goldstandard {} aborted",
            cli.goldstandard.display()
        )
    })?;

    tracing::info!(
        status = %report.prediction_file_status,
        results = %cli.results.display(),
        "result record written"
    );
    Ok(())
}
