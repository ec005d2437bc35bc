use clap::Parser;
use asvsearch::cli::commands::{Cli, Commands};
use asvsearch::AsvSearch;
use env_logger::Builder;

#[tokio::main]
async fn main() {
    Builder::from_default_env().init();

    let cli = Cli::parse();
    let db_path = std::env::var("ASVSEARCH_DB").unwrap_or_else(|_| "./reference_db.sqlite".into());

    let service = match AsvSearch::new(&db_path) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error initializing reference store: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Reference store ready with {} sequences",
        service.snapshot().map(|s| s.len()).unwrap_or_default()
    );

    if let Err(e) = run_command(&service, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(service: &AsvSearch, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Query { sequence, top_k } => {
            let result = service.query_one(&sequence, top_k)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Fasta { file, top_k } => {
            let result = service.query_fasta_file(&file, top_k).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Info => {
            let summary = service.describe()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Health => {
            let health = service.health()?;
            println!("{}", serde_json::to_string_pretty(&health)?);
        }
        Commands::Build {
            fasta,
            taxonomy,
            sample_id,
        } => {
            let summary = service
                .rebuild_from_fasta(&fasta, taxonomy.as_deref(), sample_id.as_deref())
                .await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Seed => {
            let summary = service.reseed()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
