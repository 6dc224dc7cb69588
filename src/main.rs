use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ehak::{Engine, FullLocation, Level};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ehak", version, about = "EHAK code and location lookups")]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,
    #[arg(long, global = true, default_value = "warn", help = "Log filter used when RUST_LOG is unset")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct SourceArgs {
    #[arg(long, global = true, value_name = "VERSION", help = "Dataset version, e.g. 2020v2")]
    dataset_version: Option<String>,
    #[arg(long, global = true, value_name = "FILE", help = "Dataset JSON file (overrides the version lookup)")]
    data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Version,
    Code(CodeCmd),
    Name(NameCmd),
    Location(LocationCmd),
    Resolve(ResolveCmd),
    Children(ChildrenCmd),
    Check,
}

#[derive(Args, Debug)]
struct CodeCmd { level: Level, parent: String, name: String }

#[derive(Args, Debug)]
struct NameCmd { level: Level, parent: String, code: String }

#[derive(Args, Debug)]
struct LocationCmd { code: String, #[arg(long)] json: bool }

#[derive(Args, Debug)]
struct ResolveCmd {
    #[arg(long)]
    county: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    city_district: Option<String>,
    #[arg(long)]
    parish: Option<String>,
    #[arg(long)]
    village: Option<String>,
}

#[derive(Args, Debug)]
struct ChildrenCmd { level: Level, parent: String, #[arg(long)] json: bool }

impl From<ResolveCmd> for FullLocation {
    fn from(cmd: ResolveCmd) -> Self {
        FullLocation { county: cmd.county, city: cmd.city, city_district: cmd.city_district, parish: cmd.parish, village: cmd.village }
    }
}

fn found<T: std::fmt::Display>(value: Option<T>) -> ! {
    match value {
        Some(v) => { println!("{}", v); std::process::exit(0) }
        None => std::process::exit(1),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .with_writer(std::io::stderr)
        .init();

    let engine = Engine::new(cli.source.dataset_version.as_deref(), cli.source.data.as_deref())
        .context("failed to load classification dataset")?;

    match cli.command {
        Commands::Version => println!("{}", engine.version()),
        Commands::Code(cmd) => found(engine.code(cmd.level, &cmd.parent, &cmd.name)),
        Commands::Name(cmd) => found(engine.location(cmd.level, &cmd.parent, &cmd.code)),
        Commands::Location(cmd) => {
            let Some(loc) = engine.full_location(&cmd.code) else { std::process::exit(1) };
            if cmd.json { println!("{}", serde_json::to_string_pretty(&loc)?); } else { println!("{}", loc); }
        }
        Commands::Resolve(cmd) => {
            let loc = FullLocation::from(cmd);
            found(engine.code_from_full_location(&loc))
        }
        Commands::Children(cmd) => {
            let entries = engine.children(cmd.level, &cmd.parent);
            if cmd.json {
                println!("{}", serde_json::to_string_pretty(entries)?);
            } else {
                for e in entries { println!("{}\t{}", e.code, e.name); }
            }
        }
        Commands::Check => {
            for (level, s) in engine.store().stats() {
                println!("{}\t{}\t{}", level, s.parents, s.entries);
            }
            let dups = engine.store().duplicate_codes();
            for (code, n) in &dups { println!("duplicate\t{}\t{}", code, n); }
            if !dups.is_empty() { std::process::exit(1); }
        }
    }
    Ok(())
}
