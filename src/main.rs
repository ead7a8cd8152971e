use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kosovo_unis::catalog::{Catalog, CityFilter, University, initialize_data};
use kosovo_unis::core::config::{self, CliOverrides, ResolvedConfig};
use kosovo_unis::core::export::export_to_dir;
use kosovo_unis::core::query;
use kosovo_unis::core::stats::compute_statistics_top;
use kosovo_unis::tui;
use log::{error, info, warn};
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "kosovo-unis", about = "Browse universities, faculties and departments in Kosovo")]
struct Args {
    /// Initial city filter ("All Cities" or a city name)
    #[arg(long, global = true)]
    city: Option<String>,

    /// Directory export files are written to
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print catalog statistics as JSON
    Stats,
    /// Write an export of the (filtered) catalog and print its path
    Export {
        /// Search term applied after the city filter
        #[arg(long)]
        search: Option<String>,
    },
    /// Print the names of the (filtered) universities
    List {
        /// Search term applied after the city filter
        #[arg(long)]
        search: Option<String>,
    },
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let mut load_error = None;
    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Ignoring config file: {}", e);
        load_error = Some(e);
        config::AppConfig::default()
    });
    let cli = CliOverrides {
        city: args.city.clone(),
        export_dir: args.export_dir.clone(),
        log_level: args.log_level.clone(),
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - writes to kosovo-unis.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("kosovo-unis.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    info!("Kosovo universities browser starting up: {:?}", resolved);
    if let Some(e) = load_error {
        warn!("Ignoring config file: {}", e);
    }
    // The TUI takes over the screen, so stderr is only useful headless.
    let headless = args.command.is_some();
    for warning in &resolved.warnings {
        warn!("{}", warning);
        if headless {
            eprintln!("warning: {}", warning);
        }
    }

    match args.command {
        None => tui::run(resolved),
        Some(Command::Stats) => print_stats(&resolved),
        Some(Command::Export { search }) => run_export(&resolved, search.as_deref()),
        Some(Command::List { search }) => print_list(&resolved, search.as_deref()),
    }
}

/// City filter first, then the optional search narrowed to that city.
fn working_set<'a>(
    catalog: &'a Catalog,
    city: CityFilter,
    search: Option<&str>,
) -> Vec<&'a University> {
    let scoped = query::filter_by_city(catalog, city);
    match search {
        Some(raw) => {
            let matched = query::search(catalog, raw);
            scoped
                .into_iter()
                .filter(|u| matched.iter().any(|m| m.id() == u.id()))
                .collect()
        }
        None => scoped,
    }
}

fn print_stats(config: &ResolvedConfig) -> io::Result<()> {
    let catalog = initialize_data();
    let report = compute_statistics_top(catalog.universities(), config.top_n);
    let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
    writeln!(io::stdout(), "{}", json)
}

fn run_export(config: &ResolvedConfig, search: Option<&str>) -> io::Result<()> {
    let catalog = initialize_data();
    let universities = working_set(&catalog, config.default_city, search);
    if universities.is_empty() {
        warn!("Exporting an empty selection");
    }
    match export_to_dir(universities, &config.export_dir) {
        Ok(path) => writeln!(io::stdout(), "{}", path.display()),
        Err(e) => {
            error!("Export failed: {}", e);
            Err(io::Error::other(e))
        }
    }
}

fn print_list(config: &ResolvedConfig, search: Option<&str>) -> io::Result<()> {
    use kosovo_unis::catalog::Named;

    let catalog = initialize_data();
    let mut stdout = io::stdout().lock();
    for uni in working_set(&catalog, config.default_city, search) {
        writeln!(stdout, "{}", uni.name())?;
    }
    Ok(())
}
