use bookshelf::api::{BookshelfApi, CmdResult, ConfigAction};
use bookshelf::catalog::SearchQuery;
use bookshelf::commands;
use bookshelf::error::{Result, ShelfError};
use bookshelf::store::fs_backend::FsBackend;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::{Cli, Commands};

const HOME_ENV: &str = "BOOKSHELF_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = resolve_data_dir(cli.dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let open = || BookshelfApi::open_dir(&data_dir);

    // Config stays reachable even when the catalog itself does not load
    let result = match cli.command.unwrap_or(Commands::List) {
        Commands::Config { key, value } => return handle_config(&data_dir, key, value),
        Commands::Shell => return handle_shell(&mut open()?),
        Commands::Add {
            title,
            author,
            year,
        } => open()?.add_book(title, author, year)?,
        Commands::Delete { ids } => open()?.delete_books(&ids)?,
        Commands::Search {
            title,
            author,
            year,
        } => open()?.search_books(&SearchQuery {
            title,
            author,
            year,
        })?,
        Commands::Status { id, status } => open()?.change_status(id, status)?,
        Commands::Checkout { id } => open()?.check_out(id)?,
        Commands::Return { id } => open()?.return_book(id)?,
        Commands::List => open()?.list_books()?,
    };

    cli::print_result(&result);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "bookshelf=debug,shelf=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_data_dir(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "bookshelf", "bookshelf").ok_or_else(|| {
        ShelfError::Config(format!(
            "could not determine a data directory; pass --dir or set {}",
            HOME_ENV
        ))
    })?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result: CmdResult = commands::config::run(data_dir, action)?;
    cli::print_result(&result);
    Ok(())
}

fn handle_shell(api: &mut BookshelfApi<FsBackend>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    cli::shell::Shell::new(api, stdin.lock(), stdout.lock())
        .run()
        .map_err(|e| ShelfError::Api(format!("terminal I/O failed: {}", e)))
}
