//! VaultLink CLI

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use vaultlink::Session;
use vaultlink_core::prelude::*;

/// Symlink external markdown files into Obsidian vaults
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Emit machine-readable JSON instead of human output
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List discovered Obsidian vaults
    Discover,
    /// Symlink files into a vault
    Link {
        /// Markdown files to link
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Vault directory (defaults to the saved vault path)
        #[arg(short, long, env = "VAULTLINK_VAULT")]
        vault: Option<String>,

        /// Link name override (single file only)
        #[arg(long)]
        rename: Option<String>,
    },
    /// Show the recent-links history
    Recent {
        /// Clear the history instead of showing it
        #[arg(long)]
        clear: bool,
    },
    /// Show or set the saved vault path
    Vault {
        /// New vault path to save
        #[arg(long)]
        set: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings_path =
        JsonFileStore::default_path().context("Could not determine the settings directory")?;
    let store = Arc::new(JsonFileStore::open(settings_path));
    // The CLI never opens native dialogs; an empty scripted provider answers
    // every prompt with "cancelled".
    let session = Session::new(store, Arc::new(ScriptedDialogs::new()));

    match cli.command {
        Command::Discover => discover(&session, cli.json).await,
        Command::Link {
            files,
            vault,
            rename,
        } => link(&session, files, vault, rename, cli.json).await,
        Command::Recent { clear } => recent(&session, clear, cli.json),
        Command::Vault { set } => vault_path(&session, set).await,
    }
}

async fn discover(session: &Session, json: bool) -> anyhow::Result<()> {
    let vaults = session.discover_vaults().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&vaults)?);
        return Ok(());
    }
    if vaults.is_empty() {
        println!("No Obsidian vaults found.");
        return Ok(());
    }
    for vault in &vaults {
        let origin = if vault.is_manual() { "scan" } else { "config" };
        let access = if vault.is_accessible { "" } else { " (not accessible)" };
        println!(
            "{}  {} [{}]{}",
            vault.name,
            vault.path.display(),
            origin,
            access
        );
    }
    Ok(())
}

async fn link(
    session: &Session,
    files: Vec<PathBuf>,
    vault: Option<String>,
    rename: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    if rename.is_some() && files.len() > 1 {
        bail!("--rename only applies when linking a single file");
    }

    let vault_path = match vault {
        Some(raw) => PathBuf::from(shellexpand::tilde(&raw).into_owned()),
        None => session
            .load_vault_path()
            .context("No vault path given and none saved; pass --vault or run `vaultlink vault --set`")?,
    };

    let status = validate_path(&vault_path).await;
    if !status.is_valid {
        bail!("Vault path does not exist: {}", vault_path.display());
    }
    if !status.is_accessible {
        log::warn!(
            "Vault path {} exists but may require elevated privileges",
            vault_path.display()
        );
    }

    let requests: Vec<LinkRequest> = files
        .into_iter()
        .map(|file| {
            let source = PathBuf::from(
                shellexpand::tilde(&file.to_string_lossy().into_owned()).into_owned(),
            );
            match &rename {
                Some(name) => LinkRequest::renamed(source, name.clone()),
                None => LinkRequest::new(source),
            }
        })
        .collect();

    let results = session.link_files(&requests, &vault_path).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            match (&result.symlink_path, &result.error) {
                (Some(symlink), _) => println!("linked {} -> {}", result.file, symlink.display()),
                (_, Some(error)) => eprintln!("failed {}: {}", result.file, error),
                _ => {}
            }
        }
    }

    let failures = results.iter().filter(|r| !r.success).count();
    if failures > 0 {
        bail!("{} of {} links failed", failures, results.len());
    }
    Ok(())
}

fn recent(session: &Session, clear: bool, json: bool) -> anyhow::Result<()> {
    if clear {
        session.clear_recent_links()?;
        println!("Recent links cleared.");
        return Ok(());
    }

    let links = session.recent_links();
    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(());
    }
    if links.is_empty() {
        println!("No recent links.");
        return Ok(());
    }
    for link in &links {
        println!(
            "{}  {}  ({} -> {})",
            link.date.format("%Y-%m-%d %H:%M"),
            link.file_name,
            link.target_path.display(),
            link.symlink_path.display()
        );
    }
    Ok(())
}

async fn vault_path(session: &Session, set: Option<String>) -> anyhow::Result<()> {
    match set {
        Some(raw) => {
            let path = PathBuf::from(shellexpand::tilde(&raw).into_owned());
            let status = validate_path(&path).await;
            if !status.is_valid {
                bail!("Path does not exist: {}", path.display());
            }
            if !vaultlink_discovery::is_vault(&path).await {
                log::warn!(
                    "{} has no .obsidian folder; links may not work as expected in Obsidian",
                    path.display()
                );
            }
            session.save_vault_path(&path)?;
            println!("Saved vault path: {}", path.display());
        }
        None => match session.load_vault_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("No vault path saved."),
        },
    }
    Ok(())
}
