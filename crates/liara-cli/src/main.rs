//! Liara CLI - project metadata tools for the Liara editor

use std::cmp::Ordering;

use anyhow::bail;
use clap::{Parser, Subcommand};
use liara_core::config::EditorConfig;
use liara_core::project::{self, ProjectRegistry};
use liara_core::validation::{ensure_trailing_separator, NewProjectDraft};
use liara_core::version::Version;

#[derive(Parser)]
#[command(name = "liara")]
#[command(author, version, about = "Project metadata tools for the Liara editor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project
    New {
        /// Project name
        name: String,
        /// Folder to create the project in (defaults to the configured projects folder)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Validate a project name and path without creating anything
    Check {
        /// Project name
        name: String,
        /// Folder the project would be created in
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Inspect and compare version strings
    Version {
        #[command(subcommand)]
        action: VersionAction,
    },

    /// List recently opened projects
    Recent,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum VersionAction {
    /// Parse a version string and print its components
    Parse { text: String },
    /// Compare two version strings
    Compare { first: String, second: String },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration
    Show,
    /// Write the default configuration file
    Init,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("liara=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::New { name, path } => cmd_new(&name, path.as_deref(), cli.quiet),
        Commands::Check { name, path } => cmd_check(&name, path.as_deref(), cli.quiet),
        Commands::Version { action } => cmd_version(action, cli.quiet),
        Commands::Recent => cmd_recent(cli.quiet),
        Commands::Config { action } => cmd_config(action),
    }
}

/// Explicit path argument, or the configured projects folder, with its
/// trailing separator
fn resolve_path(path: Option<&str>, config: &EditorConfig) -> String {
    let path = path
        .map(str::to_string)
        .unwrap_or_else(|| config.projects_dir.to_string_lossy().into_owned());
    ensure_trailing_separator(&path)
}

fn cmd_new(name: &str, path: Option<&str>, quiet: bool) -> anyhow::Result<()> {
    let config = EditorConfig::load()?;
    let path = resolve_path(path, &config);

    let created = project::create_project(name, &path, &config)?;

    let mut registry = ProjectRegistry::load_default()?;
    registry.record_opened(&created.name, &created.path)?;

    if !quiet {
        println!("Project created successfully!");
        println!("  Name: {}", created.name);
        println!("  Folder: {}", created.root_dir().display());
        println!("  Author: {}", created.author);
        println!("  Editor version: {}", created.liara_version);
    }
    Ok(())
}

fn cmd_check(name: &str, path: Option<&str>, quiet: bool) -> anyhow::Result<()> {
    let config = EditorConfig::load()?;
    let path = resolve_path(path, &config);

    let draft = NewProjectDraft::new(name, path);
    match draft.outcome() {
        Ok(()) => {
            if !quiet {
                println!("OK: '{}' can be created in '{}'", draft.name(), draft.path());
            }
            Ok(())
        }
        Err(err) => bail!("{err}"),
    }
}

fn cmd_version(action: VersionAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        VersionAction::Parse { text } => {
            let version = Version::parse(&text)?;
            println!("{version}");
            if !quiet {
                println!("  major: {}", version.major());
                println!("  minor: {}", version.minor());
                println!("  patch: {}", version.patch());
                println!("  build: {}", version.build());
                println!("  release label: {}", version.release_label());
                if let Some(metadata) = version.build_metadata() {
                    println!("  build metadata: {metadata}");
                }
            }
        }
        VersionAction::Compare { first, second } => {
            let left = Version::parse(&first)?;
            let right = Version::parse(&second)?;
            let relation = match left.cmp(&right) {
                Ordering::Less => "<",
                Ordering::Equal => "==",
                Ordering::Greater => ">",
            };
            println!("{left} {relation} {right}");
        }
    }
    Ok(())
}

fn cmd_recent(quiet: bool) -> anyhow::Result<()> {
    let registry = ProjectRegistry::load_default()?;
    if registry.entries().is_empty() {
        if !quiet {
            println!("No projects opened yet.");
        }
        return Ok(());
    }
    for entry in registry.entries() {
        if quiet {
            println!("{}", entry.name);
        } else {
            println!(
                "{}  {}  {}",
                entry.last_opened.format("%Y-%m-%d %H:%M"),
                entry.name,
                entry.root_dir().display()
            );
        }
    }
    Ok(())
}

fn cmd_config(action: ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = EditorConfig::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Init => {
            let config = EditorConfig::default();
            config.save()?;
            println!("Wrote {}", EditorConfig::config_path()?.display());
        }
    }
    Ok(())
}
