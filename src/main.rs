use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use rdepot::client::RDepotClient;
use rdepot::commands::{PackageSelection, delete_packages, list_packages};
use rdepot::config::{self, ConfigOverrides, FileConfig, RDepotConfig, Technology};
use rdepot::logging;
use rdepot::output::OutputFormat;

/// rdepot - command line client for RDepot package repositories
///
/// Lists and deletes packages through the RDepot manager API.
///
/// Examples:
///   rdepot packages list --repo testrepo1 --latest
///   rdepot packages delete --repo testrepo1 --archived --dry-run
#[derive(Parser, Debug)]
#[command(name = "rdepot")]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// RDepot server URL (defaults to http://localhost)
    #[arg(long, env = "RDEPOT_HOST", value_name = "URL", global = true)]
    host: Option<String>,

    /// API token sent as a bearer token
    #[arg(
        long,
        env = "RDEPOT_TOKEN",
        hide_env_values = true,
        value_name = "TOKEN",
        global = true
    )]
    token: Option<String>,

    /// Package technology to operate on (defaults to all)
    #[arg(long, env = "RDEPOT_TECHNOLOGY", value_enum, global = true)]
    technology: Option<Technology>,

    /// Config file (defaults to $XDG_CONFIG_HOME/rdepot/config.json)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage packages
    #[command(subcommand)]
    Packages(PackagesCommand),
}

#[derive(Subcommand, Debug)]
enum PackagesCommand {
    /// List packages
    List {
        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },

    /// Delete packages
    Delete {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Only print the packages that would be deleted
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
}

#[derive(Args, Debug)]
struct SelectionArgs {
    /// Only packages whose name matches this glob pattern
    #[arg(long, value_name = "GLOB")]
    name: Option<String>,

    /// Only packages in this repository
    #[arg(short, long = "repo", value_name = "NAME")]
    repository: Option<String>,

    /// Only versions superseded by a newer version (requires --repo)
    #[arg(long, conflicts_with = "latest")]
    archived: bool,

    /// Only the newest version of each package
    #[arg(long)]
    latest: bool,
}

impl From<SelectionArgs> for PackageSelection {
    fn from(args: SelectionArgs) -> Self {
        Self {
            name: args.name,
            repository: args.repository,
            archived: args.archived,
            latest: args.latest,
        }
    }
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<RDepotConfig> {
        let path = self.config.clone().unwrap_or_else(config::config_path);
        let file = FileConfig::load(&path)?;
        let overrides = ConfigOverrides {
            host: self.host.clone(),
            token: self.token.clone(),
            technology: self.technology,
        };
        Ok(RDepotConfig::resolve(overrides, file))
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    tracing::debug!(
        host = %config.host,
        technology = config.technology.as_str(),
        "Resolved config"
    );
    let client = RDepotClient::new(config);

    let Command::Packages(command) = cli.command;
    let mut stdout = std::io::stdout().lock();

    match command {
        PackagesCommand::List { selection, output } => {
            let selection = PackageSelection::from(selection);
            let listing = client.packages(selection.repository.as_deref());
            let rendered = list_packages(&listing, &selection, output).await?;
            stdout
                .write_all(rendered.as_bytes())
                .context("Failed to write output")?;
        }
        PackagesCommand::Delete { selection, dry_run } => {
            let selection = PackageSelection::from(selection);
            let listing = client.packages(selection.repository.as_deref());
            delete_packages(&listing, &client, &selection, dry_run, &mut stdout).await?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = logging::init(cli.log_file.as_deref()).context("Failed to open log file")?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}
