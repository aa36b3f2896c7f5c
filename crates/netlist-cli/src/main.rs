//! `netlist` - build component chains and print their netlist trace.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use netlist_core::{ComponentKind, EdgeMode, NetlistConfig, OutputFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// netlist - trace component chains through a capacity-bounded graph
#[derive(Parser, Debug)]
#[command(name = "netlist")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to ./netlist.toml when present)
    #[arg(short, long, env = "NETLIST_CONFIG")]
    config: Option<PathBuf>,

    /// Output format, overrides the configuration
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Connect components in both directions
    #[arg(long)]
    bidirectional: bool,

    /// Print the recursive visit order instead of the netlist
    #[arg(long)]
    recursive: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the sample amplifier circuit and print its netlist
    Demo,
    /// Chain the given components in order and print the netlist from the first
    Chain {
        /// Components to create, first one is the source
        #[arg(required = true, value_enum)]
        kinds: Vec<KindArg>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Lm741,
    Wire,
    Socket,
}

impl From<KindArg> for ComponentKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Lm741 => ComponentKind::Lm741,
            KindArg::Wire => ComponentKind::Wire,
            KindArg::Socket => ComponentKind::ThreeTerminalSocket,
        }
    }
}

fn load_config(args: &Args) -> anyhow::Result<NetlistConfig> {
    let mut config = match &args.config {
        Some(path) => NetlistConfig::load_from(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => NetlistConfig::load()?,
    };

    if let Some(format) = args.format {
        config.output.format = format.into();
    }
    if args.bidirectional {
        config.graph.edge_mode = EdgeMode::Bidirectional;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    tracing::debug!(?config, "Effective configuration");

    let traced = match &args.command {
        Command::Demo => commands::demo(&config)?,
        Command::Chain { kinds } => {
            let kinds: Vec<ComponentKind> = kinds.iter().copied().map(Into::into).collect();
            commands::chain(&config, &kinds)?
        }
    };

    let output = if args.recursive {
        commands::render_recursive(&traced, config.output.format)?
    } else {
        commands::render(&traced, config.output.format)?
    };
    print!("{output}");

    Ok(())
}
