// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use waypost::{xdg, AssetLayout, DirectoryKind, ResourceContext, RootSource};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf, process::exit};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Parser)]
#[command(
    about,
    override_usage = "\n  waypost [options] <waypost-command>",
    subcommand_help_heading = "Commands",
    version
)]
struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    fn run(self) -> Result<()> {
        match self.command {
            Command::Xdg(opts) => run_xdg(opts),
            Command::Expand(opts) => run_expand(opts),
            Command::Layout => run_layout(),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Resolve an XDG base directory.
    #[command(override_usage = "waypost xdg <kind>")]
    Xdg(XdgOptions),

    /// Expand asset URIs into concrete paths.
    #[command(override_usage = "waypost expand [options] <uri>...")]
    Expand(ExpandOptions),

    /// Print the default asset layout table.
    #[command(override_usage = "waypost layout")]
    Layout,
}

#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
struct XdgOptions {
    /// Directory kind to resolve, e.g. user_config or data.
    #[arg(value_name = "kind")]
    pub kind: DirectoryKind,
}

#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
struct ExpandOptions {
    /// Asset URIs of the form <scheme>://<path>.
    #[arg(required = true, value_name = "uri")]
    pub uris: Vec<String>,

    /// Anchor the root at the current working directory instead of the
    /// executable's directory.
    #[arg(short, long)]
    pub cwd_root: bool,

    /// Path to a TOML asset layout overriding the default table.
    #[arg(short, long, value_name = "path")]
    pub layout: Option<PathBuf>,
}

fn main() {
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_timer(false)
        .without_time();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();

    if let Err(error) = run() {
        error!("{error:?}");
        exit(1);
    }

    exit(0)
}

fn run() -> Result<()> {
    Cli::parse().run()
}

fn run_xdg(opts: XdgOptions) -> Result<()> {
    let path = xdg::resolve(opts.kind)?;
    println!("{}", path.display());

    Ok(())
}

fn run_expand(opts: ExpandOptions) -> Result<()> {
    let layout = match opts.layout {
        Some(path) => {
            let data = fs::read_to_string(&path)
                .with_context(|| format!("cannot read layout file {path:?}"))?;
            data.parse::<AssetLayout>()?
        }
        None => AssetLayout::default(),
    };

    let source = if opts.cwd_root {
        RootSource::Cwd
    } else {
        RootSource::ExeDir
    };
    let context = ResourceContext::new(layout, source)?;

    for uri in opts.uris {
        let path = context.expand_uri(&uri)?;
        println!("{}", path.display());
    }

    Ok(())
}

fn run_layout() -> Result<()> {
    print!("{}", AssetLayout::default());

    Ok(())
}
