//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure for the `proxup`
//! binary using the `clap` crate.

use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use proxup_core::error::Error::ArgumentFormat;
use proxup_core::error::Result;

/// Command-line arguments for the proxup CLI tool.
#[derive(Parser, Debug)]
#[command(name = "proxup")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Directory containing the project manifest and network files.
    ///
    /// If not provided, defaults to the current directory.
    #[arg(long, short = 'C')]
    pub project_dir: Option<String>,

    /// Directory compiled contract artifacts are read from.
    ///
    /// If not provided, defaults to `build/contracts` inside the project
    /// directory.
    #[arg(long, short = 'b')]
    pub build_dir: Option<String>,

    /// Never prompt; parameters that cannot be resolved stay unset.
    ///
    /// Interactive mode is the default for a foreground terminal session.
    #[arg(long, short = 'n', action)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: CommandArgs,
}

#[derive(Subcommand, Debug)]
pub enum CommandArgs {
    /// List the contracts available to this project.
    Contracts {
        /// Catalog section to list: `fromBuildDir`, `fromLocal` or `all`.
        #[arg(long, short = 's', default_value = "all")]
        source: String,
    },

    /// List the methods of one contract (bare alias or `package/alias`).
    Methods {
        /// The contract whose interface should be listed.
        contract: String,
    },

    /// Resolve a proxy, a method and its argument values into a call plan.
    ///
    /// Missing pieces are collected interactively; nothing is sent to any
    /// network.
    Call {
        /// Network whose persisted proxy state should be used.
        #[arg(long, short = 'N')]
        network: String,

        /// Address of the proxy to target.
        #[arg(long)]
        proxy: Option<String>,

        /// Contract to target, as a bare alias or `package/alias`.
        #[arg(long)]
        contract: Option<String>,

        /// Method to call, by name.
        #[arg(long, short = 'm')]
        method: Option<String>,

        /// Method argument in `name=value` form.
        ///
        /// Multiple arguments can be provided with repeated `-a` flags.
        #[arg(long = "arg", short = 'a', action = clap::ArgAction::Append)]
        args: Vec<String>,
    },
}

/// Splits repeated `name=value` argument flags into an ordered map.
///
/// # Errors
///
/// Returns an error for any entry without an `=`.
pub fn parse_named_values(values: &[String]) -> Result<IndexMap<String, String>> {
    let mut parsed = IndexMap::new();

    for entry in values {
        let Some((name, value)) = entry.split_once('=') else {
            return Err(ArgumentFormat(entry.clone()));
        };
        parsed.insert(name.to_string(), value.to_string());
    }

    Ok(parsed)
}
