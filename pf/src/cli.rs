//! CLI command definitions and variable parsing

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result, eyre};
use promptcore::Variables;
use tracing::debug;

/// PromptFetch - fetch and render managed prompts
#[derive(Parser, Debug)]
#[command(name = "pf")]
#[command(author, version, about = "Fetch and render remotely managed prompts", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a prompt and substitute variables into it
    Get {
        /// Prompt slug
        slug: String,

        #[command(flatten)]
        selector: Selector,

        #[command(flatten)]
        vars: VarArgs,

        /// Print the prompt text as served, without substitution
        #[arg(long)]
        raw: bool,
    },

    /// Show a prompt's metadata and declared variables
    Describe {
        /// Prompt slug
        slug: String,

        #[command(flatten)]
        selector: Selector,
    },

    /// List available prompts
    List {
        /// Only prompts of this feature
        #[arg(short, long)]
        feature: Option<String>,
    },

    /// Print the variable names used by a local template file
    Vars {
        /// Template file
        file: PathBuf,

        /// Keep duplicates, in order of occurrence
        #[arg(short, long)]
        all: bool,
    },

    /// Substitute variables into a local template file
    Render {
        /// Template file
        file: PathBuf,

        #[command(flatten)]
        vars: VarArgs,

        /// Fail if any variable used by the template is not supplied
        #[arg(short, long)]
        strict: bool,
    },
}

/// Version or tag pin for a remote prompt
#[derive(Args, Debug, Clone, Default)]
pub struct Selector {
    /// Prompt version
    #[arg(long = "version", value_name = "VERSION")]
    pub prompt_version: Option<String>,

    /// Deployment tag
    #[arg(short, long)]
    pub tag: Option<String>,
}

/// Variable sources; `--var` entries override the file
#[derive(Args, Debug, Clone, Default)]
pub struct VarArgs {
    /// Variable as NAME=VALUE (repeatable)
    #[arg(short = 'v', long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// JSON object of variables
    #[arg(long, value_name = "FILE")]
    pub vars_file: Option<PathBuf>,
}

impl VarArgs {
    /// Combine the vars file and `--var` entries into one map
    pub fn to_variables(&self) -> Result<Variables> {
        debug!(count = self.vars.len(), vars_file = ?self.vars_file, "VarArgs::to_variables: called");
        let mut variables = match &self.vars_file {
            Some(path) => load_vars_file(path)?,
            None => Variables::new(),
        };

        for entry in &self.vars {
            let (name, value) = parse_var(entry)?;
            variables.insert(name, value);
        }
        Ok(variables)
    }
}

/// Split `NAME=VALUE` at the first `=`
pub fn parse_var(entry: &str) -> Result<(String, String)> {
    let (name, value) = entry
        .split_once('=')
        .ok_or_else(|| eyre!("Invalid variable '{}': expected NAME=VALUE", entry))?;
    if name.is_empty() {
        return Err(eyre!("Invalid variable '{}': name is empty", entry));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Read a JSON object of variables; `null` values mark a variable as unset
pub fn load_vars_file(path: &Path) -> Result<Variables> {
    let content =
        std::fs::read_to_string(path).context(format!("Failed to read vars file {}", path.display()))?;
    serde_json::from_str(&content).context(format!(
        "Vars file {} must be a JSON object of strings, numbers, booleans or null",
        path.display()
    ))
}
