//! PromptFetch - CLI entry point
//!
//! Logs go to stderr so stdout carries only prompt text and listings.

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use promptfetch::cli::{Cli, Command, Selector, VarArgs};
use promptfetch::client::{DescribePromptRequest, GetPromptRequest, ListPromptsRequest, PromptClient};
use promptfetch::config::Config;
use promptfetch::{extract_variable_names, pick_variables, replace_variables};

fn parse_level(level_str: Option<&str>) -> tracing::Level {
    match level_str.map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > INFO
    let level = parse_level(cli_log_level.or(config_log_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to install tracing subscriber: {}", e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Get {
            slug,
            selector,
            vars,
            raw,
        } => {
            let client = connect(cli.config.as_ref())?;
            cmd_get(&client, slug, selector, &vars, raw).await
        }
        Command::Describe { slug, selector } => {
            let client = connect(cli.config.as_ref())?;
            cmd_describe(&client, slug, selector).await
        }
        Command::List { feature } => {
            let client = connect(cli.config.as_ref())?;
            cmd_list(&client, feature).await
        }
        Command::Vars { file, all } => cmd_vars(&file, all),
        Command::Render { file, vars, strict } => cmd_render(&file, &vars, strict),
    }
}

/// Load configuration and build a client; only remote commands need this
fn connect(config_path: Option<&PathBuf>) -> Result<PromptClient> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    config.validate()?;
    info!("Using prompt service at {}", config.api.base_url);
    Ok(PromptClient::from_config(&config.api)?)
}

fn get_request(slug: String, selector: Selector) -> GetPromptRequest {
    GetPromptRequest {
        slug,
        version: selector.prompt_version,
        tag: selector.tag,
    }
}

async fn cmd_get(client: &PromptClient, slug: String, selector: Selector, vars: &VarArgs, raw: bool) -> Result<()> {
    debug!(%slug, raw, "cmd_get: called");
    let request = get_request(slug, selector);

    if raw {
        let response = client.fetch_prompt(&request).await?;
        if let Some(system_text) = &response.prompt.system_text {
            eprintln!("{}", "# system".dimmed());
            println!("{}", system_text);
            eprintln!("{}", "# prompt".dimmed());
        }
        println!("{}", response.prompt.text);
        return Ok(());
    }

    let variables = vars.to_variables()?;
    let rendered = client.get_prompt(&request, &variables).await?;
    eprintln!(
        "{} {} v{}{}",
        "✓".green(),
        request.slug.cyan(),
        rendered.version,
        rendered
            .model
            .name()
            .map(|m| format!(" ({})", m))
            .unwrap_or_default()
            .dimmed()
    );
    if let Some(system_text) = &rendered.system_text {
        eprintln!("{}", "# system".dimmed());
        println!("{}", system_text);
        eprintln!("{}", "# prompt".dimmed());
    }
    println!("{}", rendered.text);
    Ok(())
}

async fn cmd_describe(client: &PromptClient, slug: String, selector: Selector) -> Result<()> {
    debug!(%slug, "cmd_describe: called");
    let request = DescribePromptRequest::from(get_request(slug, selector));
    let described = client.describe_prompt(&request).await?;
    let prompt = described.prompt;

    println!("{} {}", prompt.slug.cyan(), format!("({})", prompt.status).dimmed());
    println!("  Name: {}", prompt.name);
    if let Some(description) = &prompt.description {
        println!("  Description: {}", description);
    }
    println!("  Versions: {}", prompt.available_versions.join(", "));
    println!("  Tags: {}", prompt.available_tags.join(", "));
    if prompt.variables.is_empty() {
        println!("  Variables: none");
    } else {
        println!("  Variables:");
        for var in &prompt.variables {
            let kind = var.kind.as_deref().unwrap_or("any");
            match &var.description {
                Some(d) => println!("    {} {} {}", var.label.yellow(), kind.dimmed(), d),
                None => println!("    {} {}", var.label.yellow(), kind.dimmed()),
            }
        }
    }
    Ok(())
}

async fn cmd_list(client: &PromptClient, feature: Option<String>) -> Result<()> {
    debug!(?feature, "cmd_list: called");
    let request = ListPromptsRequest { feature_slug: feature };
    let list = client.list_prompts(&request).await?;

    let slugs = list.slugs();
    if list.is_empty() {
        println!("No prompts found");
    } else if slugs.is_empty() {
        // Unknown element shape; show it as served
        println!("{}", serde_json::to_string_pretty(&list.prompts)?);
    } else {
        for slug in slugs {
            println!("{}", slug);
        }
    }
    Ok(())
}

fn read_template(file: &Path) -> Result<String> {
    std::fs::read_to_string(file).context(format!("Failed to read template {}", file.display()))
}

fn cmd_vars(file: &Path, all: bool) -> Result<()> {
    debug!(?file, all, "cmd_vars: called");
    let template = read_template(file)?;
    let mut names = extract_variable_names(&template);
    if !all {
        let mut seen = std::collections::HashSet::new();
        names.retain(|n| seen.insert(n.clone()));
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

fn cmd_render(file: &Path, vars: &VarArgs, strict: bool) -> Result<()> {
    debug!(?file, strict, "cmd_render: called");
    let template = read_template(file)?;
    let variables = vars.to_variables()?;

    let variables = if strict {
        pick_variables(&extract_variable_names(&template), &variables)?
    } else {
        variables
    };

    print!("{}", replace_variables(&template, &variables));
    Ok(())
}
