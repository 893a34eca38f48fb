use super::Workspace;
use crate::output::Output;
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use movielog_config::Config;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn run_config(workspace: &Workspace, cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(workspace, output),
        ConfigCommands::Init { force } => init_config(workspace, force, output),
    }
}

fn show_config(workspace: &Workspace, output: &Output) -> Result<()> {
    let config_file = workspace.paths.config_file();
    let config = &workspace.config;

    output.data(&json!({
        "baseDir": workspace.paths.root(),
        "configFile": config_file,
        "configFileExists": config_file.exists(),
        "moviesFile": workspace.movies_file(),
        "config": config,
    }))?;
    if !output.is_human() {
        return Ok(());
    }

    if !config_file.exists() {
        output.warn(format!(
            "No config file at {}; showing defaults. Run 'movielog config init' to create one.",
            config_file.display()
        ));
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Setting").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Base directory"), Cell::new(workspace.paths.root().display())]);
    table.add_row(vec![Cell::new("Config file"), Cell::new(config_file.display())]);
    table.add_row(vec![Cell::new("server.host"), Cell::new(&config.server.host)]);
    table.add_row(vec![Cell::new("server.port"), Cell::new(config.server.port)]);
    table.add_row(vec![
        Cell::new("storage.data_file"),
        Cell::new(workspace.movies_file().display()),
    ]);
    table.add_row(vec![
        Cell::new("storage.seed_on_first_load"),
        Cell::new(flag(config.storage.seed_on_first_load)),
    ]);
    table.add_row(vec![Cell::new("logging.level"), Cell::new(&config.logging.level)]);
    table.add_row(vec![Cell::new("logging.json"), Cell::new(flag(config.logging.json))]);
    table.add_row(vec![
        Cell::new("logging.file"),
        Cell::new(
            config
                .logging
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "stderr".to_string()),
        ),
    ]);
    output.table(table);
    Ok(())
}

fn init_config(workspace: &Workspace, force: bool, output: &Output) -> Result<()> {
    let config_file = workspace.paths.config_file();
    if config_file.exists() && !force {
        return Err(eyre!(
            "Config file already exists at {} (use --force to overwrite)",
            config_file.display()
        ));
    }

    workspace
        .paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create directories: {}", e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to write {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}

fn flag(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}
