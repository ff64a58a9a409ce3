//! Command dispatch and execution

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, IndexService};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{KeySequencer, Segment};

pub fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Gen { prev, next }) => _gen(prev.as_deref(), next.as_deref()),
        Some(Commands::Tree { file, root }) => _tree(file.as_deref(), root.as_deref()),
        Some(Commands::Roots { file }) => _roots(file.as_deref()),
        Some(Commands::Before { key, file }) => _before(key, file.as_deref()),
        Some(Commands::After { key, file }) => _after(key, file.as_deref()),
        Some(Commands::Child { key, file }) => _child(key, file.as_deref()),
        Some(Commands::Config { command }) => _config(command),
        None => Ok(()),
    }
}

#[instrument]
fn _gen(prev: Option<&str>, next: Option<&str>) -> Result<()> {
    let sequencer = KeySequencer::new();
    let prev = prev.map(Segment::parse);
    let next = next.map(Segment::parse);
    let seg = sequencer.generate(prev.as_ref(), next.as_ref());
    output::info(seg.as_str());
    Ok(())
}

#[instrument]
fn _tree(file: Option<&Path>, root: Option<&str>) -> Result<()> {
    let settings = Settings::load()?;
    let file = resolve_index_file(file, &settings)?;
    let service = IndexService::new();
    let items = service.load_items(&file)?;
    debug!("{} items loaded", items.len());

    match root {
        Some(key) => {
            let tree = service.build_tree(key, &items)?;
            print!("{}", output::render_tree(&tree, settings.node_text));
        }
        None => {
            for tree in service.build_forest(&items) {
                print!("{}", output::render_tree(&tree, settings.node_text));
            }
        }
    }
    Ok(())
}

#[instrument]
fn _roots(file: Option<&Path>) -> Result<()> {
    let settings = Settings::load()?;
    let file = resolve_index_file(file, &settings)?;
    let service = IndexService::new();
    let items = service.load_items(&file)?;
    for root in service.find_roots(&items) {
        output::info(&root.id);
    }
    Ok(())
}

#[instrument]
fn _before(key: &str, file: Option<&Path>) -> Result<()> {
    let settings = Settings::load()?;
    let file = resolve_index_file(file, &settings)?;
    let service = IndexService::new();
    let items = service.load_items(&file)?;
    output::info(&service.insert_before(key, &items)?);
    Ok(())
}

#[instrument]
fn _after(key: &str, file: Option<&Path>) -> Result<()> {
    let settings = Settings::load()?;
    let file = resolve_index_file(file, &settings)?;
    let service = IndexService::new();
    let items = service.load_items(&file)?;
    output::info(&service.insert_after(key, &items)?);
    Ok(())
}

#[instrument]
fn _child(key: &str, file: Option<&Path>) -> Result<()> {
    let settings = Settings::load()?;
    let file = resolve_index_file(file, &settings)?;
    let service = IndexService::new();
    let items = service.load_items(&file)?;
    output::info(&service.insert_child(key, &items)?);
    Ok(())
}

#[instrument]
fn _config(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::header("# merged settings");
            print!("{}", settings.to_toml());
        }
        ConfigCommands::Path => match Settings::config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available"),
        },
        ConfigCommands::Init => {
            let path = Settings::config_path()
                .ok_or_else(|| anyhow!("no config directory available"))?;
            if path.exists() {
                return Err(anyhow!("config already exists: {}", path.display()));
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, Settings::default().to_toml())?;
            output::info(&format!("created {}", path.display()));
        }
    }
    Ok(())
}

/// FILE argument wins; otherwise the configured index_file.
fn resolve_index_file(file: Option<&Path>, settings: &Settings) -> Result<String> {
    let path: Option<PathBuf> = file
        .map(Path::to_path_buf)
        .or_else(|| settings.index_file.clone());
    path.map(|p| p.to_string_lossy().into_owned())
        .ok_or_else(|| ApplicationError::NoIndexFile.into())
}
