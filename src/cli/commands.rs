//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{FlatNav, NavTree, PageIndex};
use crate::infrastructure::load_manifest;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    output::apply_color_preference(settings.color);

    match &cli.command {
        Some(Commands::Tree { path }) => _tree(&load_tree(cli, &settings)?, path.as_deref()),
        Some(Commands::Resolve { path }) => _resolve(&load_tree(cli, &settings)?, path),
        Some(Commands::Title { path }) => _title(&load_tree(cli, &settings)?, path, &settings),
        Some(Commands::Prev { path }) => _adjacent(&load_tree(cli, &settings)?, path, Direction::Prev),
        Some(Commands::Next { path }) => _adjacent(&load_tree(cli, &settings)?, path, Direction::Next),
        Some(Commands::Check { manifest }) => _check(cli, &settings, manifest.as_deref()),
        Some(Commands::Config { command }) => _config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Resolve the effective tree: CLI manifest flag, then configured manifest,
/// then the compiled-in tree.
fn load_tree(cli: &Cli, settings: &Settings) -> CliResult<NavTree> {
    match settings.manifest_path(cli.manifest.as_deref()) {
        Some(path) => {
            debug!("loading manifest {}", path.display());
            Ok(load_manifest(&path)?)
        }
        None => Ok(NavTree::builtin()),
    }
}

#[instrument(skip(tree))]
fn _tree(tree: &NavTree, active: Option<&str>) -> CliResult<()> {
    let mut root = Tree::new("Documentation".to_string());
    for section in tree.sections() {
        let mut node = Tree::new(section.title.clone());
        for item in &section.items {
            let mut label = format!("{} ({})", item.title, item.path);
            if active == Some(item.path.as_str()) {
                label.push_str("  [active]");
            }
            node.push(Tree::new(label));
        }
        root.push(node);
    }
    output::info(&root);
    Ok(())
}

#[instrument(skip(tree))]
fn _resolve(tree: &NavTree, path: &str) -> CliResult<()> {
    let index = PageIndex::new(tree);
    match index.active_section(path) {
        Some(section) => {
            let title = &tree.sections()[section].title;
            output::info(&format!("section {}: {}", section, title));
        }
        None => output::info("none"),
    }
    Ok(())
}

#[instrument(skip(tree, settings))]
fn _title(tree: &NavTree, path: &str, settings: &Settings) -> CliResult<()> {
    let index = PageIndex::with_fallback(tree, settings.fallback_title.clone());
    output::info(index.title_of(path));
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Prev,
    Next,
}

#[instrument(skip(tree))]
fn _adjacent(tree: &NavTree, path: &str, direction: Direction) -> CliResult<()> {
    let flat = FlatNav::new(tree);
    let neighbour = match direction {
        Direction::Prev => flat.previous(path),
        Direction::Next => flat.next(path),
    };
    match neighbour {
        Some(item) => output::info(item),
        None => output::info("none"),
    }
    Ok(())
}

#[instrument(skip(cli, settings))]
fn _check(cli: &Cli, settings: &Settings, manifest: Option<&std::path::Path>) -> CliResult<()> {
    let path = manifest
        .map(std::path::Path::to_path_buf)
        .or_else(|| settings.manifest_path(cli.manifest.as_deref()))
        .ok_or_else(|| CliError::Usage("no manifest given and none configured".to_string()))?;

    // On failure the error propagates to main, which reports it once.
    let tree = load_manifest(&path)?;
    output::success(&format!(
        "{}: {} sections, {} pages, all paths unique",
        path.display(),
        tree.section_count(),
        tree.page_count()
    ));
    Ok(())
}

fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::header("Effective configuration");
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Template => {
            output::info(&Settings::template());
            Ok(())
        }
    }
}
