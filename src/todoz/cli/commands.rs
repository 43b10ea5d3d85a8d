//! # CLI Layer
//!
//! This module is **one possible UI client** for todoz. It is the only place
//! that parses arguments, prints, and decides exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap turns shell arguments into [`Commands`]
//! 2. **Context Setup**: `init_context()` picks the data dir and loads the list;
//!    `config` only reads the settings
//! 3. **Dispatch**: row numbers are resolved to item ids, then the matching
//!    [`ListController`](todoz::controller::ListController) operation runs
//! 4. **Output Formatting**: the returned view and messages go through
//!    `render.rs`
//!
//! Row numbers are always resolved against the list as loaded, before the
//! first mutation, so `todoz rm 1 2` removes the two rows the user saw.
//!
//! `move` is the drag gesture replayed in one go: start on the source row,
//! hover the target row, drop.

use super::render::{print_messages, render_text_list, render_view};
use super::setup::{Cli, Commands};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use todoz::commands::{CmdMessage, CmdResult};
use todoz::config::{TodozConfig, CONFIG_KEYS};
use todoz::controller::ListController;
use todoz::error::{Result, TodozError};
use todoz::index::{parse_indexes, resolve, resolve_all, DisplayIndex};
use todoz::init::{initialize, load_settings, Settings};
use todoz::model::ItemId;
use todoz::store::fs::FileStore;
use todoz::view::View;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TODOZ_LOG";
const HOME_ENV: &str = "TODOZ_HOME";

struct AppContext {
    controller: ListController<FileStore>,
    config: TodozConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = match cli.command {
        // Config never loads the list, so a key the store rejects can still be fixed.
        Some(Commands::Config { key, value }) => {
            let settings = load_settings(&cwd(), cli.global, home_override())?;
            return handle_config(settings, key, value);
        }
        other => other,
    };

    let mut ctx = init_context(cli.global)?;

    match command {
        None | Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Add { text }) => handle_add(&mut ctx, text),
        Some(Commands::Toggle { indexes }) => handle_toggle(&mut ctx, indexes),
        Some(Commands::Edit { index }) => handle_edit(&mut ctx, index),
        Some(Commands::Save { index, text }) => handle_save(&mut ctx, index, text),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Move { from, to }) => handle_move(&mut ctx, from, to),
        Some(Commands::Reorder { indexes }) => handle_reorder(&mut ctx, indexes),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn cwd() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn home_override() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV).map(PathBuf::from)
}

fn init_context(global: bool) -> Result<AppContext> {
    let ctx = initialize(&cwd(), global, home_override())?;

    Ok(AppContext {
        controller: ctx.controller,
        config: ctx.settings.config,
    })
}

fn print_view(ctx: &AppContext, view: &View) {
    print!("{}", render_view(view, ctx.config.line_width));
}

fn print_result(ctx: &AppContext, result: &CmdResult) {
    print_view(ctx, &result.view);
    print_messages(&result.messages);
}

fn resolve_one(ctx: &AppContext, input: &str) -> Result<ItemId> {
    let index = DisplayIndex::from_str(input).map_err(TodozError::Api)?;
    resolve(ctx.controller.list(), index)
}

fn resolve_many(ctx: &AppContext, inputs: &[String]) -> Result<Vec<ItemId>> {
    let indexes = parse_indexes(inputs, ctx.controller.list().len())?;
    resolve_all(ctx.controller.list(), &indexes)
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    print_view(ctx, &ctx.controller.render());
    Ok(())
}

fn handle_add(ctx: &mut AppContext, text: Vec<String>) -> Result<()> {
    ctx.controller.input_mut().value = text.join(" ");
    let result = ctx.controller.submit()?;
    print_result(ctx, &result);
    Ok(())
}

/// Runs `op` once per id and folds the outcomes into one result.
fn for_each_id<F>(ctx: &mut AppContext, ids: Vec<ItemId>, mut op: F) -> Result<()>
where
    F: FnMut(&mut ListController<FileStore>, ItemId) -> Result<CmdResult>,
{
    let mut combined = CmdResult::default();
    for id in ids {
        combined.merge(op(&mut ctx.controller, id)?);
    }
    combined.view = ctx.controller.render();
    print_result(ctx, &combined);
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let ids = resolve_many(ctx, &indexes)?;
    for_each_id(ctx, ids, |controller, id| controller.toggle(id))
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let ids = resolve_many(ctx, &indexes)?;
    for_each_id(ctx, ids, |controller, id| controller.delete(id))
}

fn handle_edit(ctx: &mut AppContext, index: String) -> Result<()> {
    let id = resolve_one(ctx, &index)?;
    let result = ctx.controller.begin_edit(id)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_save(ctx: &mut AppContext, index: String, text: Vec<String>) -> Result<()> {
    let id = resolve_one(ctx, &index)?;
    let result = ctx.controller.save_edit(id, &text.join(" "))?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, from: String, to: String) -> Result<()> {
    let from = resolve_one(ctx, &from)?;
    let to = resolve_one(ctx, &to)?;
    debug!(%from, %to, "replaying drag gesture");

    ctx.controller.drag_start(from)?;
    ctx.controller.drag_enter(to)?;
    ctx.controller.drag_over(to)?;
    let result = ctx.controller.drag_end()?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_reorder(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let order = resolve_many(ctx, &indexes)?;
    let result = ctx.controller.reorder(&order)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_config(mut settings: Settings, key: Option<String>, value: Option<String>) -> Result<()> {
    let config = &mut settings.config;
    match (key, value) {
        (None, _) => {
            let mut lines = Vec::new();
            for k in CONFIG_KEYS {
                lines.push(format!("{} = {}", k, config.get(k)?));
            }
            print!("{}", render_text_list(&lines, "No configuration values."));
        }
        (Some(k), None) => {
            println!("{}", config.get(&k)?);
        }
        (Some(k), Some(v)) => {
            config.set(&k, &v)?;
            config.save(&settings.data_dir)?;
            debug!(key = %k, dir = %settings.data_dir.display(), "config saved");
            print_messages(&[CmdMessage::success(format!("{} = {}", k, config.get(&k)?))]);
        }
    }
    Ok(())
}
