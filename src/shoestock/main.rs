use clap::Parser;
use directories::ProjectDirs;
use shoestock::api::{CmdMessage, ConfigAction, InventoryApi, MessageLevel};
use shoestock::commands::{CaptureInput, CmdResult};
use shoestock::config::{ConfigKey, StockConfig};
use shoestock::error::{Result, StockError};
use shoestock::store::fs::FileResource;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::render::{render_messages, render_shoe_table, render_value_table};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: InventoryApi<FileResource>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(&mut ctx),
        Some(Commands::List) => handle_simple(&mut ctx, |api| api.view_all()),
        Some(Commands::Add {
            origin,
            code,
            name,
            cost,
            quantity,
            save,
        }) => handle_add(
            &mut ctx,
            CaptureInput {
                origin,
                code,
                name,
                unit_cost: cost,
                quantity,
            },
            save,
        ),
        Some(Commands::Restock { add }) => handle_restock(&mut ctx, add),
        Some(Commands::Find { code }) => handle_simple(&mut ctx, |api| api.find_by_code(&code)),
        Some(Commands::Values) => handle_simple(&mut ctx, |api| api.values()),
        Some(Commands::Highest) => handle_simple(&mut ctx, |api| api.highest_stock()),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "shoestock", "shoestock")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| StockError::Config("Could not determine config dir".into()))?,
    };

    let config = StockConfig::load(&config_dir)?;
    let inventory_file: PathBuf = cli
        .file
        .clone()
        .unwrap_or_else(|| config.inventory_file.clone());
    tracing::debug!(
        config_dir = %config_dir.display(),
        inventory = %inventory_file.display(),
        "starting"
    );

    let api = InventoryApi::new(FileResource::new(inventory_file), config, config_dir);
    Ok(AppContext { api })
}

/// Loads the inventory. Problems with the file itself are reported and the
/// session continues with whatever could be read.
fn load_inventory(ctx: &mut AppContext, show_info: bool) {
    match ctx.api.load() {
        Ok(result) => {
            let messages: Vec<CmdMessage> = result
                .messages
                .into_iter()
                .filter(|m| show_info || m.level != MessageLevel::Info)
                .collect();
            print_messages(&messages);
        }
        Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
    }
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    load_inventory(ctx, true);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    cli::menu::run(&mut ctx.api, &mut input, &mut out).map_err(StockError::Io)
}

fn handle_simple<F>(ctx: &mut AppContext, op: F) -> Result<()>
where
    F: FnOnce(&mut InventoryApi<FileResource>) -> Result<CmdResult>,
{
    load_inventory(ctx, false);
    let result = op(&mut ctx.api)?;
    print_result(&result);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, input: CaptureInput, save: bool) -> Result<()> {
    load_inventory(ctx, false);
    let result = if save {
        ctx.api.capture_and_save(&input)?
    } else {
        ctx.api.capture(&input)?
    };
    print_result(&result);

    if ctx.api.unsaved_count() > 0 {
        print_messages(&[CmdMessage::warning(
            "The new shoe was not written to the inventory file; pass --save or enable autosave-capture",
        )]);
    }
    Ok(())
}

fn handle_restock(ctx: &mut AppContext, add: Option<i64>) -> Result<()> {
    load_inventory(ctx, false);
    let lowest = ctx.api.lowest_stock()?;
    print_result(&lowest);

    if let (Some(delta), Some(id)) = (add, lowest.selected) {
        let result = ctx.api.restock(id, delta)?;
        print_result(&result);
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key.parse::<ConfigKey>()?),
        (Some(key), Some(value)) => ConfigAction::Set(key.parse::<ConfigKey>()?, value),
    };

    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
    if !result.listed_shoes.is_empty() {
        print!("{}", render_shoe_table(&result.listed_shoes));
    }
    if !result.valued_shoes.is_empty() {
        print!("{}", render_value_table(&result.valued_shoes));
    }
}

fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}
