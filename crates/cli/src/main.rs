//! MenuLink CLI - the cart from the command line.
//!
//! The cart lives in a file-backed key-value store, so it survives between
//! invocations exactly like the browser cart survives a reload.
//!
//! # Usage
//!
//! ```bash
//! menulink cart add --id m1 --name "Paneer Tikka" --price 220
//! menulink cart set m1 3
//! menulink cart list
//! menulink checkout --restaurant "Spice Hut" --whatsapp 919876543210
//! menulink menu page --total 35 --scrolls 2
//! ```
//!
//! # Commands
//!
//! - `cart` - Add, update, remove, clear and list cart lines
//! - `checkout` - Render the order and its WhatsApp link
//! - `menu page` - Show which items a menu category reveals after scrolling

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use menulink_cart::{CartStore, FileStore};
use menulink_core::CurrencyCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{CliConfig, parse_page_size};
use error::Result;

#[derive(Parser)]
#[command(name = "menulink")]
#[command(author, version, about = "MenuLink cart tools")]
struct Cli {
    /// Directory holding the local cart storage (overrides `MENULINK_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Display currency (overrides `MENULINK_CURRENCY`)
    #[arg(long, global = true)]
    currency: Option<CurrencyCode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Print the order message and WhatsApp link
    Checkout {
        /// Restaurant name used in the greeting
        #[arg(short, long)]
        restaurant: String,

        /// Restaurant WhatsApp number
        #[arg(short, long)]
        whatsapp: String,

        /// Empty the cart after printing the link
        #[arg(long)]
        clear: bool,
    },
    /// Menu browsing helpers
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a menu item
    Add {
        /// Menu item id
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Unit price
        #[arg(long)]
        price: String,
    },
    /// Set the quantity of a line (0 or less removes it)
    Set {
        /// Menu item id
        id: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a line
    Remove {
        /// Menu item id
        id: String,
    },
    /// Remove every line
    Clear,
    /// Show the cart
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// Show the visible items of a category after some scrolling
    Page {
        /// Number of items in the category
        #[arg(long)]
        total: usize,

        /// Number of times the last visible item scrolled into view
        #[arg(long, default_value_t = 0)]
        scrolls: usize,

        /// Items per page (overrides `MENULINK_PAGE_SIZE`)
        #[arg(long, value_parser = parse_page_size)]
        page_size: Option<usize>,
    },
}

fn main() -> ExitCode {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "menulink=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = CliConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(currency) = cli.currency {
        config.currency = currency;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Cart { action } => {
            let mut cart = open_cart(&config);
            match action {
                CartAction::Add { id, name, price } => {
                    commands::cart::add(&mut cart, &id, &name, &price, &mut out)?;
                }
                CartAction::Set { id, quantity } => {
                    commands::cart::set(&mut cart, &id, quantity, &mut out)?;
                }
                CartAction::Remove { id } => commands::cart::remove(&mut cart, &id, &mut out)?,
                CartAction::Clear => commands::cart::clear(&mut cart, &mut out)?,
                CartAction::List { json } => {
                    commands::cart::list(&cart, config.currency, json, &mut out)?;
                }
            }
        }
        Commands::Checkout {
            restaurant,
            whatsapp,
            clear,
        } => {
            let mut cart = open_cart(&config);
            commands::checkout::run(
                &mut cart,
                &restaurant,
                &whatsapp,
                config.currency,
                clear,
                &mut out,
            )?;
        }
        Commands::Menu { action } => match action {
            MenuAction::Page {
                total,
                scrolls,
                page_size,
            } => {
                let page_size = page_size.unwrap_or(config.page_size);
                commands::menu::page(total, page_size, scrolls, &mut out)?;
            }
        },
    }

    out.flush()?;
    Ok(())
}

fn open_cart(config: &CliConfig) -> CartStore<FileStore> {
    tracing::debug!(data_dir = %config.data_dir.display(), "Opening cart");
    CartStore::open(FileStore::new(&config.data_dir))
}
