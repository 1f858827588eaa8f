use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shoestock", version)]
#[command(about = "Console inventory manager for shoe stock", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file to use (overrides the configured one)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (default)
    #[command(alias = "m")]
    Menu,

    /// View all shoes
    #[command(alias = "ls")]
    List,

    /// Capture a new shoe
    #[command(alias = "a")]
    Add {
        /// Country of origin
        #[arg(long)]
        origin: String,

        /// Unique product code
        #[arg(long)]
        code: String,

        /// Product name
        #[arg(long)]
        name: String,

        /// Cost per pair
        #[arg(long)]
        cost: String,

        /// Pairs in stock
        #[arg(long)]
        quantity: String,

        /// Write the inventory file right away
        #[arg(long)]
        save: bool,
    },

    /// Show the shoe with the lowest quantity, optionally restocking it
    Restock {
        /// Pairs to add to the lowest-stock shoe
        #[arg(long, allow_negative_numbers = true)]
        add: Option<i64>,
    },

    /// Find a shoe by its code (case-insensitive)
    #[command(alias = "f")]
    Find { code: String },

    /// Show the stock value of every shoe
    Values,

    /// Show the shoe with the highest quantity
    Highest,

    /// Get or set configuration
    Config {
        /// Configuration key (inventory-file, autosave-capture)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
