//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// recipe-keeper: browse remote recipes, keep your own, and track favorites
#[derive(Parser, Debug)]
#[command(name = "recipe-keeper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List remote and local recipes
    List(ListArgs),

    /// Show one recipe
    Show(ShowArgs),

    /// Create a local recipe
    Add(AddArgs),

    /// Edit a local recipe
    Edit(EditArgs),

    /// Delete a local recipe
    Delete(DeleteArgs),

    /// Manage favorites
    Favorites(FavoritesArgs),

    /// Configuration management
    Config(ConfigArgs),

    /// Validate configuration and show status
    Doctor(DoctorArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only remote recipes of this category
    #[arg(long, conflicts_with = "local")]
    pub category: Option<String>,

    /// Only recipes stored on this device
    #[arg(long)]
    pub local: bool,

    /// Group output by category
    #[arg(long)]
    pub grouped: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Recipe id
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Recipe name
    #[arg(long)]
    pub name: String,

    /// Preparation steps
    #[arg(long)]
    pub instructions: String,

    /// Image path or URL (defaults to a placeholder)
    #[arg(long)]
    pub image_url: Option<String>,

    /// Category used for grouping
    #[arg(long)]
    pub category: Option<String>,

    /// Output the created recipe as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Recipe id
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New preparation steps
    #[arg(long)]
    pub instructions: Option<String>,

    /// New image path or URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Recipe id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: FavoritesCommands,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesCommands {
    /// List favorite recipes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a recipe to favorites
    Add {
        /// Recipe id
        id: String,
    },

    /// Remove a recipe from favorites
    Remove {
        /// Recipe id
        id: String,
    },

    /// Add the recipe if it is not a favorite, remove it otherwise
    Toggle {
        /// Recipe id
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./config.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration as TOML
    Show,
}

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
