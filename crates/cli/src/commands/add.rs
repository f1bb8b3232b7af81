//! Add command - create a local recipe

use anyhow::{Context, Result};
use recipe_keeper_domain::NewRecipe;
use std::path::PathBuf;

use crate::args::AddArgs;
use crate::commands::build_repository;
use crate::config::AppConfig;

pub async fn execute(args: AddArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let repo = build_repository(&config).await?;

    let input = NewRecipe {
        name: args.name,
        instructions: args.instructions,
        image_url: args.image_url,
        category: args.category,
    };

    let recipe = repo
        .create(input)
        .await
        .context("Failed to create recipe")?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&recipe).context("Failed to serialize recipe")?
        );
    } else {
        println!("✓ Created recipe {} ({})", recipe.name, recipe.id);
    }

    Ok(())
}
