//! Edit command - change fields of a local recipe

use anyhow::{Context, Result, bail};
use recipe_keeper_domain::RecipePatch;
use std::path::PathBuf;

use crate::args::EditArgs;
use crate::commands::build_repository;
use crate::config::AppConfig;

pub async fn execute(args: EditArgs, config_path: Option<PathBuf>) -> Result<()> {
    let patch = RecipePatch {
        name: args.name,
        instructions: args.instructions,
        image_url: args.image_url,
        category: args.category,
    };

    if patch.is_empty() {
        bail!("Nothing to change: pass at least one of --name, --instructions, --image-url, --category");
    }

    let config = AppConfig::load(config_path.as_deref())?;
    let repo = build_repository(&config).await?;

    let recipe = repo
        .edit(&args.id, &patch)
        .await
        .with_context(|| format!("Failed to edit recipe {}", args.id))?;

    println!("✓ Updated recipe {} ({})", recipe.name, recipe.id);
    Ok(())
}
