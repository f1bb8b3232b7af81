//! Show command - one recipe in detail

use anyhow::{Context, Result, bail};
use recipe_keeper_domain::Lookup;
use std::path::PathBuf;

use crate::args::ShowArgs;
use crate::commands::build_repository;
use crate::config::AppConfig;

pub async fn execute(args: ShowArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let repo = build_repository(&config).await?;

    let recipe = match repo.get_by_id(&args.id).await {
        Lookup::Found(recipe) => recipe,
        Lookup::NotFound => bail!("Recipe not found: {}", args.id),
        Lookup::Unavailable(reason) => bail!(
            "Recipe {} is not stored locally and the remote service is unavailable: {}",
            args.id,
            reason
        ),
    };

    let favorite = repo.is_favorite(&recipe.id).await;

    if args.json {
        let output = serde_json::json!({
            "recipe": recipe,
            "favorite": favorite,
            "editable": recipe.is_local(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize recipe")?
        );
        return Ok(());
    }

    let star = if favorite { "★" } else { "☆" };
    println!("{} {}", star, recipe.name);
    println!("{}", "=".repeat(recipe.name.chars().count() + 2));
    println!();
    println!("ID: {}", recipe.id);
    println!("Source: {}", recipe.origin.as_str());
    if let Some(category) = recipe.category() {
        println!("Category: {}", category);
    }
    println!("Image: {}", recipe.image_url);
    if let Some(ref ingredients) = recipe.ingredients {
        println!();
        println!("Ingredients:");
        println!("{}", ingredients);
    }
    println!();
    println!("Instructions:");
    println!("{}", recipe.instructions);

    if !recipe.is_local() {
        println!();
        println!("This recipe comes from the remote catalog and cannot be edited or deleted.");
    }

    Ok(())
}
