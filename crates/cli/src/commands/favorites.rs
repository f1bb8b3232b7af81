//! Favorites command - list, add, remove and toggle favorites

use anyhow::{Context, Result, bail};
use recipe_keeper_domain::{Lookup, Recipe};
use std::path::PathBuf;

use crate::args::{FavoritesArgs, FavoritesCommands};
use crate::commands::{AppRepository, build_repository, summary_line};
use crate::config::AppConfig;

pub async fn execute(args: FavoritesArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let repo = build_repository(&config).await?;

    match args.command {
        FavoritesCommands::List { json } => list_favorites(&repo, json).await,
        FavoritesCommands::Add { id } => add_favorite(&repo, &id).await,
        FavoritesCommands::Remove { id } => remove_favorite(&repo, &id).await,
        FavoritesCommands::Toggle { id } => toggle_favorite(&repo, &id).await,
    }
}

async fn list_favorites(repo: &AppRepository, json: bool) -> Result<()> {
    let favorites = repo.list_favorites().await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&favorites).context("Failed to serialize favorites")?
        );
        return Ok(());
    }

    if favorites.is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }

    println!("Favorites ({})", favorites.len());
    println!("=============");
    for recipe in &favorites {
        println!("{}", summary_line(recipe));
    }

    Ok(())
}

async fn add_favorite(repo: &AppRepository, id: &str) -> Result<()> {
    if repo.is_favorite(id).await {
        println!("{} is already a favorite", id);
        return Ok(());
    }

    let recipe = resolve(repo, id).await?;

    if repo
        .add_favorite(recipe)
        .await
        .context("Failed to add favorite")?
    {
        println!("★ Added {} to favorites", id);
    } else {
        println!("{} is already a favorite", id);
    }
    Ok(())
}

async fn remove_favorite(repo: &AppRepository, id: &str) -> Result<()> {
    if repo
        .remove_favorite(id)
        .await
        .context("Failed to remove favorite")?
    {
        println!("☆ Removed {} from favorites", id);
    } else {
        println!("{} is not a favorite", id);
    }
    Ok(())
}

async fn toggle_favorite(repo: &AppRepository, id: &str) -> Result<()> {
    // Snapshots may outlive their source recipe
    if repo.is_favorite(id).await {
        return remove_favorite(repo, id).await;
    }

    let recipe = resolve(repo, id).await?;
    if repo
        .toggle_favorite(recipe)
        .await
        .context("Failed to toggle favorite")?
    {
        println!("★ Added {} to favorites", id);
    } else {
        println!("☆ Removed {} from favorites", id);
    }
    Ok(())
}

async fn resolve(repo: &AppRepository, id: &str) -> Result<Recipe> {
    match repo.get_by_id(id).await {
        Lookup::Found(recipe) => Ok(recipe),
        Lookup::NotFound => bail!("Recipe not found: {}", id),
        Lookup::Unavailable(reason) => bail!(
            "Recipe {} is not stored locally and the remote service is unavailable: {}",
            id,
            reason
        ),
    }
}
