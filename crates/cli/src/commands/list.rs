//! List command - remote and local recipes

use anyhow::{Context, Result};
use recipe_keeper_domain::usecases::group_by_category;
use std::path::PathBuf;

use crate::args::ListArgs;
use crate::commands::{build_repository, summary_line};
use crate::config::AppConfig;

pub async fn execute(args: ListArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let repo = build_repository(&config).await?;

    let recipes = if let Some(category) = args.category.as_deref() {
        repo.list_by_category(category).await
    } else if args.local {
        repo.list_local().await
    } else {
        repo.list_combined().await
    };

    tracing::info!(
        count = recipes.len(),
        category = ?args.category,
        local_only = args.local,
        "Listed recipes"
    );

    if args.json {
        let rendered = if args.grouped {
            serde_json::to_string_pretty(&group_by_category(&recipes))
        } else {
            serde_json::to_string_pretty(&recipes)
        };
        let json = rendered.context("Failed to serialize recipes")?;
        println!("{}", json);
        return Ok(());
    }

    println!("Total recipes: {}", recipes.len());

    if args.grouped {
        for group in group_by_category(&recipes) {
            println!();
            println!("{} ({})", group.name, group.recipes.len());
            for recipe in &group.recipes {
                println!("  {}", summary_line(recipe));
            }
        }
    } else {
        for recipe in &recipes {
            println!("{}", summary_line(recipe));
        }
    }

    Ok(())
}
