//! Delete command - remove a local recipe

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::args::DeleteArgs;
use crate::commands::build_repository;
use crate::config::AppConfig;

pub async fn execute(args: DeleteArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let repo = build_repository(&config).await?;

    repo.delete(&args.id)
        .await
        .with_context(|| format!("Failed to delete recipe {}", args.id))?;

    println!("✓ Deleted recipe {}", args.id);
    Ok(())
}
