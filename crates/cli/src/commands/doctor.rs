//! Doctor command - check that storage and the remote catalog are usable

use anyhow::Result;
use recipe_keeper_domain::CollectionKey;
use recipe_keeper_domain::usecases::CollectionStore;
use serde::Serialize;
use std::path::PathBuf;

use crate::args::DoctorArgs;
use crate::commands::{build_source, build_store};
use crate::config::AppConfig;

/// Severity of a single check, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
enum Health {
    Ok,
    Warn,
    Error,
}

impl Health {
    fn symbol(self) -> &'static str {
        match self {
            Health::Ok => "✓",
            Health::Warn => "⚠",
            Health::Error => "✗",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Health::Ok => "OK",
            Health::Warn => "WARN",
            Health::Error => "ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
struct Check {
    status: Health,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl Check {
    fn new(status: Health, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    fn skipped() -> Self {
        Self::new(Health::Error, "Skipped: configuration unavailable")
    }
}

#[derive(Debug, Serialize)]
struct Report {
    config: Check,
    storage: Check,
    remote: Check,
    overall: Health,
}

impl Report {
    fn from_checks(config: Check, storage: Check, remote: Check) -> Self {
        let overall = [&config, &storage, &remote]
            .iter()
            .map(|check| check.status)
            .max()
            .unwrap_or(Health::Ok);
        Self {
            config,
            storage,
            remote,
            overall,
        }
    }
}

pub async fn execute(args: DoctorArgs, config_path: Option<PathBuf>) -> Result<()> {
    let report = match AppConfig::load(config_path.as_deref()) {
        Ok(config) => Report::from_checks(
            Check::new(Health::Ok, "Configuration loaded"),
            check_storage(&config).await,
            check_remote(&config),
        ),
        Err(e) => Report::from_checks(
            Check::new(Health::Error, format!("Failed to load config: {:#}", e)),
            Check::skipped(),
            Check::skipped(),
        ),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.overall == Health::Error {
        std::process::exit(1);
    }

    Ok(())
}

/// Opens the configured store and reads every collection strictly
async fn check_storage(config: &AppConfig) -> Check {
    let backend = &config.storage.backend;

    let store = match build_store(&config.storage).await {
        Ok(store) => store,
        Err(e) => return Check::new(Health::Error, format!("{:#}", e)),
    };

    let collections = CollectionStore::new(store);
    let mut counts = serde_json::Map::new();
    for key in CollectionKey::ALL {
        match collections.try_load_all(key).await {
            Ok(recipes) => {
                counts.insert(key.to_string(), recipes.len().into());
            }
            Err(e) => {
                return Check::new(
                    Health::Error,
                    format!("Collection '{}' in {} store is unreadable: {}", key, backend, e),
                );
            }
        }
    }

    let mut check = if backend == "memory" {
        Check::new(Health::Warn, "memory store, nothing is persisted")
    } else {
        Check::new(
            Health::Ok,
            format!("{} store at {}", backend, config.storage.path.display()),
        )
    };
    check.details = Some(serde_json::Value::Object(counts));
    check
}

fn check_remote(config: &AppConfig) -> Check {
    match build_source(&config.remote) {
        Ok(source) if source.name() == "stub" => {
            Check::new(Health::Warn, "stub provider, remote recipes are offline")
        }
        Ok(source) => Check::new(
            Health::Ok,
            format!(
                "{} provider at {} ({}s timeout)",
                source.name(),
                config.remote.base_url,
                config.remote.timeout_secs
            ),
        ),
        Err(e) => Check::new(Health::Error, format!("{:#}", e)),
    }
}

fn print_report(report: &Report) {
    println!("recipe-keeper doctor");
    println!();

    for (name, check) in [
        ("Config", &report.config),
        ("Storage", &report.storage),
        ("Remote", &report.remote),
    ] {
        println!("{} {:<8} {}", check.status.symbol(), name, check.message);
    }

    println!();
    println!(
        "{} Overall: {}",
        report.overall.symbol(),
        report.overall.label()
    );

    if report.overall == Health::Ok {
        println!("Try: recipe-keeper list --grouped");
    }
}
