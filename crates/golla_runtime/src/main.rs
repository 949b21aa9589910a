//! Golla Runtime
//!
//! Minimal binary that links the core and services crates, boots storage and
//! runs one decision of each kind.

use anyhow::{Context, Result};
use golla_core::{
    format_teams, partition_into_teams, plan_spin, sample_integer_range, BusyFlag, ThreadRandom,
};
use golla_services::{init_services, Namespace, Settings};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Golla v{}", golla_core::VERSION);

    let config_path = std::env::var_os("GOLLA_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("golla.json"));
    let settings = Settings::load_or_default(&config_path)
        .with_context(|| format!("loading settings from {}", config_path.display()))?;

    tracing::info!("Initializing services...");
    let store = init_services(&settings).context("opening preset storage")?;

    for ns in Namespace::ALL {
        for preset in store.list_all(ns) {
            tracing::info!(%ns, id = %preset.id, name = %preset.name, items = preset.items.len(), is_default = preset.is_default);
        }
    }

    let mut rng = ThreadRandom::new();
    // One flag per mode, as each picker screen owns its own
    let roulette_busy = BusyFlag::new();
    let number_busy = BusyFlag::new();
    let team_busy = BusyFlag::new();

    if let Some(_guard) = roulette_busy.try_begin() {
        let menu = store
            .list_all(Namespace::General)
            .into_iter()
            .next()
            .context("no presets available")?;
        let spin = plan_spin(&menu.items, 0.0, &mut rng, &settings.roulette)?;
        tracing::info!(preset = %menu.name, winner = %spin.winner, rotation = spin.rotation, "roulette");
    }

    if let Some(_guard) = number_busy.try_begin() {
        let picker = &settings.picker;
        let count = picker.number_counts.first().copied().unwrap_or(1);
        let numbers = sample_integer_range(picker.default_min, picker.default_max, count, &mut rng)?;
        tracing::info!(min = picker.default_min, max = picker.default_max, ?numbers, "number pick");
    }

    if let Some(_guard) = team_busy.try_begin() {
        let group = store
            .list_all(Namespace::TeamGroup)
            .into_iter()
            .next()
            .context("no team groups available")?;
        match settings.picker.team_count_for(group.items.len()) {
            Some(teams_wanted) => {
                let teams = partition_into_teams(&group.items, teams_wanted, &mut rng)?;
                tracing::info!(group = %group.name, "teams: {}", format_teams(&teams));
            }
            None => tracing::warn!(
                group = %group.name,
                members = group.items.len(),
                team_counts = ?settings.picker.team_counts,
                "group too small for any configured team count, skipping split"
            ),
        }
    }

    tracing::info!("Runtime finished successfully");
    Ok(())
}
