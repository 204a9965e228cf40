//! Team listing command implementation

use crate::{cli::SourceArgs, commands::open_store, config::Settings, Result};

/// Handle the teams command
pub fn handle_teams(source: SourceArgs, json: bool) -> Result<()> {
    let settings = Settings::resolve(source.club, None, source.db)?;
    let store = open_store(source.snapshot.as_deref(), &settings.db_path)?;
    let teams = store.load_team_seasons(&settings.club)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&teams)?);
        return Ok(());
    }

    if teams.is_empty() {
        println!("No team seasons found for {}", settings.club);
        return Ok(());
    }

    println!(
        "{:<8} {:<36} {:<24} {:>6} {:>8}",
        "Category", "Team", "Id", "Comp", "Fixture"
    );
    for team in &teams {
        println!(
            "{:<8} {:<36} {:<24} {:>6} {:>8}",
            team.category.as_str(),
            team.name,
            team.id,
            team.competition_id
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".into()),
            team.fixture_id
                .map(|f| f.to_string())
                .unwrap_or_else(|| "-".into()),
        );
    }

    Ok(())
}
