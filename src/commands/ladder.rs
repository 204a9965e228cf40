//! Single ladder lookup command implementation

use crate::{
    config::{resolve_ladder_timeout, resolve_ladder_url},
    ladder::{HttpLadderSource, LadderSource},
    models::LadderKey,
    ClubError, CompetitionId, FixtureId, Result, LADDER_URL_ENV_VAR,
};

/// Handle the ladder command
pub async fn handle_ladder(
    competition: CompetitionId,
    fixture: FixtureId,
    ladder_url: Option<String>,
    json: bool,
) -> Result<()> {
    let url = resolve_ladder_url(ladder_url).ok_or_else(|| ClubError::MissingLadderUrl {
        env_var: LADDER_URL_ENV_VAR.to_string(),
    })?;
    let timeout = resolve_ladder_timeout();
    let source = HttpLadderSource::new(url, timeout)?;
    let key = LadderKey::new(competition, fixture);

    let standing = tokio::time::timeout(timeout, source.lookup(key))
        .await
        .unwrap_or(Err(crate::LadderError::Timeout))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&standing)?);
        return Ok(());
    }

    let show = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_else(|| "-".into());
    println!(
        "Competition {} / fixture {}: position {}, points {}",
        competition,
        fixture,
        show(standing.position),
        show(standing.points)
    );

    Ok(())
}
