use crate::{
    cli::{SpotifySession, flush_notices, logged_in_session, render, spinner},
    error,
    session::SeedKind,
    types::{ItemKind, TimeRange},
    utils, warning,
};

/// One-shot recommendations.
///
/// Row numbers refer to the top tracks/artists of `time_range` and to the
/// genre table, so the matching list is loaded first whenever seeds of that
/// kind are given. Anything that is not a known row is used as an id as is.
pub async fn recommend(
    tracks: Vec<String>,
    artists: Vec<String>,
    genres: Vec<String>,
    time_range: TimeRange,
) {
    if tracks.is_empty() && artists.is_empty() && genres.is_empty() {
        error!("Give at least one --track, --artist or --genre seed.");
    }

    let mut session = logged_in_session().await;
    let pb = spinner("Resolving seeds...");

    if !tracks.is_empty() {
        if let Err(e) = session.request_top_items(ItemKind::Tracks, time_range, 0).await {
            pb.finish_and_clear();
            error!("Cannot load top tracks: {}", e);
        }
        for reference in &tracks {
            let id = utils::resolve_entry(session.top_tracks(), reference, |t| t.id.as_str())
                .map(|t| t.id.clone())
                .unwrap_or_else(|| reference.clone());
            select(&mut session, SeedKind::Track, &id);
        }
    }

    if !artists.is_empty() {
        if let Err(e) = session.request_top_items(ItemKind::Artists, time_range, 0).await {
            pb.finish_and_clear();
            error!("Cannot load top artists: {}", e);
        }
        for reference in &artists {
            let id = utils::resolve_entry(session.top_artists(), reference, |a| a.id.as_str())
                .map(|a| a.id.clone())
                .unwrap_or_else(|| reference.clone());
            select(&mut session, SeedKind::Artist, &id);
        }
    }

    if !genres.is_empty() {
        if let Err(e) = session.request_genres().await {
            pb.finish_and_clear();
            error!("Cannot load genres: {}", e);
        }
        for reference in &genres {
            let genre = utils::resolve_entry(session.genres(), reference, |g| g.as_str())
                .cloned()
                .unwrap_or_else(|| reference.to_lowercase());
            if !session.genres().contains(&genre) {
                warning!("{} is not a known genre seed, using it anyway.", genre);
            }
            select(&mut session, SeedKind::Genre, &genre);
        }
    }

    pb.set_message("Fetching recommendations...");
    let result = session.request_recommendations().await;
    pb.finish_and_clear();

    flush_notices(&mut session, 0);
    match result {
        Ok(_) => {
            render::selection(&session);
            render::browsed(&session);
        }
        Err(e) => error!("Cannot get recommendations: {}", e),
    }
}

// Seeds are only ever added here; a duplicate reference must not remove one.
fn select(session: &mut SpotifySession, kind: SeedKind, id: &str) {
    if session.selection().contains(kind, id) {
        return;
    }
    let _ = session.toggle_selection(kind, id);
}
