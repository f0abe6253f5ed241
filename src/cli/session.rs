use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::{
    cli::{SpotifySession, flush_notices, open_session, render, spinner},
    failure, info,
    session::{Phase, SeedKind, SessionError, Toggled},
    success,
    types::{ItemKind, TimeRange, Track},
    utils, warning,
};

type Input = Lines<BufReader<Stdin>>;

/// Interactive session over a single controller.
///
/// Reads one command per line until `quit` or end of input. Failed commands
/// never end the session; their notice is printed and the command can be
/// repeated.
pub async fn session(time_range: TimeRange) {
    let mut session = open_session().await;
    session.set_time_range(time_range);

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut last_notice = 0;

    match session.user() {
        Some(user) => render::user(user),
        None => info!("Not logged in, type `login` to connect your Spotify account."),
    }
    info!("Type `help` for a list of commands.");

    loop {
        last_notice = flush_notices(&mut session, last_notice);
        prompt(&session);

        let line = match input.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                failure!("Cannot read input: {}", e);
                break;
            }
        };

        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        match command {
            "quit" | "exit" | "q" => break,
            "help" | "?" => render::help(),
            "login" => login(&mut session).await,
            "tracks" => browse(&mut session, ItemKind::Tracks, args.first()).await,
            "artists" => browse(&mut session, ItemKind::Artists, args.first()).await,
            "genres" => genres(&mut session).await,
            "range" => set_range(&mut session, args.first()),
            "more" => more(&mut session).await,
            "select" | "s" => select(&mut session, &args),
            "selected" => render::selection(&session),
            "recommend" | "r" => recommend(&mut session).await,
            "list" | "ls" => render::browsed(&session),
            "play" => play(&mut session, args.first()).await,
            "stop" => {
                let _ = session.stop_preview().await;
            }
            "add" => add(&mut session, args.first(), &mut input, &mut last_notice).await,
            "info" => {
                if session.toggle_info() {
                    render::information();
                }
            }
            "reset" => {
                session.reset();
                success!("Session reset.");
            }
            other => warning!("Unknown command: {}. Type `help` for a list of commands.", other),
        }
    }

    flush_notices(&mut session, last_notice);
}

fn prompt(session: &SpotifySession) {
    use std::io::Write;

    let selection = session.selection();
    print!(
        "[{} | {} | {} selected] > ",
        session.phase(),
        session.time_range(),
        selection.len()
    );
    let _ = std::io::stdout().flush();
}

async fn login(session: &mut SpotifySession) {
    if let Ok(user) = session.login().await {
        render::user(user);
    }
}

async fn browse(session: &mut SpotifySession, kind: ItemKind, range: Option<&&str>) {
    let time_range = match range.map(|r| utils::parse_time_range(r)) {
        Some(Ok(time_range)) => time_range,
        Some(Err(e)) => {
            warning!("{}", e);
            return;
        }
        None => session.time_range(),
    };

    let pb = spinner(&format!("Fetching top {}...", kind));
    let result = session.request_top_items(kind, time_range, 0).await;
    pb.finish_and_clear();

    report_phase_error(&result);
    if result.is_ok() {
        render::browsed(session);
    }
}

async fn genres(session: &mut SpotifySession) {
    let pb = spinner("Fetching genre seeds...");
    let result = session.request_genres().await;
    pb.finish_and_clear();

    report_phase_error(&result);
    if result.is_ok() {
        render::browsed(session);
    }
}

fn set_range(session: &mut SpotifySession, range: Option<&&str>) {
    let Some(range) = range else {
        info!(
            "Time range: {} ({})",
            session.time_range(),
            session.time_range().label()
        );
        return;
    };

    match utils::parse_time_range(range) {
        Ok(time_range) => {
            session.set_time_range(time_range);
            info!("Time range set to {}.", time_range.label());
        }
        Err(e) => warning!("{}", e),
    }
}

async fn more(session: &mut SpotifySession) {
    if !session.has_next(session.phase()) {
        info!("Nothing more to load.");
        return;
    }

    let pb = spinner("Fetching more...");
    let result = session.load_more().await;
    pb.finish_and_clear();

    if result.is_ok() {
        render::browsed(session);
    }
}

/// Toggles entries of the list that is currently shown.
fn select(session: &mut SpotifySession, references: &[&str]) {
    if references.is_empty() {
        warning!("Usage: select <#|id>...");
        return;
    }

    for reference in references {
        let entry = match session.phase() {
            Phase::BrowsingTracks => {
                utils::resolve_entry(session.top_tracks(), reference, |t| t.id.as_str())
                    .map(|t| (SeedKind::Track, t.id.clone(), t.name.clone()))
            }
            Phase::BrowsingArtists => {
                utils::resolve_entry(session.top_artists(), reference, |a| a.id.as_str())
                    .map(|a| (SeedKind::Artist, a.id.clone(), a.name.clone()))
            }
            Phase::BrowsingGenres => {
                utils::resolve_entry(session.genres(), reference, |g| g.as_str())
                    .map(|g| (SeedKind::Genre, g.clone(), g.to_uppercase()))
            }
            _ => {
                warning!("Show tracks, artists or genres first to select seeds.");
                return;
            }
        };

        let Some((kind, id, name)) = entry else {
            warning!("No entry {} in the current list.", reference);
            continue;
        };

        match session.toggle_selection(kind, &id) {
            Ok(Toggled::Added) => info!("Selected {} {}", kind, name),
            Ok(Toggled::Removed) => info!("Removed {} {}", kind, name),
            // the controller already recorded a notice
            Err(_) => break,
        }
    }
}

async fn recommend(session: &mut SpotifySession) {
    if !session.can_request_recommendations() {
        if session.selection().is_empty() {
            warning!("Select at least one track, artist or genre first.");
        } else {
            warning!("Cannot get recommendations while {}.", session.phase());
        }
        return;
    }

    let pb = spinner("Fetching recommendations...");
    let result = session.request_recommendations().await;
    pb.finish_and_clear();

    if result.is_ok() {
        render::browsed(session);
    }
}

/// Tracks that `play` and `add` refer to: the recommendations while they
/// are shown, the top tracks otherwise.
fn track_by_reference(session: &SpotifySession, reference: Option<&&str>) -> Option<Track> {
    let reference = reference?;
    let tracks = match session.phase() {
        Phase::ShowingRecommendations => session.recommendations(),
        _ => session.top_tracks(),
    };
    utils::resolve_entry(tracks, reference, |t| t.id.as_str())
        .or_else(|| session.preview_track().filter(|t| t.id == **reference))
        .cloned()
}

async fn play(session: &mut SpotifySession, reference: Option<&&str>) {
    let Some(track) = track_by_reference(session, reference) else {
        warning!("Usage: play <#|id> for a track in the current list.");
        return;
    };

    let name = format!("{} - {}", track.name, track.artist_name());
    if session.preview(track).await.is_ok() {
        success!("Playing {}", name);
    }
}

async fn add(
    session: &mut SpotifySession,
    reference: Option<&&str>,
    input: &mut Input,
    last_notice: &mut u64,
) {
    let track = match (reference, session.preview_track()) {
        (Some(_), _) => track_by_reference(session, reference),
        (None, Some(preview)) => Some(preview.clone()),
        (None, None) => None,
    };
    let Some(track) = track else {
        warning!("Usage: add <#|id> for a track in the current list.");
        return;
    };

    let pb = spinner("Fetching playlists...");
    let result = session.open_playlist_picker(track.clone()).await;
    pb.finish_and_clear();

    match result {
        Ok(playlists) => render::playlists(playlists),
        Err(SessionError::NoUser) => {
            warning!("Log in first to add tracks to playlists.");
            return;
        }
        Err(_) => return,
    }

    // The picker stays open until a playlist was added to or it is cancelled.
    loop {
        print!("Add {} to playlist (#, id or empty to cancel) > ", track.name);
        {
            use std::io::Write;
            let _ = std::io::stdout().flush();
        }

        let choice = match input.next_line().await {
            Ok(Some(line)) => line.trim().to_string(),
            _ => String::new(),
        };
        if choice.is_empty() {
            session.close_playlist_picker();
            info!("Cancelled.");
            return;
        }

        let Some(playlist_id) =
            utils::resolve_entry(session.playlists(), &choice, |p| p.id.as_str())
                .map(|p| p.id.clone())
        else {
            warning!("No playlist {}.", choice);
            continue;
        };

        let result = session.add_to_playlist(&track.id, &playlist_id).await;
        *last_notice = flush_notices(session, *last_notice);
        if result.is_ok() {
            return;
        }
    }
}

fn report_phase_error<T>(result: &Result<T, SessionError>) {
    if let Err(SessionError::InvalidPhase { .. }) = result {
        warning!("Log in first, type `login`.");
    }
}
