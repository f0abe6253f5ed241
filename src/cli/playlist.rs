use crate::{
    cli::{logged_in_session, render, spinner},
    error,
    session::Gateway,
    spotify, success, utils,
};

pub async fn playlists() {
    let session = logged_in_session().await;
    let Some(user) = session.user() else {
        error!("Not logged in. Please run seedcli auth");
    };

    let pb = spinner("Fetching playlists...");
    let result = session.gateway().fetch_user_playlists(&user.id).await;
    pb.finish_and_clear();

    match result {
        Ok(playlists) => render::playlists(&playlists),
        Err(e) => error!("Cannot load playlists: {}", e),
    }
}

/// Adds a track to a playlist given by row number, id or exact name.
pub async fn add(track: String, playlist: String) {
    let mut session = logged_in_session().await;
    let Some(user_id) = session.user().map(|u| u.id.clone()) else {
        error!("Not logged in. Please run seedcli auth");
    };

    let pb = spinner("Fetching playlists...");
    let playlists = match session.gateway().fetch_user_playlists(&user_id).await {
        Ok(playlists) => playlists,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot load playlists: {}", e);
        }
    };

    let Some(target) = utils::resolve_entry(&playlists, &playlist, |p| p.id.as_str())
        .or_else(|| playlists.iter().find(|p| p.name == playlist))
        .cloned()
    else {
        pb.finish_and_clear();
        error!("Unknown playlist: {}", playlist);
    };

    pb.set_message(format!("Adding track to {}...", target.name));
    let track_id = track.trim_start_matches("spotify:track:").to_string();
    let result = session.add_to_playlist(&track_id, &target.id).await;
    pb.finish_and_clear();

    match result {
        Ok(()) => success!("{} added to {}", spotify::track_uri(&track_id), target.name),
        Err(e) => error!("Cannot add track: {}", e),
    }
}
