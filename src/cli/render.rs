use colored::Colorize;
use tabled::Table;

use crate::{
    cli::SpotifySession,
    info,
    session::{MAX_SEEDS, Phase},
    types::{Playlist, Track, User},
    utils,
};

pub fn user(user: &User) {
    info!("Logged in as {} ({})", user.name.bold(), user.id);
}

pub fn tracks(tracks: &[Track], session: &SpotifySession) {
    println!("{}", Table::new(utils::track_rows(tracks, session.selection())));
}

pub fn browsed(session: &SpotifySession) {
    match session.phase() {
        Phase::BrowsingTracks => tracks(session.top_tracks(), session),
        Phase::BrowsingArtists => println!(
            "{}",
            Table::new(utils::artist_rows(session.top_artists(), session.selection()))
        ),
        Phase::BrowsingGenres => println!(
            "{}",
            Table::new(utils::genre_rows(session.genres(), session.selection()))
        ),
        Phase::ShowingRecommendations => {
            println!("{}", "Recommendations:".bold());
            tracks(session.recommendations(), session);
        }
        _ => {}
    }

    if session.has_next(session.phase()) {
        info!("More available, type `more` to load the next page.");
    }
}

pub fn playlists(playlists: &[Playlist]) {
    println!("{}", Table::new(utils::playlist_rows(playlists)));
}

/// The selected seeds, in the order they are sent.
pub fn selection(session: &SpotifySession) {
    let selection = session.selection();
    if selection.is_empty() {
        info!("Nothing selected.");
        return;
    }

    println!(
        "{} ({}/{})",
        "Selected".bold(),
        selection.len(),
        MAX_SEEDS
    );
    for id in selection.tracks() {
        match session.top_tracks().iter().find(|t| &t.id == id) {
            Some(t) => println!("  track   {} - {}", t.name, t.artist_name()),
            None => println!("  track   {}", id),
        }
    }
    for id in selection.artists() {
        match session.top_artists().iter().find(|a| &a.id == id) {
            Some(a) => println!("  artist  {}", a.name),
            None => println!("  artist  {}", id),
        }
    }
    for genre in selection.genres() {
        println!("  genre   {}", genre.to_uppercase());
    }
}

pub fn information() {
    println!(
        "{}\n\
         Pick up to {} seeds from your top tracks, top artists and the genre list,\n\
         then ask Spotify for tracks that go well with them. Recommended tracks can\n\
         be played on one of your Spotify devices and added to your playlists.\n\
         Top items are computed by Spotify over the selected time range.",
        "About".bold(),
        MAX_SEEDS
    );
}

pub fn help() {
    println!(
        "{}\n\
         \x20 tracks [range]     show top tracks (short_term, medium_term, long_term)\n\
         \x20 artists [range]    show top artists\n\
         \x20 genres             show genre seeds\n\
         \x20 range <range>      set the time range for top items\n\
         \x20 more               load the next page\n\
         \x20 select <#|id>...   toggle seeds from the current list\n\
         \x20 selected           show the selection\n\
         \x20 recommend          get recommendations for the selection\n\
         \x20 list               show the current list again\n\
         \x20 play <#|id>        play a track on your Spotify device\n\
         \x20 stop               pause playback\n\
         \x20 add <#|id>         add a track to one of your playlists\n\
         \x20 info               toggle the about text\n\
         \x20 login              log in again\n\
         \x20 reset              clear everything and start over\n\
         \x20 quit               leave the session",
        "Commands".bold()
    );
}
