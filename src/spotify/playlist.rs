use reqwest::header::CONTENT_LENGTH;

use crate::{
    session::GatewayError,
    spotify::{PLAYLIST_LIMIT, SpotifyClient},
    types::{AddTrackToPlaylistResponse, PagingResponse, Playlist},
};

impl SpotifyClient {
    /// Retrieves the first [`PLAYLIST_LIMIT`] playlists of a user.
    pub async fn get_user_playlists(&self, user_id: &str) -> Result<Vec<Playlist>, GatewayError> {
        let api_url = self.url(&format!("/users/{}/playlists", user_id));

        let response = self
            .send(|http| {
                http.get(&api_url)
                    .query(&[("limit", PLAYLIST_LIMIT.to_string())])
            })
            .await?;
        let json = response.json::<PagingResponse<Playlist>>().await?;

        Ok(json.items)
    }

    /// Appends a single track to a playlist and returns the new snapshot id.
    pub async fn add_track(
        &self,
        track_id: &str,
        playlist_id: &str,
    ) -> Result<String, GatewayError> {
        let api_url = self.url(&format!("/playlists/{}/tracks", playlist_id));
        let uri = track_uri(track_id);

        let response = self
            .send(|http| {
                http.post(&api_url)
                    .query(&[("uris", uri.as_str())])
                    .header(CONTENT_LENGTH, 0)
            })
            .await?;
        let json = response.json::<AddTrackToPlaylistResponse>().await?;

        Ok(json.snapshot_id)
    }
}

/// `spotify:track:{id}`, or `id` unchanged when it already is a URI.
pub fn track_uri(track_id: &str) -> String {
    if track_id.starts_with("spotify:track:") {
        track_id.to_string()
    } else {
        format!("spotify:track:{}", track_id)
    }
}
