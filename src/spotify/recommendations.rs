use crate::{
    session::{GatewayError, Seeds},
    spotify::{RECOMMENDATION_LIMIT, SpotifyClient},
    types::{GenreSeedsResponse, RecommendationsResponse, Track},
};

impl SpotifyClient {
    /// Retrieves recommended tracks for the given seeds.
    ///
    /// Seed ids are comma-joined per category; empty categories are left out
    /// of the query. The caller is responsible for the 5 seed limit, see
    /// [`Seeds::from_lists`].
    pub async fn get_recommendations(&self, seeds: &Seeds) -> Result<Vec<Track>, GatewayError> {
        let api_url = self.url("/recommendations");
        let query = recommendation_query(seeds);

        let response = self.send(|http| http.get(&api_url).query(&query)).await?;
        let json = response.json::<RecommendationsResponse>().await?;

        Ok(json.tracks)
    }

    /// Retrieves the genres that can be used as recommendation seeds.
    pub async fn get_genre_seeds(&self) -> Result<Vec<String>, GatewayError> {
        let api_url = self.url("/recommendations/available-genre-seeds");

        let response = self.send(|http| http.get(&api_url)).await?;
        let json = response.json::<GenreSeedsResponse>().await?;

        Ok(json.genres)
    }
}

/// Query parameters for `GET /recommendations`.
pub fn recommendation_query(seeds: &Seeds) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    for (name, ids) in [
        ("seed_tracks", &seeds.tracks),
        ("seed_artists", &seeds.artists),
        ("seed_genres", &seeds.genres),
    ] {
        if !ids.is_empty() {
            query.push((name, ids.join(",")));
        }
    }
    query.push(("limit", RECOMMENDATION_LIMIT.to_string()));
    query
}
