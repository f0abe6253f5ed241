use serde::de::DeserializeOwned;

use crate::{
    session::GatewayError,
    spotify::{SpotifyClient, TOP_ITEMS_PAGE_SIZE},
    types::{Artist, ItemKind, PagingResponse, TimeRange, TopItems, Track},
};

impl SpotifyClient {
    /// Retrieves one page of the user's top tracks.
    ///
    /// Pages are [`TOP_ITEMS_PAGE_SIZE`] items long; page `n` starts at
    /// offset `n * 40`. `has_next` mirrors whether Spotify returned a `next`
    /// link.
    pub async fn get_top_tracks(
        &self,
        time_range: TimeRange,
        page: u32,
    ) -> Result<TopItems<Track>, GatewayError> {
        self.get_top_items(ItemKind::Tracks, time_range, page).await
    }

    /// Retrieves one page of the user's top artists. See [`Self::get_top_tracks`].
    pub async fn get_top_artists(
        &self,
        time_range: TimeRange,
        page: u32,
    ) -> Result<TopItems<Artist>, GatewayError> {
        self.get_top_items(ItemKind::Artists, time_range, page).await
    }

    async fn get_top_items<T: DeserializeOwned>(
        &self,
        kind: ItemKind,
        time_range: TimeRange,
        page: u32,
    ) -> Result<TopItems<T>, GatewayError> {
        let api_url = self.url(&format!("/me/top/{}", kind.as_path()));
        let offset = page * TOP_ITEMS_PAGE_SIZE;

        let response = self
            .send(|http| {
                http.get(&api_url).query(&[
                    ("limit", TOP_ITEMS_PAGE_SIZE.to_string()),
                    ("time_range", time_range.as_query().to_string()),
                    ("offset", offset.to_string()),
                ])
            })
            .await?;

        let page = response.json::<PagingResponse<T>>().await?;
        Ok(page.into())
    }
}
