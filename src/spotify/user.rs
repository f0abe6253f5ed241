use crate::{
    session::GatewayError,
    spotify::SpotifyClient,
    types::{User, UserProfileResponse},
};

impl SpotifyClient {
    /// Retrieves the profile of the user the token belongs to.
    pub async fn get_current_user(&self) -> Result<User, GatewayError> {
        let api_url = self.url("/me");

        let response = self.send(|http| http.get(&api_url)).await?;
        let profile = response.json::<UserProfileResponse>().await?;

        Ok(profile.into())
    }
}
