use async_trait::async_trait;

use crate::{
    session::{GatewayError, Playback},
    spotify::SpotifyClient,
    types::{Device, DevicesResponse, PlayRequest},
};

/// Plays previews on one of the user's Spotify Connect devices.
///
/// Requires a Premium account and an open Spotify app somewhere.
#[derive(Clone)]
pub struct ConnectPlayer {
    client: SpotifyClient,
}

impl ConnectPlayer {
    pub fn new(client: SpotifyClient) -> Self {
        Self { client }
    }

    pub async fn devices(&self) -> Result<Vec<Device>, GatewayError> {
        let api_url = self.client.url("/me/player/devices");

        let response = self.client.send(|http| http.get(&api_url)).await?;
        let json = response.json::<DevicesResponse>().await?;

        Ok(json.devices)
    }
}

#[async_trait]
impl Playback for ConnectPlayer {
    async fn device_id(&self) -> Option<String> {
        let devices = self.devices().await.ok()?;
        pick_device(&devices)
    }

    async fn play(&self, device_id: &str, track_uri: &str) -> Result<(), GatewayError> {
        let api_url = self.client.url("/me/player/play");
        let body = PlayRequest {
            uris: vec![track_uri.to_string()],
        };

        self.client
            .send(|http| {
                http.put(&api_url)
                    .query(&[("device_id", device_id)])
                    .json(&body)
            })
            .await?;

        Ok(())
    }

    async fn pause(&self) -> Result<(), GatewayError> {
        let api_url = self.client.url("/me/player/pause");
        let device_id = self.device_id().await;

        self.client
            .send(|http| {
                let request = http.put(&api_url).header(reqwest::header::CONTENT_LENGTH, 0);
                match &device_id {
                    Some(id) => request.query(&[("device_id", id.as_str())]),
                    None => request,
                }
            })
            .await?;

        Ok(())
    }
}

/// The active device if there is one, otherwise the first usable one.
pub fn pick_device(devices: &[Device]) -> Option<String> {
    devices
        .iter()
        .filter(|d| d.id.is_some())
        .find(|d| d.is_active)
        .or_else(|| devices.iter().find(|d| d.id.is_some()))
        .and_then(|d| d.id.clone())
}
