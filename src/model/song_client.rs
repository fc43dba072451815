//! REST client for the song service

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use super::types::{Song, SongId};

/// Base address of the song service.
pub const API_BASE_URL: &str = "http://localhost:8080";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The two calls the dashboard makes against the song service.
#[async_trait]
pub trait SongService: Send + Sync {
    /// `GET /api/songs/all`
    async fn fetch_all(&self) -> Result<Vec<Song>, ServiceError>;

    /// `PUT /api/songs/update/{id}` with the full record; returns the stored record.
    async fn update_song(&self, song: &Song) -> Result<Song, ServiceError>;
}

#[derive(Clone)]
pub struct HttpSongClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpSongClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn all_songs_url(&self) -> String {
        format!("{}/api/songs/all", self.base_url)
    }

    fn update_url(&self, id: SongId) -> String {
        format!("{}/api/songs/update/{}", self.base_url, id)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SongService for HttpSongClient {
    async fn fetch_all(&self) -> Result<Vec<Song>, ServiceError> {
        let url = self.all_songs_url();
        tracing::debug!(%url, "API: fetch all songs");
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn update_song(&self, song: &Song) -> Result<Song, ServiceError> {
        let url = self.update_url(song.id);
        tracing::debug!(%url, is_favorite = song.is_favorite, "API: update song");
        let response = self.http.put(&url).json(song).send().await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests;
