use crate::client::BlinkClient;
use crate::commands::Authentication;
use crate::constants::{
    CHANGED_VIDEOS_PATH, DOWNLOAD_AUTH_HEADER, LISTING_AUTH_HEADER, POLL_INTERVAL, SINCE_FORMAT,
};
use crate::error::{BlinkError, Result};
use async_trait::async_trait;
use chrono::Duration;
use serde::Deserialize;
use std::path::Path;
use tokio::{fs::File, io::AsyncWriteExt};
use tracing::debug;

/// One clip known to the vendor, as returned by the changed-videos listing
#[derive(Debug, Clone, Deserialize)]
pub struct VideoRecord {
    pub address: String,
    pub camera_name: String,
}

#[derive(Deserialize)]
struct ChangedVideos {
    videos: Vec<VideoRecord>,
}

#[async_trait]
pub trait VideoManagement: Send + Sync {
    /// List videos changed since the given timestamp, most recent first
    async fn list_changed_videos(&self, since: &str, page: u32) -> Result<Vec<VideoRecord>>;

    /// Poll the changed-videos listing until a clip shows up or the timeout elapses
    async fn wait_for_video(
        &self,
        camera_name: &str,
        go_back: Duration,
        wait_timeout: Duration,
    ) -> Result<Option<VideoRecord>>;

    /// Download the clip at the given address
    async fn download_video(&self, address: &str) -> Result<Vec<u8>>;

    /// Download a clip and write it to the target path
    async fn save_video(&self, address: &str, target_path: &Path) -> Result<()>;
}

#[async_trait]
impl VideoManagement for BlinkClient {
    async fn list_changed_videos(&self, since: &str, page: u32) -> Result<Vec<VideoRecord>> {
        let session = self.session().ok_or(BlinkError::NotAuthenticated())?;
        let url = format!(
            "{}{}?since={}&page={}",
            self.regional_base(&session.region),
            CHANGED_VIDEOS_PATH,
            since,
            page
        );

        let response = self
            .http
            .get(&url)
            .header(LISTING_AUTH_HEADER, &session.token)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| BlinkError::FetchError(format!("Listing request failed: {}", e)))?;

        let listing: ChangedVideos = response
            .json()
            .await
            .map_err(|e| BlinkError::ParseError(format!("Malformed listing response: {}", e)))?;

        Ok(listing.videos)
    }

    async fn wait_for_video(
        &self,
        camera_name: &str,
        go_back: Duration,
        wait_timeout: Duration,
    ) -> Result<Option<VideoRecord>> {
        // The camera may still be writing the clip, so only videos newer
        // than the look-back window count.
        let start = self.clock.now();
        let since = (start - go_back).format(SINCE_FORMAT).to_string();

        loop {
            let videos = self.list_changed_videos(&since, 1).await?;

            if let Some(selected) = select_video(&videos, camera_name) {
                debug!(
                    camera = %selected.camera_name,
                    address = %selected.address,
                    "clip selected"
                );
                return Ok(Some(selected));
            }

            if self.clock.now() > start + wait_timeout {
                return Ok(None);
            }

            self.clock.sleep(POLL_INTERVAL).await;
        }
    }

    async fn download_video(&self, address: &str) -> Result<Vec<u8>> {
        let session = self.session().ok_or(BlinkError::NotAuthenticated())?;
        let url = format!("{}{}", self.regional_base(&session.region), address);

        let response = self
            .http
            .get(&url)
            .header(DOWNLOAD_AUTH_HEADER, &session.token)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| BlinkError::FetchError(format!("Download request failed: {}", e)))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| BlinkError::FetchError(format!("Download failed mid-body: {}", e)))?;

        Ok(body.to_vec())
    }

    async fn save_video(&self, address: &str, target_path: &Path) -> Result<()> {
        // Fetch the whole body before touching the filesystem so an aborted
        // download never leaves a partial file behind.
        let body = self.download_video(address).await?;

        if let Some(parent) = target_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = File::create(target_path).await?;
        file.write_all(&body).await?;
        file.sync_all().await?;

        Ok(())
    }
}

/// Pick the clip for the target camera, falling back to the newest entry
/// when no name matches. Returns None only for an empty listing.
fn select_video(videos: &[VideoRecord], camera_name: &str) -> Option<VideoRecord> {
    videos
        .iter()
        .find(|v| v.camera_name == camera_name)
        .or_else(|| videos.first())
        .cloned()
}
