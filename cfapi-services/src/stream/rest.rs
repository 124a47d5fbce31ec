//! Stream REST operations.
//!
//! Every operation is the same composition: validate parameters, build one
//! request, make one transport call, decode the response. Validation
//! failures return before any network I/O; transport errors pass through
//! unchanged; decode failures surface as parse errors.

use super::params::{
    StreamCreateVideoParameters, StreamListParameters, StreamParameters,
    StreamSignedUrlParameters, StreamUploadFileParameters, StreamUploadFromUrlParameters,
    StreamVideoNftParameters,
};
use super::types::{StreamSignedToken, StreamVideo, StreamVideoCreate};
use crate::client::Cloudflare;
use cfapi_core::error::Result;
use cfapi_core::{envelope, http_client};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

impl Cloudflare {
    /// Lists videos in an account.
    ///
    /// GET `/accounts/{account}/stream`, with any filters from `params`
    /// rendered as query parameters.
    pub async fn stream_list_videos(
        &self,
        params: &StreamListParameters,
    ) -> Result<Vec<StreamVideo>> {
        params.validate()?;

        let path = format!("/accounts/{}/stream{}", params.account_id, params.query());
        let body = self.base().request(Method::GET, &path, None, None).await?;

        envelope::decode::<Vec<StreamVideo>>(&body)?.into_result()
    }

    /// Fetches a single video.
    ///
    /// GET `/accounts/{account}/stream/{video}`.
    pub async fn stream_get_video(&self, params: &StreamParameters) -> Result<StreamVideo> {
        params.validate()?;

        let path = format!("/accounts/{}/stream/{}", params.account_id, params.video_id);
        let body = self.base().request(Method::GET, &path, None, None).await?;

        envelope::decode::<StreamVideo>(&body)?.into_result()
    }

    /// Deletes a video.
    ///
    /// DELETE `/accounts/{account}/stream/{video}`.
    pub async fn stream_delete_video(&self, params: &StreamParameters) -> Result<()> {
        params.validate()?;

        let path = format!("/accounts/{}/stream/{}", params.account_id, params.video_id);
        let body = self
            .base()
            .request(Method::DELETE, &path, None, None)
            .await?;

        // The envelope still reports success/errors; the payload is empty.
        envelope::decode::<Value>(&body)?;
        debug!(video_id = %params.video_id, "video deleted");
        Ok(())
    }

    /// Copies a video into the account from a remote URL.
    ///
    /// POST `/accounts/{account}/stream/copy`.
    pub async fn stream_upload_from_url(
        &self,
        params: &StreamUploadFromUrlParameters,
    ) -> Result<StreamVideo> {
        params.validate()?;

        let path = format!("/accounts/{}/stream/copy", params.account_id);
        let body = serde_json::to_value(params)?;
        let response = self
            .base()
            .request(Method::POST, &path, None, Some(body))
            .await?;

        envelope::decode::<StreamVideo>(&response)?.into_result()
    }

    /// Uploads a local video file.
    ///
    /// POST `/accounts/{account}/stream` with the file streamed as the
    /// `file` multipart part. A file that cannot be opened fails with
    /// [`Error::File`](cfapi_core::Error::File) before any network I/O.
    pub async fn stream_upload_video_file(
        &self,
        params: &StreamUploadFileParameters,
    ) -> Result<StreamVideo> {
        params.validate()?;

        let form = http_client::file_upload_form(&params.file_path).await?;

        let path = format!("/accounts/{}/stream", params.account_id);
        let response = self.base().request_multipart(&path, None, form).await?;

        envelope::decode::<StreamVideo>(&response)?.into_result()
    }

    /// Creates a direct-upload URL for end users.
    ///
    /// POST `/accounts/{account}/stream/direct_upload`.
    pub async fn stream_create_video_direct_url(
        &self,
        params: &StreamCreateVideoParameters,
    ) -> Result<StreamVideoCreate> {
        params.validate()?;

        let path = format!("/accounts/{}/stream/direct_upload", params.account_id);
        let body = serde_json::to_value(params)?;
        let response = self
            .base()
            .request(Method::POST, &path, None, Some(body))
            .await?;

        envelope::decode::<StreamVideoCreate>(&response)?.into_result()
    }

    /// Fetches the embed HTML snippet for a video.
    ///
    /// GET `/accounts/{account}/stream/{video}/embed`. The body is plain
    /// HTML and is returned verbatim; no JSON parsing is attempted.
    pub async fn stream_embed_html(&self, params: &StreamParameters) -> Result<String> {
        params.validate()?;

        let path = format!(
            "/accounts/{}/stream/{}/embed",
            params.account_id, params.video_id
        );
        self.base().request(Method::GET, &path, None, None).await
    }

    /// Associates an NFT with a video.
    ///
    /// POST `/accounts/{account}/stream/{video}`.
    pub async fn stream_associate_nft(
        &self,
        params: &StreamVideoNftParameters,
    ) -> Result<StreamVideo> {
        params.validate()?;

        let path = format!("/accounts/{}/stream/{}", params.account_id, params.video_id);
        let body = serde_json::to_value(params)?;
        let response = self
            .base()
            .request(Method::POST, &path, None, Some(body))
            .await?;

        envelope::decode::<StreamVideo>(&response)?.into_result()
    }

    /// Creates a signed playback token for a video.
    ///
    /// POST `/accounts/{account}/stream/{video}/token`.
    pub async fn stream_create_signed_url(
        &self,
        params: &StreamSignedUrlParameters,
    ) -> Result<String> {
        params.validate()?;

        let path = format!(
            "/accounts/{}/stream/{}/token",
            params.account_id, params.video_id
        );
        let body = serde_json::to_value(params)?;
        let response = self
            .base()
            .request(Method::POST, &path, None, Some(body))
            .await?;

        let token = envelope::decode::<StreamSignedToken>(&response)?.into_result()?;
        Ok(token.token)
    }
}
