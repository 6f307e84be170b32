use reqwest::{Method, StatusCode};

use super::ApiEndpoint;
use crate::{
    Asset, AssetAddresses, AssetResults, AssetSummary, CollinsClient, CollinsError, CollinsResult,
    StatusResponse,
};

/// Page size applied when the caller does not specify one.
const DEFAULT_PAGE_SIZE: &str = "500";

/// Provides methods for reading and mutating Collins assets.
///
/// This API covers asset lookup (by tag, by address, by search query),
/// address listing, log appending, and status changes.
pub struct AssetApi<'a> {
    client: &'a CollinsClient,
}

impl<'a> ApiEndpoint for AssetApi<'a> {
    fn client(&self) -> &CollinsClient {
        self.client
    }
}

impl<'a> AssetApi<'a> {
    /// Creates a new asset API instance.
    ///
    /// This method is intended for internal use by the Collins client.
    ///
    /// # Arguments
    ///
    /// * `client` - Reference to the Collins client that will be used for API
    ///   requests
    pub(crate) fn new(client: &'a CollinsClient) -> Self {
        Self { client }
    }

    /// Fetches the full detail record of the asset with the given tag.
    ///
    /// Returns `Ok(None)` when the server answers with an empty body, which
    /// Collins uses for unknown tags.
    ///
    /// # Arguments
    ///
    /// * `tag` - Unique asset tag; must be non-empty
    ///
    /// # Errors
    ///
    /// Returns `CollinsError::InvalidArgument` for an empty tag (before any
    /// network I/O), or an error if the request fails or the response cannot
    /// be decoded.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &collins_client::CollinsClient) -> collins_client::CollinsResult<()> {
    /// if let Some(asset) = client.assets().get("sl-102313").await? {
    ///     println!("Status: {}", asset.data.asset.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, tag: &str) -> CollinsResult<Option<Asset>> {
        if tag.trim().is_empty() {
            return Err(CollinsError::InvalidArgument("Tag required".into()));
        }

        let endpoint = format!("/api/asset/{tag}");

        let body = self.client.request(Method::GET, &endpoint, &[]).await?;

        if body.is_empty() {
            return Ok(None);
        }

        let asset: Asset = serde_json::from_str(&body)?;
        Ok(Some(asset))
    }

    /// Fetches the full detail record of the asset holding the given address.
    ///
    /// The address endpoint only returns a flat summary, so this resolves the
    /// tag from it and then fetches the full record, costing two round trips.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails or a response cannot be
    /// decoded.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &collins_client::CollinsClient) -> collins_client::CollinsResult<()> {
    /// if let Some(asset) = client.assets().get_by_address("10.0.0.5").await? {
    ///     println!("{} holds that address", asset.data.asset.tag);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_by_address(&self, address: &str) -> CollinsResult<Option<Asset>> {
        let endpoint = format!("/asset/with/address/{address}");

        let body = self.client.request(Method::GET, &endpoint, &[]).await?;

        if body.is_empty() {
            return Ok(None);
        }

        let summary: AssetSummary = serde_json::from_str(&body)?;
        self.get(&summary.data.tag).await
    }

    /// Lists the network addresses assigned to the asset with the given tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn addresses(&self, tag: &str) -> CollinsResult<AssetAddresses> {
        let endpoint = format!("/asset/{tag}/addresses");

        self.client
            .request_json(Method::GET, &endpoint, &[("size", DEFAULT_PAGE_SIZE)])
            .await
    }

    /// Searches assets with caller-supplied query parameters.
    ///
    /// A `size` parameter of 500 is injected unless the caller supplies one.
    /// Collins accepts attribute filters of the form `attribute=NAME;VALUE`
    /// alongside the fixed parameters (`status`, `type`, ...); this client
    /// passes all pairs through untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &collins_client::CollinsClient) -> collins_client::CollinsResult<()> {
    /// let results = client.assets().find(&[("status", "Allocated")]).await?;
    /// for entry in &results.data.assets {
    ///     println!("{}", entry.asset);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find(&self, params: &[(&str, &str)]) -> CollinsResult<AssetResults> {
        let mut query = params.to_vec();
        if !query.iter().any(|(key, _)| *key == "size") {
            query.push(("size", DEFAULT_PAGE_SIZE));
        }

        self.client.request_json(Method::GET, "/assets", &query).await
    }

    /// Lists assets with no filter, up to the default page size.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn find_all(&self) -> CollinsResult<AssetResults> {
        self.find(&[]).await
    }

    /// Appends a log entry to the asset with the given tag.
    ///
    /// The server acknowledges a created entry with 201; any other status
    /// code is an error, whatever the body says.
    ///
    /// # Arguments
    ///
    /// * `tag` - Asset tag to log against
    /// * `log_type` - Collins log level, e.g. "NOTE" or "ERROR"
    /// * `message` - Log entry text
    ///
    /// # Errors
    ///
    /// Returns `CollinsError::UnexpectedStatus` for any status other than
    /// 201 Created.
    pub async fn add_log(&self, tag: &str, log_type: &str, message: &str) -> CollinsResult<()> {
        let endpoint = format!("/asset/{tag}/log");

        let (status, body) = self
            .client
            .execute(
                Method::PUT,
                &endpoint,
                &[("message", message), ("type", log_type)],
            )
            .await?;

        if status != StatusCode::CREATED {
            return Err(CollinsError::UnexpectedStatus { status, body });
        }

        Ok(())
    }

    /// Changes the status of the asset with the given tag.
    ///
    /// Collins reports the logical outcome inside the response envelope, not
    /// through the HTTP status code, so success requires the envelope to
    /// confirm it.
    ///
    /// # Arguments
    ///
    /// * `tag` - Asset tag to update
    /// * `status` - Target status name, e.g. "Maintenance"
    /// * `reason` - Free-form reason recorded with the change
    ///
    /// # Errors
    ///
    /// Returns `CollinsError::OperationFailed` when the envelope does not
    /// confirm the change, even on HTTP 200.
    pub async fn set_status(&self, tag: &str, status: &str, reason: &str) -> CollinsResult<()> {
        let endpoint = format!("/asset/{tag}/status");

        let body = self
            .client
            .request(
                Method::POST,
                &endpoint,
                &[("status", status), ("reason", reason)],
            )
            .await?;

        let envelope: StatusResponse = serde_json::from_str(&body)?;
        if !envelope.is_success() {
            return Err(CollinsError::OperationFailed(format!(
                "Couldn't set status to {status}"
            )));
        }

        Ok(())
    }
}
