//! External-field source discovery

use reqwest::Method;
use serde::Deserialize;

use crate::RackClient;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::FieldSource;

/// Wire envelope for the external-field source listing.
#[derive(Debug, Deserialize)]
struct FieldSourcesEnvelope {
    sources: Vec<FieldSource>,
}

impl RackClient {
    /// Fetches the configured external-field sources, active or not.
    ///
    /// Callers that only want form fields should filter with
    /// [`active_field_names`](crate::model::active_field_names).
    pub async fn external_field_sources(&self) -> Result<Vec<FieldSource>, Error> {
        let url = self.build_url("/external-rack-fields");
        let response = self.request(Method::GET, &url, None).await?;
        let envelope: FieldSourcesEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::parse(format!("invalid field source list: {}", e)))?;
        Ok(envelope.sources)
    }
}
