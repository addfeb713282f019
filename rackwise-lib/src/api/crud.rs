//! Create, Read, Update, Delete operations for rack records
//!
//! All operations run through [`RackClient::request`]; failures surface as
//! [`Error`] without retry.

use reqwest::Method;

use super::RackPage;
use crate::RackClient;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::RackPayload;
use crate::model::RackType;
use crate::model::RawRack;

impl RackClient {
    /// Fetches one page of rack records.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let page = client.list_racks(1, 20).await?;
    /// println!("{} of {} racks", page.len(), page.total);
    /// ```
    pub async fn list_racks(&self, page: u32, page_size: u32) -> Result<RackPage, Error> {
        let url = self.build_url(&format!("/racks?page={}&pageSize={}", page, page_size));
        let response = self.request(Method::GET, &url, None).await?;
        let page: RackPage = response
            .json()
            .await
            .map_err(|e| ApiError::parse(format!("invalid list envelope: {}", e)))?;
        Ok(page)
    }

    /// Fetches a single rack record by id.
    pub async fn get_rack(&self, id: i64) -> Result<RawRack, Error> {
        let url = self.build_url(&format!("/racks/{}", id));
        let response = self.request(Method::GET, &url, None).await?;
        let rack: RawRack = response
            .json()
            .await
            .map_err(|e| ApiError::parse(format!("invalid rack record: {}", e)))?;
        Ok(rack)
    }

    /// Creates a new rack record.
    pub async fn create_rack(&self, payload: &RackPayload) -> Result<(), Error> {
        let url = self.build_url("/racks");
        let body = serde_json::to_string(payload)?;
        self.request(Method::POST, &url, Some(body)).await?;
        Ok(())
    }

    /// Updates an existing rack record.
    pub async fn update_rack(&self, id: i64, payload: &RackPayload) -> Result<(), Error> {
        let url = self.build_url(&format!("/racks/{}", id));
        let body = serde_json::to_string(payload)?;
        self.request(Method::PUT, &url, Some(body)).await?;
        Ok(())
    }

    /// Deletes a rack record.
    pub async fn delete_rack(&self, id: i64) -> Result<(), Error> {
        let url = self.build_url(&format!("/racks/{}", id));
        self.request(Method::DELETE, &url, None).await?;
        Ok(())
    }

    /// Fetches the full rack type list.
    ///
    /// The catalog is small enough that no pagination exists on this
    /// resource.
    pub async fn list_rack_types(&self) -> Result<Vec<RackType>, Error> {
        let url = self.build_url("/racktypes");
        let response = self.request(Method::GET, &url, None).await?;
        let types: Vec<RackType> = response
            .json()
            .await
            .map_err(|e| ApiError::parse(format!("invalid rack type list: {}", e)))?;
        Ok(types)
    }
}
