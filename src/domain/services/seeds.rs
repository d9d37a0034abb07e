#[cfg(test)]
#[path = "seeds_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use tokio::fs;

use crate::domain::models::SeedRecord;

/// Loads prior conversation records from a local file or an http(s) URL.
pub struct Seeds {}

impl Seeds {
    pub fn is_remote(location: &str) -> bool {
        return location.starts_with("http://") || location.starts_with("https://");
    }

    pub fn parse(payload: &str) -> Result<Vec<SeedRecord>> {
        let records: Vec<SeedRecord> = serde_json::from_str(payload)?;
        return Ok(records);
    }

    pub async fn load(location: &str) -> Result<Vec<SeedRecord>> {
        if location.trim().is_empty() {
            bail!("No seed location configured");
        }

        if Seeds::is_remote(location) {
            let res = reqwest::Client::new().get(location).send().await?;
            if !res.status().is_success() {
                tracing::error!(
                    status = res.status().as_u16(),
                    location = location,
                    "Failed to fetch seed data"
                );
                bail!(format!(
                    "Failed to fetch seed data, status {}",
                    res.status().as_u16()
                ));
            }

            let payload = res.text().await?;
            return Seeds::parse(&payload);
        }

        let payload = fs::read_to_string(location).await?;
        return Seeds::parse(&payload);
    }
}
