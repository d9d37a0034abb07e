pub mod rag;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::RecommenderBox;
use crate::domain::models::RecommenderName;

pub struct RecommenderManager {}

impl RecommenderManager {
    pub fn get(name: RecommenderName) -> Result<RecommenderBox> {
        if name == RecommenderName::Rag {
            return Ok(Box::<rag::Rag>::default());
        }

        bail!(format!("No recommender implemented for {name}"))
    }
}
