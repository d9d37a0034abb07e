use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RecommenderName {
    Rag,
}

impl RecommenderName {
    pub fn parse(text: String) -> Option<RecommenderName> {
        return RecommenderName::iter().find(|e| return e.to_string() == text);
    }
}

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("recommendation service responded with status {0}")]
    Status(u16),

    #[error("recommendation service is unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("recommendation service returned an unexpected body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait Recommender {
    fn name(&self) -> RecommenderName;

    /// Asks the service what to reply next. Services answer with either a
    /// single suggestion or a list of them; implementations always hand back
    /// a list so callers never branch on the wire shape.
    async fn get_suggestions(&self, question: &str) -> Result<Vec<String>, RecommendationError>;
}

pub type RecommenderBox = Box<dyn Recommender + Send + Sync>;
