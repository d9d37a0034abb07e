#[cfg(test)]
#[path = "rag_test.rs"]
mod tests;

use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::RecommendationError;
use crate::domain::models::Recommender;
use crate::domain::models::RecommenderName;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RagRequest {
    question: String,
}

/// The service has been seen answering with both a single string and a list
/// of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum RagAnswer {
    One(String),
    Many(Vec<String>),
}

impl From<RagAnswer> for Vec<String> {
    fn from(answer: RagAnswer) -> Vec<String> {
        match answer {
            RagAnswer::One(text) => return vec![text],
            RagAnswer::Many(texts) => return texts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RagResponse {
    rag_answer: RagAnswer,
}

pub struct Rag {
    url: String,
}

impl Default for Rag {
    fn default() -> Rag {
        return Rag {
            url: Config::get(ConfigKey::RagURL),
        };
    }
}

#[async_trait]
impl Recommender for Rag {
    fn name(&self) -> RecommenderName {
        return RecommenderName::Rag;
    }

    #[allow(clippy::implicit_return)]
    async fn get_suggestions(&self, question: &str) -> Result<Vec<String>, RecommendationError> {
        let req = RagRequest {
            question: question.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/rag", url = self.url.trim_end_matches('/')))
            .json(&req)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                "Failed to request suggestions from RAG service"
            );
            return Err(RecommendationError::Status(status.as_u16()));
        }

        let body = res.text().await?;
        let parsed: RagResponse = serde_json::from_str(&body)?;

        return Ok(parsed.rag_answer.into());
    }
}
