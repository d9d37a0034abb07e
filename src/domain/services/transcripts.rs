#[cfg(test)]
#[path = "transcripts_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Message;

/// Fixed key the transcript is stored under.
pub const TRANSCRIPT_FILE_NAME: &str = "messages.json";
const TRANSCRIPT_TMP_FILE_NAME: &str = "messages.json.tmp";

pub struct Transcripts {
    pub cache_dir: path::PathBuf,
}

impl Default for Transcripts {
    fn default() -> Transcripts {
        return Transcripts::new(path::PathBuf::from(Config::get(ConfigKey::TranscriptDir)));
    }
}

impl Transcripts {
    pub fn new(cache_dir: path::PathBuf) -> Transcripts {
        return Transcripts { cache_dir };
    }

    pub fn file_path(&self) -> path::PathBuf {
        return self.cache_dir.join(TRANSCRIPT_FILE_NAME);
    }

    pub fn exists(&self) -> bool {
        return self.file_path().exists();
    }

    /// A missing file is an empty log.
    pub async fn load(&self) -> Result<Vec<Message>> {
        let file_path = self.file_path();
        if !file_path.exists() {
            return Ok(vec![]);
        }

        let payload = fs::read_to_string(file_path).await?;
        let messages: Vec<Message> = serde_json::from_str(&payload)?;

        return Ok(messages);
    }

    /// Overwrites whatever was stored before with the full log. The payload
    /// lands in a sibling file first and is renamed over the transcript, so
    /// an interrupted save leaves the previous log intact.
    pub async fn save(&self, messages: &[Message]) -> Result<()> {
        let payload = serde_json::to_string(messages)?;

        if !self.cache_dir.exists() {
            fs::create_dir_all(&self.cache_dir).await?;
        }

        let tmp_path = self.cache_dir.join(TRANSCRIPT_TMP_FILE_NAME);
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(payload.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp_path, self.file_path()).await?;

        return Ok(());
    }

    /// Removes the key entirely rather than writing an empty log.
    pub async fn clear(&self) -> Result<()> {
        let file_path = self.file_path();
        if !file_path.exists() {
            return Ok(());
        }

        fs::remove_file(file_path).await?;
        return Ok(());
    }
}
