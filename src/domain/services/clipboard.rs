use anyhow::anyhow;
use anyhow::Result;
use once_cell::sync::OnceCell;
use tokio::sync::mpsc;

static TRANSCRIPT_SENDER: OnceCell<mpsc::UnboundedSender<String>> = OnceCell::new();

/// Owns the system clipboard for the lifetime of the app. Some platforms drop
/// clipboard contents once the owning handle goes away, so a single handle is
/// kept alive on a background task and fed transcripts over a channel.
pub struct ClipboardService {}

impl ClipboardService {
    pub async fn start() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        TRANSCRIPT_SENDER
            .set(tx)
            .map_err(|_| return anyhow!("Clipboard service was started twice."))?;
        let mut clipboard = arboard::Clipboard::new()?;

        while let Some(transcript) = rx.recv().await {
            if let Err(err) = clipboard.set_text(transcript) {
                tracing::warn!(error = ?err, "Failed to write transcript to clipboard");
            }
        }

        return Ok(());
    }

    pub fn healthcheck() -> Result<()> {
        if TRANSCRIPT_SENDER.get().is_some() {
            return Ok(());
        }

        arboard::Clipboard::new()?;
        return Ok(());
    }

    pub fn set(transcript: String) -> Result<()> {
        let tx = TRANSCRIPT_SENDER
            .get()
            .ok_or_else(|| return anyhow!("Clipboard is not available on this system."))?;
        tx.send(transcript)?;

        return Ok(());
    }
}
