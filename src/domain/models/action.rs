use super::Message;

/// Work handed from the UI loop to the background actions worker.
pub enum Action {
    ClearTranscript(),
    CopyMessages(Vec<Message>),
    FetchSuggestions(String),
    SaveTranscript(Vec<Message>),
}
