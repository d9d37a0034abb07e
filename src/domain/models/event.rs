use tui_textarea::Input;

pub enum Event {
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLL(),
    KeyboardCTRLR(),
    KeyboardEnter(),
    KeyboardPaste(String),
    KeyboardTab(),
    Notice(String),
    SuggestionsFailed(String),
    SuggestionsReceived(Vec<String>),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
