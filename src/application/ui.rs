use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Participant;
use crate::domain::models::TextArea;
use crate::domain::services::actions::help_text;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::InputOutcome;
use crate::domain::services::Transcripts;

fn participant_span(participant: Participant, active: Participant) -> Span<'static> {
    let label = format!(" {participant} ");
    if participant == active {
        return Span::styled(
            label,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    }

    return Span::styled(label, Style::default().fg(Color::DarkGray));
}

fn render_header(frame: &mut Frame, rect: Rect, app_state: &AppState) {
    let active = app_state.active_sender();
    let mut spans = vec![
        Span::from("Sending as: "),
        participant_span(Participant::Agent1, active),
        Span::from(" "),
        participant_span(Participant::Agent2, active),
        Span::from("  (Tab to switch)"),
    ];

    if let Some(notice) = &app_state.notice {
        spans.push(Span::styled(
            format!("  {notice}"),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), rect);
}

fn render_help(frame: &mut Frame, rect: Rect) {
    frame.render_widget(
        Paragraph::new(help_text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("Help")
                    .padding(Padding::new(1, 1, 0, 0)),
            )
            .wrap(Wrap { trim: false }),
        rect,
    );
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(event_rx);
    let mut textarea = TextArea::new(app_state.active_sender());

    #[cfg(feature = "dev")]
    {
        textarea.insert_str("Hi! My order arrived with a cracked lamp, can you help?");
    }

    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Max(4),
                ])
                .split(frame.area());

            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Percentage(65), Constraint::Percentage(35)])
                .split(layout[1]);

            if usize::from(body[0].width) != app_state.last_known_width
                || usize::from(body[0].height) != app_state.last_known_height
            {
                app_state.set_rect(body[0]);
            }

            render_header(frame, layout[0], app_state);

            app_state
                .bubble_list
                .render(frame, body[0], app_state.scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                body[0].inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            if app_state.show_help {
                render_help(frame, body[1]);
            } else {
                app_state.suggestions.render(frame, body[1]);
            }

            frame.render_widget(&textarea, layout[2]);
        })?;

        let sender_before = app_state.active_sender();

        match events.next().await? {
            Event::KeyboardCharInput(input) => {
                textarea.input(input);
            }
            Event::KeyboardPaste(text) => {
                textarea.insert_str(text);
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardCTRLL() => {
                app_state.clear_chat();
            }
            Event::KeyboardCTRLR() => {
                app_state.request_suggestions(None)?;
            }
            Event::KeyboardTab() => {
                app_state.toggle_active_sender();
            }
            Event::KeyboardEnter() => {
                let input_str = textarea.lines().join("\n");
                match app_state.submit(&input_str)? {
                    InputOutcome::Quit => {
                        break;
                    }
                    InputOutcome::Clear => {
                        app_state.notice = None;
                        textarea = TextArea::new(app_state.active_sender());
                    }
                    InputOutcome::Keep => {}
                    InputOutcome::Replace(text) => {
                        textarea = TextArea::new(app_state.active_sender());
                        textarea.insert_str(text);
                    }
                }
            }
            Event::Notice(text) => {
                app_state.notice = Some(text);
            }
            Event::SuggestionsFailed(err) => {
                app_state.handle_suggestions_failed(&err);
            }
            Event::SuggestionsReceived(items) => {
                app_state.handle_suggestions(items);
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UITick() => {}
        }

        if app_state.active_sender() != sender_before {
            TextArea::set_sender(&mut textarea, app_state.active_sender());
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::new(&Config::get(ConfigKey::RagQuestion), tx);
    app_state
        .hydrate(&Config::get(ConfigKey::Seed), &Transcripts::default())
        .await;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
