#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;

use anyhow::anyhow;
use anyhow::Error;
use anyhow::Result;
use domain::models::Action;
use domain::models::Event;
use domain::models::RecommenderName;
use domain::services::clipboard::ClipboardService;
use infrastructure::recommenders::RecommenderManager;
use tokio::sync::mpsc;
use tokio::task;
use yansi::Paint;

use crate::application::cli;
use crate::application::ui;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::actions::ActionsService;
use crate::domain::services::Transcripts;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        Paint::red(format!(
            "Oh no! Duologue has failed with the following app version and error.\n\nVersion: {}\nError: {}",
            env!("CARGO_PKG_VERSION"),
            err
        ))
    );

    let backtrace = err.backtrace();
    if backtrace.to_string() == "disabled backtrace" {
        let args = env::args().collect::<Vec<String>>().join(" ");
        eprintln!("\nRunning the following can help explain further what the issue is:");
        eprintln!("\nRUST_BACKTRACE=1 {args}");
    } else {
        eprintln!("\n{}", backtrace);
    }

    process::exit(1);
}

async fn start_actions(
    event_tx: mpsc::UnboundedSender<Event>,
    mut action_rx: mpsc::UnboundedReceiver<Action>,
) -> Result<()> {
    let recommender_name = Config::get(ConfigKey::Recommender);
    let recommender = RecommenderName::parse(recommender_name.to_string())
        .ok_or_else(|| return anyhow!("Unknown recommender {recommender_name}"))?;

    return ActionsService::start(
        RecommenderManager::get(recommender)?,
        Transcripts::default(),
        event_tx,
        &mut action_rx,
    )
    .await;
}

fn flatten_join(res: Result<Result<()>, task::JoinError>) -> Result<()> {
    match res {
        Ok(res) => return res,
        Err(join_err) => return Err(anyhow!(join_err)),
    }
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        ui::destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let file_appender = tracing_appender::rolling::never(configuration::log_dir(), "debug.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("duologue")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    match cli::parse().await {
        Ok(true) => {}
        Ok(false) => process::exit(0),
        Err(ready_err) => {
            handle_error(ready_err);
            return;
        }
    }

    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut actions_future = task::spawn(start_actions(event_tx, action_rx));
    let mut background_futures = task::JoinSet::new();

    if let Err(clipboard_err) = ClipboardService::healthcheck() {
        tracing::warn!(err = ?clipboard_err, "Clipboard service is unable to start")
    } else {
        background_futures.spawn(async move {
            return ClipboardService::start().await;
        });
    }

    let ui_future = ui::start(action_tx, event_rx);

    let res = tokio::select!(
        res = &mut actions_future => Some(flatten_join(res)),
        res = background_futures.join_next(), if !background_futures.is_empty() => match res {
            Some(res) => Some(flatten_join(res)),
            None => None,
        },
        res = ui_future => match res {
            Ok(()) => None,
            Err(err) => Some(Err(err)),
        },
    );

    // The UI dropped its action sender on exit, wait for pending saves to land.
    let res = match res {
        Some(res) => res,
        None => flatten_join(actions_future.await),
    };

    if let Err(err) = res {
        ui::destruct_terminal_for_panic();
        handle_error(err);
    }

    process::exit(0);
}
