use std::io;
use std::path;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::RecommenderName;
use crate::domain::services::actions::format_transcript;
use crate::domain::services::actions::help_text;
use crate::domain::services::Transcripts;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    let parent = config_file_path
        .parent()
        .ok_or_else(|| return anyhow!("Config file path {config_file_path_str} has no parent"))?;
    if !parent.exists() {
        fs::create_dir_all(parent).await?;
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

async fn print_transcript(transcripts: &Transcripts) -> Result<()> {
    if !transcripts.exists() {
        println!("There is no saved transcript yet.");
        return Ok(());
    }

    let messages = transcripts.load().await?;
    if messages.is_empty() {
        println!("There is no saved transcript yet.");
        return Ok(());
    }

    println!("{}", format_transcript(&messages));
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_transcript() -> Command {
    return Command::new("transcript")
        .about("Inspect or remove the saved transcript.")
        .arg_required_else_help(true)
        .subcommand(Command::new("path").about("Print the path of the saved transcript file."))
        .subcommand(Command::new("show").about("Print the saved transcript."))
        .subcommand(Command::new("clear").about("Delete the saved transcript."));
}

fn arg_recommender() -> Arg {
    return Arg::new(ConfigKey::Recommender.to_string())
        .long(ConfigKey::Recommender.to_string())
        .env("DUOLOGUE_RECOMMENDER")
        .num_args(1)
        .help(format!(
            "The service asked for reply suggestions. [default: {}]",
            Config::default(ConfigKey::Recommender)
        ))
        .value_parser(PossibleValuesParser::new(RecommenderName::VARIANTS));
}

fn arg_seed() -> Arg {
    return Arg::new(ConfigKey::Seed.to_string())
        .short('s')
        .long(ConfigKey::Seed.to_string())
        .env("DUOLOGUE_SEED")
        .num_args(1)
        .help("File path or http(s) URL of a JSON array of {agent, message} records to open the chat with. Seeded chats are not saved until a message is sent.");
}

fn subcommand_chat() -> Command {
    return Command::new("chat")
        .about("Start the chat UI. This is the default when no subcommand is given.")
        .arg(arg_recommender())
        .arg(arg_seed());
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") || line.starts_with("HOTKEYS:") {
                return Paint::new(format!("CHAT {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("duologue")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .subcommand(subcommand_transcript())
        .arg(arg_recommender())
        .arg(arg_seed())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("DUOLOGUE_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::RagURL.to_string())
                .long(ConfigKey::RagURL.to_string())
                .env("DUOLOGUE_RAG_URL")
                .num_args(1)
                .help(format!("Base URL of the recommendation service. Suggestions are requested from {{rag-url}}/rag. [default: {}]", Config::default(ConfigKey::RagURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::RagQuestion.to_string())
                .long(ConfigKey::RagQuestion.to_string())
                .env("DUOLOGUE_RAG_QUESTION")
                .num_args(1)
                .help(format!("Question sent to the recommendation service when none is given. [default: {}]", Config::default(ConfigKey::RagQuestion)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::TranscriptDir.to_string())
                .long(ConfigKey::TranscriptDir.to_string())
                .env("DUOLOGUE_TRANSCRIPT_DIR")
                .num_args(1)
                .help(format!("Directory the transcript is saved to. [default: {}]", Config::default(ConfigKey::TranscriptDir)))
                .global(true),
        );
}

async fn handle_transcript(matches: &ArgMatches, subcmd_matches: &ArgMatches) -> Result<()> {
    match subcmd_matches.subcommand() {
        Some((name, transcript_matches)) => {
            Config::load(build(), vec![matches, subcmd_matches, transcript_matches]).await?;
            let transcripts = Transcripts::default();

            match name {
                "path" => {
                    println!("{}", transcripts.file_path().to_string_lossy());
                }
                "show" => {
                    print_transcript(&transcripts).await?;
                }
                "clear" => {
                    transcripts.clear().await?;
                    println!("Deleted saved transcript");
                }
                _ => {
                    subcommand_transcript().print_long_help()?;
                }
            }
        }
        None => {
            subcommand_transcript().print_long_help()?;
        }
    }

    return Ok(());
}

/// Returns whether the chat UI should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        Some(("transcript", subcmd_matches)) => {
            handle_transcript(&matches, subcmd_matches).await?;
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
