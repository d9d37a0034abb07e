#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::models::RecommenderName;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    Recommender,
    #[strum(serialize = "rag-url")]
    RagURL,
    RagQuestion,
    Seed,
    TranscriptDir,
}

pub struct Config {}

fn app_dir(kind: &str) -> Result<path::PathBuf> {
    #[cfg(not(target_os = "macos"))]
    let base = match kind {
        "config" => dirs::config_dir(),
        _ => dirs::cache_dir(),
    };
    #[cfg(target_os = "macos")]
    let base = match kind {
        "config" => env::var("HOME")
            .ok()
            .map(|home| return path::PathBuf::from(home).join(".config")),
        _ => dirs::cache_dir(),
    };

    return base
        .map(|dir| return dir.join("duologue"))
        .ok_or_else(|| return anyhow!("Unable to resolve a {kind} directory for this platform"));
}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let default_recommender = RecommenderName::Rag.to_string();

        let res = match key {
            ConfigKey::Recommender => default_recommender,
            ConfigKey::RagURL => "http://localhost:8000".to_string(),
            ConfigKey::RagQuestion => "What should I reply?".to_string(),
            ConfigKey::Seed => "".to_string(),

            // Special
            ConfigKey::ConfigFile => app_dir("config")
                .map(|dir| return dir.join("config.toml").to_string_lossy().to_string())
                .unwrap_or_default(),
            ConfigKey::TranscriptDir => app_dir("cache")
                .map(|dir| return dir.join("transcript").to_string_lossy().to_string())
                .unwrap_or_default(),
        };

        return res;
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if let Some(val) = doc.get(&key.to_string()) {
                    // Use clap value parsers to do validation.
                    let mut possible_values = vec![];
                    if let Some(arg) = cmd
                        .get_arguments()
                        .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                    {
                        possible_values = arg
                            .get_possible_values()
                            .iter()
                            .map(|e| return e.get_name().to_string())
                            .collect::<Vec<String>>();
                    }

                    if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        if !possible_values.is_empty()
                            && !possible_values.contains(&val_str.to_string())
                        {
                            bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                        }
                        Config::set(key, val_str);
                    } else {
                        bail!(format!(
                            "config.toml has an invalid value for key '{key}', expected a string"
                        ));
                    }
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            recommender = Config::get(ConfigKey::Recommender),
            rag_url = Config::get(ConfigKey::RagURL),
            rag_question = Config::get(ConfigKey::RagQuestion),
            seed = Config::get(ConfigKey::Seed),
            transcript_dir = Config::get(ConfigKey::TranscriptDir),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                if !arg.get_possible_values().is_empty() {
                    let possible_values = arg
                        .get_possible_values()
                        .iter()
                        .map(|e| return e.get_name())
                        .collect::<Vec<_>>()
                        .join(", ");
                    description = format!("{description} [possible values: {}]", possible_values);
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else {
                    val = format!("{key} = \"{}\"", val.replace('\\', "\\\\"));
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}

/// Where the debug log lands unless `DUOLOGUE_LOG_DIR` says otherwise.
pub fn log_dir() -> String {
    return env::var("DUOLOGUE_LOG_DIR").unwrap_or_else(|_| {
        return app_dir("cache")
            .map(|dir| return dir.to_string_lossy().to_string())
            .unwrap_or_else(|_| return ".".to_string());
    });
}
