//! CLI subcommand handlers.

use crate::render::{render_analysis, render_plan};
use crate::{Commands, ConfigAction, Overrides};
use anyhow::Context;
use codementor_core::mentor::sample::{SAMPLE_CODE, SAMPLE_PROBLEM, demo_history, demo_skills};
use codementor_core::{HistoryEntry, Mentor, MentorConfig, Resolution, SkillMap};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Handle a CLI subcommand.
pub async fn handle_command(
    command: Commands,
    workspace: &Path,
    overrides: &Overrides,
) -> anyhow::Result<()> {
    match command {
        Commands::Analyze {
            file,
            problem,
            sample,
            json,
        } => handle_analyze(file, problem, sample, json, workspace, overrides).await,
        Commands::Plan {
            history,
            skills,
            demo,
            json,
        } => handle_plan(history, skills, demo, json, workspace, overrides).await,
        Commands::Config { action } => handle_config(action, workspace).await,
    }
}

fn load_effective_config(workspace: &Path, overrides: &Overrides) -> anyhow::Result<MentorConfig> {
    let mut config = codementor_core::config::load_config(Some(workspace), None)
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;
    if let Some(model) = &overrides.model {
        config.llm.model = model.clone();
    }
    if let Some(secs) = overrides.timeout_secs {
        config.resolver.request_timeout_secs = secs;
    }
    Ok(config)
}

fn build_mentor(config: &MentorConfig) -> anyhow::Result<Mentor> {
    let provider = codementor_core::create_provider(&config.llm)
        .context("Failed to create LLM provider")?;
    Ok(Mentor::with_config(provider, &config.resolver))
}

/// Tell the user on stderr which path produced the record.
fn report_outcome<T>(resolution: &Resolution<T>, model: &str) {
    match resolution.fallback_reason() {
        None => eprintln!("Generated by {}", model),
        Some(reason) => eprintln!("Offline fallback used ({})", reason),
    }
}

fn print_record<T: Serialize>(
    record: &T,
    json: bool,
    render: impl Fn(&T, bool) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        print!("{}", render(record, std::io::stdout().is_terminal()));
    }
    Ok(())
}

async fn read_code(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        None => anyhow::bail!("No code given: pass a FILE, `-` for stdin, or --sample"),
        Some(path) if path == Path::new("-") => {
            let mut code = String::new();
            tokio::io::stdin()
                .read_to_string(&mut code)
                .await
                .context("Failed to read code from stdin")?;
            Ok(code)
        }
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
    }
}

async fn handle_analyze(
    file: Option<PathBuf>,
    problem: Option<String>,
    sample: bool,
    json: bool,
    workspace: &Path,
    overrides: &Overrides,
) -> anyhow::Result<()> {
    let (code, problem) = if sample {
        (
            SAMPLE_CODE.to_string(),
            problem.or_else(|| Some(SAMPLE_PROBLEM.to_string())),
        )
    } else {
        (read_code(file.as_deref()).await?, problem)
    };

    if code.trim().is_empty() {
        anyhow::bail!("Nothing to analyze: the submitted code is empty");
    }

    let config = load_effective_config(workspace, overrides)?;
    let mentor = build_mentor(&config)?;

    let resolution = mentor.resolve_analysis(&code, problem.as_deref()).await;
    report_outcome(&resolution, mentor.model_name());
    print_record(resolution.value(), json, render_analysis)
}

async fn read_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Resolve plan inputs: explicit files win, `--demo` fills the rest.
async fn plan_inputs(
    history: Option<&Path>,
    skills: Option<&Path>,
    demo: bool,
) -> anyhow::Result<(Vec<HistoryEntry>, SkillMap)> {
    let history = match history {
        Some(path) => read_json_file(path).await?,
        None if demo => demo_history(),
        None => Vec::new(),
    };
    let skills = match skills {
        Some(path) => read_json_file(path).await?,
        None if demo => demo_skills(),
        None => SkillMap::new(),
    };
    Ok((history, skills))
}

async fn handle_plan(
    history: Option<PathBuf>,
    skills: Option<PathBuf>,
    demo: bool,
    json: bool,
    workspace: &Path,
    overrides: &Overrides,
) -> anyhow::Result<()> {
    let (history, skills) = plan_inputs(history.as_deref(), skills.as_deref(), demo).await?;

    let config = load_effective_config(workspace, overrides)?;
    let mentor = build_mentor(&config)?;

    let resolution = mentor.generate_learning_plan(&history, &skills).await;
    report_outcome(&resolution, mentor.model_name());
    print_record(resolution.value(), json, render_plan)
}

async fn handle_config(action: ConfigAction, workspace: &Path) -> anyhow::Result<()> {
    match action {
        ConfigAction::Init => {
            let config_dir = workspace.join(".codementor");
            std::fs::create_dir_all(&config_dir)?;

            let config_path = config_dir.join("config.toml");
            if config_path.exists() {
                println!(
                    "Configuration file already exists at: {}",
                    config_path.display()
                );
                return Ok(());
            }

            let default_config = MentorConfig::default();
            let toml_str = toml::to_string_pretty(&default_config)?;
            std::fs::write(&config_path, &toml_str)?;
            println!(
                "Created default configuration at: {}",
                config_path.display()
            );
            Ok(())
        }
        ConfigAction::Show => {
            let mut config = codementor_core::config::load_config(Some(workspace), None)
                .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
            if config.llm.api_key.is_some() {
                config.llm.api_key = Some("********".to_string());
            }
            let toml_str = toml::to_string_pretty(&config)?;
            println!("{}", toml_str);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_config_init_creates_file() {
        let dir = TempDir::new().unwrap();
        let workspace = dir.path();

        let command = Commands::Config {
            action: ConfigAction::Init,
        };
        handle_command(command, workspace, &Overrides::default())
            .await
            .unwrap();

        let config_path = workspace.join(".codementor").join("config.toml");
        assert!(config_path.exists());

        let content = std::fs::read_to_string(&config_path).unwrap();
        let parsed: MentorConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed.llm.model, "gemini-pro");
        assert_eq!(parsed.resolver.request_timeout_secs, 30);
    }

    #[tokio::test]
    async fn test_config_init_idempotent() {
        let dir = TempDir::new().unwrap();
        let workspace = dir.path();

        for _ in 0..2 {
            let command = Commands::Config {
                action: ConfigAction::Init,
            };
            handle_command(command, workspace, &Overrides::default())
                .await
                .unwrap();
        }

        let config_path = workspace.join(".codementor").join("config.toml");
        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("gemini-pro"));
    }

    #[tokio::test]
    async fn test_config_show_defaults() {
        let dir = TempDir::new().unwrap();
        let command = Commands::Config {
            action: ConfigAction::Show,
        };
        let result = handle_command(command, dir.path(), &Overrides::default()).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_overrides_applied() {
        let dir = TempDir::new().unwrap();
        let overrides = Overrides {
            model: Some("gemini-2.0-flash".to_string()),
            timeout_secs: Some(0),
        };
        let config = load_effective_config(dir.path(), &overrides).unwrap();
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert!(config.resolver.request_timeout().is_none());
    }

    #[tokio::test]
    async fn test_read_code_requires_input() {
        let err = read_code(None).await.unwrap_err();
        assert!(err.to_string().contains("--sample"));
    }

    #[tokio::test]
    async fn test_read_code_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("solution.py");
        std::fs::write(&path, "def f(x): return x\n").unwrap();
        assert_eq!(read_code(Some(&path)).await.unwrap(), "def f(x): return x\n");
    }

    #[tokio::test]
    async fn test_plan_inputs_demo_and_files() {
        let dir = TempDir::new().unwrap();
        let skills_path = dir.path().join("skills.json");
        std::fs::write(&skills_path, r#"{"Graphs": 20}"#).unwrap();

        let (history, skills) = plan_inputs(None, Some(&skills_path), true).await.unwrap();
        assert_eq!(history, demo_history());
        assert_eq!(skills.len(), 1);
        assert_eq!(skills.get("Graphs"), Some(&20));

        let (history, skills) = plan_inputs(None, None, false).await.unwrap();
        assert!(history.is_empty());
        assert!(skills.is_empty());
    }

    #[tokio::test]
    async fn test_plan_inputs_reject_bad_history() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, r#"{"problem": "Two Sum"}"#).unwrap();

        let err = plan_inputs(Some(&path), None, false).await.unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
    }
}
