mod config;

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use opsmith_core::{Complexity, GeneratedPlaybook, GenerationRequest, OpsmithError, Structure};
use opsmith_extract::extract_tasks;
use opsmith_gen::{generate_playbook, GeminiBackend, MockBackend, TextBackend};
use tracing::info;

use crate::config::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Extract { description } => {
            let tasks = extract_tasks(&description);
            info!(tasks = tasks.len(), "extraction finished");
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        Command::Assemble {
            description,
            complexity,
            structure,
            output_dir,
        } => {
            let req = build_request(description, &complexity, &structure)?;
            let playbook = opsmith_assemble::assemble(&req);
            match output_dir {
                Some(dir) => write_playbook(&playbook, &dir)?,
                None => print_playbook(&playbook),
            }
        }
        Command::Generate {
            description,
            complexity,
            structure,
            mock,
        } => {
            let req = build_request(description, &complexity, &structure)?;
            let backend: Box<dyn TextBackend> = if mock {
                Box::new(MockBackend::success(&mock_reply(&req)))
            } else {
                let key = cli
                    .api_key
                    .clone()
                    .ok_or_else(|| anyhow!("GEMINI_API_KEY is not configured"))?;
                Box::new(GeminiBackend::with_model(key, &cli.model))
            };
            backend.preflight_check().await?;
            let playbook = generate_playbook(backend.as_ref(), &req)
                .await
                .context("failed to generate playbook, please try again")?;
            print_playbook(&playbook);
        }
    }
    Ok(())
}

fn build_request(
    description: String,
    complexity: &str,
    structure: &str,
) -> Result<GenerationRequest> {
    let complexity = Complexity::from_str(complexity)
        .ok_or_else(|| OpsmithError::InvalidInput(format!("unknown complexity: {complexity}")))?;
    let structure = Structure::from_str(structure)
        .ok_or_else(|| OpsmithError::InvalidInput(format!("unknown structure: {structure}")))?;
    let tasks = extract_tasks(&description);
    info!(tasks = tasks.len(), "extracted tasks from description");
    Ok(GenerationRequest {
        description,
        tasks,
        complexity,
        structure,
    })
}

/// Offline stand-in for the remote service: answer with a locally
/// assembled playbook in the shape the pipeline expects back.
fn mock_reply(req: &GenerationRequest) -> String {
    match req.structure {
        Structure::Single => opsmith_assemble::assemble_single(req),
        Structure::Multi => {
            let doc = opsmith_assemble::assemble_single(req);
            format!(
                "# site.yml\n---\n- import_playbook: roles/main/tasks/main.yml\n\
                 # group_vars/all.yml\n---\n# no shared variables\n\
                 # roles/main/tasks/main.yml\n{doc}"
            )
        }
    }
}

/// Print a playbook to stdout; multi-file results use the same `# <path>`
/// marker convention the response parser consumes.
fn print_playbook(playbook: &GeneratedPlaybook) {
    match playbook {
        GeneratedPlaybook::Single(content) => println!("{content}"),
        GeneratedPlaybook::Multi(files) => {
            for (path, content) in files.iter() {
                println!("# {path}");
                println!("{content}");
            }
        }
    }
}

/// Write a playbook into a directory: one `playbook.yml` for a single
/// document, one file per entry (parents created) for a multi-file result.
fn write_playbook(playbook: &GeneratedPlaybook, dir: &Path) -> Result<()> {
    match playbook {
        GeneratedPlaybook::Single(content) => write_file(&dir.join("playbook.yml"), content),
        GeneratedPlaybook::Multi(files) => {
            for (path, content) in files.iter() {
                write_file(&dir.join(path), content)?;
            }
            Ok(())
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("write {}", path.display()))
}
