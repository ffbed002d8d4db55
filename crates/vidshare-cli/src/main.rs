//! vidshare CLI: command-line client for the vidshare API.
//!
//! Set VIDSHARE_API_URL (or API_URL) to point at the server.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use vidshare_api_client::{AdClick, ApiClient, SelectedFile, UploadController};
use vidshare_cli::{format_video_row, guess_content_type, init_tracing, render_progress};

const PROGRESS_BAR_WIDTH: usize = 30;

#[derive(Parser)]
#[command(name = "vidshare", about = "vidshare video upload CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a video file
    Upload {
        /// Path to the video file
        file: PathBuf,
        /// MIME type; inferred from the extension when omitted
        #[arg(long)]
        content_type: Option<String>,
    },
    /// List uploaded videos
    List {
        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },
    /// Check that the API is up
    Health,
    /// Show the public server configuration
    Config,
    /// Play a video URL to the end and show the ad overlay
    Watch {
        /// Public URL of the video
        url: String,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

async fn read_file(path: &Path, content_type: Option<String>) -> anyhow::Result<SelectedFile> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("video")
        .to_string();
    let content_type = content_type.unwrap_or_else(|| guess_content_type(path));
    Ok(SelectedFile::new(name, content_type, data))
}

async fn upload(client: ApiClient, path: &Path, content_type: Option<String>) -> anyhow::Result<()> {
    let mut controller = UploadController::connect(client)
        .await
        .context("Failed to load server configuration")?;

    let file = read_file(path, content_type).await?;
    if let Err(e) = controller.select_file(file) {
        anyhow::bail!(e.user_message());
    }
    if let Some(file) = controller.uploader().selected_file() {
        eprintln!(
            "Selected {} ({}, {})",
            file.name,
            file.size_label(),
            file.content_type
        );
    }

    let result = controller
        .submit(|percent| {
            eprint!("\r{}", render_progress(percent, PROGRESS_BAR_WIDTH));
            let _ = std::io::stderr().flush();
        })
        .await;
    eprintln!();

    let response = match result {
        Ok(response) => response,
        Err(e) => anyhow::bail!(e.user_message()),
    };
    if let Some(status) = controller.uploader().status() {
        eprintln!("{}", status.text);
    }
    print_json(&response)?;

    eprintln!("{} video(s) in the bucket", controller.videos().len());
    Ok(())
}

async fn watch(client: ApiClient, url: &str) -> anyhow::Result<()> {
    let mut controller = UploadController::connect(client)
        .await
        .context("Failed to load server configuration")?;

    println!("Playing {}", url);
    controller.playback_ended();
    println!("Playback finished. Sponsored content: {}", controller.ad().link());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while controller.ad().is_showing() {
        eprint!("[a] open ad  [c] close  [enter] click elsewhere > ");
        let _ = std::io::stderr().flush();

        let action = match lines.next_line().await? {
            Some(line) => line.trim().to_ascii_lowercase(),
            None => "c".to_string(),
        };
        let click = match action.as_str() {
            "c" => {
                controller.ad_mut().close();
                continue;
            }
            "a" => AdClick::Content,
            _ => AdClick::Outside,
        };
        if let Some(link) = controller.ad().click(click) {
            println!("Opening {}", link);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let client = ApiClient::from_env()
        .context("Failed to create API client. Set VIDSHARE_API_URL (or API_URL)")?;

    match cli.command {
        Commands::Upload { file, content_type } => {
            upload(client, &file, content_type).await?;
        }
        Commands::List { json } => {
            let response = client.list_videos().await?;
            if json {
                print_json(&response)?;
            } else if response.videos.is_empty() {
                println!("No videos yet");
            } else {
                for entry in &response.videos {
                    println!("{}", format_video_row(entry));
                }
                println!("{} video(s)", response.total);
            }
        }
        Commands::Health => {
            let response = client.health().await?;
            print_json(&response)?;
        }
        Commands::Config => {
            let response = client.config().await?;
            print_json(&response)?;
        }
        Commands::Watch { url } => {
            watch(client, &url).await?;
        }
    }

    Ok(())
}
