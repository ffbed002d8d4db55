use std::path::Path;
use vidshare_api_client::VideoEntry;

/// Fallback MIME type when the extension is unknown.
pub const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// Truncate a string to max_len characters, appending "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// MIME type inferred from the file extension.
pub fn guess_content_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(UNKNOWN_CONTENT_TYPE)
        .to_string()
}

/// Text progress bar, e.g. `[#####.....]  50%`.
pub fn render_progress(percent: f64, width: usize) -> String {
    let percent = percent.clamp(0.0, 100.0);
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        ".".repeat(width - filled),
        percent.round() as u64
    )
}

/// One line of the video listing: name, size and URL.
pub fn format_video_row(entry: &VideoEntry) -> String {
    format!(
        "{:<40} {:>10}  {}",
        truncate_string(entry.display_name(), 40),
        entry.size_label(),
        entry.url
    )
}

/// Initialize tracing for the CLI.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_string_short() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("", 5), "");
    }

    #[test]
    fn truncate_string_long() {
        assert_eq!(truncate_string("hello world", 8), "hello...");
        assert_eq!(truncate_string("abc", 2), "...");
    }

    #[test]
    fn guess_content_type_for_videos() {
        assert_eq!(guess_content_type(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(guess_content_type(Path::new("clip.MOV")), "video/quicktime");
        assert_eq!(guess_content_type(Path::new("clip.webm")), "video/webm");
        assert_eq!(guess_content_type(Path::new("notes")), UNKNOWN_CONTENT_TYPE);
    }

    #[test]
    fn render_progress_bounds() {
        assert_eq!(render_progress(0.0, 10), "[..........]   0%");
        assert_eq!(render_progress(50.0, 10), "[#####.....]  50%");
        assert_eq!(render_progress(140.0, 10), "[##########] 100%");
    }

    #[test]
    fn format_video_row_shows_name_and_size() {
        let entry = VideoEntry {
            key: "videos/1700000000000-abc123.mp4".into(),
            size: 13_107_200,
            uploaded: "2024-01-01T00:00:00Z".parse().unwrap(),
            url: "https://pub-test.r2.dev/videos/1700000000000-abc123.mp4".into(),
        };
        let row = format_video_row(&entry);
        assert!(row.starts_with("1700000000000-abc123.mp4"));
        assert!(row.contains("12.50 MB"));
        assert!(row.ends_with(&entry.url));
    }
}
