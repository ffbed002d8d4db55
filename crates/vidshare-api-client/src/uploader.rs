//! Upload flow state machine.
//!
//! One transition method per event. Rejected events leave the state untouched
//! and record a status message for display.

use crate::error::ClientError;
use bytes::Bytes;
use vidshare_core::constants::{BYTES_PER_MB, VIDEO_MIME_PREFIX};
use vidshare_core::models::{format_megabytes, UploadResponse};

/// A file picked by the user, held in memory until submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// "12.50 MB"
    pub fn size_label(&self) -> String {
        format!("{} MB", format_megabytes(self.size()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    FileSelected,
    Uploading,
    Success { url: String },
    Playing { url: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug)]
pub struct Uploader {
    state: UploadState,
    file: Option<SelectedFile>,
    max_size_bytes: u64,
    status: Option<StatusMessage>,
}

impl Uploader {
    pub fn new(max_size_bytes: u64) -> Self {
        Self {
            state: UploadState::Idle,
            file: None,
            max_size_bytes,
            status: None,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    /// Submit is enabled only with a file selected and nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.state == UploadState::FileSelected
    }

    /// File picked or dropped.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<(), ClientError> {
        if self.state == UploadState::Uploading {
            return Err(self.reject("An upload is already in progress".to_string()));
        }

        if !file
            .content_type
            .trim()
            .to_ascii_lowercase()
            .starts_with(VIDEO_MIME_PREFIX)
        {
            return Err(self.reject("Please choose a video file (MP4, WebM, MOV, etc.)".to_string()));
        }

        if file.size() > self.max_size_bytes {
            return Err(self.reject(format!(
                "File too large. Maximum is {}MB",
                self.max_size_bytes / BYTES_PER_MB
            )));
        }

        tracing::debug!(file_name = %file.name, size = file.size(), "File selected");
        self.file = Some(file);
        self.state = UploadState::FileSelected;
        self.status = None;
        Ok(())
    }

    fn reject(&mut self, message: String) -> ClientError {
        self.status = Some(StatusMessage::error(message.clone()));
        ClientError::InvalidFile(message)
    }

    /// Submit pressed. Returns the file to send, or `None` when submission is
    /// not allowed in the current state.
    pub fn begin_upload(&mut self) -> Option<SelectedFile> {
        if !self.can_submit() {
            return None;
        }
        let file = self.file.clone()?;
        self.state = UploadState::Uploading;
        self.status = None;
        Some(file)
    }

    /// Server accepted the upload.
    pub fn upload_succeeded(&mut self, response: &UploadResponse) -> bool {
        if self.state != UploadState::Uploading {
            return false;
        }
        self.state = UploadState::Success {
            url: response.url.clone(),
        };
        self.status = Some(StatusMessage::success(format!(
            "Video uploaded! URL: {}",
            response.url
        )));
        true
    }

    /// Request failed; the file stays selected so the user can retry.
    pub fn upload_failed(&mut self, error: &ClientError) -> bool {
        if self.state != UploadState::Uploading {
            return false;
        }
        self.state = if self.file.is_some() {
            UploadState::FileSelected
        } else {
            UploadState::Idle
        };
        self.status = Some(StatusMessage::error(error.user_message()));
        true
    }

    /// Switch from the success view to the player.
    pub fn start_playback(&mut self) -> bool {
        match &self.state {
            UploadState::Success { url } => {
                self.state = UploadState::Playing { url: url.clone() };
                true
            }
            _ => false,
        }
    }

    /// Clear the form after a completed upload.
    pub fn reset(&mut self) -> bool {
        if self.state == UploadState::Uploading {
            return false;
        }
        self.state = UploadState::Idle;
        self.file = None;
        true
    }
}
