//! Shared constants for the vidshare server and client.

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8787;

/// Default maximum upload size in megabytes (MiB)
pub const DEFAULT_MAX_UPLOAD_SIZE_MB: u64 = 100;

/// Bytes per megabyte as used in size messages
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Multipart field carrying the uploaded file
pub const VIDEO_FIELD_NAME: &str = "video";

/// Required prefix of an upload's declared MIME type
pub const VIDEO_MIME_PREFIX: &str = "video/";

/// Key prefix under which uploads are stored
pub const VIDEO_KEY_PREFIX: &str = "videos/";

/// Extension used when the original filename has none
pub const DEFAULT_VIDEO_EXTENSION: &str = "mp4";

/// Length of the random base36 suffix in generated keys
pub const KEY_RANDOM_SUFFIX_LEN: usize = 6;

/// MIME types advertised by `/api/config`
pub const ADVERTISED_VIDEO_TYPES: [&str; 4] =
    ["video/mp4", "video/webm", "video/ogg", "video/quicktime"];

/// Feature list advertised by `/api/config`
pub const ADVERTISED_FEATURES: [&str; 3] =
    ["Object Storage Uploads", "Ad Overlay Integration", "JSON API"];

pub const DEFAULT_AD_LINK: &str = "https://www.adsterra.com";

/// Public domain for R2-style public bucket URLs
pub const DEFAULT_PUBLIC_DOMAIN: &str = "r2.dev";

pub const DEFAULT_S3_REGION: &str = "auto";

pub const DEFAULT_STATIC_DIR: &str = "public";

pub const HEALTH_MESSAGE: &str = "vidshare video upload API is running";

pub const PLATFORM: &str = "vidshare (axum + object storage)";

/// Default API base URL used by the client
pub const DEFAULT_API_URL: &str = "http://localhost:8787";

/// Client request timeout in seconds
pub const CLIENT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Delay before the client resets to idle after a successful upload, in seconds
pub const CLIENT_RESET_DELAY_SECS: u64 = 3;

/// Progress simulator tick in milliseconds
pub const PROGRESS_TICK_MS: u64 = 200;

/// Largest increment the progress simulator adds per tick, in percent
pub const PROGRESS_MAX_STEP: f64 = 15.0;
