use std::time::Duration;

pub const SINCE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S+00:00";

pub const API_DOMAIN: &str = "immedia-semi.com";
pub const LOGIN_ENDPOINT: &str = "https://rest-prod.immedia-semi.com/login";
pub const LOGIN_HOST: &str = "prod.immedia-semi.com";

/// Client identifier the vendor expects in the login body.
pub const CLIENT_SPECIFIER: &str = "iPhone 9.2 | 2.2 | 222";

pub const CHANGED_VIDEOS_PATH: &str = "/api/v2/videos/changed";

// The listing and download calls spell their auth header differently.
// The vendor expects exactly these spellings on each call.
pub const LISTING_AUTH_HEADER: &str = "TOKEN-AUTH";
pub const DOWNLOAD_AUTH_HEADER: &str = "TOKEN_AUTH";

pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_FILENAME: &str = "BlinkVideo.mp4";
pub const DEFAULT_CAMERA_NAME: &str = "Front Door";
pub const DEFAULT_GO_BACK_MINUTES: i64 = 3;
pub const DEFAULT_WAIT_TIMEOUT_SECS: i64 = 60;
