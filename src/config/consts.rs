// src/config/consts.rs

// Capture
pub const TARGET_HOST: &str = "iseek";
pub const XHR_RESOURCE_TYPE: &str = "XHR";
pub const RESPONSE_RECEIVED: &str = "Network.responseReceived";

// Local state
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const INFO_SUFFIX: &str = "-info";
pub const EXPORT_EXT: &str = "csv";

// GUI
pub const APP_TITLE: &str = "iSeek Export";
pub const ICON_PATH: &str = "assets/icon.png";
