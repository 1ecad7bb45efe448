// Remote listing and search
pub mod listing;

// Storage usage
pub mod storage;

// Public links
pub mod export;

// Downloads, uploads and imports
pub mod transfer;

// Current remote and local folders
pub mod nav;

// Login state
pub mod session;

// megactl's own configuration
pub mod config;
