// src/config/consts.rs

// Net config
pub const LISTING_URL: &str = "https://cset.georgetown.edu/team";
pub const USER_AGENT: &str = concat!("staff_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;

// Page markup
pub const STAFF_LINK_CLASS: &str = "staff__link";
pub const TITLE_BLOCK_CLASS: &str = "staff-title";
pub const TITLE_CONTENT_CLASS: &str = "staff-title__content";
pub const TITLE_PHOTO_CLASS: &str = "staff-title__photo";
pub const BIOGRAPHY_CLASS: &str = "post-content";

// Export
pub const DEFAULT_OUTPUT_FILENAME: &str = "CSET_Staff.csv";
pub const OUTPUT_EXT: &str = "csv";
pub const CSV_HEADERS: [&str; 5] = ["Name", "Title", "Team(s)", "Biography", "Photo Link"];
pub const TEAM_JOIN: &str = "; ";
