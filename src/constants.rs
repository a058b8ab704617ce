/// Slot keys of the first conference day start with this prefix; every other
/// key belongs to the second day.
pub const DAY_ONE_PREFIX: &str = "day-1";

// Calendar dates of the two conference days (year, month, day)
pub const DAY_ONE_DATE: (i32, u32, u32) = (2022, 10, 19);
pub const DAY_TWO_DATE: (i32, u32, u32) = (2022, 10, 20);

// Third-party surfaces linked from a session page
pub const OPENFEEDBACK_BASE_URL: &str = "https://openfeedback.io";
pub const OPENFEEDBACK_QUERY: &str = "hideHeader=true&forceColorScheme=dark";
pub const DEFAULT_OPENFEEDBACK_PROJECT: &str = "p32EOIbP5bj4WDdz8bJs";
pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch";
pub const DEFAULT_YOUTUBE_PLAYLIST: &str = "PLuZ_sYdawLiUHU4E1i5RrFsRN_lQcgPwT";

// Site layout
pub const SPEAKERS_PATH_PREFIX: &str = "/speakers/";
pub const SESSIONS_DIR: &str = "sessions";
pub const PAGE_FILE_NAME: &str = "index.html";
pub const STATIC_DIR: &str = "static";
pub const STYLESHEET_FILE_NAME: &str = "session.css";

// Configuration sources
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_SESSIONS_PATH: &str = "data/sessions.json";
pub const DEFAULT_SLOTS_PATH: &str = "data/slots.json";
pub const DEFAULT_SPEAKERS_PATH: &str = "data/speakers.yaml";
pub const DEFAULT_OUTPUT_DIR: &str = "public";
pub const ENV_LOCALE: &str = "CONF_SITE_LOCALE";
pub const ENV_OUTPUT_DIR: &str = "CONF_SITE_OUTPUT_DIR";
