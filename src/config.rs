/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend used when `LPFC_API_URL` is not set at build time
    pub const DEFAULT_API_URL: &'static str = "http://localhost:8000";

    /// Rows shown in the division and enrollment tables
    pub const TABLE_ROW_LIMIT: usize = 20;

    /// Enrollments requested for the "Recent Enrollments" table
    pub const ENROLLMENT_FETCH_LIMIT: u32 = 50;

    /// Players requested for the leaderboard
    pub const LEADERBOARD_LIMIT: u32 = 50;

    /// Minimum height of the program enrollment chart in pixels
    pub const PROGRAM_CHART_MIN_HEIGHT: u32 = 500;

    /// Height added per program row in pixels
    pub const PROGRAM_CHART_ROW_HEIGHT: u32 = 45;

    /// Chart redraw delay after the last resize event (ms)
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Pre-built marketing document served next to the app bundle
    pub const MARKETING_ASSET: &'static str = "/LaPorte_FC_Marketing_Materials.html";

    /// Resolves the backend base URL.
    ///
    /// `LPFC_API_URL` is read at compile time, since the wasm bundle has no
    /// process environment at runtime.
    pub fn api_base_url() -> &'static str {
        match option_env!("LPFC_API_URL") {
            Some(url) if !url.trim().is_empty() => url,
            _ => Self::DEFAULT_API_URL,
        }
    }
}
