use log::Level;

/// Vertical offset past which the navigation bar switches to its compact form.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Fraction of a block that has to be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Pulls the bottom edge of the trigger zone up so reveals start a bit early.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const REVEAL_DURATION_MS: u32 = 1000;

/// Downward offset of a block that has not been revealed yet (12 spacing units).
pub const REVEAL_OFFSET: &str = "3rem";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Local imagery is served by trunk from the `assets/` directory.
pub fn asset(file: &str) -> String {
    format!("/assets/{}", file)
}
