use log::Level;

/// Number of hearts drifting behind the card.
pub const HEART_COUNT: usize = 20;

/// Minimum distance in px between the runaway button and the viewport edge.
pub const EDGE_PADDING: f64 = 50.0;
/// Approximate rendered size of the "No" button in px.
pub const BUTTON_WIDTH: f64 = 150.0;
pub const BUTTON_HEIGHT: f64 = 60.0;

pub const BACKGROUND_IMAGE: &str =
    "https://static.wixstatic.com/media/469523_051bb0afd8ce46a9b958da6c217bdf16~mv2.jpg";
pub const SUCCESS_IMAGE: &str =
    "https://static.wixstatic.com/media/469523_c40c529f55854e9fa024d9dbc3bbbb70~mv2.jpg";

pub const FOOTER_TEXT: &str = "Made with ❤️ for you";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
