pub const TITLE: &str = " url_preview ";
pub const INPUT_TITLE: &str = " URL ";
pub const STATUS_TITLE: &str = " Status ";
pub const RESPONSE_TITLE: &str = " Response ";
/// Event poll interval for the main loop.
pub const TICK_INTERVAL_MS: u64 = 50;
/// Lines moved by PageUp/PageDown.
pub const PAGE_SIZE: u16 = 10;
