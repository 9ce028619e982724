// Every variant states *where* things went wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String),
    #[error("window update error: {0}")]
    WindowUpdate(String),
    #[error("frame source error: {0}")]
    FrameSource(String),
    #[error("frame is {got_width}x{got_height}, expected {want_width}x{want_height}")]
    FrameDimensions {
        got_width: u32,
        got_height: u32,
        want_width: u32,
        want_height: u32,
    },
}
