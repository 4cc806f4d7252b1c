use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("string contains an interior NUL: {0:?}")]
    InvalidString(String),

    #[error("failed to register window class {name:?} (os error {code})")]
    RegisterClass { name: String, code: u32 },

    #[error("failed to create window {title:?} (os error {code})")]
    CreateWindow { title: String, code: u32 },

    #[error("message retrieval failed (os error {code})")]
    GetMessage { code: u32 },

    #[cfg(windows)]
    #[error("windows API error: {0}")]
    Windows(#[from] windows::core::Error),

    #[error("native windows are only available on Windows")]
    Unsupported,
}
