use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no bbs color code found")]
    NoCodeFound,
    #[error("ansi escape code found")]
    AnsiFound,
    #[error("{0} is not a bbs color code format")]
    InvalidFormat(i32),
    #[error("read or write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
