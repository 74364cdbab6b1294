#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("data pointer is null but length is {len}")]
    NullData { len: usize },
    #[error("no nul terminator in {len} bytes")]
    MissingNulTerminator { len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
