use thiserror::Error;

#[derive(Error, Debug)]
pub enum TmError {
    #[error("Empty sequence")]
    EmptySequence,

    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { position: usize, symbol: char },

    #[error("Window must contain at least one base")]
    EmptyWindow,

    #[error("Na+ concentration must be greater than 0, got {0}")]
    InvalidConcentration(f64),

    #[error("Series is empty, no windows to compute statistics over")]
    EmptyInput,

    #[error("Window size must be greater than 0")]
    InvalidWindowSize,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TmError>;
