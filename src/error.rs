use std::path::PathBuf;

/// Errors returned when a move cannot be applied to the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range")]
    InvalidColumn { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised by the move selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no open column on a board that is not terminal")]
    NoOpenColumns,
}

/// Reasons a typed column (1-indexed) is refused by the console frontend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid input. Please enter a number between 1 and {max}.")]
    NotANumber { max: usize },

    #[error("Column out of bounds. Please choose between 1 and {max}.")]
    OutOfRange { max: usize },

    #[error("Column {column} is full. Please choose another column.")]
    ColumnFull { column: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
