use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick rate must be between 1 and {max} Hz, got {got}")]
    TickRate { got: u32, max: u32 },

    #[error("hold window must be at least one tick")]
    HoldWindow,
}
