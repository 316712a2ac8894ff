use thiserror::Error;

/// Failures that stop the firmware before the executor takes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    #[error("static resource `{0}` was already initialized")]
    ResourceTaken(&'static str),

    #[error("could not spawn task `{0}`")]
    Spawn(&'static str),
}
