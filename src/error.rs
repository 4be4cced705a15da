pub type ScrollaxResult<T> = Result<T, ScrollaxError>;

#[derive(thiserror::Error, Debug)]
pub enum ScrollaxError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("no elements match selector `{0}`")]
    NoTargets(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollaxError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn no_targets(selector: impl Into<String>) -> Self {
        Self::NoTargets(selector.into())
    }
}
