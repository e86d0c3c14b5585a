pub type ArabesqueResult<T> = Result<T, ArabesqueError>;

#[derive(thiserror::Error, Debug)]
pub enum ArabesqueError {
    #[error("invalid spec: {0}")]
    InvalidSpec(String),
}

impl ArabesqueError {
    pub fn invalid_spec(msg: impl Into<String>) -> Self {
        Self::InvalidSpec(msg.into())
    }
}
