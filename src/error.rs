pub type GlimmerResult<T> = Result<T, GlimmerError>;

#[derive(thiserror::Error, Debug)]
pub enum GlimmerError {
    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlimmerError {
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            GlimmerError::invalid_color("x")
                .to_string()
                .contains("invalid color:")
        );
        assert!(
            GlimmerError::transport("x")
                .to_string()
                .contains("transport error:")
        );
        assert!(
            GlimmerError::config("x")
                .to_string()
                .contains("config error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = GlimmerError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
