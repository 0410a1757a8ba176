use thiserror::Error;

use crate::content::ContentError;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("invalid site content: {0}")]
    Content(#[from] ContentError),
    #[error("couldn't load leptos configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::from(ContentError::EmptyField("profile name"));
        assert_eq!(
            err.to_string(),
            "invalid site content: profile name must not be empty"
        );

        let err = SiteError::Config("missing site-root".to_string());
        assert_eq!(
            err.to_string(),
            "couldn't load leptos configuration: missing site-root"
        );
    }
}
