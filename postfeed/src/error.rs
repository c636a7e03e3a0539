pub type Result<T> = std::result::Result<T, FetchError>;

/// Why the feed could not be shown.
///
/// The `Display` output is the message the view puts after its `Error: `
/// prefix.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// the server answered with a status outside of 2xx
    #[error("{}", status_line(.code, .text))]
    Status { code: u16, text: String },
    /// the request went out but no response came back
    #[error("Network issue. Please try again later.")]
    Network,
    /// the request could not be constructed
    #[error("{0}")]
    Request(String),
    /// the response body is not a list of posts
    #[error("{0}")]
    Decode(String),
    #[error("Results not found")]
    Empty,
}

impl FetchError {
    pub fn status(code: u16, text: impl Into<String>) -> Self {
        FetchError::Status {
            code,
            text: text.into(),
        }
    }
}

fn status_line(code: &u16, text: &str) -> String {
    // HTTP/2 responses carry no reason phrase
    match (*code, text.trim()) {
        (404, _) => "404 Not Found".to_string(),
        (code, "") => code.to_string(),
        (code, text) => format!("{code} {text}"),
    }
}
