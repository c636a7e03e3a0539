mod config;
mod error;
mod state;
mod types;

pub use config::{EmptyFeed, FeedConfig, DEFAULT_ORIGIN, PER_PAGE};
pub use error::{FetchError, Result};
pub use state::ViewState;
pub use types::{Author, Embedded, Post, PostId, Rendered};
