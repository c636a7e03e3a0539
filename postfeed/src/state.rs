use crate::{config::EmptyFeed, error::FetchError, types::Post};

/// Everything the feed view can show, exactly one at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Failed(FetchError),
    Loaded(Vec<Post>),
}

impl ViewState {
    /// Apply the outcome of the fetch, returns whether the state changed.
    ///
    /// Only the first outcome counts, a settled state never changes again.
    pub fn settle(&mut self, result: Result<Vec<Post>, FetchError>, empty: EmptyFeed) -> bool {
        if !self.is_loading() {
            return false;
        }

        *self = match result {
            Ok(posts) if posts.is_empty() && empty == EmptyFeed::Fail => {
                ViewState::Failed(FetchError::Empty)
            }
            Ok(posts) => ViewState::Loaded(posts),
            Err(e) => ViewState::Failed(e),
        };

        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            ViewState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn posts(&self) -> &[Post] {
        match self {
            ViewState::Loaded(posts) => posts,
            _ => &[],
        }
    }
}
