use std::str::FromStr;

pub const DEFAULT_ORIGIN: &str = "https://techcrunch.com";
pub const PER_PAGE: u8 = 20;

const POSTS_PATH: &str = "/wp-json/wp/v2/posts";

/// What to show when the API answers with zero posts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyFeed {
    /// show "Results not found" as an error
    #[default]
    Fail,
    /// show an empty grid
    Show,
}

impl FromStr for EmptyFeed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" | "error" => Ok(EmptyFeed::Fail),
            "show" => Ok(EmptyFeed::Show),
            other => Err(format!("unknown empty feed policy {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    pub origin: String,
    pub per_page: u8,
    pub empty: EmptyFeed,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            origin: DEFAULT_ORIGIN.to_string(),
            per_page: PER_PAGE,
            empty: EmptyFeed::default(),
        }
    }
}

/// parse an optional setting or return the default value
fn parse_var<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

impl FeedConfig {
    /// Settings baked in at compile time through `POSTFEED_ORIGIN` and
    /// `POSTFEED_EMPTY`, there is no runtime configuration in the browser.
    pub fn from_build_env() -> Self {
        Self::from_vars(option_env!("POSTFEED_ORIGIN"), option_env!("POSTFEED_EMPTY"))
    }

    fn from_vars(origin: Option<&str>, empty: Option<&str>) -> Self {
        let defaults = FeedConfig::default();
        let origin = origin
            .map(|o| o.trim().trim_end_matches('/'))
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.origin);

        FeedConfig {
            origin,
            per_page: defaults.per_page,
            empty: parse_var(empty, defaults.empty),
        }
    }

    pub fn endpoint(&self) -> String {
        let mut endpoint = self.origin.trim_end_matches('/').to_string();
        endpoint.push_str(POSTS_PATH);

        endpoint
    }

    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("per_page", self.per_page.to_string()),
            ("context", "embed".to_string()),
        ]
    }

    pub fn url(&self) -> String {
        let query = self
            .query()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.endpoint(), query)
    }
}
