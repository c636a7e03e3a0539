use serde::{Deserialize, Deserializer};

pub type PostId = u64;

/// A WordPress rich-text field, e.g. `{ "rendered": "<p>Hello</p>" }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

impl From<&str> for Rendered {
    fn from(rendered: &str) -> Self {
        Rendered {
            rendered: rendered.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Author {
    pub name: Option<String>,
}

impl Author {
    pub fn named(name: impl Into<String>) -> Self {
        Author {
            name: Some(name.into()),
        }
    }
}

/// Related objects inlined by the `embed` context
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Embedded {
    pub author: Option<Vec<Author>>,
}

/// A post as returned by `/wp-json/wp/v2/posts?context=embed`.
///
/// Only `id` is required; everything else is decoded leniently so a
/// partially filled post still renders.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub title: Option<Rendered>,
    #[serde(default)]
    pub excerpt: Option<Rendered>,
    #[serde(default, deserialize_with = "non_empty")]
    pub link: Option<String>,
    #[serde(
        default,
        rename = "featured_media_src_url",
        deserialize_with = "non_empty"
    )]
    pub featured_media_url: Option<String>,
    #[serde(default, rename = "_embedded")]
    pub embedded: Option<Embedded>,
}

impl Post {
    pub fn new(id: PostId) -> Self {
        Post {
            id,
            title: None,
            excerpt: None,
            link: None,
            featured_media_url: None,
            embedded: None,
        }
    }

    pub fn title_html(&self) -> &str {
        self.title.as_ref().map_or("", |t| t.rendered.as_str())
    }

    pub fn excerpt_html(&self) -> &str {
        self.excerpt.as_ref().map_or("", |e| e.rendered.as_str())
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.featured_media_url.as_deref()
    }

    /// name of the first embedded author, if it has one
    pub fn author_name(&self) -> Option<&str> {
        self.embedded
            .as_ref()?
            .author
            .as_ref()?
            .first()?
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

/// WordPress sends `""` instead of `null` for missing URLs
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}
