//! Social-preview metadata of the page.
//!
//! The page advertises how its link unfurls in chats through `og:` and
//! `twitter:` meta tags. These are collected for display next to the share
//! buttons so the user can see what the link preview will look like.

/// One `<meta property="..." content="...">` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub property: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialMeta {
    tags: Vec<MetaTag>,
}

const SOCIAL_PREFIXES: &[&str] = &["og:", "twitter:"];

impl SocialMeta {
    /// Keep social-preview properties in document order, dropping empty content.
    pub fn from_pairs<I, P, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        let tags = pairs
            .into_iter()
            .map(|(p, c)| MetaTag {
                property: p.into(),
                content: c.into(),
            })
            .filter(|tag| {
                !tag.content.trim().is_empty()
                    && SOCIAL_PREFIXES
                        .iter()
                        .any(|prefix| tag.property.starts_with(prefix))
            })
            .collect();
        Self { tags }
    }

    pub fn tags(&self) -> &[MetaTag] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// First value for `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.property == property)
            .map(|tag| tag.content.as_str())
    }

    /// `property: content` lines for display.
    pub fn display_lines(&self) -> Vec<String> {
        self.tags
            .iter()
            .map(|tag| format!("{}: {}", tag.property, tag.content))
            .collect()
    }
}
