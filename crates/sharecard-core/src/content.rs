//! The editable text of the shareable content.

/// Header and body text of the content that gets rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareableContent {
    pub header: String,
    pub body: String,
}

/// Answers to the two customize prompts. `None` means the prompt was cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentEdit {
    pub header: Option<String>,
    pub body: Option<String>,
}

impl ShareableContent {
    pub fn new(header: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
        }
    }

    /// Apply prompt answers. Empty or cancelled answers leave their field alone.
    ///
    /// Returns true if any field was replaced.
    pub fn apply(&mut self, edit: ContentEdit) -> bool {
        let mut changed = false;
        if let Some(header) = edit.header.filter(|s| !s.is_empty()) {
            self.header = header;
            changed = true;
        }
        if let Some(body) = edit.body.filter(|s| !s.is_empty()) {
            self.body = body;
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_both() {
        let mut content = ShareableContent::new("Hello", "World");
        let changed = content.apply(ContentEdit {
            header: Some("Hi".into()),
            body: Some("There".into()),
        });
        assert!(changed);
        assert_eq!(content, ShareableContent::new("Hi", "There"));
    }

    #[test]
    fn test_cancelled_and_empty_prompts_keep_fields() {
        let mut content = ShareableContent::new("Hello", "World");
        assert!(!content.apply(ContentEdit {
            header: None,
            body: Some(String::new()),
        }));
        assert_eq!(content, ShareableContent::new("Hello", "World"));
    }

    #[test]
    fn test_fields_independent() {
        let mut content = ShareableContent::new("Hello", "World");
        assert!(content.apply(ContentEdit {
            header: Some(String::new()),
            body: Some("Body only".into()),
        }));
        assert_eq!(content.header, "Hello");
        assert_eq!(content.body, "Body only");
    }
}
