use serde::Deserialize;

/// One node of the Hacker News item tree, as served by `/item/{id}.json`.
///
/// Stories carry a `title`; comments carry `text` (already HTML). Deleted or
/// flagged comments usually come back without `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub kids: Vec<u64>,
    /// Creation time, seconds since the Unix epoch.
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub by: Option<String>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub dead: bool,
}

impl Item {
    /// Comment body, or `""` when the API omitted it.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_without_text_deserializes() {
        let item: Item =
            serde_json::from_str(r#"{"id": 42, "deleted": true, "time": 1700000000}"#).unwrap();
        assert_eq!(item.id, 42);
        assert!(item.deleted);
        assert_eq!(item.text(), "");
        assert!(item.kids.is_empty());
    }

    #[test]
    fn story_keeps_kid_order() {
        let item: Item = serde_json::from_str(
            r#"{"id": 1, "title": "Ask HN: Who is hiring? (March 2024)", "kids": [9, 3, 7], "time": 1, "type": "story"}"#,
        )
        .unwrap();
        assert_eq!(item.kids, vec![9, 3, 7]);
        assert_eq!(item.title.as_deref(), Some("Ask HN: Who is hiring? (March 2024)"));
    }
}
