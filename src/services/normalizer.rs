use crate::{
    models::{
        ContentId, RecommendationEntry, RecommendationList, RecommendationMap, SourceKind,
        MAX_RECOMMENDATIONS,
    },
    services::parser::Row,
};

/// Header names accepted for the identifier column, checked in this order
pub const CONTENT_ID_ALIASES: [&str; 3] = ["content_id", "contentId", "itemId"];

/// Name of the positional column holding the rank-`position` identifier (1-based)
pub fn recommendation_column(position: usize) -> String {
    format!("Recommendation {}", position)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// The row's identifier under the first alias that holds a non-blank value
pub fn content_id_of(row: &Row) -> Option<ContentId> {
    CONTENT_ID_ALIASES
        .iter()
        .find_map(|alias| non_blank(row.get(alias)))
        .map(ContentId::from)
}

/// Converts one row into its identifier and ranked list
///
/// Rows without an identifier yield `None`. Each entry is scored by the column it was
/// read from, so gaps in the row keep the remaining entries' original scores.
pub fn normalize_row(row: &Row, kind: SourceKind) -> Option<(ContentId, RecommendationList)> {
    let content_id = content_id_of(row)?;

    let list = (1..=MAX_RECOMMENDATIONS)
        .filter_map(|position| {
            let column = recommendation_column(position);
            let recommended = non_blank(row.get(&column))?;
            let score = kind.score_for(position)?;
            Some(RecommendationEntry::new(recommended, score))
        })
        .collect();

    Some((content_id, list))
}

/// Normalizes every row of one source; a later row replaces an earlier one with the same id
pub fn normalize_rows(rows: &[Row], kind: SourceKind) -> RecommendationMap {
    let mut map = RecommendationMap::new();
    let mut skipped = 0usize;

    for row in rows {
        match normalize_row(row, kind) {
            Some((content_id, list)) => {
                map.insert(content_id, list);
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(source = %kind, skipped, "Rows without a content id skipped");
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row(id: &str) -> Row {
        Row::new([
            ("content_id", id),
            ("Recommendation 1", "a"),
            ("Recommendation 2", "b"),
            ("Recommendation 3", "c"),
            ("Recommendation 4", "d"),
            ("Recommendation 5", "e"),
        ])
    }

    fn pairs(list: &RecommendationList) -> Vec<(&str, f64)> {
        list.iter().map(|e| (e.content_id.as_str(), e.score)).collect()
    }

    #[test]
    fn test_collaborative_row() {
        let (id, list) = normalize_row(&full_row("x"), SourceKind::Collaborative).unwrap();
        assert_eq!(id, ContentId::from("x"));
        assert_eq!(
            pairs(&list),
            vec![("a", 5.0), ("b", 4.8), ("c", 4.6), ("d", 4.4), ("e", 4.2)]
        );
    }

    #[test]
    fn test_content_based_row() {
        let (_, list) = normalize_row(&full_row("x"), SourceKind::ContentBased).unwrap();
        assert_eq!(
            pairs(&list),
            vec![("a", 0.95), ("b", 0.90), ("c", 0.85), ("d", 0.80), ("e", 0.75)]
        );
    }

    #[test]
    fn test_blank_id_is_skipped() {
        assert!(normalize_row(&full_row(""), SourceKind::Collaborative).is_none());
        assert!(normalize_row(&full_row("   "), SourceKind::Collaborative).is_none());

        let map = normalize_rows(&[full_row(""), full_row("y")], SourceKind::Collaborative);
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("y"));
    }

    #[test]
    fn test_gaps_keep_column_scores() {
        let row = Row::new([
            ("content_id", "x"),
            ("Recommendation 1", "a"),
            ("Recommendation 2", ""),
            ("Recommendation 3", "c"),
            ("Recommendation 4", ""),
            ("Recommendation 5", ""),
        ]);

        let (_, list) = normalize_row(&row, SourceKind::Collaborative).unwrap();
        assert_eq!(pairs(&list), vec![("a", 5.0), ("c", 4.6)]);
    }

    #[test]
    fn test_missing_columns_shorten_list() {
        let row = Row::new([("content_id", "x"), ("Recommendation 1", "a")]);
        let (_, list) = normalize_row(&row, SourceKind::ContentBased).unwrap();
        assert_eq!(pairs(&list), vec![("a", 0.95)]);
    }

    #[test]
    fn test_alias_priority() {
        let row = Row::new([("itemId", "from-item"), ("contentId", "from-content")]);
        assert_eq!(content_id_of(&row), Some(ContentId::from("from-content")));

        let row = Row::new([("content_id", ""), ("itemId", "fallback")]);
        assert_eq!(content_id_of(&row), Some(ContentId::from("fallback")));

        let row = Row::new([("id", "unknown-alias")]);
        assert_eq!(content_id_of(&row), None);
    }

    #[test]
    fn test_later_row_replaces_earlier() {
        let second = Row::new([("content_id", "x"), ("Recommendation 1", "z")]);
        let map = normalize_rows(&[full_row("x"), second], SourceKind::Collaborative);

        assert_eq!(map.len(), 1);
        assert_eq!(pairs(&map["x"]), vec![("z", 5.0)]);
    }
}
