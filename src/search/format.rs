// Context block assembly for search results
//
// Each qualifying document contributes one fragment:
//     SOURCE <i>: <title>\nLINK: <link>\nTEXT: <snippet>\n\n
// Numbering follows the result position, so skipped documents leave gaps.

use super::{SearchResponse, SearchResult};

const STORAGE_SCHEME: &str = "gs://";
const BROWSER_PREFIX: &str = "https://storage.cloud.google.com/";

/// Rewrite a bucket URI to its browser-accessible HTTPS form
///
/// The first `gs://` in the link is replaced, once. Links without any
/// `gs://` (already HTTPS, empty, other schemes) pass through unchanged.
pub fn rewrite_storage_link(link: &str) -> String {
    link.replacen(STORAGE_SCHEME, BROWSER_PREFIX, 1)
}

/// Build the context block, or `None` when no document has a snippet
pub fn format_context(response: &SearchResponse) -> Option<String> {
    let context: String = response
        .results
        .iter()
        .enumerate()
        .filter_map(|(idx, result)| format_fragment(idx + 1, result))
        .collect();

    if context.is_empty() {
        None
    } else {
        Some(context)
    }
}

fn format_fragment(position: usize, result: &SearchResult) -> Option<String> {
    let data = &result.document.derived_struct_data;

    let first = data.snippets.as_ref()?.first()?;

    let title = data
        .title
        .clone()
        .unwrap_or_else(|| format!("Document {}", position));
    let link = rewrite_storage_link(data.link.as_deref().unwrap_or_default());
    let text = first.snippet.as_deref().unwrap_or_default().replace('\n', " ");

    Some(format!(
        "SOURCE {}: {}\nLINK: {}\nTEXT: {}\n\n",
        position, title, link, text
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{DerivedData, Document, Snippet};

    fn result(title: Option<&str>, link: Option<&str>, snippets: Option<Vec<&str>>) -> SearchResult {
        SearchResult {
            id: None,
            document: Document {
                name: None,
                id: None,
                derived_struct_data: DerivedData {
                    title: title.map(str::to_string),
                    link: link.map(str::to_string),
                    snippets: snippets.map(|items| {
                        items
                            .into_iter()
                            .map(|s| Snippet {
                                snippet: Some(s.to_string()),
                                snippet_status: None,
                            })
                            .collect()
                    }),
                },
            },
        }
    }

    #[test]
    fn test_rewrite_storage_link() {
        assert_eq!(
            rewrite_storage_link("gs://bucket/obj"),
            "https://storage.cloud.google.com/bucket/obj"
        );
    }

    #[test]
    fn test_rewrite_only_first_occurrence() {
        assert_eq!(
            rewrite_storage_link("gs://bucket/mirror/gs://copy.pdf"),
            "https://storage.cloud.google.com/bucket/mirror/gs://copy.pdf"
        );
    }

    #[test]
    fn test_rewrite_passes_through_other_links() {
        assert_eq!(rewrite_storage_link(""), "");
        assert_eq!(
            rewrite_storage_link("https://example.com/a.pdf"),
            "https://example.com/a.pdf"
        );
        assert_eq!(rewrite_storage_link("s3://bucket/a.pdf"), "s3://bucket/a.pdf");
    }

    #[test]
    fn test_rewrite_first_occurrence_anywhere() {
        assert_eq!(
            rewrite_storage_link("see gs://b/o"),
            "see https://storage.cloud.google.com/b/o"
        );
        assert_eq!(
            rewrite_storage_link("see gs://b/o and gs://c/p"),
            "see https://storage.cloud.google.com/b/o and gs://c/p"
        );
    }

    #[test]
    fn test_two_documents_in_order() {
        let response = SearchResponse {
            results: vec![
                result(Some("Catalog A"), Some("gs://docs/a.pdf"), Some(vec!["alpha"])),
                result(Some("Drawing B"), Some("gs://docs/b.pdf"), Some(vec!["beta"])),
            ],
            total_size: Some(2),
        };

        let context = format_context(&response).unwrap();
        assert_eq!(
            context,
            "SOURCE 1: Catalog A\nLINK: https://storage.cloud.google.com/docs/a.pdf\nTEXT: alpha\n\n\
             SOURCE 2: Drawing B\nLINK: https://storage.cloud.google.com/docs/b.pdf\nTEXT: beta\n\n"
        );
    }

    #[test]
    fn test_skipped_documents_keep_numbering_gaps() {
        let response = SearchResponse {
            results: vec![
                result(Some("No snippets"), Some("gs://docs/x.pdf"), None),
                result(Some("Empty snippets"), Some("gs://docs/y.pdf"), Some(vec![])),
                result(Some("Spec sheet"), Some("gs://docs/z.pdf"), Some(vec!["zeta"])),
            ],
            total_size: None,
        };

        let context = format_context(&response).unwrap();
        assert!(context.starts_with("SOURCE 3: Spec sheet\n"));
        assert_eq!(context.matches("SOURCE").count(), 1);
    }

    #[test]
    fn test_missing_title_and_link_fallbacks() {
        let response = SearchResponse {
            results: vec![result(None, None, Some(vec!["text"]))],
            total_size: None,
        };

        assert_eq!(
            format_context(&response).unwrap(),
            "SOURCE 1: Document 1\nLINK: \nTEXT: text\n\n"
        );
    }

    #[test]
    fn test_only_first_snippet_used_and_newlines_flattened() {
        let response = SearchResponse {
            results: vec![result(
                Some("Manual"),
                Some("gs://m/manual.pdf"),
                Some(vec!["line one\nline two\nline three", "ignored second snippet"]),
            )],
            total_size: None,
        };

        let context = format_context(&response).unwrap();
        assert!(context.contains("TEXT: line one line two line three\n"));
        assert!(!context.contains("ignored second snippet"));
    }

    #[test]
    fn test_no_qualifying_documents() {
        assert!(format_context(&SearchResponse::default()).is_none());

        let response = SearchResponse {
            results: vec![result(Some("a"), None, None), result(Some("b"), None, None)],
            total_size: Some(2),
        };
        assert!(format_context(&response).is_none());
    }
}
