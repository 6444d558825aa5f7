//! Keyword matching over the feed registry for news campaigns.

use std::cmp::Ordering;

use draftmill_core::{FeedFetcher, FeedInfo, SourceItem};

/// Matched items are capped at this many, newest first.
pub const MAX_MATCHES: usize = 5;

/// One feed that could not be fetched or parsed during aggregation.
#[derive(Debug, Clone)]
pub struct FeedFailure {
    pub feed_id: i64,
    pub message: String,
}

/// Outcome of one aggregation pass over the feed registry.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Matched items, newest first, at most [`MAX_MATCHES`].
    pub matches: Vec<SourceItem>,
    /// `(feed_id, item_count)` for each feed that fetched cleanly.
    pub fetched: Vec<(i64, i32)>,
    pub failures: Vec<FeedFailure>,
}

/// Fetch every feed in registry order and collect items whose title or
/// summary contains any campaign keyword, case-insensitively.
///
/// A failing feed is recorded and skipped; it never aborts the pass.
/// Matches are sorted newest first; undated items sort last, and items with
/// the same timestamp keep registry order.
pub async fn find_matches(
    fetcher: &dyn FeedFetcher,
    keywords: &[String],
    feeds: &[FeedInfo],
) -> Aggregation {
    let needles: Vec<String> = keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();

    let mut agg = Aggregation::default();

    for feed in feeds {
        match fetcher.fetch_items(&feed.url).await {
            Ok(items) => {
                agg.fetched
                    .push((feed.id, i32::try_from(items.len()).unwrap_or(i32::MAX)));
                for item in items {
                    let haystack = format!("{} {}", item.title, item.summary).to_lowercase();
                    if needles.iter().any(|kw| haystack.contains(kw.as_str())) {
                        agg.matches.push(SourceItem {
                            title: item.title,
                            url: item.link,
                            summary: item.summary,
                            published_at: item.published_at,
                            source_name: feed.name.clone(),
                        });
                    }
                }
            }
            Err(e) => {
                tracing::warn!(feed = %feed.name, url = %feed.url, error = %e, "feed fetch failed");
                agg.failures.push(FeedFailure {
                    feed_id: feed.id,
                    message: e.to_string(),
                });
            }
        }
    }

    // Stable sort keeps registry order for equal timestamps.
    agg.matches
        .sort_by(|a, b| match (a.published_at, b.published_at) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
    agg.matches.truncate(MAX_MATCHES);

    agg
}
