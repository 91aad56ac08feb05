//! Loads a collection once on mount and offers a manual retry.
//!
//! Every fetch is an independent, unguarded gateway call. There is no
//! pagination, no dedup of repeated retries, and no ordering of completions.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::gateway::{Endpoint, Gateway, GatewayError};
use crate::notify::{report, Notifier, Outcome};

/// Describes where a list lives on the backend and how it is wrapped.
pub trait ListSource {
    type Item: DeserializeOwned;

    const ENDPOINT: Endpoint;
    /// Name of the array field in the response envelope.
    const FIELD: &'static str;
    /// Used in user-facing messages, e.g. "course recommendations".
    const NOUN: &'static str;
}

#[derive(Debug, PartialEq)]
pub enum ListView<'a, T> {
    Loading,
    /// Nothing to show: the fetch failed or returned no items. Retry is offered.
    Empty,
    Items(&'a [T]),
}

pub struct ListPage<S: ListSource> {
    items: Vec<S::Item>,
    loading: bool,
    mounted: bool,
    _source: PhantomData<S>,
}

impl<S: ListSource> Default for ListPage<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ListSource> ListPage<S> {
    /// A page that has not been mounted yet shows the loading indicator.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            mounted: false,
            _source: PhantomData,
        }
    }

    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    pub fn view(&self) -> ListView<'_, S::Item> {
        if self.loading {
            ListView::Loading
        } else if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Items(&self.items)
        }
    }

    pub fn can_retry(&self) -> bool {
        matches!(self.view(), ListView::Empty)
    }

    /// Fetches once on first mount; later calls do nothing.
    pub async fn mount(&mut self, gateway: &dyn Gateway, notifier: &dyn Notifier) -> Outcome {
        if self.mounted {
            return Outcome::Ignored;
        }
        self.mounted = true;
        self.fetch(gateway, notifier).await
    }

    /// Re-issues the same fetch. Each call is independent.
    pub async fn retry(&mut self, gateway: &dyn Gateway, notifier: &dyn Notifier) -> Outcome {
        self.mounted = true;
        self.fetch(gateway, notifier).await
    }

    async fn fetch(&mut self, gateway: &dyn Gateway, notifier: &dyn Notifier) -> Outcome {
        self.loading = true;
        let result = match gateway.exchange(S::ENDPOINT, None).await {
            Ok(value) => decode_items::<S>(value),
            Err(e) => Err(e),
        };
        self.loading = false;

        match result {
            Ok(items) => {
                let endpoint = S::ENDPOINT;
                info!(%endpoint, count = items.len(), "list loaded");
                self.items = items;
                Outcome::Completed
            }
            Err(e) => report(notifier, &format!("fetch {}", S::NOUN), &AppError::from(e)),
        }
    }
}

/// Pulls `S::FIELD` out of the envelope. A missing or null field is an empty list.
fn decode_items<S: ListSource>(mut value: Value) -> Result<Vec<S::Item>, GatewayError> {
    match value.get_mut(S::FIELD).map(Value::take) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items) => Ok(serde_json::from_value(items)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::catalog::{Courses, Jobs};
    use crate::notify::NoticeKind;
    use crate::testing::{RecordingNotifier, ScriptedGateway};
    use serde_json::json;

    #[test]
    fn test_unmounted_page_is_loading() {
        let page: ListPage<Courses> = ListPage::new();
        assert_eq!(page.view(), ListView::Loading);
        assert!(!page.can_retry());
    }

    #[tokio::test]
    async fn test_mount_fetches_once() {
        let gateway = ScriptedGateway::new().reply(json!({ "courses": [
            { "title": "Rust in Action", "provider": "Udemy" }
        ]}));
        let notifier = RecordingNotifier::default();
        let mut page: ListPage<Courses> = ListPage::new();

        assert_eq!(page.mount(&gateway, &notifier).await, Outcome::Completed);
        assert_eq!(page.mount(&gateway, &notifier).await, Outcome::Ignored);
        assert_eq!(gateway.call_count(), 1);
        assert_eq!(gateway.calls()[0], (Endpoint::RecommendCourses, None));

        match page.view() {
            ListView::Items(items) => assert_eq!(items[0].title, "Rust in Action"),
            other => panic!("expected items, got {other:?}"),
        }
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn test_empty_courses_offers_retry_that_fetches_once_more() {
        let gateway = ScriptedGateway::new()
            .reply(json!({ "courses": [] }))
            .reply(json!({ "courses": [] }));
        let notifier = RecordingNotifier::default();
        let mut page: ListPage<Courses> = ListPage::new();

        page.mount(&gateway, &notifier).await;
        assert_eq!(page.view(), ListView::Empty);
        assert!(page.can_retry());

        page.retry(&gateway, &notifier).await;
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_shows_empty_and_notifies() {
        let gateway = ScriptedGateway::new()
            .fail(500)
            .reply(json!({ "jobs": [{ "title": "Backend Engineer", "type": "Remote" }] }));
        let notifier = RecordingNotifier::default();
        let mut page: ListPage<Jobs> = ListPage::new();

        assert_eq!(page.mount(&gateway, &notifier).await, Outcome::Failed);
        assert_eq!(page.view(), ListView::Empty);
        assert_eq!(
            notifier.last(),
            Some((
                NoticeKind::BackendUnavailable,
                "Failed to fetch job listings. Make sure the API is running.".to_string()
            ))
        );

        assert_eq!(page.retry(&gateway, &notifier).await, Outcome::Completed);
        assert_eq!(page.items().len(), 1);
        assert!(!page.can_retry());
    }

    #[tokio::test]
    async fn test_missing_field_decodes_as_empty() {
        let gateway = ScriptedGateway::new().reply(json!({ "unexpected": true }));
        let notifier = RecordingNotifier::default();
        let mut page: ListPage<Jobs> = ListPage::new();

        assert_eq!(page.mount(&gateway, &notifier).await, Outcome::Completed);
        assert_eq!(page.view(), ListView::Empty);
    }

    #[tokio::test]
    async fn test_null_fields_in_items_still_load() {
        let gateway = ScriptedGateway::new().reply(json!({ "courses": [
            { "title": "A", "rating": 4.5 },
            { "title": "B", "rating": null, "url": null }
        ]}));
        let notifier = RecordingNotifier::default();
        let mut page: ListPage<Courses> = ListPage::new();

        assert_eq!(page.mount(&gateway, &notifier).await, Outcome::Completed);
        assert_eq!(page.items().len(), 2);
        assert_eq!(page.items()[1].rating, 0.0);
        assert!(page.items()[1].url.is_empty());
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn test_null_collection_is_empty() {
        let gateway = ScriptedGateway::new().reply(json!({ "jobs": null }));
        let notifier = RecordingNotifier::default();
        let mut page: ListPage<Jobs> = ListPage::new();

        assert_eq!(page.mount(&gateway, &notifier).await, Outcome::Completed);
        assert_eq!(page.view(), ListView::Empty);
    }

    #[tokio::test]
    async fn test_malformed_items_are_backend_failure() {
        let gateway = ScriptedGateway::new().reply(json!({ "courses": "not a list" }));
        let notifier = RecordingNotifier::default();
        let mut page: ListPage<Courses> = ListPage::new();

        assert_eq!(page.mount(&gateway, &notifier).await, Outcome::Failed);
        assert_eq!(notifier.kinds(), vec![NoticeKind::BackendUnavailable]);
    }
}
