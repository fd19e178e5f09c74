//! `InventoryFetcher` against scripted page-level API doubles.

#![allow(clippy::expect_used)]

use std::collections::VecDeque;
use std::sync::Mutex;

use gcp_rider::application::ports::{ComputeApi, InstancePage, InventorySource, RawInstance};
use gcp_rider::application::services::inventory::InventoryFetcher;
use gcp_rider::domain::FetchError;

/// Replays one scripted response per call and records the tokens it saw.
struct ScriptedApi {
    pages: Mutex<VecDeque<Result<InstancePage, FetchError>>>,
    tokens: Mutex<Vec<Option<String>>>,
}

impl ScriptedApi {
    fn new(pages: Vec<Result<InstancePage, FetchError>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            tokens: Mutex::new(Vec::new()),
        }
    }

    fn tokens(&self) -> Vec<Option<String>> {
        self.tokens.lock().expect("lock").clone()
    }
}

impl ComputeApi for ScriptedApi {
    async fn list_page(
        &self,
        _project: &str,
        page_token: Option<&str>,
    ) -> Result<InstancePage, FetchError> {
        self.tokens
            .lock()
            .expect("lock")
            .push(page_token.map(str::to_string));
        self.pages
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("no more scripted pages".into())))
    }
}

impl ComputeApi for &ScriptedApi {
    async fn list_page(
        &self,
        project: &str,
        page_token: Option<&str>,
    ) -> Result<InstancePage, FetchError> {
        (**self).list_page(project, page_token).await
    }
}

fn raw(name: &str, zone: &str) -> RawInstance {
    RawInstance {
        name: name.to_string(),
        zone: zone.to_string(),
        status: None,
    }
}

fn page(instances: Vec<RawInstance>, next: Option<&str>) -> InstancePage {
    InstancePage {
        instances,
        next_page_token: next.map(str::to_string),
        unreachable: Vec::new(),
    }
}

const ZONE_URL: &str =
    "https://www.googleapis.com/compute/v1/projects/demo/zones/us-central1-a";

#[tokio::test]
async fn test_single_page_normalizes_zone_urls() {
    let api = ScriptedApi::new(vec![Ok(page(vec![raw("vm-1", ZONE_URL)], None))]);
    let fetcher = InventoryFetcher::new(&api);

    let inventory = fetcher.fetch("demo").await.expect("fetch");

    assert_eq!(inventory.len(), 1);
    let rec = inventory.get(0).expect("record");
    assert_eq!(rec.name, "vm-1");
    assert_eq!(rec.zone, "us-central1-a");
    assert_eq!(api.tokens(), vec![None]);
}

#[tokio::test]
async fn test_multi_page_drain_preserves_order() {
    let api = ScriptedApi::new(vec![
        Ok(page(vec![raw("a", "zones/z1"), raw("b", "zones/z1")], Some("t1"))),
        Ok(page(vec![raw("c", "zones/z2")], Some("t2"))),
        Ok(page(vec![raw("d", "zones/z3")], None)),
    ]);
    let fetcher = InventoryFetcher::new(&api);

    let inventory = fetcher.fetch("demo").await.expect("fetch");

    let names: Vec<&str> = inventory.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c", "d"]);
    assert_eq!(
        api.tokens(),
        vec![None, Some("t1".to_string()), Some("t2".to_string())]
    );
}

#[tokio::test]
async fn test_error_on_later_page_discards_accumulated_records() {
    let api = ScriptedApi::new(vec![
        Ok(page(vec![raw("a", "zones/z1")], Some("t1"))),
        Err(FetchError::Api {
            status: 503,
            message: "backend unavailable".into(),
        }),
    ]);
    let fetcher = InventoryFetcher::new(&api);

    let err = fetcher.fetch("demo").await.expect_err("should fail");

    assert_eq!(
        err,
        FetchError::Api {
            status: 503,
            message: "backend unavailable".into()
        }
    );
}

#[tokio::test]
async fn test_unreachable_zones_fail_the_fetch() {
    let mut first = page(vec![raw("a", "zones/z1")], None);
    first.unreachable = vec!["zones/europe-west9-a".into()];
    let api = ScriptedApi::new(vec![Ok(first)]);
    let fetcher = InventoryFetcher::new(&api);

    let err = fetcher.fetch("demo").await.expect_err("should fail");

    assert_eq!(
        err,
        FetchError::Unreachable(vec!["zones/europe-west9-a".into()])
    );
}

#[tokio::test]
async fn test_repeated_page_token_is_malformed() {
    let api = ScriptedApi::new(vec![
        Ok(page(vec![raw("a", "zones/z1")], Some("loop"))),
        Ok(page(vec![raw("b", "zones/z1")], Some("loop"))),
    ]);
    let fetcher = InventoryFetcher::new(&api);

    let err = fetcher.fetch("demo").await.expect_err("should fail");

    assert!(matches!(err, FetchError::Malformed(_)), "got {err:?}");
    assert_eq!(api.tokens().len(), 2);
}

#[tokio::test]
async fn test_empty_page_token_ends_the_drain() {
    let api = ScriptedApi::new(vec![Ok(page(vec![raw("a", "zones/z1")], Some("")))]);
    let fetcher = InventoryFetcher::new(&api);

    let inventory = fetcher.fetch("demo").await.expect("fetch");

    assert_eq!(inventory.len(), 1);
    assert_eq!(api.tokens().len(), 1);
}

#[tokio::test]
async fn test_nameless_instance_is_malformed() {
    let api = ScriptedApi::new(vec![Ok(page(vec![raw("", "zones/z1")], None))]);
    let fetcher = InventoryFetcher::new(&api);

    let err = fetcher.fetch("demo").await.expect_err("should fail");

    assert!(matches!(err, FetchError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn test_empty_project_yields_empty_inventory() {
    let api = ScriptedApi::new(vec![Ok(InstancePage::default())]);
    let fetcher = InventoryFetcher::new(&api);

    let inventory = fetcher.fetch("demo").await.expect("fetch");

    assert!(inventory.is_empty());
}

#[tokio::test]
async fn test_status_is_carried_through() {
    let mut vm = raw("vm-1", "zones/z1");
    vm.status = Some("TERMINATED".into());
    let api = ScriptedApi::new(vec![Ok(page(vec![vm], None))]);
    let fetcher = InventoryFetcher::new(&api);

    let inventory = fetcher.fetch("demo").await.expect("fetch");

    assert_eq!(
        inventory.get(0).and_then(|r| r.status.as_deref()),
        Some("TERMINATED")
    );
}
