mod common;

use std::sync::Arc;

use common::FakeSource;
use pokedex_lib::{
    CatalogEntry, INITIAL_LOAD_ERROR, ListScreen, ListView, Route, ScrollMetrics, TriggerOutcome,
    TypeName,
};

async fn mounted(source: &Arc<FakeSource>) -> ListScreen<FakeSource> {
    let (screen, pending) = ListScreen::mount(Arc::clone(source), 30);
    source.release(1);
    pending.unwrap().wait().await;
    screen
}

fn names(entries: &[CatalogEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[tokio::test]
async fn shows_loading_until_first_page() {
    let source = Arc::new(FakeSource::gated());
    let (screen, pending) = ListScreen::mount(Arc::clone(&source), 30);
    assert_eq!(screen.view(), ListView::Loading);

    source.release(1);
    pending.unwrap().wait().await;
    assert!(matches!(screen.view(), ListView::Entries { ref entries, loading_more: false } if entries.len() == 30));
}

#[tokio::test]
async fn initial_failure_shows_generic_error() {
    let source = Arc::new(FakeSource::new());
    source.fail_page(30);
    let screen = mounted(&source).await;
    assert_eq!(screen.view(), ListView::Error(INITIAL_LOAD_ERROR.to_string()));
}

#[tokio::test]
async fn filter_narrows_visible_entries() {
    let source = Arc::new(FakeSource::new());
    let mut screen = mounted(&source).await;

    screen.select_type("water");
    assert_eq!(screen.filter().selected(), Some(&TypeName::new("Water")));
    let visible = screen.visible();
    assert_eq!(visible.len(), 10);
    assert!(visible.iter().all(|e| e.types == vec![TypeName::new("Water")]));
    assert_eq!(&names(&visible)[..3], &["mon-0", "mon-3", "mon-6"]);

    screen.reset_filter();
    assert_eq!(screen.visible().len(), 30);
}

#[tokio::test]
async fn filter_applies_to_refreshed_pages() {
    let source = Arc::new(FakeSource::new());
    let mut screen = mounted(&source).await;
    screen.select_type("Fire");

    if let TriggerOutcome::Requested(pending) = screen.near_end() {
        pending.wait().await;
    } else {
        panic!("expected a load-more request");
    }
    assert_eq!(screen.visible().len(), 13);
}

#[tokio::test]
async fn footer_visible_while_loading_more() {
    let source = Arc::new(FakeSource::gated());
    let screen = mounted(&source).await;

    let outcome = screen.near_end();
    assert!(outcome.is_requested());
    assert!(matches!(screen.view(), ListView::Entries { loading_more: true, .. }));

    assert!(matches!(screen.near_end(), TriggerOutcome::InFlight));

    source.release(1);
    if let TriggerOutcome::Requested(pending) = outcome {
        pending.wait().await;
    }
    assert!(matches!(screen.view(), ListView::Entries { ref entries, loading_more: false } if entries.len() == 40));
}

#[tokio::test]
async fn near_end_before_first_page_is_not_ready() {
    let source = Arc::new(FakeSource::gated());
    let (screen, pending) = ListScreen::mount(Arc::clone(&source), 30);
    assert!(matches!(screen.near_end(), TriggerOutcome::NotReady));
    source.release(1);
    pending.unwrap().wait().await;
    assert_eq!(source.calls(), vec![30]);
}

#[tokio::test]
async fn scrolling_fires_once_per_crossing() {
    let source = Arc::new(FakeSource::gated());
    let mut screen = mounted(&source).await;
    let at = |offset: f32| ScrollMetrics {
        offset,
        viewport_len: 100.0,
        content_len: 1500.0,
    };

    assert!(screen.on_scroll(at(0.0)).is_none());
    let first = screen.on_scroll(at(1390.0)).expect("crossing fires");
    assert!(first.is_requested());
    assert!(screen.on_scroll(at(1395.0)).is_none());
    assert!(screen.on_scroll(at(1400.0)).is_none());

    source.release(1);
    if let TriggerOutcome::Requested(pending) = first {
        pending.wait().await;
    }
    assert_eq!(source.calls(), vec![30, 40]);
}

#[tokio::test]
async fn type_menu_is_title_cased() {
    let source = Arc::new(FakeSource::new());
    let mut screen = mounted(&source).await;
    screen.load_type_menu().await;
    assert_eq!(
        screen.type_menu(),
        &[TypeName::new("Water"), TypeName::new("Fire"), TypeName::new("Grass")]
    );
}

#[tokio::test]
async fn type_menu_failure_leaves_menu_empty() {
    let source = Arc::new(FakeSource::new().without_type_menu());
    let mut screen = mounted(&source).await;
    screen.load_type_menu().await;
    assert!(screen.type_menu().is_empty());
    assert_eq!(screen.visible().len(), 30);
}

#[tokio::test]
async fn open_routes_to_detail_with_entry() {
    let source = Arc::new(FakeSource::new());
    let screen = mounted(&source).await;
    match screen.open("MON-4") {
        Some(Route::Detail { pokemon }) => {
            assert_eq!(pokemon.name, "mon-4");
            assert_eq!(pokemon.number.as_deref(), Some("005"));
        }
        other => panic!("unexpected route {other:?}"),
    }
    assert!(screen.open("missing").is_none());
}
