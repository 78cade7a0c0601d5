use tests::{
    models::{Folder, Page},
    seed, TestSite,
};

use sapling::{err, Repository as _};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

#[test]
fn delete_removes_item() {
    let site = TestSite::new();

    let page: Page = site.mapper.get_item_by_id(site.welcome).unwrap().unwrap();
    site.mapper.delete(&page).unwrap();

    assert!(site.log.has_delete_item());
    assert!(site
        .mapper
        .get_item_by_id::<Page>(site.welcome)
        .unwrap()
        .is_none());
}

#[test]
fn delete_removes_descendants() {
    let site = TestSite::new();

    let news: Folder = site.mapper.get_item_by_id(site.news).unwrap().unwrap();
    site.mapper.delete(&news).unwrap();

    let remaining = site
        .mapper
        .repository()
        .query("/sitecore/content/home/news/*")
        .unwrap();
    assert!(remaining.is_empty());
}

#[test]
fn failed_notification_does_not_fail_delete() {
    let memory = seed();
    let notified = Arc::new(AtomicUsize::new(0));

    let counter = notified.clone();
    memory
        .on_delete(move |_item| {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(err!("search index unavailable"))
        })
        .unwrap();

    let site = TestSite::with_memory(memory);

    let page: Page = site.mapper.get_item_by_id(site.welcome).unwrap().unwrap();
    site.mapper.delete(&page).unwrap();

    assert_eq!(notified.load(Ordering::SeqCst), 1);
    assert!(site
        .mapper
        .get_item_by_id::<Page>(site.welcome)
        .unwrap()
        .is_none());
}

#[test]
fn deleting_twice_fails() {
    let site = TestSite::new();

    let page: Page = site.mapper.get_item_by_id(site.welcome).unwrap().unwrap();
    site.mapper.delete(&page).unwrap();

    let err = site.mapper.delete(&page).unwrap_err();
    assert!(err.is_invalid_operation());
}
