use tests::{
    models::{Article, Folder, Page},
    RepositoryOp, TestSite,
};

use pretty_assertions::assert_eq;
use uuid::Uuid;

#[test]
fn proxy_does_not_read_until_used() {
    let site = TestSite::new();

    let proxy = site.mapper.get_item_proxy::<Page>(site.welcome).unwrap();

    assert_eq!(proxy.id(), site.welcome);
    assert!(!proxy.is_loaded());
    assert!(site.log.is_empty());
}

#[test]
fn proxy_loads_once() {
    let site = TestSite::new();

    let proxy = site.mapper.get_item_proxy::<Page>(site.welcome).unwrap();

    assert_eq!(proxy.get().unwrap().title, "Welcome");
    assert_eq!(proxy.get().unwrap().rank, 3);
    assert!(proxy.is_loaded());
    assert_eq!(site.log.reads_of(site.welcome), 1);

    // Clones load on their own
    let clone = proxy.clone();
    assert!(!clone.is_loaded());
    assert_eq!(clone.get().unwrap().title, "Welcome");
    assert_eq!(site.log.reads_of(site.welcome), 2);
}

#[test]
fn proxy_equals_model_of_same_item() {
    let site = TestSite::new();

    let proxy = site.mapper.get_item_proxy::<Page>(site.welcome).unwrap();
    let page: Page = site.mapper.get_item_by_id(site.welcome).unwrap().unwrap();
    let other: Page = site
        .mapper
        .get_item("/sitecore/content/home/pricing")
        .unwrap()
        .unwrap();

    assert!(proxy == page);
    assert!(proxy != other);
    assert_eq!(proxy, site.mapper.get_item_proxy::<Page>(site.welcome).unwrap());

    // Comparing never loads the proxy
    assert!(!proxy.is_loaded());
}

#[test]
fn proxy_of_missing_item() {
    let site = TestSite::new();
    let id = Uuid::new_v4();

    let proxy = site.mapper.get_item_proxy::<Page>(id).unwrap();

    let err = proxy.get().unwrap_err();
    assert!(err.is_invalid_operation());
    assert!(err.to_string().contains(&id.to_string()), "{err}");
    assert!(!proxy.is_loaded());
}

#[test]
fn proxy_type_is_registered_with_its_model() {
    let site = TestSite::new();

    let page = site.mapper.configuration::<Page>().unwrap();
    let proxy = site
        .mapper
        .configuration::<sapling::Proxy<Page>>()
        .unwrap();

    assert_eq!(page.id, proxy.id);
}

#[test]
fn into_inner() {
    let site = TestSite::new();

    let page = site
        .mapper
        .get_item_proxy::<Page>(site.welcome)
        .unwrap()
        .into_inner()
        .unwrap();
    assert_eq!(page.name, "welcome");
}

#[test]
fn children_and_parent() {
    let site = TestSite::new();

    let home: Folder = site.mapper.get_item_by_id(site.home).unwrap().unwrap();
    let ids: Vec<_> = home.children.iter().map(|child| child.id()).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids[0], site.welcome);
    assert_eq!(ids[2], site.news);
    assert!(home.children.iter().all(|child| !child.is_loaded()));

    let parent = home.parent.as_ref().unwrap();
    assert_eq!(parent.get().unwrap().path, "/sitecore/content");
}

#[test]
fn parent_proxy_reads_nothing() {
    let site = TestSite::new();

    let article: Article = site
        .mapper
        .get_item("/sitecore/content/home/news/first post")
        .unwrap()
        .unwrap();

    let parent = article.parent.as_ref().unwrap();
    assert_eq!(parent.id(), site.news);
    assert_eq!(site.log.reads_of(site.news), 0);

    assert_eq!(parent.get().unwrap().name, "news");
}

#[test]
fn root_has_no_parent() {
    let site = TestSite::new();

    let root: Folder = site.mapper.get_item("/sitecore").unwrap().unwrap();
    assert!(root.parent.is_none());
}

#[test]
fn relative_query() {
    let site = TestSite::new();

    let article: Article = site
        .mapper
        .get_item("/sitecore/content/home/news/first post")
        .unwrap()
        .unwrap();

    let names: Vec<_> = article
        .siblings
        .iter()
        .map(|sibling| sibling.get().unwrap().name.clone())
        .collect();
    assert_eq!(names, vec!["first post", "second post"]);

    assert!(site.log.any(|op| matches!(
        op,
        RepositoryOp::Query(query) if query == "/sitecore/content/home/news/first post/../*"
    )));
}

#[test]
fn link_field() {
    let site = TestSite::new();

    let second: Article = site
        .mapper
        .get_item("/sitecore/content/home/news/second post")
        .unwrap()
        .unwrap();
    let first: Article = site
        .mapper
        .get_item("/sitecore/content/home/news/first post")
        .unwrap()
        .unwrap();

    assert!(first.related.is_empty());

    let related: Vec<_> = second.related.iter().map(|proxy| proxy.id()).collect();
    assert_eq!(related.len(), 2);
    assert_eq!(related[1], site.welcome);
    assert_eq!(second.related[0].get().unwrap().title, "First");
}

#[test]
fn links_are_saved_as_ids() {
    let site = TestSite::new();

    let mut first: Article = site
        .mapper
        .get_item("/sitecore/content/home/news/first post")
        .unwrap()
        .unwrap();
    let second: Article = site
        .mapper
        .get_item("/sitecore/content/home/news/second post")
        .unwrap()
        .unwrap();

    let link = site
        .mapper
        .query_proxies::<Article>("/sitecore/content/home/news/second post")
        .unwrap()
        .next()
        .unwrap()
        .unwrap();
    first.related.push(link);
    site.log.clear();

    site.mapper.save(&first).unwrap();

    let writes = site.log.field_writes();
    let expected = sapling::convert::format_id(site.mapper.identify(&second).unwrap());
    assert!(
        writes.contains(&("Related".to_string(), expected.clone())),
        "{writes:?}"
    );
    assert!(expected.starts_with('{') && expected.ends_with('}'));
}

#[test]
fn parent_of_same_model_walks_to_root() {
    let site = TestSite::new();

    let news: Folder = site.mapper.get_item_by_id(site.news).unwrap().unwrap();

    let mut paths = vec![];
    let mut next = news.parent.as_ref().map(|parent| parent.id());
    while let Some(id) = next {
        let folder = site.mapper.get_item_proxy::<Folder>(id).unwrap().into_inner().unwrap();
        paths.push(folder.path.clone());
        next = folder.parent.as_ref().map(|parent| parent.id());
    }

    assert_eq!(
        paths,
        vec!["/sitecore/content/home", "/sitecore/content", "/sitecore"]
    );
}
