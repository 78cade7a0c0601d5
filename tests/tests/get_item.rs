use tests::{
    decimal,
    models::{Article, Broken, Folder, Page, Stray, PAGE_TEMPLATE},
    RepositoryOp, TestSite,
};

use pretty_assertions::assert_eq;
use sapling::{convert::format_id, Repository as _};
use uuid::Uuid;

#[test]
fn get_by_path_converts_fields() {
    let site = TestSite::new();

    let page: Page = site
        .mapper
        .get_item("/sitecore/content/home/welcome")
        .unwrap()
        .unwrap();

    assert_eq!(page.id, site.welcome);
    assert_eq!(page.title, "Welcome");
    assert_eq!(page.price, decimal("12.50"));
    assert_eq!(page.tags, vec!["a|b".to_string(), "c".to_string()]);
    assert_eq!(page.summary, None);
    assert!(page.published);
    assert_eq!(page.rank, 3);
}

#[test]
fn get_by_id_matches_get_by_path() {
    let site = TestSite::new();

    let by_path: Page = site
        .mapper
        .get_item("/sitecore/content/home/welcome")
        .unwrap()
        .unwrap();
    let by_id: Page = site.mapper.get_item_by_id(site.welcome).unwrap().unwrap();

    assert_eq!(by_path, by_id);
}

#[test]
fn empty_fields_use_defaults() {
    let site = TestSite::new();

    let page: Page = site
        .mapper
        .get_item("/sitecore/content/home/pricing")
        .unwrap()
        .unwrap();

    assert_eq!(page.title, "Pricing");
    assert_eq!(page.price, decimal("0"));
    assert!(page.tags.is_empty());
    assert!(!page.published);
    assert_eq!(page.rank, 0);
}

#[test]
fn info_properties() {
    let site = TestSite::new();

    let page: Page = site.mapper.get_item_by_id(site.welcome).unwrap().unwrap();

    assert_eq!(page.name, "welcome");
    assert_eq!(page.display_name, "Welcome!");
    assert_eq!(page.key, "welcome");
    assert_eq!(page.path, "/sitecore/content/home/welcome");
    assert_eq!(page.template, PAGE_TEMPLATE);
    assert_eq!(page.language, "en");
    assert_eq!(page.url, "/welcome.aspx");

    // Without a display name field, the item name is used
    let pricing: Page = site
        .mapper
        .get_item("/sitecore/content/home/pricing")
        .unwrap()
        .unwrap();
    assert_eq!(pricing.display_name, "pricing");
}

#[test]
fn string_identifier_and_absolute_url() {
    let site = TestSite::new();

    let article: Article = site
        .mapper
        .get_item("/sitecore/content/home/news/first post")
        .unwrap()
        .unwrap();

    let id = site
        .mapper
        .repository()
        .item_by_path("/sitecore/content/home/news/first post")
        .unwrap()
        .unwrap()
        .id;

    assert_eq!(article.id, format_id(id));
    assert_eq!(article.url, "http://www.example.com/news/first-post");
}

#[test]
fn missing_item_is_none() {
    let site = TestSite::new();

    let page: Option<Page> = site
        .mapper
        .get_item("/sitecore/content/home/nothing-here")
        .unwrap();
    assert!(page.is_none());

    let page: Option<Page> = site.mapper.get_item_by_id(Uuid::new_v4()).unwrap();
    assert!(page.is_none());
}

#[test]
fn unregistered_type_fails_before_reading() {
    let site = TestSite::new();

    let err = site
        .mapper
        .get_item::<Stray>("/sitecore/content/home/welcome")
        .unwrap_err();

    assert!(err.is_configuration_not_found());
    assert!(site.log.is_empty());
}

#[test]
fn rejected_model_reports_why() {
    let site = TestSite::new();

    let err = site
        .mapper
        .get_item::<Broken>("/sitecore/content/home/welcome")
        .unwrap_err();

    assert!(err.is_invalid_configuration());
    assert!(err.to_string().contains("more than one identifier property"));
    assert!(site.log.is_empty());

    // Other models are unaffected
    let page: Option<Page> = site.mapper.get_item_by_id(site.welcome).unwrap();
    assert!(page.is_some());
}

#[test]
fn any_item_maps_to_a_model() {
    let site = TestSite::new();

    let folder: Folder = site
        .mapper
        .get_item("/sitecore/content/home")
        .unwrap()
        .unwrap();

    assert_eq!(folder.id, site.home);
    assert_eq!(folder.name, "home");
    assert_eq!(folder.path, "/sitecore/content/home");
}

#[test]
fn unparseable_field_names_the_property() {
    let site = TestSite::new();

    let mut item = site
        .mapper
        .repository()
        .item_by_id(site.welcome)
        .unwrap()
        .unwrap();
    site.mapper
        .repository()
        .set_field(&mut item, "Price", "lots")
        .unwrap();

    let err = site.mapper.get_item_by_id::<Page>(site.welcome).unwrap_err();

    assert!(err.is_conversion());
    assert!(err.to_string().contains("Price"), "{err}");
}

#[test]
fn reads_go_through_the_repository() {
    let site = TestSite::new();

    let _: Option<Page> = site.mapper.get_item_by_id(site.welcome).unwrap();

    assert_eq!(site.log.ops(), vec![RepositoryOp::ItemById(site.welcome)]);
}
