use tests::{
    decimal,
    models::{Folder, Note, Page, NOTE_TEMPLATE, PAGE_TEMPLATE},
    RepositoryOp, TestSite,
};

use pretty_assertions::assert_eq;

fn home(site: &TestSite) -> Folder {
    site.mapper.get_item_by_id(site.home).unwrap().unwrap()
}

#[test]
fn create_under_parent() {
    let site = TestSite::new();
    let home = home(&site);
    site.log.clear();

    let page: Page = site.mapper.create(&home, "contact").unwrap();

    assert_eq!(page.name, "contact");
    assert_eq!(page.path, "/sitecore/content/home/contact");
    assert_eq!(page.template, PAGE_TEMPLATE);
    assert_eq!(page.title, "");

    assert!(site.log.any(|op| matches!(
        op,
        RepositoryOp::CreateChild { parent, name, template }
            if *parent == site.home && name == "contact" && *template == PAGE_TEMPLATE
    )));
    assert!(site.log.field_writes().is_empty());

    // The item is really there
    let read: Page = site
        .mapper
        .get_item("/sitecore/content/home/contact")
        .unwrap()
        .unwrap();
    assert_eq!(read.id, page.id);
}

#[test]
fn create_with_writes_fields() {
    let site = TestSite::new();
    let home = home(&site);
    site.log.clear();

    let mut pre = Page::named("ignored", "Offers");
    pre.price = decimal("12.50");
    pre.tags = vec!["x|y".to_string(), "z".to_string()];
    pre.published = true;
    pre.rank = 7;

    let page: Page = site.mapper.create_with(&home, "offers", &pre).unwrap();

    assert_eq!(page.name, "offers");
    assert_eq!(page.title, "Offers");
    assert_eq!(page.price, decimal("12.50"));
    assert_eq!(page.tags, pre.tags);
    assert!(page.published);
    assert_eq!(page.rank, 7);

    let writes = site.log.field_writes();
    let field = |name: &str| {
        writes
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.clone())
    };

    assert_eq!(field("Title").as_deref(), Some("Offers"));
    assert_eq!(field("Price").as_deref(), Some("12.50"));
    assert_eq!(field("Tags").as_deref(), Some("x%pipe%y|z"));
    assert_eq!(field("Published").as_deref(), Some("1"));
    assert_eq!(field("Rank").as_deref(), Some("7"));
    assert_eq!(field("Summary").as_deref(), Some(""));
}

#[test]
fn create_named_takes_name_from_model() {
    let site = TestSite::new();
    let home = home(&site);

    let note: Note = site
        .mapper
        .create_named(&home, &Note::new("reminder", "Call back"))
        .unwrap();

    assert_eq!(note.name, "reminder");
    assert_eq!(note.text, "Call back");

    let item = site
        .mapper
        .repository()
        .item_by_path("/sitecore/content/home/reminder")
        .unwrap()
        .unwrap();
    assert_eq!(item.id, note.id);
    assert_eq!(item.template_id, NOTE_TEMPLATE);
}

#[test]
fn create_named_requires_a_name() {
    let site = TestSite::new();
    let home = home(&site);
    site.log.clear();

    let err = site
        .mapper
        .create_named(&home, &Note::new("", "nameless"))
        .unwrap_err();

    assert!(err.is_invalid_operation());
    assert!(!site.log.has_create_child());
}

#[test]
fn read_only_fields_are_not_written() {
    let site = TestSite::new();
    let home = home(&site);
    site.log.clear();

    let note: Note = site
        .mapper
        .create_named(&home, &Note::new("draft", "text"))
        .unwrap();

    let fields: Vec<_> = site
        .log
        .field_writes()
        .into_iter()
        .map(|(field, _)| field)
        .collect();
    assert_eq!(fields, vec!["SingleLineText"]);
    assert_eq!(note.created_by, "");
}

#[test]
fn model_without_template_cannot_be_created() {
    let site = TestSite::new();
    let home = home(&site);
    site.log.clear();

    let err = site.mapper.create::<Folder, _>(&home, "archive").unwrap_err();

    assert!(err.is_invalid_operation());
    assert!(err.to_string().contains("no template"), "{err}");
    assert!(site.log.is_empty());
}

#[test]
fn create_at_path() {
    let site = TestSite::new();

    let pre = Page::named("ignored", "Jobs");
    let page: Page = site
        .mapper
        .create_at_path("/sitecore/content/home/news", "jobs", Some(&pre))
        .unwrap();

    assert_eq!(page.path, "/sitecore/content/home/news/jobs");
    assert_eq!(page.title, "Jobs");

    let bare: Page = site
        .mapper
        .create_at_path::<Page>("/sitecore/content/home", "bare", None)
        .unwrap();
    assert_eq!(bare.title, "");
}

#[test]
fn missing_parent() {
    let site = TestSite::new();
    site.log.clear();

    let err = site
        .mapper
        .create_at_path::<Page>("/sitecore/content/nowhere", "page", None)
        .unwrap_err();

    assert!(err.is_invalid_operation());
    assert!(!site.log.has_create_child());
}

#[test]
fn invalid_item_name_is_a_repository_failure() {
    let site = TestSite::new();
    let home = home(&site);

    let err = site.mapper.create::<Page, _>(&home, "a/b").unwrap_err();
    assert!(err.is_repository_operation_failed());
}
