pub use exec_log::ExecLog;

mod logging_repository;
pub use logging_repository::{LoggingRepository, RepositoryOp};


use sapling::{Config, Mapper};
use sapling_core::Repository;
use sapling_repo_memory::Memory;

use rust_decimal::Decimal;
use std::sync::Once;
use uuid::Uuid;

/// A mapper over a seeded in-memory site, with every repository call logged.
pub struct TestSite {
    pub mapper: Mapper,

    /// Repository calls made through `mapper`
    pub log: ExecLog,

    /// `/sitecore/content/home`
    pub home: Uuid,

    /// `/sitecore/content/home/welcome`, a `Page`
    pub welcome: Uuid,

    /// `/sitecore/content/home/news`, holding `Article`s
    pub news: Uuid,
}

impl TestSite {
    pub fn new() -> Self {
        Self::with_memory(seed())
    }

    /// Builds the site over `memory`, which must have been seeded with
    /// [`seed`].
    pub fn with_memory(memory: Memory) -> Self {
        Self::build(models::builder(), memory)
    }

    /// Builds the site with a caller-supplied mapper builder.
    pub fn with_builder(builder: sapling::mapper::Builder) -> Self {
        Self::build(builder, seed())
    }

    fn build(mut builder: sapling::mapper::Builder, memory: Memory) -> Self {
        init_tracing();

        let home = find(&memory, "/sitecore/content/home");
        let welcome = find(&memory, "/sitecore/content/home/welcome");
        let news = find(&memory, "/sitecore/content/home/news");

        let repository = LoggingRepository::new(Box::new(memory));
        let log = ExecLog::new(repository.ops_log_handle());
        let mapper = builder.config(config()).build(repository).unwrap();

        Self {
            mapper,
            log,
            home,
            welcome,
            news,
        }
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

pub fn config() -> Config {
    Config::new()
        .site_root("/sitecore/content/home")
        .server_url("http://www.example.com")
        .unwrap()
}

/// Creates the content every test starts from:
///
/// ```text
/// /sitecore/content/home
///     welcome        Page
///     pricing        Page
///     news           Folder
///         first post     Article
///         second post    Article
/// ```
pub fn seed() -> Memory {
    let memory = Memory::new();
    memory.add_template(models::PAGE_TEMPLATE, "Page").unwrap();
    memory.add_template(models::ARTICLE_TEMPLATE, "Article").unwrap();
    memory.add_template(models::NOTE_TEMPLATE, "Note").unwrap();

    let home = memory.create_path("/sitecore/content/home").unwrap();

    let welcome = page(
        &memory,
        &home,
        "welcome",
        &[
            ("Title", "Welcome"),
            ("Price", "12.50"),
            ("Tags", "a%pipe%b|c"),
            ("Published", "1"),
            ("Rank", "3"),
            ("__Display name", "Welcome!"),
        ],
    );
    page(&memory, &home, "pricing", &[("Title", "Pricing")]);

    let news = memory.create_path("/sitecore/content/home/news").unwrap();
    let first = article(&memory, &news, "first post", "First", &[]);
    article(&memory, &news, "second post", "Second", &[first, welcome]);

    memory
}

fn page(memory: &Memory, parent: &sapling::Item, name: &str, fields: &[(&str, &str)]) -> Uuid {
    let mut item = memory
        .create_child(parent, name, models::PAGE_TEMPLATE)
        .unwrap();
    for (field, value) in fields {
        memory.set_field(&mut item, field, value).unwrap();
    }
    item.id
}

fn article(memory: &Memory, parent: &sapling::Item, name: &str, title: &str, related: &[Uuid]) -> Uuid {
    let mut item = memory
        .create_child(parent, name, models::ARTICLE_TEMPLATE)
        .unwrap();
    memory.set_field(&mut item, "Title", title).unwrap();

    let related = related
        .iter()
        .map(|id| sapling::convert::format_id(*id))
        .collect::<Vec<_>>()
        .join("|");
    memory.set_field(&mut item, "Related", &related).unwrap();

    item.id
}

fn find(memory: &Memory, path: &str) -> Uuid {
    memory.item_by_path(path).unwrap().unwrap().id
}

pub fn decimal(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// Installs a `tracing` subscriber once per test binary. Output is controlled
/// with `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
