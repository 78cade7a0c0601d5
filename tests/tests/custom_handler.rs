use tests::{
    models::{self, Page},
    TestSite,
};

use pretty_assertions::assert_eq;
use sapling::{
    convert::{Context, Registry},
    schema::app,
    Error, Handler, Result, Type, Value,
};

/// Reads checkboxes stored as `yes` / `no`, and the usual `1` / `0`.
#[derive(Debug)]
struct YesNo;

impl Handler for YesNo {
    fn ty(&self) -> Type {
        Type::Bool
    }

    fn read(&self, raw: &str, _cx: &Context<'_>) -> Result<Value> {
        match raw {
            "yes" | "1" => Ok(Value::Bool(true)),
            "no" | "0" | "" => Ok(Value::Bool(false)),
            _ => Err(Error::conversion(raw, Type::Bool)),
        }
    }

    fn write(&self, value: &Value, _cx: &Context<'_>) -> Result<String> {
        match value {
            Value::Bool(true) => Ok("yes".to_string()),
            Value::Bool(false) => Ok("no".to_string()),
            other => Err(Error::type_conversion(other, Type::Bool)),
        }
    }
}

/// Claims every field, but converts nothing.
#[derive(Debug)]
struct Greedy;

impl Handler for Greedy {
    fn ty(&self) -> Type {
        Type::Any
    }

    fn will_handle(&self, _property: &app::Property, _registry: &Registry, _models: &app::Schema) -> bool {
        false
    }

    fn read(&self, raw: &str, _cx: &Context<'_>) -> Result<Value> {
        Err(Error::conversion(raw, Type::Any))
    }

    fn write(&self, value: &Value, _cx: &Context<'_>) -> Result<String> {
        Err(Error::type_conversion(value, Type::Any))
    }
}

#[test]
fn user_handler_replaces_builtin() {
    let mut builder = models::builder();
    builder.handler(YesNo);
    let site = TestSite::with_builder(builder);

    let mut page: Page = site.mapper.get_item_by_id(site.welcome).unwrap().unwrap();
    assert!(page.published);

    page.published = false;
    site.log.clear();
    site.mapper.save(&page).unwrap();

    assert!(site
        .log
        .field_writes()
        .contains(&("Published".to_string(), "no".to_string())));
}

#[test]
fn declined_properties_fall_through() {
    let mut builder = models::builder();
    builder.handler(Greedy);
    let site = TestSite::with_builder(builder);

    let page: Page = site.mapper.get_item_by_id(site.welcome).unwrap().unwrap();
    assert_eq!(page.rank, 3);
}
