use tests::{
    models::{self, Note, Page},
    TestSite,
};

use pretty_assertions::assert_eq;
use sapling::schema::MappingFile;

const NOTE_BODY: &str = r#"
version = 1

[[model]]
name = "Note"
template = "{1C8B9A52-07E3-4D6F-B2A4-93E5D8C0F611}"

[[model.property]]
name = "id"
type = "uuid"
kind = "id"

[[model.property]]
name = "name"
type = "string"
kind = "info"
info = "name"

[[model.property]]
name = "text"
type = "string"
kind = "field"
field = "Body"

[[model.property]]
name = "created_by"
type = "string"
kind = "field"
field = "__Created by"
read_only = true

[[model]]
name = "Unused"
"#;

fn site(file: &str) -> TestSite {
    let mut builder = models::builder();
    builder.mapping_file(file.parse::<MappingFile>().unwrap());
    TestSite::with_builder(builder)
}

#[test]
fn file_declaration_replaces_code_first() {
    let site = site(NOTE_BODY);

    let home: models::Folder = site.mapper.get_item_by_id(site.home).unwrap().unwrap();
    site.log.clear();

    let note: Note = site
        .mapper
        .create_named(&home, &Note::new("memo", "Remember this"))
        .unwrap();

    assert_eq!(note.text, "Remember this");
    assert_eq!(
        site.log.field_writes(),
        vec![("Body".to_string(), "Remember this".to_string())]
    );

    // Models the file does not mention keep their code-first declaration
    let page: Page = site.mapper.get_item_by_id(site.welcome).unwrap().unwrap();
    assert_eq!(page.title, "Welcome");
}

#[test]
fn invalid_file_declaration_rejects_only_that_model() {
    let site = site(
        r#"
version = 1

[[model]]
name = "Note"

[[model.property]]
name = "text"
type = "list<list<string>>"
kind = "field"
field = "Body"
"#,
    );

    let err = site.mapper.configuration::<Note>().unwrap_err();
    assert!(err.is_invalid_configuration());
    assert!(err.to_string().contains("collection of collections"), "{err}");

    assert!(site.mapper.configuration::<Page>().is_ok());
}
