use kcv::Document;
use pretty_assertions::assert_eq;

#[test]
fn yes() {
    let mut doc = Document::new();
    doc.item("b").write(true);
    assert_eq!(doc.dump(), "b: yes\n");
}

#[test]
fn no() {
    let mut doc = Document::new();
    doc.item("b").write(false);
    assert_eq!(doc.dump(), "b: no\n");
}
