use kcv::Document;

#[test]
fn yes() {
    let mut b = false;
    let mut doc = Document::parse("b:yes");
    doc.item("b").read(&mut b);
    assert!(b);
}

#[test]
fn no() {
    let mut b = true;
    let mut doc = Document::parse("b:no");
    doc.item("b").read(&mut b);
    assert!(!b);
}

#[test]
fn number_instead_of_bool() {
    let mut b = false;
    let mut doc = Document::parse("b:1");
    let mut item = doc.item("b");
    assert!(item.is_valid());
    item.read(&mut b);
    assert!(!item.is_valid());
    assert!(!b);
}

#[test]
fn string_instead_of_bool() {
    let mut b = false;
    let mut doc = Document::parse("b:\"yes\"");
    let mut item = doc.item("b");
    assert!(item.is_valid());
    item.read(&mut b);
    assert!(!item.is_valid());
    assert!(!b);
}

#[test]
fn true_instead_of_yes() {
    let doc = Document::parse("b:true");
    assert!(!doc.is_valid());
}

#[test]
fn uppercase_instead_of_lowercase() {
    let doc = Document::parse("b:YES");
    assert!(!doc.is_valid());
}
