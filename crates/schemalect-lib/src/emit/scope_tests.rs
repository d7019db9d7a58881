use crate::emit::{Construct, Scope};

#[test]
fn root_path() {
    let scope = Scope::root();
    assert!(scope.path().is_root());
    assert_eq!(scope.path().to_string(), "<root>");
    assert_eq!(scope.indent(), "");
}

#[test]
fn nested_path_and_depth() {
    let scope = Scope::root()
        .property("request-trigger")
        .item()
        .property("from");
    assert_eq!(scope.path().to_string(), "request-trigger[].from");
    assert_eq!(scope.depth(), 2);
    assert_eq!(scope.indent(), "    ");
    assert_eq!(scope.path().segments().len(), 3);
}

#[test]
fn construct_messages() {
    assert_eq!(Construct::NumberMaximum.to_string(), "a number maximum");
    assert_eq!(
        Construct::OptionalOutsideProperty.to_string(),
        "an optional outside an object property"
    );
}

#[test]
fn item_of_root_is_prefixed() {
    let scope = Scope::root().item();
    assert_eq!(scope.path().to_string(), "<root>[]");
}
