use crate::{DialectId, Error, Family};

#[test]
fn names_round_trip() {
    for dialect in DialectId::ALL {
        assert_eq!(dialect.name().parse::<DialectId>().unwrap(), dialect);
        assert_eq!(dialect.emitter().dialect(), dialect);
    }
}

#[test]
fn parse_is_case_insensitive_with_aliases() {
    assert_eq!("Zod".parse::<DialectId>().unwrap(), DialectId::Zod);
    assert_eq!(" ArkType ".parse::<DialectId>().unwrap(), DialectId::ArkType);
    assert_eq!("ark".parse::<DialectId>().unwrap(), DialectId::ArkType);
    assert_eq!(
        "@sinclair/typebox".parse::<DialectId>().unwrap(),
        DialectId::TypeBox
    );
}

#[test]
fn unknown_dialect_lists_supported() {
    let err = "yup".parse::<DialectId>().unwrap_err();
    assert_eq!(err, Error::UnknownDialect("yup".to_string()));
    assert_eq!(
        err.to_string(),
        "unknown dialect `yup` (expected one of: zod, valibot, superstruct, arktype, typebox)"
    );
}

#[test]
fn families() {
    assert_eq!(DialectId::Zod.family(), Family::ChainedMethod);
    assert_eq!(DialectId::Valibot.family(), Family::WrappingCall);
    assert_eq!(DialectId::Superstruct.family(), Family::WrappingCall);
    assert_eq!(DialectId::ArkType.family(), Family::EmbeddedExpression);
    assert_eq!(DialectId::TypeBox.family(), Family::Passthrough);
    assert!(DialectId::TypeBox.is_passthrough());
    assert_eq!(Family::WrappingCall.to_string(), "wrapping-call");
}
