use crate::{
    bson::doc,
    error::ErrorKind,
    operation::{parse_response, Operation},
    options::ReadPreference,
};

pub(crate) fn op_read_preference<F, T>(constructor: F)
where
    T: Operation,
    F: Fn(Option<ReadPreference>) -> T,
{
    let op = constructor(None);
    assert_eq!(op.read_preference(), None);

    let read_pref = ReadPreference::Secondary {
        options: Default::default(),
    };

    let op = constructor(Some(read_pref.clone()));
    assert_eq!(op.read_preference(), Some(&read_pref));
}

#[test]
fn response_success() {
    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Body {
        some: String,
        other: bool,
    }

    let body: Body = parse_response(doc! {
        "ok": 1,
        "some": "field",
        "other": true,
    })
    .unwrap();
    assert_eq!(
        body,
        Body {
            some: "field".to_string(),
            other: true,
        }
    );
}

#[test]
fn response_failure() {
    let error = parse_response::<crate::bson::Document>(doc! {
        "ok": 0,
        "code": 2,
        "codeName": "BadValue",
        "errmsg": "maxTimeMS must be non-negative",
        "errorLabels": ["SomeLabel"],
    })
    .unwrap_err();

    match *error.kind {
        ErrorKind::Command(ref command_error) => {
            assert_eq!(command_error.code, 2);
            assert_eq!(command_error.code_name, "BadValue");
            assert_eq!(command_error.message, "maxTimeMS must be non-negative");
        }
        ref other => panic!("expected command error, got {:?}", other),
    }
    assert!(error.contains_label("SomeLabel"));
    assert!(!error.is_caller_contract_violation());
}

#[test]
fn response_failure_without_error() {
    let error = parse_response::<crate::bson::Document>(doc! { "ok": 0 }).unwrap_err();
    assert!(matches!(*error.kind, ErrorKind::InvalidResponse { .. }));
}
