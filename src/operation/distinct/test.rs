use pretty_assertions::assert_eq;

use crate::{
    bson::{doc, Bson},
    coll::{options::DistinctOptions, Namespace},
    error::ErrorKind,
    operation::{test, Distinct, Operation},
    options::ReadPreference,
};

fn namespace() -> Namespace {
    Namespace {
        db: "test_db".to_string(),
        coll: "test_coll".to_string(),
    }
}

#[test]
fn build() {
    let field_name = "field_name".to_string();
    let mut distinct_op = Distinct::new(namespace(), field_name.clone(), doc! {}, None);
    let distinct_command = distinct_op.build().expect("error on build");
    assert_eq!(
        distinct_command.body,
        doc! {
            "distinct": "test_coll",
            "key": field_name
        }
    );
    assert_eq!(distinct_command.name, "distinct");
    assert_eq!(distinct_command.target_db, "test_db");
}

#[test]
fn build_with_query() {
    let field_name = "field_name".to_string();
    let query = doc! {"something" : "something else"};
    let mut distinct_op = Distinct::new(namespace(), field_name.clone(), query.clone(), None);
    let distinct_command = distinct_op.build().expect("error on build");
    assert_eq!(
        distinct_command.body,
        doc! {
            "distinct": "test_coll",
            "key": field_name,
            "query": Bson::Document(query)
        }
    );
}

#[test]
fn build_with_options() {
    let field_name = "field_name".to_string();
    let mut options = DistinctOptions::new();
    options
        .set_max_time_ms(2000)
        .unwrap()
        .set_read_preference(ReadPreference::Nearest { options: None })
        .unwrap();
    let mut distinct_op = Distinct::new(namespace(), field_name.clone(), doc! {}, Some(options));
    let distinct_command = distinct_op.build().expect("error on build");

    assert_eq!(
        distinct_command.body,
        doc! {
            "distinct": "test_coll",
            "key": field_name,
            "maxTimeMS": 2000_i64
        }
    );
}

#[test]
fn build_with_empty_options() {
    let mut distinct_op = Distinct::new(
        namespace(),
        "x".to_string(),
        doc! {},
        Some(DistinctOptions::new()),
    );
    let distinct_command = distinct_op.build().expect("error on build");
    assert_eq!(
        distinct_command.body,
        doc! { "distinct": "test_coll", "key": "x" }
    );
}

#[test]
fn op_read_preference() {
    test::op_read_preference(|read_preference| {
        let mut options = DistinctOptions::new();
        if let Some(read_preference) = read_preference {
            options.set_read_preference(read_preference).unwrap();
        }
        Distinct::new(Namespace::empty(), String::new(), doc! {}, Some(options))
    });
}

#[test]
fn handle_success() {
    let distinct_op = Distinct::new(Namespace::empty(), String::new(), doc! {}, None);

    let expected_values: Vec<Bson> =
        vec![Bson::String("A".to_string()), Bson::String("B".to_string())];

    let response = doc! {
       "values" : expected_values.clone(),
       "ok" : 1
    };

    let actual_values = distinct_op.handle_response(response).unwrap();
    assert_eq!(actual_values, expected_values);
}

#[test]
fn handle_response_with_empty_values() {
    let distinct_op = Distinct::new(Namespace::empty(), String::new(), doc! {}, None);

    let response = doc! {
       "values" : [],
       "ok" : 1
    };

    let expected_values: Vec<Bson> = Vec::new();
    let actual_values = distinct_op.handle_response(response).unwrap();
    assert_eq!(actual_values, expected_values);
}

#[test]
fn handle_response_no_values() {
    let distinct_op = Distinct::new(Namespace::empty(), String::new(), doc! {}, None);

    let response = doc! {
       "ok" : 1
    };

    let result = distinct_op.handle_response(response);
    match result.map_err(|e| *e.kind) {
        Err(ErrorKind::InvalidResponse { .. }) => {}
        other => panic!("expected response error, but got {:?}", other),
    }
}
