use crate::{
    bson::doc,
    coll::{options::CountOptions, Namespace},
    operation::{test, Count, Operation},
};

#[test]
fn build() {
    let ns = Namespace {
        db: "test_db".to_string(),
        coll: "test_coll".to_string(),
    };
    let mut count_op = Count::new(ns, doc! {}, None);
    let count_command = count_op.build().expect("error on build");
    assert_eq!(
        count_command.body,
        doc! {
            "count": "test_coll",
        }
    );
    assert_eq!(count_command.target_db, "test_db");
}

#[test]
fn build_with_query_and_options() {
    let mut options = CountOptions::new();
    options.set_limit(10).unwrap().set_skip(2).unwrap();
    let mut count_op = Count::new(Namespace::empty(), doc! { "a": 1 }, Some(options));
    let count_command = count_op.build().expect("error on build");
    assert_eq!(
        count_command.body,
        doc! {
            "count": "",
            "query": { "a": 1 },
            "skip": 2_i64,
            "limit": 10_i64,
        }
    );
}

#[test]
fn op_read_preference() {
    test::op_read_preference(|read_preference| {
        let mut options = CountOptions::new();
        if let Some(read_preference) = read_preference {
            options.set_read_preference(read_preference).unwrap();
        }
        Count::new(Namespace::empty(), doc! {}, Some(options))
    });
}

#[test]
fn handle_success() {
    let count_op = Count::new(Namespace::empty(), doc! {}, None);

    let n = 26;
    let response = doc! { "ok": 1.0, "n": n as i32 };

    let actual_values = count_op.handle_response(response).unwrap();
    assert_eq!(actual_values, n);
}

#[test]
fn handle_response_no_n() {
    let count_op = Count::new(Namespace::empty(), doc! {}, None);
    count_op.handle_response(doc! { "ok": 1.0 }).unwrap_err();
}
