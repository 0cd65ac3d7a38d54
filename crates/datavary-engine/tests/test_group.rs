use datavary_engine::{
    DataSpec, GeneratorEntry, Pass, Registry, TestGroup, TestPlan, VariationError,
    VariationOptions,
};
use datavary_registry::base_data_types;
use serde::Deserialize;

fn blog_spec() -> DataSpec {
    DataSpec::new()
        .field("postName", "title")
        .field("postContent", "paragraph")
        .field("likeCount", "integer")
        .field("username", GeneratorEntry::new(["sample-username"]))
}

#[test]
fn empty_selection_runs_once_without_data() {
    let registry = base_data_types(1);
    let group = TestGroup::register(&registry, blog_spec()).expect("register");

    let plan = group.plan("get started link", &[]).expect("plan");
    assert!(matches!(plan, TestPlan::Single { ref title } if title == "get started link"));
    assert_eq!(plan.invocations(), 1);
    assert!(plan.cases().is_empty());
}

#[test]
fn selected_fields_produce_named_cases() {
    let registry = base_data_types(1);
    let group = TestGroup::register(&registry, blog_spec()).expect("register");

    let plan = group.plan("has title", &["postName"]).expect("plan");
    let cases = plan.cases();

    // title: 1 valid + 2 edge, then the invalid fallback row.
    assert_eq!(cases.len(), 4);
    let names: Vec<&str> = cases.iter().map(|case| case.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Variation 1", "Variation 2", "Variation 3", "Variation 4"]
    );
    assert!(cases.iter().all(|case| case.variation.len() == 1));
    assert_eq!(
        cases[0].variation.get("postName").and_then(|value| value.as_str()),
        Some("An Example Title")
    );
    assert_eq!(cases[3].pass, Pass::Invalid);
    assert!(!cases[3].expects_rejection());
}

#[test]
fn selection_keeps_declaration_order() {
    let registry = base_data_types(1);
    let group = TestGroup::register(&registry, blog_spec()).expect("register");

    let plan = group
        .plan("profile", &["username", "likeCount"])
        .expect("plan");
    let fields: Vec<&str> = plan.cases()[0].variation.fields().collect();
    assert_eq!(fields, vec!["likeCount", "username"]);
}

#[test]
fn undeclared_field_is_orchestration_misuse() {
    let registry = base_data_types(1);
    let group = TestGroup::register(&registry, blog_spec()).expect("register");

    let err = group.plan("broken", &["postName", "avatar"]).expect_err("misuse");
    assert!(matches!(err, VariationError::OrchestrationMisuse { field } if field == "avatar"));
}

#[test]
fn registration_rejects_unknown_types() {
    let registry = base_data_types(1);
    let spec = blog_spec().field("birthday", "date");

    let err = TestGroup::register(&registry, spec).expect_err("unknown type");
    assert!(matches!(err, VariationError::UnknownType { type_name, .. } if type_name == "date"));
}

#[test]
fn invalid_cases_expect_rejection() {
    let registry = Registry::default();
    let spec = DataSpec::new()
        .field("c", GeneratorEntry::new(["v1"]))
        .field("d", GeneratorEntry::new(["v2"]).with_invalid(["bad"]));
    let group = TestGroup::register(&registry, spec).expect("register");

    let plan = group.plan("form", &["c", "d"]).expect("plan");
    let flags: Vec<bool> = plan.cases().iter().map(|case| case.expects_rejection()).collect();
    assert_eq!(flags, vec![false, true]);
}

#[test]
fn strict_groups_surface_coverage_errors_when_planning() {
    let registry = base_data_types(1);
    let group = TestGroup::register(&registry, blog_spec())
        .expect("register")
        .with_options(VariationOptions { strict: true });

    let err = group.plan("has title", &["postName"]).expect_err("strict");
    assert!(matches!(err, VariationError::Strict(_)));
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Post {
    post_name: String,
    like_count: i64,
}

#[test]
fn cases_decode_into_typed_inputs() {
    let registry = base_data_types(1);
    let group = TestGroup::register(&registry, blog_spec()).expect("register");

    let plan = group.plan("typed", &["postName", "likeCount"]).expect("plan");
    let posts: Vec<Post> = plan
        .cases()
        .iter()
        .map(|case| case.variation.decode().expect("decode case"))
        .collect();

    assert_eq!(posts[0].post_name, "An Example Title");
    assert_eq!(posts[1].like_count, datavary_registry::builtin::MAX_SAFE_INTEGER);
}

#[test]
fn invalid_only_field_never_reaches_valid_edge_cases() {
    let registry = Registry::default();
    let spec = DataSpec::new()
        .field("a", GeneratorEntry::new(["x", "y"]))
        .field("b", GeneratorEntry::default().with_invalid(["bad"]));
    let group = TestGroup::register(&registry, spec).expect("register");

    let err = group.plan("t", &["a", "b"]).expect_err("b has no valid or edge values");
    assert!(matches!(err, VariationError::NoExampleValues { field } if field == "b"));

    let plan = group.plan("t", &["b"]).expect("invalid-only selection");
    let passes: Vec<Pass> = plan.cases().iter().map(|case| case.pass).collect();
    assert_eq!(passes, vec![Pass::Invalid]);
    assert!(plan.cases()[0].expects_rejection());
}
