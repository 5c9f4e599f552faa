//! End-to-end tests driving the builtin catalogue through registry
//! dispatch, the way an evaluator would.

use pretty_assertions::assert_eq;
use weft_filters::{FilterErrorKind, FilterRegistry, Value};

fn apply(registry: &FilterRegistry, name: &str, input: &Value, param: &Value) -> Value {
    match registry.apply(name, input, Some(param)) {
        Ok(value) => value,
        Err(err) => panic!("filter '{name}' failed: {err}"),
    }
}

#[test]
fn pipeline_of_chained_filters() {
    let registry = FilterRegistry::with_builtins();

    // {{ name|lower|capfirst|truncatechars:7 }}
    let mut value = Value::string("TEMPLATE engine");
    for (name, param) in [
        ("lower", Value::Nil),
        ("capfirst", Value::Nil),
        ("truncatechars", Value::int(7)),
    ] {
        value = apply(&registry, name, &value, &param);
    }
    assert_eq!(value, Value::string("Temp..."));
}

#[test]
fn escape_then_escape_double_escapes() {
    let registry = FilterRegistry::with_builtins();
    let once = apply(&registry, "escape", &Value::string("&"), &Value::Nil);
    let twice = apply(&registry, "escape", &once, &Value::Nil);
    assert_eq!(once, Value::string("&amp;"));
    assert_eq!(twice, Value::string("&amp;amp;"));
}

#[test]
fn absent_parameter_reaches_filters_as_nil() {
    let registry = FilterRegistry::with_builtins();
    // Every filter must tolerate a missing parameter; spot-check a few that
    // read it.
    assert_eq!(
        registry.apply("default", &Value::string(""), None),
        Ok(Value::Nil)
    );
    assert_eq!(
        registry.apply("pluralize", &Value::int(2), None),
        Ok(Value::string("s"))
    );
    assert_eq!(
        registry.apply("join", &Value::string("scalar"), None),
        Ok(Value::string("scalar"))
    );
    assert_eq!(
        registry.apply("yesno", &Value::Nil, None),
        Ok(Value::string("maybe"))
    );
}

#[test]
fn time_is_an_alias_for_date() {
    let registry = FilterRegistry::with_builtins();
    let dt = chrono::NaiveDate::from_ymd_opt(2014, 2, 5)
        .and_then(|d| d.and_hms_opt(18, 31, 45))
        .unwrap_or_default();
    let input = Value::datetime(dt);
    let fmt = Value::string("%H:%M");
    assert_eq!(
        registry.apply("time", &input, Some(&fmt)),
        registry.apply("date", &input, Some(&fmt))
    );
    assert_eq!(
        registry.apply("time", &input, Some(&fmt)),
        Ok(Value::string("18:31"))
    );
}

#[test]
fn runtime_errors_are_results_not_panics() {
    let registry = FilterRegistry::with_builtins();

    let unknown = registry.apply("nonexistent", &Value::Nil, None);
    assert!(matches!(
        unknown.err().map(|e| e.kind),
        Some(FilterErrorKind::UnknownFilter { .. })
    ));

    let mismatch = registry.apply("date", &Value::int(5), Some(&Value::string("%Y")));
    assert!(matches!(
        mismatch.err().map(|e| e.kind),
        Some(FilterErrorKind::TypeMismatch { .. })
    ));

    let cardinality = registry.apply(
        "yesno",
        &Value::Bool(true),
        Some(&Value::string("a,b,c,d")),
    );
    assert!(matches!(
        cardinality.err().map(|e| e.kind),
        Some(FilterErrorKind::ArgumentCount { .. })
    ));
}
