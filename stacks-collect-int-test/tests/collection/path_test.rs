use stacks_collect::common::Value;
use stacks_collect::config::CollectConfig;
use stacks_collect::path::resolve_str;
use stacks_collect::{collect, val};
use stacks_collect_int_test::test_util::create_orders;

#[test]
fn test_pluck_nested_path() {
    let orders = create_orders();
    assert_eq!(
        orders.pluck("customer.city").to_vec(),
        vec![val!("Lisbon"), val!("Porto"), val!("Lisbon"), Value::Null]
    );
    assert_eq!(orders.pluck("customer.zip").count(), 4);
    assert!(orders.pluck("customer.zip").every(|value, _| value.is_null()));
}

#[test]
fn test_pluck_wildcard_spans_items() {
    let orders = create_orders();
    assert_eq!(
        orders.pluck("lines.*.sku").to_vec(),
        vec![val!("A1"), val!("B7"), val!("A1"), val!("C3")]
    );
    assert_eq!(orders.pluck("lines.*.qty").sum(), 9.0);
}

#[test]
fn test_wildcard_depth_is_exact() {
    let items = collect(vec![val!({ "a": [{ "b": 1 }, { "b": 2 }] })]);
    assert_eq!(items.pluck("a.*.b").to_vec(), vec![val!(1), val!(2)]);
    assert!(items.pluck("a.*.c").is_empty());
    assert!(items.pluck("a.*.b.c").is_empty());
}

#[test]
fn test_pluck_keyed_by_nested_path() {
    let orders = create_orders();
    let totals = orders.pluck_keyed("total", "id");
    assert_eq!(totals.keys().to_vec(), vec!["1", "2", "3", "4"]);
    assert_eq!(totals.get("3"), Some(&val!("44.5")));

    let last_by_customer = orders.pluck_keyed("id", "customer.name");
    assert_eq!(last_by_customer.get("Ann"), Some(&val!(3)));
}

#[test]
fn test_resolve_through_arrays() {
    let config = CollectConfig::default();
    let order = val!({ "lines": [{ "sku": "A1" }, { "sku": "B7" }] });
    assert_eq!(resolve_str(&order, "lines.1.sku", &config), Some(&val!("B7")));
    assert_eq!(resolve_str(&order, "lines.9.sku", &config), None);
    assert_eq!(resolve_str(&order, "lines.x", &config), None);
}

#[test]
fn test_undot_builds_nested_records() {
    let flat = collect(val!({ "db.host": "localhost", "db.port": 5432, "debug": true }));
    let nested = flat.undot().unwrap();
    assert_eq!(nested.get("db"), Some(&val!({ "host": "localhost", "port": 5432 })));
    assert_eq!(nested.get("debug"), Some(&val!(true)));
}

#[test]
fn test_flatten_terminates_without_nesting() {
    let deep = collect(vec![val!([1, [2, [3, [4, { "k": [5] }]]]]), val!(6)]);
    let flat = deep.flatten(None);
    assert!(flat.every(|value, _| !value.is_nested()));
    assert_eq!(flat.to_vec(), vec![val!(1), val!(2), val!(3), val!(4), val!(5), val!(6)]);

    let one_level = deep.flatten(Some(1));
    assert_eq!(one_level.count(), 3);
}
