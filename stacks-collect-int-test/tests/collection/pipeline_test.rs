use stacks_collect::common::Value;
use stacks_collect::config::CollectConfig;
use stacks_collect::{collect, val, Collection};
use stacks_collect_int_test::test_util::{create_orders, create_settings, key_names};

#[test]
fn test_pure_chain_leaves_source_untouched() {
    let orders = create_orders();
    let snapshot = orders.clone();

    let names = orders
        .where_eq("status", "paid")
        .sort_by_desc("id")
        .pluck("customer.name")
        .unique();

    assert_eq!(names.to_vec(), vec![val!("Ann")]);
    assert_eq!(orders, snapshot);
}

#[test]
fn test_pure_operations_are_repeatable() {
    let orders = create_orders();
    assert_eq!(orders.sort_by("total"), orders.sort_by("total"));
    assert_eq!(orders.group_by("status"), orders.group_by("status"));
    assert_eq!(orders.pluck("lines.*.sku"), orders.pluck("lines.*.sku"));
}

#[test]
fn test_keyed_pipeline_keeps_keys() {
    let settings = create_settings();
    let scalars = settings.filter(|value| !value.is_array());
    assert_eq!(key_names(&scalars), vec!["theme", "font_size", "autosave"]);

    let rendered = scalars.map(|value| val!(value.to_string()));
    assert!(rendered.is_keyed());
    assert_eq!(rendered.get("font_size"), Some(&val!("14")));

    assert!(settings.values().is_sequence());
}

#[test]
fn test_to_json_round_trips_through_serde() {
    let settings = create_settings();
    let json = settings.to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["theme"], "dark");
    assert_eq!(parsed["plugins"][1], "lint");

    let nested = collect(vec![1, 2, 3, 4]).chunk(2);
    assert_eq!(nested.to_json().unwrap(), "[[1,2],[3,4]]");
}

#[test]
fn test_config_flows_to_derived_collections() {
    let config = CollectConfig::builder().separator('/').build().unwrap();
    let orders = create_orders().with_config(config);

    let cities = orders.where_eq("status", "paid").pluck("customer/city");
    assert_eq!(cities.to_vec(), vec![val!("Lisbon"), val!("Lisbon")]);
    assert_eq!(cities.config().separator(), '/');
}

#[test]
fn test_value_input_modes() {
    let from_array: Collection<Value> = collect(val!([1, 2]));
    let from_record: Collection<Value> = collect(val!({ "a": 1 }));
    assert!(from_array.is_sequence());
    assert!(from_record.is_keyed());
    assert_eq!(from_record.to_value(), val!({ "a": 1 }));
}

#[test]
fn test_pipe_and_reduce_terminate_chain() {
    let orders = create_orders();
    let paid_ids = orders
        .where_eq("status", "paid")
        .pipe(|paid| paid.pluck("id").implode(","));
    assert_eq!(paid_ids, "1,3");

    let line_count = orders.reduce(0, |acc, order, _| {
        let lines = order.as_record().and_then(|r| r.get("lines"));
        acc + lines.and_then(Value::as_array).map_or(0, Vec::len)
    });
    assert_eq!(line_count, 4);
}
