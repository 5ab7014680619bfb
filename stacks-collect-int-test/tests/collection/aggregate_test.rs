use stacks_collect::collection::MacroRegistry;
use stacks_collect::common::Value;
use stacks_collect::errors::ErrorKind;
use stacks_collect::{collect, val};
use stacks_collect_int_test::test_util::create_orders;

#[test]
fn test_sum_reads_numeric_strings() {
    let orders = create_orders();
    assert_eq!(orders.sum_by("total"), 200.0);
    assert_eq!(orders.where_eq("status", "paid").sum_by("total"), 165.0);
    assert_eq!(orders.average_by("total"), 50.0);
}

#[test]
fn test_sum_non_numeric_is_nan() {
    let orders = create_orders();
    assert!(orders.sum_by("status").is_nan());
    assert!(orders.sum_by("missing").is_nan());
    assert!(orders.pluck("customer.name").average().is_nan());
}

#[test]
fn test_min_max_median_mode() {
    let orders = create_orders();
    assert_eq!(orders.min_by("total"), Some(0.0));
    assert_eq!(orders.max_by("total"), Some(120.5));
    assert_eq!(orders.median_by("total"), Some(39.75));
    assert_eq!(orders.mode_by("customer.name"), Some(vec![val!("Ann")]));
    assert_eq!(collect(Vec::<Value>::new()).mode(), None);
}

#[test]
fn test_join_names() {
    let names = create_orders().pluck("customer.name").unique();
    assert_eq!(names.join_with_final(", ", " and "), "Ann, Bob and Cid");
    assert_eq!(create_orders().implode_by("id", "|"), "1|2|3|4");
}

#[test]
fn test_registered_macro() {
    let mut registry = MacroRegistry::<Value>::new();
    registry.register("revenue", |orders, args| {
        let status = args.first().and_then(Value::as_str).unwrap_or("paid");
        val!(orders.where_eq("status", status).sum_by("total"))
    });

    let orders = create_orders();
    assert_eq!(orders.call_macro(&registry, "revenue", &[]).unwrap(), val!(165));
    assert_eq!(
        orders.call_macro(&registry, "revenue", &[val!("open")]).unwrap(),
        val!(35)
    );
    let err = orders.call_macro(&registry, "refunds", &[]).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnknownMacro);
}
