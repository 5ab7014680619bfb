use stacks_collect::errors::ErrorKind;
use stacks_collect::filter::{field, not, or, where_fn, Operator};
use stacks_collect::{collect, val};
use stacks_collect_int_test::test_util::create_orders;

#[test]
fn test_operator_table() {
    let items = collect(vec![val!({ "v": 1 }), val!({ "v": "1" }), val!({ "v": 2 })]);

    let count = |op: &str| items.where_op("v", op, 1).unwrap().count();
    assert_eq!(count("=="), 2);
    assert_eq!(count("==="), 1);
    assert_eq!(count("!="), 1);
    assert_eq!(count("<>"), 1);
    assert_eq!(count("!=="), 2);
    assert_eq!(count("<"), 0);
    assert_eq!(count("<="), 1);
    assert_eq!(count(">"), 1);
    assert_eq!(count(">="), 2);
}

#[test]
fn test_unknown_operator_is_an_error() {
    let err = create_orders().where_op("total", "~=", 1).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidOperator);
}

#[test]
fn test_ordered_comparison_skips_mixed_types() {
    let orders = create_orders();
    let large = orders.where_cmp("total", Operator::Gt, 40);
    assert_eq!(large.pluck("id").to_vec(), vec![val!(1)]);
}

#[test]
fn test_where_in_and_between() {
    let orders = create_orders();
    assert_eq!(orders.where_in("status", vec!["open", "cancelled"]).count(), 2);
    assert_eq!(orders.where_not_in("status", vec!["paid"]).count(), 2);
    assert_eq!(
        orders.where_between("id", 2, 3).pluck("id").to_vec(),
        vec![val!(2), val!(3)]
    );
    assert_eq!(orders.where_not_between("id", 2, 3).count(), 2);
}

#[test]
fn test_where_null_and_not_null() {
    let orders = create_orders();
    assert_eq!(orders.where_null("customer.city").pluck("id").to_vec(), vec![val!(4)]);
    assert_eq!(orders.where_not_null("customer.city").count(), 3);
    assert_eq!(orders.where_null("customer.zip").count(), 0);
    assert_eq!(orders.where_not_null("customer.zip").count(), 4);
}

#[test]
fn test_composed_filters() {
    let orders = create_orders();
    let filter = field("status")
        .eq("paid")
        .and(field("customer.city").eq("Lisbon"))
        .or(field("id").eq(2));
    assert_eq!(orders.where_by(&filter).count(), 3);

    let neither = not(or(vec![field("status").eq("paid"), field("status").eq("open")]));
    assert_eq!(orders.where_by(&neither).pluck("id").to_vec(), vec![val!(4)]);

    let has_lines = where_fn(|item, _| {
        item.as_record()
            .and_then(|r| r.get("lines"))
            .and_then(|lines| lines.as_array())
            .is_some_and(|lines| !lines.is_empty())
    });
    assert_eq!(orders.where_by(&has_lines).count(), 3);
}

#[test]
fn test_where_truthy_and_bool() {
    let flags = collect(vec![
        val!({ "on": true, "n": 0 }),
        val!({ "on": false, "n": 3 }),
        val!({ "on": "yes", "n": "" }),
    ]);
    assert_eq!(flags.where_truthy("on").count(), 2);
    assert_eq!(flags.where_bool("on", false).count(), 1);
    assert_eq!(flags.where_truthy("n").count(), 1);
    assert_eq!(flags.pluck("n").filter_truthy().to_vec(), vec![val!(3)]);
}

#[test]
fn test_keyed_where_keeps_keys() {
    let stock = collect(val!({ "apple": { "qty": 3 }, "pear": { "qty": 0 }, "plum": { "qty": 8 } }));
    let available = stock.where_cmp("qty", Operator::Gt, 0);
    assert_eq!(available.keys().to_vec(), vec!["apple", "plum"]);
}
