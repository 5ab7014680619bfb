use stacks_collect::{collect, val, Collection};
use stacks_collect_int_test::test_util::{create_orders, is_sorted};

#[test]
fn test_chunk_is_exhaustive() {
    for size in 1..=7 {
        let c = collect((0..17).collect::<Vec<i32>>());
        let chunks = c.chunk(size);
        assert!(chunks.iter().all(|chunk| chunk.count() <= size));
        let rejoined: Vec<i32> = chunks.iter().flat_map(|chunk| chunk.to_vec()).collect();
        assert_eq!(rejoined, c.to_vec(), "size {}", size);
    }
    assert!(collect(vec![1, 2]).chunk(0).is_empty());
}

#[test]
fn test_group_by_status() {
    let groups = create_orders().group_by("status");
    assert_eq!(groups.keys().to_vec(), vec!["paid", "open", "cancelled"]);
    let paid_ids = groups.get("paid").map(|paid| paid.pluck("id").to_vec());
    assert_eq!(paid_ids, Some(vec![val!(1), val!(3)]));
}

#[test]
fn test_count_by_repeats() {
    let counts = collect(vec![1, 2, 2, 3, 3, 3]).count_by();
    assert_eq!(counts.to_json().unwrap(), r#"{"1":1,"2":2,"3":3}"#);

    let by_city = create_orders().pluck("customer.city").count_by();
    assert_eq!(by_city.get("Lisbon"), Some(&2));
    assert_eq!(by_city.get("null"), Some(&1));
}

#[test]
fn test_partition_evens_and_odds() {
    let (evens, odds) = collect(vec![1, 2, 3, 4, 5, 6]).partition(|n| n % 2 == 0);
    assert_eq!(evens.to_vec(), vec![2, 4, 6]);
    assert_eq!(odds.to_vec(), vec![1, 3, 5]);
}

#[test]
fn test_split_and_for_page() {
    let c = collect((1..=10).collect::<Vec<i32>>());
    let sizes: Vec<usize> = c.split(3).iter().map(Collection::count).collect();
    assert_eq!(sizes, vec![3, 3, 4]);
    assert_eq!(c.for_page(2, 4).to_vec(), vec![5, 6, 7, 8]);
    assert_eq!(c.for_page(3, 4).to_vec(), vec![9, 10]);
}

#[test]
fn test_cross_join_product_size() {
    let colors = collect(vec!["red", "blue"]);
    let sizes = collect(vec!["S", "M", "L"]);
    let fits = collect(vec!["slim", "wide"]);
    let rows = colors.cross_join(&[&sizes, &fits]);
    assert_eq!(rows.count(), 12);
    assert_eq!(rows.first(), Some(&vec!["red", "S", "slim"]));
    assert_eq!(rows.last(), Some(&vec!["blue", "L", "wide"]));
}

#[test]
fn test_zip_and_combine() {
    let keys = collect(vec!["a", "b", "c"]);
    let zipped = keys.zip(&collect(vec![1, 2]));
    assert_eq!(zipped.last(), Some(&(Some("c"), None)));

    let combined = keys.combine(&[1, 2, 3]);
    assert!(combined.is_keyed());
    assert_eq!(combined.get("b"), Some(&2));
}

#[test]
fn test_sort_by_and_key_by() {
    let orders = create_orders();
    let ids: Vec<i64> = orders
        .sort_by_desc("customer.name")
        .pluck("id")
        .iter()
        .filter_map(|id| id.as_i64())
        .collect();
    assert_eq!(ids, vec![4, 2, 1, 3]);

    let totals = collect(vec![5.5, 1.0, 3.25]).sort_with(|a: &f64, b: &f64| a.total_cmp(b));
    assert!(is_sorted(&totals.to_vec()));

    let by_id = orders.key_by("id");
    assert_eq!(by_id.keys().to_vec(), vec!["1", "2", "3", "4"]);
}
