use indexmap::IndexMap;
use stacks_collect::common::Value;
use stacks_collect::{collect, val, Collection};

/// Orders placed by three customers, as a sequence of records.
pub fn create_orders() -> Collection<Value> {
    collect(vec![
        val!({
            "id": 1,
            "customer": { "name": "Ann", "city": "Lisbon" },
            "status": "paid",
            "total": 120.5,
            "lines": [{ "sku": "A1", "qty": 2 }, { "sku": "B7", "qty": 1 }]
        }),
        val!({
            "id": 2,
            "customer": { "name": "Bob", "city": "Porto" },
            "status": "open",
            "total": 35,
            "lines": [{ "sku": "A1", "qty": 1 }]
        }),
        val!({
            "id": 3,
            "customer": { "name": "Ann", "city": "Lisbon" },
            "status": "paid",
            "total": "44.5",
            "lines": []
        }),
        val!({
            "id": 4,
            "customer": { "name": "Cid", "city": null },
            "status": "cancelled",
            "total": 0,
            "lines": [{ "sku": "C3", "qty": 5 }]
        }),
    ])
}

/// Settings stored as a keyed collection.
pub fn create_settings() -> Collection<Value> {
    let mut map = IndexMap::new();
    map.insert("theme".to_string(), val!("dark"));
    map.insert("font_size".to_string(), val!(14));
    map.insert("autosave".to_string(), val!(true));
    map.insert("plugins".to_string(), val!(["git", "lint"]));
    collect(map)
}

/// The key names of a collection, in order.
pub fn key_names<T>(collection: &Collection<T>) -> Vec<String> {
    collection.keys().to_vec()
}

/// Whether `values` is sorted ascending.
pub fn is_sorted<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[ctor::ctor]
fn init() {
    colog::init();
}
