use rand::rngs::StdRng;
use rand::SeedableRng;
use stacks_collect::common::ItemKey;
use stacks_collect::{collect, val, Collection};
use stacks_collect_int_test::test_util::{create_settings, key_names};

#[test]
fn test_mutator_chain_returns_same_collection() {
    let mut c = collect(vec![1, 2]);
    let before: *const Collection<i32> = &c;
    let after: *const Collection<i32> = c.push(3).prepend(0).put(4, 4).forget(0);
    assert_eq!(before, after);
    assert_eq!(c.to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_keyed_mutators() {
    let mut settings = create_settings();
    settings.put("lang", val!("pt")).forget("autosave");
    assert_eq!(
        key_names(&settings),
        vec!["theme", "font_size", "plugins", "lang"]
    );

    let theme = settings.pull("theme");
    assert_eq!(theme, Some(val!("dark")));
    assert!(!settings.has("theme"));

    settings.prepend_with_key("version", val!(2));
    assert_eq!(key_names(&settings)[0], "version");
}

#[test]
fn test_put_past_end_switches_to_keyed() {
    let mut c = collect(vec!['a', 'b']);
    c.put(5, 'z');
    assert!(c.is_keyed());
    assert_eq!(c.get(5), Some(&'z'));
    assert_eq!(c.get(ItemKey::from("0")), Some(&'a'));
}

#[test]
fn test_pop_and_shift() {
    let mut c = collect(vec![1, 2, 3, 4, 5]);
    assert_eq!(c.pop(), Some(5));
    assert_eq!(c.shift(), Some(1));
    assert_eq!(c.pop_many(2).to_vec(), vec![3, 4]);
    assert_eq!(c.to_vec(), vec![2]);
    assert_eq!(c.shift_many(3).to_vec(), vec![2]);
    assert!(c.is_empty());
    assert_eq!(c.pop(), None);
}

#[test]
fn test_splice_returns_removed() {
    let mut c = collect(vec![1, 2, 3, 4, 5]);
    let removed = c.splice(1, Some(2), vec![20, 30, 40]);
    assert_eq!(removed.to_vec(), vec![2, 3]);
    assert_eq!(c.to_vec(), vec![1, 20, 30, 40, 4, 5]);

    let tail = c.splice(4, None, Vec::new());
    assert_eq!(tail.to_vec(), vec![4, 5]);
}

#[test]
fn test_transform_in_place() {
    let mut c = collect(vec![1, 2, 3]);
    c.transform(|n, _| n * 10).push(40);
    assert_eq!(c.to_vec(), vec![10, 20, 30, 40]);
}

#[test]
fn test_seeded_shuffle_keeps_items() {
    let mut c = collect((1..=10).collect::<Vec<i32>>());
    c.shuffle_with(&mut StdRng::seed_from_u64(7));
    assert_eq!(c.count(), 10);
    assert_eq!(c.sort().to_vec(), (1..=10).collect::<Vec<i32>>());

    let mut again = collect((1..=10).collect::<Vec<i32>>());
    again.shuffle_with(&mut StdRng::seed_from_u64(7));
    assert_eq!(c, again);
}

#[test]
fn test_conditional_mutation() {
    let mut c: Collection<i32> = Collection::new();
    c.when_empty(|c| {
        c.push(1);
    })
    .when(false, |c| {
        c.push(99);
    })
    .unless(false, |c| {
        c.push(2);
    })
    .times(2, |i| i as i32 * 100);
    assert_eq!(c.to_vec(), vec![1, 2, 100, 200]);
}
