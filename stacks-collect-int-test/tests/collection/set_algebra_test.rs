use stacks_collect::{collect, val};
use stacks_collect_int_test::test_util::{create_orders, create_settings, key_names};

#[test]
fn test_merge_settings_overrides() {
    let defaults = create_settings();
    let user = collect(val!({ "theme": "light", "tab_width": 4 }));
    let merged = defaults.merge(&user);

    assert_eq!(merged.get("theme"), Some(&val!("light")));
    assert_eq!(
        key_names(&merged),
        vec!["theme", "font_size", "autosave", "plugins", "tab_width"]
    );
    assert_eq!(defaults.get("theme"), Some(&val!("dark")));

    let kept = defaults.union(&user);
    assert_eq!(kept.get("theme"), Some(&val!("dark")));
    assert_eq!(kept.count(), 5);
}

#[test]
fn test_merge_recursive_settings() {
    let base = collect(val!({ "editor": { "font": "mono" }, "plugins": ["git"] }));
    let extra = collect(val!({ "editor": { "size": 12 }, "plugins": ["lint"] }));
    let merged = base.merge_recursive(&extra);
    assert_eq!(merged.get("editor"), Some(&val!({ "font": "mono", "size": 12 })));
    assert_eq!(merged.get("plugins"), Some(&val!(["git", "lint"])));

    let replaced = base.replace_recursive(&extra);
    assert_eq!(replaced.get("editor"), Some(&val!({ "font": "mono", "size": 12 })));
    assert_eq!(replaced.get("plugins"), Some(&val!(["lint"])));
}

#[test]
fn test_unique_is_idempotent() {
    let statuses = create_orders().pluck("status");
    let once = statuses.unique();
    assert_eq!(once.to_vec(), vec![val!("paid"), val!("open"), val!("cancelled")]);
    assert_eq!(once.unique(), once);
    assert_eq!(statuses.duplicates().unwrap().to_vec(), vec![val!("paid")]);
}

#[test]
fn test_diff_and_intersect_values() {
    let skus = create_orders().pluck("lines.*.sku").unique();
    let stocked = vec![val!("A1"), val!("C3")];
    assert_eq!(skus.diff(&stocked).to_vec(), vec![val!("B7")]);
    assert_eq!(skus.intersect(&stocked).to_vec(), vec![val!("A1"), val!("C3")]);
}

#[test]
fn test_key_set_operations() {
    let settings = create_settings();
    let shown = collect(val!({ "theme": null, "plugins": null }));
    assert_eq!(key_names(&settings.intersect_by_keys(&shown)), vec!["theme", "plugins"]);
    assert_eq!(key_names(&settings.diff_keys(&shown)), vec!["font_size", "autosave"]);

    let changed = collect(val!({ "theme": "dark", "font_size": 16 }));
    assert_eq!(
        key_names(&settings.diff_assoc(&changed)),
        vec!["font_size", "autosave", "plugins"]
    );
}

#[test]
fn test_only_and_except() {
    let settings = create_settings();
    assert_eq!(key_names(&settings.only(["plugins", "theme"])), vec!["theme", "plugins"]);
    assert_eq!(key_names(&settings.except(["theme"])).len(), 3);
}
