use bson::{Bson, doc};
use nexus_model::options::UpdateOptions;
use proptest::prelude::*;

const LABELS: [&str; 9] = [
    "upsert=",
    ", bypassDocumentValidation=",
    ", collation=",
    ", arrayFilters=",
    ", hint=",
    ", hintString=",
    ", comment=",
    ", let=",
    ", sort=",
];

proptest! {
    #[test]
    fn prop_getters_return_last_set_value(
        upsert in any::<bool>(),
        bypass in proptest::option::of(any::<bool>()),
        with_hint in any::<bool>(),
        hint_name in proptest::option::of("[a-z_0-9]{1,12}"),
        comment in proptest::option::of(".{0,16}"),
        sort_dir in proptest::option::of(prop_oneof![Just(1), Just(-1)]),
    ) {
        let opts = UpdateOptions::new()
            .upsert(!upsert)
            .bypass_document_validation(Some(true))
            .hint_string("stale".to_string())
            .upsert(upsert)
            .bypass_document_validation(bypass)
            .hint(with_hint.then(|| doc! { "email": 1 }))
            .hint_string(hint_name.clone())
            .comment(comment.clone())
            .sort(sort_dir.map(|d: i32| doc! { "ts": d }));

        prop_assert_eq!(opts.is_upsert(), upsert);
        prop_assert_eq!(opts.get_bypass_document_validation(), bypass);
        prop_assert_eq!(opts.get_hint().cloned(), with_hint.then(|| doc! { "email": 1 }));
        prop_assert_eq!(opts.get_hint_string(), hint_name.as_deref());
        prop_assert_eq!(opts.get_comment().cloned(), comment.map(Bson::String));
        prop_assert_eq!(opts.get_sort().cloned(), sort_dir.map(|d| doc! { "ts": d }));
        prop_assert!(opts.get_collation().is_none());
        prop_assert!(opts.get_let().is_none());
    }

    #[test]
    fn prop_display_order_is_fixed(
        upsert in any::<bool>(),
        bypass in proptest::option::of(any::<bool>()),
        with_hint in any::<bool>(),
        with_filters in any::<bool>(),
        with_let in any::<bool>(),
        hint_name in proptest::option::of("[a-z]{1,6}"),
    ) {
        let opts = UpdateOptions::new()
            .upsert(upsert)
            .bypass_document_validation(bypass)
            .hint(with_hint.then(|| doc! { "h": 1 }))
            .array_filters(with_filters.then(|| vec![doc! { "f.x": 1 }]))
            .let_vars(with_let.then(|| doc! { "v": 2 }))
            .hint_string(hint_name);
        let text = opts.to_string();
        prop_assert!(text.starts_with("UpdateOptions{upsert="), "bad prefix: {}", text);
        prop_assert_eq!(text.chars().last(), Some('}'));
        let mut last = 0;
        for label in LABELS {
            let at = text[last..].find(label).map(|i| i + last);
            prop_assert!(at.is_some(), "missing {} in {}", label, text);
            last = at.unwrap_or(last) + label.len();
        }
    }
}
