#![no_main]

use libfuzzer_sys::fuzz_target;
use symrealm::{JsValue, PropertyKey, Realm, RealmOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    if source.len() > 10_000 {
        return;
    }

    let strict = source.len() % 2 == 0;
    let realm = Realm::with_options(RealmOptions::default().with_strict(strict));

    // Every line is a registry key; registering twice must yield the same symbol
    for line in source.lines() {
        let key = JsValue::from(line);
        let sym = realm.symbol_for(&key);
        assert_eq!(realm.symbol_for(&key), sym);

        let found = realm.symbol_key_for(&JsValue::Symbol(sym.clone())).unwrap();
        assert_eq!(found.as_ref().map(|k| k.as_str()), Some(line));

        // Writes to a primitive symbol never stick
        let target = JsValue::Symbol(sym);
        let result = realm.put(&target, PropertyKey::from(line), JsValue::Null);
        assert_eq!(result.is_err(), strict);
        assert!(realm.own_keys_with_symbols(&target).unwrap().is_empty());
    }
});
