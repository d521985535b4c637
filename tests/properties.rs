//! Registry properties over generated definitions and tables

use arbitrait::prelude::*;
use arbitrait::Method;
use proptest::prelude::*;
use proptest::sample::{select, subsequence};

const NAMES: [&str; 6] = ["write", "writeln", "flush", "seek", "close", "peek"];

fn keys() -> Vec<TypeKey> {
    type_keys![u8, u16, u32, u64, i8, String, Vec<u8>, ()].to_vec()
}

// A do-nothing method taking `arity` arguments.
fn noop(arity: usize) -> Method {
    match arity {
        0 => Method::new(|_: &Interface<'_>| -> Result<()> { Ok(()) }),
        1 => Method::new(|_: &Interface<'_>, _: u8| -> Result<()> { Ok(()) }),
        2 => Method::new(|_: &Interface<'_>, _: u8, _: u8| -> Result<()> { Ok(()) }),
        _ => Method::new(|_: &Interface<'_>, _: u8, _: u8, _: u8| -> Result<()> { Ok(()) }),
    }
}

fn abstract_trait(names: &[&'static str], arity: usize) -> Trait {
    let def = names
        .iter()
        .fold(TraitDefinition::new("Gen"), |def, &name| def.required(name, arity));
    Trait::new(def)
}

fn complete(names: &[&'static str], arity: usize) -> Overrides {
    names
        .iter()
        .fold(Overrides::new(), |o, &name| o.with(name, noop(arity)))
}

proptest! {
    #[test]
    fn registering_one_type_leaves_others(picked in subsequence(keys(), 0..=8)) {
        let t = Trait::new(TraitDefinition::new("Marker"));
        t.implement(picked.clone(), Overrides::new()).unwrap();
        for key in keys() {
            prop_assert_eq!(t.implemented_for(key), picked.contains(&key));
        }
    }

    #[test]
    fn second_registration_always_duplicate(
        names in subsequence(NAMES.to_vec(), 1..=4),
        arity in 0usize..=3,
        second in 0usize..=3,
    ) {
        let t = abstract_trait(&names, arity);
        t.implement_for::<u8>(complete(&names, arity)).unwrap();
        let again = t.implement_for::<u8>(complete(&names, second));
        let is_duplicate = matches!(again, Err(TraitError::AlreadyImplemented { .. }));
        prop_assert!(is_duplicate);
    }

    #[test]
    fn unknown_name_reported_first(
        names in subsequence(NAMES.to_vec(), 1..=5),
        arity in 0usize..=3,
        bogus in select(vec!["bogus", "mogwaiRocks", "Write"]),
    ) {
        // Abstract methods are left out and the arity is wrong, yet the unknown name wins.
        let t = abstract_trait(&names, arity);
        let table = Overrides::new()
            .with(names[0], noop((arity + 1) % 4))
            .with(bogus, noop(0));
        let err = t.implement_for::<u8>(table).unwrap_err();
        prop_assert_eq!(err, TraitError::UnknownMethod { trait_name: "Gen", method: bogus });
    }

    #[test]
    fn missing_abstract_names_first_gap(
        names in subsequence(NAMES.to_vec(), 2..=6),
        skip in any::<prop::sample::Index>(),
        arity in 0usize..=3,
    ) {
        let missing = names[skip.index(names.len())];
        let given: Vec<&'static str> = names.iter().copied().filter(|n| *n != missing).collect();
        let t = abstract_trait(&names, arity);
        let err = t.implement_for::<Vec<u8>>(complete(&given, arity)).unwrap_err();
        match err {
            TraitError::MissingImplementation { method, type_name, .. } => {
                prop_assert_eq!(method, missing);
                prop_assert!(type_name.contains("Vec"));
            }
            other => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }

    #[test]
    fn wrong_arity_always_rejected(
        names in subsequence(NAMES.to_vec(), 1..=6),
        expected in 0usize..=3,
        found in 0usize..=3,
        which in any::<prop::sample::Index>(),
    ) {
        prop_assume!(expected != found);
        let bad = names[which.index(names.len())];
        let t = abstract_trait(&names, expected);
        let mut table = complete(&names, expected);
        table.insert(bad, noop(found));
        let err = t.implement_for::<u8>(table).unwrap_err();
        prop_assert_eq!(
            err,
            TraitError::SignatureMismatch { trait_name: "Gen", method: bad, expected, found }
        );
        prop_assert!(!t.is_implemented_for::<u8>());
    }

    #[test]
    fn copy_succeeds_iff_source_registered(source_registered in any::<bool>()) {
        let t = Trait::new(
            TraitDefinition::new("Id")
                .required("id", 0),
        );
        if source_registered {
            t.implement_for::<u8>(Overrides::new().with("id", |_: &Interface<'_>| -> Result<u32> { Ok(7) }))
                .unwrap();
        }
        let copied = t.implement_for::<u16>(TypeKey::of::<u8>());
        prop_assert_eq!(copied.is_ok(), source_registered);
        if source_registered {
            let a = t.dispatch(&1u8).unwrap().call::<u32>("id", ()).unwrap();
            let b = t.dispatch(&1u16).unwrap().call::<u32>("id", ()).unwrap();
            prop_assert_eq!(a, b);
        } else {
            let not_impl = matches!(t.dispatch(&1u16), Err(TraitError::NotImplemented { .. }));
            prop_assert!(not_impl);
        }
    }
}
