//! Dispatch: lookup, merge with defaults, binding and invocation

use std::cell::RefCell;

use arbitrait::prelude::*;
use arbitrait::Args;
use pretty_assertions::assert_eq;

#[derive(Default)]
struct Logger {
    lines: RefCell<Vec<String>>,
}

fn write_trait() -> Trait {
    Trait::new(
        TraitDefinition::new("Write")
            .required("write", 1)
            .provided("writeln", |this: &Interface<'_>, s: String| -> Result<()> {
                this.call("write", (s + "\n",))
            }),
    )
}

fn logger_write() -> Overrides {
    Overrides::new().with("write", |this: &Interface<'_>, s: String| -> Result<()> {
        this.receiver::<Logger>()?.lines.borrow_mut().push(s);
        Ok(())
    })
}

#[test]
fn test_writeln_default_calls_override() {
    let write = write_trait();
    write.implement_for::<Logger>(logger_write()).unwrap();

    let logger = Logger::default();
    write
        .dispatch(&logger)
        .unwrap()
        .call::<()>("writeln", ("hi".to_string(),))
        .unwrap();
    assert_eq!(*logger.lines.borrow(), vec!["hi\n".to_string()]);
}

#[test]
fn test_debug_number_override() {
    let debug = Trait::new(
        TraitDefinition::new("Debug")
            .provided("fmt", |_: &Interface<'_>| -> Result<String> { Ok("?".into()) }),
    );
    debug
        .implement_for::<i32>(Overrides::new().with("fmt", |this: &Interface<'_>| -> Result<String> {
            Ok(this.receiver::<i32>()?.to_string())
        }))
        .unwrap();
    assert_eq!(debug.dispatch(&42i32).unwrap().call::<String>("fmt", ()).unwrap(), "42");
}

#[test]
fn test_not_implemented() {
    let write = write_trait();
    let err = write.dispatch(&Logger::default()).unwrap_err();
    assert!(matches!(err, TraitError::NotImplemented { trait_name: "Write", .. }));
    assert!(err.to_string().contains("not implemented for"));
    assert!(err.to_string().contains("Logger"));
}

#[test]
fn test_exact_type_only() {
    let write = write_trait();
    write.implement_for::<Logger>(logger_write()).unwrap();
    // A boxed Logger is a different type.
    let boxed = Box::new(Logger::default());
    assert!(write.dispatch(&boxed).is_err());
    assert!(write.dispatch(&*boxed).is_ok());
}

#[test]
fn test_dispatch_value_erased() {
    let write = write_trait();
    write.implement_for::<Logger>(logger_write()).unwrap();
    let logger = Logger::default();
    let value = Value::of(&logger);
    let iface = write.dispatch_value(value).unwrap();
    assert_eq!(iface.type_key(), TypeKey::of::<Logger>());
    iface.call::<()>("write", ("x".to_string(),)).unwrap();
    assert_eq!(logger.lines.borrow().len(), 1);
}

#[test]
fn test_call_errors() {
    let write = write_trait();
    write.implement_for::<Logger>(logger_write()).unwrap();
    let logger = Logger::default();
    let iface = write.dispatch(&logger).unwrap();

    assert_eq!(
        iface.call::<()>("flush", ()),
        Err(TraitError::NoSuchMethod { trait_name: "Write", method: "flush".into() })
    );
    assert!(matches!(
        iface.call::<()>("write", ()),
        Err(TraitError::ArgumentCount { method: "write", expected: 1, found: 0 })
    ));
    assert!(matches!(
        iface.call::<()>("write", (5u8,)),
        Err(TraitError::ArgumentType { method: "write", index: 1, .. })
    ));
    assert!(matches!(
        iface.call::<String>("write", ("s".to_string(),)),
        Err(TraitError::ReturnType { method: "write", .. })
    ));
    // Nothing was written by the failed calls except the one with a bad return type.
    assert_eq!(logger.lines.borrow().len(), 1);
}

#[test]
fn test_receiver_type_error() {
    let t = Trait::new(TraitDefinition::new("T").required("get", 0));
    t.implement_for::<u8>(Overrides::new().with("get", |this: &Interface<'_>| -> Result<u16> {
        Ok(*this.receiver::<u16>()?)
    }))
    .unwrap();
    let err = t.dispatch(&1u8).unwrap().call::<u16>("get", ()).unwrap_err();
    assert_eq!(err, TraitError::ReceiverType { expected: "u16", found: "u8" });
}

#[test]
fn test_call_dyn_and_introspection() {
    let write = write_trait();
    write.implement_for::<Logger>(logger_write()).unwrap();
    let logger = Logger::default();
    let iface = write.dispatch(&logger).unwrap();

    assert!(iface.has_method("writeln"));
    assert_eq!(iface.arity("write"), Some(1));
    assert_eq!(iface.arity("nope"), None);
    assert_eq!(iface.method_names().collect::<Vec<_>>(), ["write", "writeln"]);

    let out = iface.call_dyn("writeln", Args::new().push("a".to_string())).unwrap();
    assert!(out.downcast_ref::<()>().is_some());
    assert_eq!(*logger.lines.borrow(), vec!["a\n".to_string()]);
}

#[test]
fn test_rebind_through_other_trait() {
    let write = write_trait();
    write.implement_for::<Logger>(logger_write()).unwrap();
    let count = Trait::new(TraitDefinition::new("Count").required("count", 0));
    count
        .implement_for::<Logger>(Overrides::new().with("count", |this: &Interface<'_>| -> Result<usize> {
            Ok(this.receiver::<Logger>()?.lines.borrow().len())
        }))
        .unwrap();

    let logger = Logger::default();
    let iface = write.dispatch(&logger).unwrap();
    iface.call::<()>("write", ("a".to_string(),)).unwrap();
    assert_eq!(iface.rebind(&count).unwrap().call::<usize>("count", ()), Ok(1));
}

#[test]
fn test_method_may_register_during_call() {
    // Dispatch releases the registry before methods run.
    let t = Trait::new(TraitDefinition::new("Grow").required("grow", 0));
    let handle = t.clone();
    t.implement_for::<u8>(Overrides::new().with("grow", move |_: &Interface<'_>| -> Result<()> {
        handle.implement_for::<u16>(TypeKey::of::<u8>())
    }))
    .unwrap();
    t.dispatch(&0u8).unwrap().call::<()>("grow", ()).unwrap();
    assert!(t.is_implemented_for::<u16>());
}
