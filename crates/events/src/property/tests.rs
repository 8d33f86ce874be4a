use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_set_notifies_old_and_new() {
	let prop = Property::new("currentTheme", String::from("dark"));
	let seen = Arc::new(Mutex::new(Vec::new()));

	let sink = seen.clone();
	let _sub = prop.subscribe(move |change| {
		sink.lock()
			.push((change.name, (*change.old).clone(), (*change.new).clone()));
	});

	assert_eq!(prop.set("light".into()), Ok(true));
	assert_eq!(*prop.get(), "light");
	assert_eq!(
		*seen.lock(),
		vec![("currentTheme", "dark".to_string(), "light".to_string())]
	);
}

#[test]
fn test_equal_value_is_silent() {
	let prop = Property::new("locale", 1u32);
	let calls = Arc::new(AtomicUsize::new(0));

	let counter = calls.clone();
	let _sub = prop.subscribe(move |_| {
		counter.fetch_add(1, Ordering::SeqCst);
	});

	assert_eq!(prop.set(1), Ok(false));
	assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_veto_keeps_value_and_skips_listeners() {
	let prop = Property::new("currentTheme", String::from("dark"));
	let calls = Arc::new(AtomicUsize::new(0));

	let counter = calls.clone();
	let _sub = prop.subscribe(move |_| {
		counter.fetch_add(1, Ordering::SeqCst);
	});
	let _veto = prop.subscribe_vetoable(|change| {
		if change.new.as_str() == "neon" {
			Err(VetoError::new(change.name, "too bright"))
		} else {
			Ok(())
		}
	});

	let err = prop.set("neon".into()).unwrap_err();
	assert_eq!(err, VetoError::new("currentTheme", "too bright"));
	assert_eq!(*prop.get(), "dark");
	assert_eq!(calls.load(Ordering::SeqCst), 0);

	assert_eq!(prop.set("light".into()), Ok(true));
	assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_dropping_subscription_unsubscribes() {
	let prop = Property::new("locale", 0u8);
	let calls = Arc::new(AtomicUsize::new(0));

	let counter = calls.clone();
	let sub = prop.subscribe(move |_| {
		counter.fetch_add(1, Ordering::SeqCst);
	});
	assert_eq!(prop.listener_count(), 1);

	prop.set(1).unwrap();
	drop(sub);
	prop.set(2).unwrap();

	assert_eq!(prop.listener_count(), 0);
	assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_detached_subscription_stays_registered() {
	let prop = Property::new("locale", 0u8);
	prop.subscribe(|_| {}).detach();
	assert_eq!(prop.listener_count(), 1);
}

#[test]
fn test_listener_may_write_property_reentrantly() {
	let prop = Arc::new(Property::new("count", 0u32));

	let weak = Arc::downgrade(&prop);
	let _sub = prop.subscribe(move |change| {
		if *change.new < 3
			&& let Some(prop) = weak.upgrade()
		{
			prop.set(*change.new + 1).unwrap();
		}
	});

	prop.set(1).unwrap();
	assert_eq!(*prop.get(), 3);
}

#[test]
fn test_subscription_outliving_source_is_inactive() {
	let prop = Property::new("locale", 0u8);
	let sub = prop.subscribe(|_| {});
	assert!(sub.is_active());
	drop(prop);
	assert!(!sub.is_active());
}
