use algorithms::registry::{RegistryError, UidRegistry};

#[test]
fn keeps_ids_sorted_and_unique() {
    let mut users = UidRegistry::new("user");
    users.add("U1003".to_string()).unwrap();
    users.add("U1001".to_string()).unwrap();
    users.add("U1002".to_string()).unwrap();
    assert_eq!(users.ids(), ["U1001", "U1002", "U1003"]);
    assert!(users.contains(&"U1002".to_string()));

    let removed = users.remove(&"U1002".to_string()).unwrap();
    assert_eq!(removed, "U1002");
    assert_eq!(users.ids(), ["U1001", "U1003"]);
    assert!(!users.contains(&"U1002".to_string()));
}

#[test]
fn duplicate_and_missing_ids_are_errors() {
    let mut couriers = UidRegistry::new("courier");
    couriers.add(2u32).unwrap();
    assert_eq!(
        couriers.add(2),
        Err(RegistryError::Duplicate { kind: "courier".into(), id: "2".into() })
    );
    let err = couriers.remove(&7).unwrap_err();
    assert_eq!(err.to_string(), "courier uid `7` not found");
    assert_eq!(couriers.len(), 1);
    assert_eq!(couriers.kind(), "courier");
}

#[test]
fn empty_registry() {
    let reg: UidRegistry<i64> = UidRegistry::new("user");
    assert!(reg.is_empty());
    assert!(!reg.contains(&0));
}
