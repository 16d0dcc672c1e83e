use chrono::{NaiveDate, TimeZone, Utc};
use recordbook::{
    parse_students, Account, ElectronicItem, GroupedIndex, Grade, InventoryItem, InventoryLogger,
    ParseError, Prescription, RepoError, Repository, Transaction,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn duplicate_add_fails_and_keeps_original() {
    let mut repo = Repository::new();
    repo.add(ElectronicItem::new(1, "Laptop", 10, "Dell", 24)).unwrap();

    let err = repo
        .add(ElectronicItem::new(1, "Tablet", 5, "Apple", 12))
        .unwrap_err();

    assert_eq!(err, RepoError::DuplicateKey(1));
    assert_eq!(repo.get(1).unwrap().name, "Laptop");
    assert_eq!(repo.len(), 1);
}

#[test]
fn absent_id_is_not_found_for_get_and_remove() {
    let mut repo: Repository<ElectronicItem> = Repository::new();
    assert_eq!(repo.get(5).unwrap_err(), RepoError::NotFound(5));
    assert_eq!(repo.remove(5).unwrap_err(), RepoError::NotFound(5));
}

#[test]
fn negative_quantity_is_rejected_without_change() {
    let mut repo = Repository::new();
    repo.add(ElectronicItem::new(2, "Smartphone", 15, "Samsung", 12)).unwrap();

    assert_eq!(
        repo.update_quantity(2, -1).unwrap_err(),
        RepoError::InvalidArgument(-1)
    );
    assert_eq!(repo.get(2).unwrap().quantity, 15);
}

#[test]
fn inventory_roundtrip_preserves_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let items: Vec<InventoryItem> = (1..=4)
        .map(|i| {
            InventoryItem::new(
                i,
                &format!("Item {}", i),
                i * 10,
                Utc.with_ymd_and_hms(2025, 1, i as u32, 8, 0, 0).unwrap(),
            )
        })
        .collect();

    let mut logger = InventoryLogger::new(&path);
    for item in items.clone() {
        logger.add(item);
    }
    logger.save_to_file().unwrap();

    let mut reloaded: InventoryLogger<InventoryItem> = InventoryLogger::new(&path);
    reloaded.load_from_file().unwrap();
    assert_eq!(reloaded.all(), items.as_slice());
}

#[test]
fn parser_grades_and_errors() {
    let students = parse_students("1,Jane Doe,85\n2,John Roe,65").unwrap();
    assert_eq!(students[0].grade(), Grade::A);
    assert_eq!(students[1].grade(), Grade::C);

    assert!(matches!(
        parse_students("1,Jane Doe").unwrap_err(),
        ParseError::MissingField { .. }
    ));
    assert!(matches!(
        parse_students("1,Jane Doe,85,extra").unwrap_err(),
        ParseError::MissingField { .. }
    ));
    assert!(matches!(
        parse_students("1,Jane Doe,A+").unwrap_err(),
        ParseError::InvalidFormat { .. }
    ));
}

#[test]
fn savings_account_refuses_overdraft_softly() {
    let mut account = Account::savings("MUBARAK001", 100.0);
    let outcome = account.apply_transaction(&Transaction::now(1, 150.0, "Rent"));

    assert!(!outcome.is_applied());
    assert_eq!(account.balance(), 100.0);
}

#[test]
fn grouping_five_across_three_keys() {
    let source = vec![
        Prescription::new(101, 1, "Vitamin C", date(2024, 11, 15)),
        Prescription::new(102, 1, "Amoxiclav", date(2024, 12, 20)),
        Prescription::new(103, 3, "Funbact 3", date(2025, 3, 10)),
        Prescription::new(104, 2, "Codeine syrup", date(2025, 4, 5)),
        Prescription::new(105, 2, "Lydia", date(2025, 5, 12)),
    ];

    let index = GroupedIndex::build(source.clone(), |p| p.patient_id);

    assert_eq!(index.key_count(), 3);
    let lengths: usize = index.iter().map(|(_, group)| group.len()).sum();
    assert_eq!(lengths, 5);

    for (patient_id, group) in index.iter() {
        let expected: Vec<&Prescription> =
            source.iter().filter(|p| p.patient_id == *patient_id).collect();
        let actual: Vec<&Prescription> = group.iter().collect();
        assert_eq!(actual, expected);
    }
}
