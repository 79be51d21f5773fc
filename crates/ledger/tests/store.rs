use ledger::{Currency, Mutation, TransactionRecord, TransactionStore, mock_transactions};

fn store_with_mock() -> TransactionStore {
    TransactionStore::new(mock_transactions()).unwrap()
}

fn ids(store: &TransactionStore) -> Vec<String> {
    store.records().iter().map(|r| r.id.clone()).collect()
}

fn balance_adjustment() -> TransactionRecord {
    TransactionRecord::new(
        "1",
        "Itau Cartão",
        "18/02/2025",
        "Manual Balance Adjustment",
        "Inflow: Ready to Assign",
    )
    .with_inflow(1_453_958)
    .cleared(true)
}

#[test]
fn toggle_selection_twice_restores_every_record() {
    let seed = mock_transactions();
    let mut store = store_with_mock();

    for record in &seed {
        store.toggle_selection(&record.id);
        store.toggle_selection(&record.id);
    }

    assert_eq!(store.records(), seed.as_slice());
}

#[test]
fn toggle_cleared_twice_restores_every_record() {
    let seed = mock_transactions();
    let mut store = store_with_mock();

    for record in &seed {
        assert!(store.toggle_cleared(&record.id));
        assert_ne!(store.get(&record.id).unwrap().cleared, record.cleared);
        assert!(store.toggle_cleared(&record.id));
    }

    assert_eq!(store.records(), seed.as_slice());
}

#[test]
fn update_memo_is_idempotent_and_keeps_order() {
    let mut store = store_with_mock();
    let order = ids(&store);

    store.update_memo("5", "paid in cash");
    let once = store.records().to_vec();
    store.update_memo("5", "paid in cash");

    assert_eq!(store.records(), once.as_slice());
    assert_eq!(store.get("5").unwrap().memo, "paid in cash");
    assert_eq!(ids(&store), order);
}

#[test]
fn update_memo_stores_text_verbatim() {
    let mut store = store_with_mock();

    store.update_memo("3", "  spaced  ");
    assert_eq!(store.get("3").unwrap().memo, "  spaced  ");

    store.update_memo("3", "");
    assert_eq!(store.get("3").unwrap().memo, "");
}

#[test]
fn mutations_only_touch_the_matching_record() {
    let seed = mock_transactions();
    let mut store = store_with_mock();

    store.toggle_cleared("7");

    for (before, after) in seed.iter().zip(store.records()) {
        if before.id == "7" {
            assert_ne!(before, after);
        } else {
            assert_eq!(before, after);
        }
    }
}

#[test]
fn unknown_id_leaves_sequence_unchanged() {
    let seed = mock_transactions();
    let mut store = store_with_mock();

    assert!(!store.toggle_selection("nope"));
    assert!(!store.toggle_cleared("nope"));
    assert!(!store.update_memo("nope", "text"));
    assert!(!store.apply(Mutation::UpdateMemo {
        id: String::new(),
        text: "text".to_string(),
    }));

    assert_eq!(store.records(), seed.as_slice());
    assert_eq!(store.revision(), 0);
}

#[test]
fn single_record_scenario() {
    let seed = balance_adjustment();
    let mut store = TransactionStore::new(vec![seed.clone()]).unwrap();

    store.toggle_cleared("1");
    assert!(!store.get("1").unwrap().cleared);

    store.update_memo("1", "paid");
    assert_eq!(store.get("1").unwrap().memo, "paid");

    store.toggle_selection("1");
    assert!(store.get("1").unwrap().selected);

    let expected = TransactionRecord {
        cleared: false,
        memo: "paid".to_string(),
        selected: true,
        ..seed
    };
    assert_eq!(store.get("1").unwrap(), &expected);
}

#[test]
fn apply_dispatches_row_mutations() {
    let mut store = TransactionStore::new(vec![balance_adjustment()]).unwrap();

    assert!(store.apply(Mutation::ToggleSelection { id: "1".to_string() }));
    assert!(store.apply(Mutation::ToggleCleared { id: "1".to_string() }));
    assert!(store.apply(Mutation::UpdateMemo {
        id: "1".to_string(),
        text: "ok".to_string(),
    }));

    let record = store.get("1").unwrap();
    assert!(record.selected);
    assert!(!record.cleared);
    assert_eq!(record.memo, "ok");
    assert_eq!(store.revision(), 3);
}

#[test]
fn amounts_render_only_when_present() {
    let record = balance_adjustment();
    let outflow = record
        .outflow
        .map(|a| a.format(Currency::Brl))
        .unwrap_or_default();
    let inflow = record
        .inflow
        .map(|a| a.format(Currency::Brl))
        .unwrap_or_default();

    assert_eq!(inflow, "R$14539.58");
    assert_eq!(outflow, "");
}
