use quote_pricing::{
    BandFieldUpdate, BandId, ConfigurationEditHistory, Decimal, PricingConfiguration,
    PricingError, TemplateType, WeightBandSchedule,
};

fn d(s: &str) -> Decimal {
    Decimal::from_str_canonical(s).unwrap()
}

fn priced(price: &str) -> PricingConfiguration {
    PricingConfiguration::WeightBanded(
        WeightBandSchedule::with_default_bands()
            .update_band_field(&BandId::new("1"), BandFieldUpdate::UnitPrice(d(price))),
    )
}

#[test]
fn test_commit_undo_redo_restores_identical_state() {
    let mut history = ConfigurationEditHistory::new(priced("1"));
    let committed = priced("2.35");
    history.commit(committed.clone());

    history.undo().unwrap();
    assert_eq!(history.current(), &priced("1"));

    history.redo().unwrap();
    assert_eq!(history.current(), &committed);
    assert_eq!(
        serde_json::to_string(history.current()).unwrap(),
        serde_json::to_string(&committed).unwrap()
    );
}

#[test]
fn test_undo_past_first_snapshot_fails() {
    let mut history = ConfigurationEditHistory::new(priced("1"));
    history.commit(priced("2"));
    history.undo().unwrap();

    assert_eq!(history.undo(), Err(PricingError::NothingToUndo));
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.current(), &priced("1"));
}

#[test]
fn test_branch_discarding() {
    let (a, b, c, dd) = (priced("1"), priced("2"), priced("3"), priced("4"));
    let mut history = ConfigurationEditHistory::new(a.clone());
    history.commit(b.clone());
    history.commit(c.clone());
    assert_eq!(history.cursor(), 2);

    history.undo().unwrap();
    assert_eq!(history.current(), &b);

    history.commit(dd.clone());
    assert_eq!(history.snapshots(), &[a, b, dd.clone()]);
    assert_eq!(history.redo(), Err(PricingError::NothingToRedo));
    assert!(!history.snapshots().contains(&c));
    assert_eq!(history.current(), &dd);
}

#[test]
fn test_can_undo_can_redo_track_cursor() {
    let mut history = ConfigurationEditHistory::new(priced("1"));
    assert!(!history.can_undo());
    assert!(!history.can_redo());

    history.commit(priced("2"));
    history.commit(priced("3"));
    assert!(history.can_undo());
    assert!(!history.can_redo());

    history.undo().unwrap();
    assert!(history.can_undo());
    assert!(history.can_redo());

    history.undo().unwrap();
    assert!(!history.can_undo());
    assert!(history.can_redo());
}

#[test]
fn test_snapshots_do_not_alias() {
    let first = PricingConfiguration::seed(TemplateType::WeightBanded, &[]);
    let mut history = ConfigurationEditHistory::new(first.clone());

    let schedule = history.current().weight_banded().unwrap().add_band().unwrap();
    history.commit(PricingConfiguration::WeightBanded(schedule));
    let schedule = history.current().weight_banded().unwrap().add_band().unwrap();
    history.commit(PricingConfiguration::WeightBanded(schedule));

    assert_eq!(history.snapshots()[0], first);
    assert_eq!(history.snapshots()[1].weight_banded().unwrap().len(), 6);
    assert_eq!(history.snapshots()[2].weight_banded().unwrap().len(), 7);
}
