use quote_pricing::engine::{resolve_region_price, resolve_weight_band_price};
use quote_pricing::{
    AdjustMode, BandId, BatchAdjustment, Decimal, PriceField, PricingError, Province,
    ProvinceCatalog, ProvinceCode, RegionName, RegionTieredSchedule, WeightBand,
    WeightBandSchedule,
};

fn d(s: &str) -> Decimal {
    Decimal::from_str_canonical(s).unwrap()
}

fn band(id: &str, start: &str, end: &str, price: &str) -> WeightBand {
    WeightBand::new(BandId::new(id), d(start), d(end), d(price))
}

fn east_catalog() -> ProvinceCatalog {
    ProvinceCatalog::new(vec![
        Province::new("E1", "East One", "East"),
        Province::new("E2", "East Two", "East"),
        Province::new("W1", "West One", "West"),
    ])
    .unwrap()
}

fn east_schedule() -> RegionTieredSchedule {
    let east = RegionName::new("East");
    RegionTieredSchedule::initialize(&east_catalog().region_catalog())
        .update_region_field(&east, PriceField::FirstWeightPrice, d("10"))
        .unwrap()
        .update_region_field(&east, PriceField::AdditionalWeightPrice, d("5"))
        .unwrap()
        .update_region_field(&east, PriceField::MinCharge, d("20"))
        .unwrap()
}

#[test]
fn test_overlapping_bands_resolve_to_first_match() {
    let schedule = WeightBandSchedule::new(vec![
        band("a", "0", "5", "3"),
        band("b", "0", "5", "7"),
        band("c", "4", "10", "9"),
    ]);
    for _ in 0..3 {
        assert_eq!(resolve_weight_band_price(&schedule, d("4.5")).unwrap(), d("3"));
    }
    assert_eq!(resolve_weight_band_price(&schedule, d("5")).unwrap(), d("9"));
}

#[test]
fn test_weight_outside_bands_is_not_extrapolated() {
    let schedule = WeightBandSchedule::with_default_bands();
    assert_eq!(
        resolve_weight_band_price(&schedule, d("30")),
        Err(PricingError::NoMatchingBand(d("30")))
    );
    assert_eq!(
        resolve_weight_band_price(&schedule, d("-1")),
        Err(PricingError::NoMatchingBand(d("-1")))
    );
}

#[test]
fn test_override_inheritance_per_field() {
    let catalog = east_catalog();
    let schedule = east_schedule().set_province_override_field(
        &ProvinceCode::new("E1"),
        PriceField::MinCharge,
        Some(d("15")),
    );

    let resolved = resolve_region_price(&schedule, &ProvinceCode::new("E1"), &catalog).unwrap();
    assert_eq!(resolved.region_name, RegionName::new("East"));
    assert_eq!(resolved.first_weight_price, d("10"));
    assert_eq!(resolved.additional_weight_price, d("5"));
    assert_eq!(resolved.min_charge, d("15"));
    assert_eq!(resolved.overridden, vec![PriceField::MinCharge]);

    let sibling = resolve_region_price(&schedule, &ProvinceCode::new("E2"), &catalog).unwrap();
    assert_eq!(sibling.min_charge, d("20"));
    assert!(sibling.overridden.is_empty());
}

#[test]
fn test_empty_override_entry_resolves_like_absent_entry() {
    let catalog = east_catalog();
    let code = ProvinceCode::new("E1");
    let schedule = east_schedule()
        .set_province_override_field(&code, PriceField::FirstWeightPrice, Some(d("99")))
        .set_province_override_field(&code, PriceField::FirstWeightPrice, None);

    assert!(schedule.province_override(&code).is_some());
    let with_entry = resolve_region_price(&schedule, &code, &catalog).unwrap();
    let without_entry = resolve_region_price(&east_schedule(), &code, &catalog).unwrap();
    assert_eq!(with_entry, without_entry);
}

#[test]
fn test_region_batch_adjust_keeps_overrides_bitwise() {
    let east = RegionName::new("East");
    let code = ProvinceCode::new("E1");
    let schedule = RegionTieredSchedule::initialize(&east_catalog().region_catalog())
        .update_region_field(&east, PriceField::FirstWeightPrice, d("100"))
        .unwrap()
        .update_region_field(&east, PriceField::AdditionalWeightPrice, d("50"))
        .unwrap()
        .update_region_field(&east, PriceField::MinCharge, d("30"))
        .unwrap()
        .set_province_override_field(&code, PriceField::AdditionalWeightPrice, Some(d("12.345")));

    let adjusted = schedule
        .batch_adjust(BatchAdjustment::new(AdjustMode::Percent, d("10")).unwrap())
        .unwrap();

    let region = adjusted.region(&east).unwrap();
    assert_eq!(region.first_weight_price.to_string(), "110");
    assert_eq!(region.first_weight_price, d("110.00"));
    assert_eq!(region.additional_weight_price, d("55.00"));
    assert_eq!(region.min_charge, d("33.00"));

    let before = schedule.province_override(&code).unwrap();
    let after = adjusted.province_override(&code).unwrap();
    assert_eq!(
        after.additional_weight_price.unwrap().inner().serialize(),
        before.additional_weight_price.unwrap().inner().serialize()
    );
}

#[test]
fn test_zero_adjustment_fails_in_both_modes() {
    assert_eq!(
        BatchAdjustment::new(AdjustMode::Amount, d("0")),
        Err(PricingError::InvalidAdjustment)
    );
    assert_eq!(
        BatchAdjustment::new(AdjustMode::Percent, d("0")),
        Err(PricingError::InvalidAdjustment)
    );
}

#[test]
fn test_weight_band_batch_adjust_amount() {
    let schedule = WeightBandSchedule::new(vec![band("1", "0", "1", "2.50"), band("2", "1", "3", "0.4")]);
    let adjusted = schedule
        .batch_adjust(BatchAdjustment::amount(d("-1")).unwrap())
        .unwrap();
    assert_eq!(adjusted.bands[0].unit_price, d("1.5"));
    assert_eq!(adjusted.bands[1].unit_price, d("-0.60"));
    assert!(matches!(
        adjusted.validate(),
        Err(PricingError::InvalidBand { id, .. }) if id == BandId::new("2")
    ));
}
