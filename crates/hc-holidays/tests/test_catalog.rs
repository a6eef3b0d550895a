//! Integration tests for loading holiday catalogs from the JSON tables in
//! `tests/data/`.

use hc_core::Error;
use hc_holidays::{
    HolidayCatalog, HolidayDocument, HolidaySource, RegionDocument, CATALOG_REGION_ID,
    UNKNOWN_REGION_NAME,
};
use hc_time::Date;

const REGIONS: &str = include_str!("data/regions_de.json");
const HOLIDAYS: &str = include_str!("data/holidays_de.json");

fn german() -> HolidayCatalog {
    HolidayCatalog::from_json_str("DE", "DE", REGIONS, HOLIDAYS).unwrap()
}

fn names(catalog: &HolidayCatalog, region: i32) -> Vec<String> {
    catalog
        .holidays_for_region(region)
        .unwrap()
        .iter()
        .map(|h| h.name().to_string())
        .collect()
}

#[test]
fn loads_german_table() {
    let c = german();
    assert_eq!(c.country_code(), "DE");
    assert_eq!(c.language(), "DE");

    let regions: Vec<_> = c.regions().map(|r| (r.id(), r.name().to_string())).collect();
    assert_eq!(
        regions,
        [
            (0, "Katalog".to_string()),
            (1, "Deutschland".to_string()),
            (2, "Bayern".to_string()),
            (3, "Sachsen".to_string()),
            (99, UNKNOWN_REGION_NAME.to_string()),
        ]
    );

    assert_eq!(c.holidays_for_region(CATALOG_REGION_ID).unwrap().len(), 15);
    assert_eq!(c.holidays_for_region(1).unwrap().len(), 10);
    assert_eq!(c.holidays_for_region(2).unwrap().len(), 12);
    assert_eq!(c.holidays_for_region(3).unwrap().len(), 11);
}

#[test]
fn holidays_keep_table_order() {
    let c = german();
    assert_eq!(
        names(&c, 2),
        [
            "Neujahr",
            "Heilige Drei Könige",
            "Karfreitag",
            "Ostersonntag",
            "Ostermontag",
            "Tag der Arbeit",
            "Christi Himmelfahrt",
            "Pfingstmontag",
            "Fronleichnam",
            "Tag der Deutschen Einheit",
            "1. Weihnachtstag",
            "2. Weihnachtstag",
        ]
    );
}

#[test]
fn region_only_holidays() {
    let c = german();
    assert!(names(&c, 3).iter().any(|n| n == "Buß- und Bettag"));
    assert!(!names(&c, 2).iter().any(|n| n == "Buß- und Bettag"));
    assert!(names(&c, 0).iter().any(|n| n == "Rosenmontag"));
    assert!(!names(&c, 1).iter().any(|n| n == "Rosenmontag"));
}

#[test]
fn undeclared_region_is_unknown_state() {
    let c = german();
    let region = c.region(99).unwrap();
    assert_eq!(region.name(), UNKNOWN_REGION_NAME);
    assert!(!region.is_catalog());
    assert_eq!(names(&c, 99), ["Muttertag"]);
}

#[test]
fn keys_are_case_insensitive() {
    let c = HolidayCatalog::from_json_str(" de", "en ", REGIONS, HOLIDAYS).unwrap();
    assert_eq!(c.country_code(), "DE");
    assert_eq!(c.language(), "EN");
    assert_eq!(c.region(1).unwrap().name(), "Germany");
    assert_eq!(names(&c, 1), ["New Year's Day", "Christmas Day"]);
    assert!(!c.contains_region(2));
}

#[test]
fn missing_region_section_is_an_error() {
    let err = HolidayCatalog::from_json_str("AT", "DE", REGIONS, HOLIDAYS).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)), "{err:?}");
}

#[test]
fn missing_holiday_section_gives_empty_regions() {
    let regions = r#"{ "countries": [ { "country_code": "CH", "language": "DE",
        "regions": [ { "id": 0, "name": "Katalog" }, { "id": 1, "name": "Zürich" } ] } ] }"#;
    let c = HolidayCatalog::from_json_str("CH", "DE", regions, HOLIDAYS).unwrap();
    assert!(c.holidays_for_region(0).unwrap().is_empty());
    assert!(c.holidays_for_region(1).unwrap().is_empty());
}

#[test]
fn bad_formula_fails_the_load() {
    let holidays = r#"{ "countries": [ { "country_code": "DE", "language": "DE", "holidays": [
        { "id": 40, "name": "Vollmond", "formula": "LUNAR:0", "duration": 1,
          "valid_from": "01.01.1900", "valid_to": "31.12.2099", "regions": "1" } ] } ] }"#;
    match HolidayCatalog::from_json_str("DE", "DE", REGIONS, holidays) {
        Err(Error::Configuration(msg)) => assert!(msg.contains("Vollmond"), "{msg}"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn cursor_selects_region() {
    let c = german();
    assert_eq!(c.current_region_id(), CATALOG_REGION_ID);
    assert_eq!(c.current_region_name().unwrap(), "Katalog");

    c.set_current_region(3).unwrap();
    assert_eq!(c.current_region_name().unwrap(), "Sachsen");
    assert_eq!(
        c.holidays_for_current_region().unwrap(),
        c.holidays_for_region(3).unwrap()
    );

    assert_eq!(c.set_current_region(4), Err(Error::UnknownRegion(4)));
    assert_eq!(c.current_region_id(), 3);
}

#[test]
fn loads_from_files() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    let regions = dir.join("regions_de.json");
    let holidays = dir.join("holidays_de.json");

    let c = HolidayCatalog::load("DE", "DE", &regions, &holidays).unwrap();
    assert_eq!(names(&c, 1), names(&german(), 1));

    let doc = HolidayDocument::from_path(&holidays).unwrap();
    let unity = doc
        .sections("DE", "DE")
        .flat_map(|s| s.holidays.iter())
        .find(|h| h.id == 19)
        .unwrap()
        .to_holiday()
        .unwrap();
    assert_eq!(unity.valid_from(), Date::from_ymd(1990, 10, 3).unwrap());

    assert_eq!(RegionDocument::from_path(&regions).unwrap().countries.len(), 2);
    assert!(matches!(
        HolidayCatalog::load("DE", "DE", dir.join("missing.json"), &holidays),
        Err(Error::Configuration(_))
    ));
}
