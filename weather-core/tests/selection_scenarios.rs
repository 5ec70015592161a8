use std::sync::Arc;

use weather_core::{
    SearchOutcome, SelectionController, SelectionError, VisualFamily, WeatherStore, classify,
};

fn controller() -> SelectionController {
    let store = WeatherStore::builtin().expect("builtin data must parse");
    SelectionController::new(Arc::new(store))
}

#[test]
fn quick_select_tokyo_from_default() {
    let mut ctl = controller();
    assert_eq!(ctl.current(), &"San Francisco");
    assert_eq!(ctl.record().current.temperature, 18);
    assert_eq!(ctl.record().current.condition, "Partly Cloudy");

    let tokyo = ctl.store().key("Tokyo").expect("Tokyo exists");
    ctl.select_city(tokyo).expect("Tokyo is in this store");

    assert_eq!(ctl.current(), &"Tokyo");
    let record = ctl.store().lookup("Tokyo").expect("Tokyo exists");
    assert_eq!(record.current.temperature, 24);
    assert_eq!(record.current.condition, "Sunny");
    assert_eq!(classify(&record.current.condition), VisualFamily::Sunny);
}

#[test]
fn search_new_york() {
    let mut ctl = controller();

    let outcome = ctl.resolve_search("New York").expect("New York is known");

    assert!(matches!(outcome, SearchOutcome::Selected(ref k) if k == "New York"));
    assert_eq!(ctl.current(), &"New York");
    assert_eq!(classify(&ctl.record().current.condition), VisualFamily::Rain);
}

#[test]
fn search_atlantis_keeps_previous_city() {
    let mut ctl = controller();
    let before = ctl.current().clone();

    let err = ctl.resolve_search("Atlantis").unwrap_err();

    assert!(matches!(err, SelectionError::CityNotFound { ref query, .. } if query == "Atlantis"));
    assert_eq!(ctl.current(), &before);
}

#[test]
fn failed_search_after_successful_one_keeps_latest_city() {
    let mut ctl = controller();

    ctl.resolve_search("Tokyo").expect("Tokyo is known");
    ctl.resolve_search("Gotham").unwrap_err();
    assert_eq!(ctl.resolve_search("  "), Ok(SearchOutcome::Ignored));

    assert_eq!(ctl.current(), &"Tokyo");
}

#[test]
fn every_city_can_be_selected_and_read() {
    let mut ctl = controller();
    let keys: Vec<_> = ctl.store().keys().cloned().collect();

    for key in keys {
        ctl.select_city(key.clone()).expect("key comes from this store");
        assert_eq!(ctl.current(), &key);

        let record = ctl.record();
        assert!(!record.hourly.is_empty());
        assert!(!record.chart.is_empty());
        for day in &record.daily {
            assert!(day.high >= day.low);
            assert!(day.precipitation <= 100);
        }
    }
}
