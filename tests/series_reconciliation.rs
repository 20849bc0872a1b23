use choromap::{CountryRegistry, Datum, PreparedSeries};
use std::collections::BTreeMap;

fn input(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(code, value)| (code.to_string(), *value))
        .collect()
}

#[test]
fn sparse_visible_input_defaults_the_rest_to_missing() {
    let registry = CountryRegistry::new().unwrap();
    let series = PreparedSeries::prepare(&registry, &input(&[("DE", 5.0)])).unwrap();

    assert_eq!(series.visible_values.get("DE"), Some(&Datum::Present(5.0)));
    assert_eq!(series.visible_values.get("FR"), Some(&Datum::Missing));
    assert!(series.markers.is_empty());
    assert_eq!(series.max_visible, Some(5.0));
    assert_eq!(series.max_marker, None);
}

#[test]
fn every_visible_country_gets_a_value() {
    let registry = CountryRegistry::new().unwrap();
    let series = PreparedSeries::prepare(&registry, &input(&[("DE", 5.0)])).unwrap();

    assert_eq!(
        series.visible_values.len(),
        registry.visible_countries().count()
    );
    let missing = series
        .visible_values
        .values()
        .filter(|d| d.is_missing())
        .count();
    assert_eq!(missing, series.visible_values.len() - 1);
}

#[test]
fn zero_valued_small_countries_are_not_markers() {
    let registry = CountryRegistry::new().unwrap();
    let series = PreparedSeries::prepare(&registry, &input(&[("SG", 0.0)])).unwrap();

    assert!(series.markers.is_empty());
    assert_eq!(series.max_marker, None);
    // the zero entry also never leaks into the visible mapping
    assert!(!series.visible_values.contains_key("SG"));
}

#[test]
fn nonzero_small_country_becomes_one_marker() {
    let registry = CountryRegistry::new().unwrap();
    let series = PreparedSeries::prepare(&registry, &input(&[("SG", 3.0)])).unwrap();

    assert_eq!(series.markers.len(), 1);
    let marker = &series.markers[0];
    assert_eq!(marker.country.alpha2, "SG");
    assert_eq!(marker.country.name, "Singapore");
    assert!(marker.country.lat_lng.is_some());
    assert_eq!(marker.value, 3.0);

    assert_eq!(series.marker_values(), vec![3.0]);
    assert_eq!(series.max_marker, Some(3.0));
}

#[test]
fn markers_follow_input_key_order() {
    let registry = CountryRegistry::new().unwrap();
    let series =
        PreparedSeries::prepare(&registry, &input(&[("WS", 1.0), ("AD", 2.0), ("MT", 4.0)]))
            .unwrap();

    let codes: Vec<&str> = series
        .markers
        .iter()
        .map(|m| m.country.alpha2.as_str())
        .collect();
    assert_eq!(codes, vec!["AD", "MT", "WS"]);
    assert_eq!(series.marker_values(), vec![2.0, 4.0, 1.0]);
}

#[test]
fn maxima_are_cached_per_channel() {
    let registry = CountryRegistry::new().unwrap();
    let series = PreparedSeries::prepare(
        &registry,
        &input(&[("DE", 5.0), ("FR", 12.0), ("SG", 3.0), ("AD", 1.0)]),
    )
    .unwrap();

    assert_eq!(series.max_visible, Some(12.0));
    assert_eq!(series.max_marker, Some(3.0));
}

#[test]
fn codes_unknown_to_the_registry_ride_along_as_visible_values() {
    let registry = CountryRegistry::new().unwrap();
    let series = PreparedSeries::prepare(&registry, &input(&[("ZZ", 9.0)])).unwrap();

    assert_eq!(series.visible_values.get("ZZ"), Some(&Datum::Present(9.0)));
    assert_eq!(series.max_visible, Some(9.0));
}

#[test]
fn widget_values_use_the_numeric_sentinel_for_gaps() {
    let registry = CountryRegistry::new().unwrap();
    let series = PreparedSeries::prepare(&registry, &input(&[("DE", 5.0)])).unwrap();

    let widget = series.widget_visible_values();
    assert_eq!(widget.get("DE"), Some(&5.0));
    assert_eq!(widget.get("FR"), Some(&-1.0));
}

#[test]
fn empty_input_yields_an_all_missing_map_and_no_markers() {
    let registry = CountryRegistry::new().unwrap();
    let series = PreparedSeries::prepare(&registry, &BTreeMap::new()).unwrap();

    assert!(series.visible_values.values().all(Datum::is_missing));
    assert!(series.markers.is_empty());
    assert_eq!(series.max_visible, None);
    assert_eq!(series.max_marker, None);
}
