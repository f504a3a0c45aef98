use astro_engine::chart::ChartAssembler;
use astro_engine::coords::ecliptic_longitude;
use astro_engine::ephemeris::topocentric::AU_KM;
use astro_engine::{
    Body, ChartInput, EphemerisError, EphemerisProvider, ObserverLocation, SwissEphemerisAdapter,
    UniversalInstant,
};
use chrono::{TimeZone, Utc};
use std::sync::Arc;

fn toronto() -> ObserverLocation {
    ObserverLocation::new(43.65, -79.38)
}

fn instant() -> UniversalInstant {
    UniversalInstant::from_utc(Utc.with_ymd_and_hms(1990, 5, 14, 19, 30, 0).unwrap())
}

#[test]
fn test_adapter_accepts_existing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let adapter = SwissEphemerisAdapter::new(Some(dir.path().to_path_buf())).unwrap();
    assert_eq!(adapter.ephemeris_path(), dir.path());
}

#[test]
fn test_adapter_rejects_unknown_key_before_calling_library() {
    let dir = tempfile::tempdir().unwrap();
    let adapter = SwissEphemerisAdapter::new(Some(dir.path().to_path_buf())).unwrap();
    let result = adapter.position("jupiter", &instant(), &toronto());
    assert_eq!(
        result,
        Err(EphemerisError::UnknownBody {
            key: "jupiter".to_string()
        })
    );
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_sun_position_mid_may_1990() {
    let adapter = SwissEphemerisAdapter::new(None).unwrap();
    let sun = adapter
        .position(Body::Sun.catalog_key(), &instant(), &toronto())
        .unwrap();
    let lon = ecliptic_longitude(&sun).unwrap();
    // The Sun is at about 23°44' Taurus
    assert!((lon - 53.73).abs() < 0.1, "sun at {lon}");
    assert!((sun.length() - 1.011).abs() < 0.01);
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_moon_parallax_is_applied() {
    let adapter = SwissEphemerisAdapter::new(None).unwrap();
    let equator = adapter
        .position("moon", &instant(), &ObserverLocation::new(0.0, 0.0))
        .unwrap();
    let pole = adapter
        .position("moon", &instant(), &ObserverLocation::new(89.0, 0.0))
        .unwrap();
    let km = (equator - pole).length() * AU_KM;
    assert!(km > 1000.0, "observers only {km} km apart");
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_full_chart_with_swiss_ephemeris() {
    let adapter = SwissEphemerisAdapter::new(None).unwrap();
    let assembler = ChartAssembler::new(Arc::new(adapter));
    let input = ChartInput::new("1990-05-14", "15:30", "America/Toronto", 43.65, -79.38);
    let chart = assembler.assemble(&input).unwrap();

    assert_eq!(chart.planets.len(), 10);
    // Mercury was retrograde from 1990-04-23 to 1990-05-17
    assert!(chart.position(Body::Mercury).unwrap().retrograde);
    assert!(!chart.position(Body::Sun).unwrap().retrograde);
    assert!(!chart.position(Body::Moon).unwrap().retrograde);
}
