//! Tests for the severity table.

use plugin_log::level::{Mapping, Severity, Tier, color, title_case};

#[test]
fn every_severity_maps_to_the_fixed_row() {
    let expected = [
        (Severity::Emergency, 91, Tier::Error),
        (Severity::Alert, 91, Tier::Error),
        (Severity::Critical, 91, Tier::Error),
        (Severity::Error, 91, Tier::Error),
        (Severity::Warning, 93, Tier::Warning),
        (Severity::Notice, 94, Tier::Info),
        (Severity::Info, 94, Tier::Info),
        (Severity::Debug, 95, Tier::Trace),
    ];
    for (severity, color, tier) in expected {
        assert_eq!(severity.mapping(), Mapping { color, tier }, "{severity}");
        assert_eq!(Mapping::lookup(severity.as_str()), severity.mapping());
    }
}

#[test]
fn unknown_name_falls_back() {
    assert_eq!(Mapping::lookup("verbose"), Mapping::FALLBACK);
    assert_eq!(Mapping::FALLBACK.color, color::DEFAULT);
    assert_eq!(Mapping::FALLBACK.tier, Tier::Info);
}

#[test]
fn other_casings_are_unknown_names() {
    for name in ["WARNING", "Warning", "DEBUG", "Debug", "Emergency"] {
        assert_eq!(Mapping::lookup(name), Mapping::FALLBACK, "{name}");
        assert!(name.parse::<Severity>().is_err(), "{name}");
    }
}

#[test]
fn all_covers_eight_distinct_names() {
    let names: std::collections::HashSet<_> =
        Severity::all().iter().map(|s| s.as_str()).collect();
    assert_eq!(names.len(), 8);
}

#[test]
fn fatal_class() {
    let fatal: Vec<_> = Severity::all()
        .into_iter()
        .filter(|s| s.is_fatal())
        .collect();
    assert_eq!(
        fatal,
        [Severity::Emergency, Severity::Alert, Severity::Critical]
    );
}

#[test]
fn enrichment_skips_the_three_lowest() {
    for severity in Severity::all() {
        let low = matches!(severity, Severity::Notice | Severity::Info | Severity::Debug);
        assert_eq!(severity.is_enriched(), !low, "{severity}");
    }
}

#[test]
fn labels_are_title_case() {
    assert_eq!(Severity::Warning.label(), "Warning");
    assert_eq!(Severity::Emergency.label(), "Emergency");
    assert_eq!(title_case("DISK full"), "Disk Full");
    assert_eq!(title_case(""), "");
}

#[test]
fn severity_from_str() {
    assert_eq!("notice".parse::<Severity>().unwrap(), Severity::Notice);
    assert_eq!("critical".parse::<Severity>().unwrap(), Severity::Critical);
    assert!("warn".parse::<Severity>().is_err());
}

#[test]
fn tier_ordering_and_parse() {
    assert!(Tier::Trace < Tier::Info);
    assert!(Tier::Info < Tier::Warning);
    assert!(Tier::Warning < Tier::Error);
    assert_eq!("debug".parse::<Tier>().unwrap(), Tier::Trace);
    assert_eq!("warn".parse::<Tier>().unwrap(), Tier::Warning);
    assert_eq!("critical".parse::<Tier>().unwrap(), Tier::Error);
    assert_eq!("WARNING".parse::<Tier>().unwrap(), Tier::Warning);
    assert_eq!("Debug".parse::<Tier>().unwrap(), Tier::Trace);
    assert!("loud".parse::<Tier>().is_err());
}
