//! Session tests against the real data-file repository

use std::fs;

use parking_app::app::ParkingService;
use parking_app::config::Config;
use parking_app::repository::{open_vehicle_repo, open_vehicle_repo_at};
use parking_domain::service::SortKey;
use tempfile::tempdir;

#[test]
fn test_save_then_load_in_new_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vehicles.txt");

    let mut first = ParkingService::new(open_vehicle_repo_at(path.clone()));
    first.add_vehicle(11, "MH-11", "Car", 1.25).unwrap();
    first.add_vehicle(7, "MH-07", "bike", 3.5).unwrap();
    first.add_vehicle(42, "MH-42", "Truck", 2.0).unwrap();
    first.add_vehicle(5, "MH-05", "rickshaw", 0.75).unwrap();
    first.save().unwrap();

    let mut second = ParkingService::new(open_vehicle_repo_at(path));
    let summary = second.load().unwrap();
    assert!(summary.source_found);
    assert_eq!(summary.loaded, 4);
    assert_eq!(summary.skipped_count(), 0);
    assert!(!second.is_sorted_by_id());

    let mut expected = first.vehicles().to_vec();
    let mut actual = second.vehicles().to_vec();
    expected.sort_by_key(|v| v.id);
    actual.sort_by_key(|v| v.id);
    assert_eq!(actual, expected);
}

#[test]
fn test_session_starts_empty_without_data_file() {
    let dir = tempdir().unwrap();
    let config = Config {
        data_file: dir.path().join("missing.txt"),
        ..Config::default()
    };

    let mut svc = ParkingService::new(open_vehicle_repo(&config));
    let summary = svc.load().unwrap();
    assert!(!summary.source_found);
    assert!(svc.vehicles().is_empty());
    assert_eq!(svc.repository().data_path(), config.data_file.as_path());
}

#[test]
fn test_load_reports_skipped_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vehicles.txt");
    fs::write(
        &path,
        "1,AAA,car,2.00,4.00\n2,BBB,bike,abc,1.00\n3,CCC,truck,1.00\n1,DDD,car,1.00,2.00\n",
    )
    .unwrap();

    let mut svc = ParkingService::new(open_vehicle_repo_at(path));
    let summary = svc.load().unwrap();
    assert_eq!(summary.loaded, 1);
    assert_eq!(summary.skipped_lines.len(), 3);
    let lines: Vec<u64> = summary.skipped_lines.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![2, 3, 4]);
}

#[test]
fn test_sorted_session_saves_in_sorted_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vehicles.txt");

    let mut svc = ParkingService::new(open_vehicle_repo_at(path.clone()));
    svc.add_vehicle(3, "C", "car", 1.0).unwrap();
    svc.add_vehicle(1, "A", "truck", 1.0).unwrap();
    svc.add_vehicle(2, "B", "bike", 1.0).unwrap();
    svc.sort(SortKey::Id);
    svc.save().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "1,A,truck,1.00,3.00\n2,B,bike,1.00,1.00\n3,C,car,1.00,2.00\n"
    );
}

#[test]
fn test_linear_and_binary_search_agree() {
    let dir = tempdir().unwrap();
    let mut svc = ParkingService::new(open_vehicle_repo_at(dir.path().join("v.txt")));
    for id in [9, 4, 17, 1, 12] {
        svc.add_vehicle(id, &format!("P{id}"), "car", 1.0).unwrap();
    }
    svc.sort(SortKey::Id);

    for id in 0..20 {
        let linear = svc.linear_search(id).cloned();
        let binary = svc.binary_search(id).unwrap().cloned();
        assert_eq!(linear, binary, "id {id}");
    }
}
