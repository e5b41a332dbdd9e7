//! Integration tests for the JSON configuration and the CSV grid reader.

use std::fs;

use serde_json::json;

mod common;

use common::temp_file;
use simpson_quad::configuration::Configuration;
use simpson_quad::io::gridreader::{read_grid, read_grid_from};
use simpson_quad::manager::manager::IManager;
use simpson_quad::manager::managererror::ManagerError;
use simpson_quad::math::integration::integrationerror::IntegrationError;
use simpson_quad::math::integration::simpson2d::simpson_2d;
use simpson_quad::math::integration::simpsonrulemanager::SimpsonRuleManager;


// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn rules_are_loaded_by_name() {
    let config = Configuration::new();
    config
        .from_json_value(json!({
            "simpson_rule": [
                { "name": "Coarse", "subintervals": 8 },
                { "name": "Fine", "subintervals": 1024 }
            ]
        }))
        .expect("valid configuration");

    let manager = config.simpson_rule_manager();
    assert_eq!(manager.names(), vec!["Coarse".to_string(), "Fine".to_string()]);
    let fine = manager.get(&"Fine".to_string()).unwrap();
    assert_eq!(fine.subintervals(), 1024);
    let value = fine.integrate(|x| x * x, 0.0, 1.0).unwrap();
    assert!((value - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn missing_rule_name_is_reported() {
    let config = Configuration::new();
    config.from_json_value(json!({ "simpson_rule": [] })).unwrap();
    let error = config.simpson_rule_manager().get(&"Fine".to_string()).unwrap_err();
    assert!(matches!(error, ManagerError::NameNotFoundError(ref name) if name == "Fine"));
    assert_eq!(error.to_string(), "key 'Fine' not found");
}

#[test]
fn odd_subintervals_are_rejected_at_load_time() {
    let config = Configuration::new();
    let error = config
        .from_json_value(json!({
            "simpson_rule": [
                { "name": "Ok", "subintervals": 4 },
                { "name": "Bad", "subintervals": 7 }
            ]
        }))
        .unwrap_err();
    assert!(matches!(
        error,
        ManagerError::IntegrationError(IntegrationError::InvalidSubintervals(7))
    ));
    // A failed load registers nothing, not even the rules before the bad one.
    assert!(!config.simpson_rule_manager().contains(&"Ok".to_string()));
    assert!(!config.simpson_rule_manager().contains(&"Bad".to_string()));
    assert!(config.simpson_rule_manager().names().is_empty());
}

#[test]
fn failed_load_keeps_previously_loaded_rules() {
    let config = Configuration::new();
    config
        .from_json_value(json!({ "simpson_rule": [ { "name": "Coarse", "subintervals": 8 } ] }))
        .unwrap();
    let result = config.from_json_value(json!({
        "simpson_rule": [
            { "name": "Coarse", "subintervals": 2 },
            { "name": "Broken", "subintervals": 0 }
        ]
    }));
    assert!(result.is_err());
    let manager = config.simpson_rule_manager();
    assert_eq!(manager.names(), vec!["Coarse".to_string()]);
    assert_eq!(manager.get(&"Coarse".to_string()).unwrap().subintervals(), 8);
}

#[test]
fn rule_without_name_is_a_json_error() {
    let config = Configuration::new();
    let error = config
        .from_json_value(json!({ "simpson_rule": [ { "subintervals": 4 } ] }))
        .unwrap_err();
    assert!(matches!(error, ManagerError::JsonParseError(_)));
}

#[test]
fn configuration_is_read_from_file() {
    let path = temp_file(
        "config.json",
        r#"{ "simpson_rule": [ { "name": "Medium", "subintervals": 32 } ] }"#,
    );
    let config = Configuration::new();
    config.from_reader(path.to_string_lossy().into_owned()).unwrap();
    assert!(config.simpson_rule_manager().contains(&"Medium".to_string()));
    let _ = fs::remove_file(path);
}

#[test]
fn missing_configuration_file_is_io_error() {
    let config = Configuration::new();
    let error = config
        .from_reader("/nonexistent/simpson_quad/config.json".to_string())
        .unwrap_err();
    assert!(matches!(error, ManagerError::IOError(_)));
}

#[test]
fn manager_accepts_single_object_or_array() {
    let manager = SimpsonRuleManager::new();
    manager
        .insert_from_json_value(json!({ "name": "Two", "subintervals": 2 }), &())
        .unwrap();
    manager
        .insert_from_json_value(
            json!([
                { "name": "Four", "subintervals": 4 },
                { "name": "Six", "subintervals": 6 }
            ]),
            &(),
        )
        .unwrap();
    assert_eq!(manager.names(), vec!["Four".to_string(), "Six".to_string(), "Two".to_string()]);
}

#[test]
fn manager_reads_rule_file() {
    let path = temp_file("rules.json", r#"[ { "name": "Eight", "subintervals": 8 } ]"#);
    let manager = SimpsonRuleManager::new();
    manager.from_reader(path.to_string_lossy().into_owned(), &()).unwrap();
    assert_eq!(manager.get(&"Eight".to_string()).unwrap().subintervals(), 8);
    let _ = fs::remove_file(path);
}

// ---------------------------------------------------------------------------
// Grid reader
// ---------------------------------------------------------------------------

#[test]
fn csv_grid_is_read_row_by_row() {
    let csv = "1, 1, 1\n1, 1, 1\n1, 1, 1\n";
    let grid = read_grid_from(csv.as_bytes()).unwrap();
    assert_eq!(grid, vec![vec![1.0; 3]; 3]);
    assert!((simpson_2d(1.0, 1.0, &grid).unwrap() - 4.0).abs() < 1e-14);
}

#[test]
fn ragged_csv_reaches_the_integrator() {
    let grid = read_grid_from("1,2,3\n4,5\n6,7,8\n".as_bytes()).unwrap();
    assert_eq!(
        simpson_2d(1.0, 1.0, &grid),
        Err(IntegrationError::RaggedGrid { row: 1, expected: 3, found: 2 })
    );
}

#[test]
fn non_numeric_csv_is_rejected() {
    let error = read_grid_from("1,2\nx,4\n".as_bytes()).unwrap_err();
    assert!(matches!(error, ManagerError::CsvError(_)));
}

#[test]
fn csv_grid_is_read_from_file() {
    let path = temp_file("grid.csv", "0,0,0\n0,9,0\n0,0,0\n");
    let grid = read_grid(path.to_string_lossy().into_owned()).unwrap();
    // Only the centre point, weight 16, dx*dy/9 = 1/9.
    assert!((simpson_2d(1.0, 1.0, &grid).unwrap() - 16.0).abs() < 1e-12);
    let _ = fs::remove_file(path);
}
