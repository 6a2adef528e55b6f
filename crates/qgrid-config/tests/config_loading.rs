//! Loading configurations from disk and running them through validation.

// ============================================================================
// File loading
// ============================================================================

mod file_loading {
    use qgrid_config::{CircuitConfig, CircuitSetup, ConfigurationError};
    use std::fs;

    const BELL_JSON: &str = r#"{
        "rows": 2,
        "columns": 3,
        "allowedGates": ["H", "CX"],
        "startingGrid": [["H", "-", "-"], ["-", "-", "-"]],
        "successGrids": [{"grid": [["H", ["CX", 1], "-"], ["-", "-", "-"]]}],
        "interactiveSolvableType": "submittable"
    }"#;

    const BELL_YAML: &str = "\
rows: 2
columns: 3
allowedGates: [H, CX]
startingGrid:
  - [H, '-', '-']
  - ['-', '-', '-']
successGrids:
  - grid:
      - [H, [CX, 1], '-']
      - ['-', '-', '-']
interactiveSolvableType: submittable
";

    #[test]
    fn test_json_and_yaml_agree() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("bell.json");
        let yaml_path = dir.path().join("bell.yaml");
        fs::write(&json_path, BELL_JSON).unwrap();
        fs::write(&yaml_path, BELL_YAML).unwrap();

        let from_json = CircuitConfig::from_path(&json_path).unwrap();
        let from_yaml = CircuitConfig::from_path(&yaml_path).unwrap();
        assert_eq!(from_json, from_yaml);

        let setup = CircuitSetup::from_config(&from_yaml).unwrap();
        assert_eq!(setup.success_grids.len(), 1);
        assert_eq!(setup.allowed_gates.len(), 2);
    }

    #[test]
    fn test_yml_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bell.yml");
        fs::write(&path, BELL_YAML).unwrap();
        assert_eq!(CircuitConfig::from_path(&path).unwrap().rows, 2);
    }

    #[test]
    fn test_unknown_extension_is_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bell.circuit");
        fs::write(&path, BELL_JSON).unwrap();
        assert!(CircuitConfig::from_path(&path).is_ok());

        fs::write(&path, BELL_YAML).unwrap();
        assert!(matches!(
            CircuitConfig::from_path(&path),
            Err(ConfigurationError::Syntax(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CircuitConfig::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigurationError::Read { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}

// ============================================================================
// Validation scenarios
// ============================================================================

mod validation {
    use qgrid_config::{CircuitConfig, CircuitSetup, ConfigurationError, validate};
    use qgrid_ir::{BinaryGate, Cell, Grid, UnaryGate};

    fn parse(json: &str) -> CircuitConfig {
        CircuitConfig::from_json_str(json).unwrap()
    }

    #[test]
    fn test_round_trip_through_setup() {
        let config = parse(
            r#"{
                "rows": 3,
                "columns": 2,
                "startingGrid": [["H", ["CZ", 2]], ["X", "-"], ["-", "-"]]
            }"#,
        );
        let setup = CircuitSetup::from_config(&config).unwrap();

        let expected = Grid::empty(3, 2)
            .add_gate(0, 0, Cell::Unary(UnaryGate::H))
            .add_gate(1, 0, Cell::Unary(UnaryGate::X))
            .add_gate(0, 1, Cell::control(BinaryGate::CZ, 2));
        assert_eq!(setup.starting_grid, expected);

        // The canonical grid serializes back to the authored cells.
        let json = serde_json::to_value(&setup.starting_grid).unwrap();
        assert_eq!(
            json,
            serde_json::json!([["H", ["CZ", 2]], ["X", "-"], ["-", "-"]])
        );
    }

    #[test]
    fn test_five_by_six_limit() {
        let rows: Vec<_> = (0..5).map(|_| vec!["-"; 6]).collect();
        let config = parse(
            &serde_json::json!({ "rows": 5, "columns": 6, "startingGrid": rows }).to_string(),
        );
        assert!(validate(&config).is_ok());

        let config = parse(r#"{"rows": 5, "columns": 7}"#);
        let err = validate(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "You must have between 1 and 6 columns. Your configuration has 7."
        );
    }

    #[test]
    fn test_first_failure_wins() {
        // Both an unknown unary gate and a reversed black box: the starting
        // grid cells are checked first.
        let config = parse(
            r#"{
                "rows": 1,
                "columns": 3,
                "startingGrid": [["Q", "-", "-"]],
                "blackBoxColumns": {"start": 2, "end": 0}
            }"#,
        );
        assert!(matches!(
            validate(&config),
            Err(ConfigurationError::UnsupportedUnaryGate { .. })
        ));
    }

    #[test]
    fn test_action_cell_message() {
        let config = parse(
            r#"{
                "rows": 2,
                "columns": 1,
                "startingGrid": [[["CX", 1]], ["Z"]]
            }"#,
        );
        let err = validate(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Your control gate in column #0 is targeting row #1. This cell needs to be empty. It currently contains a Z."
        );
    }

    #[test]
    fn test_action_row_message() {
        let config = parse(
            r#"{
                "rows": 2,
                "columns": 1,
                "startingGrid": [[["CX", 5]], ["-"]]
            }"#,
        );
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("trying to connect to wire 5"));
        assert!(err.to_string().contains("is 1"));
    }

    #[test]
    fn test_success_state_alias() {
        let config = parse(
            r#"{
                "rows": 1,
                "columns": 1,
                "successStates": [{"circuit": [["Y"]]}]
            }"#,
        );
        let setup = CircuitSetup::from_config(&config).unwrap();
        assert_eq!(
            setup.success_grids[0].gate_at(0, 0),
            Cell::Unary(UnaryGate::Y)
        );
    }
}
