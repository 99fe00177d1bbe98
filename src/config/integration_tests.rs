#[cfg(test)]
mod integration_tests {
    use crate::config::{
        load_and_validate_config, load_config, Config, DetectionMethod, RuntimeBuilder,
    };
    use crate::errors::{ConfigError, ValidationError};
    use std::path::PathBuf;

    /// Test that the shipped YAML configuration loads and validates
    #[test]
    fn test_detection_yaml_loading() {
        let config = load_and_validate_config("configs/detection.yaml").unwrap();

        assert_eq!(config.detection.get_method(), DetectionMethod::FrameDifference);
        assert_eq!(config.detection.get_threshold(), 5.0);
        assert_eq!(config.detection.get_min_distance(), 3);
        assert_eq!(config.output.get_path(), PathBuf::from("events.csv"));
    }

    /// Test that the shipped TOML configuration loads and builds a parallel runtime
    #[test]
    fn test_parallel_toml_loading() {
        let config = load_and_validate_config("configs/parallel.toml").unwrap();

        assert_eq!(
            config.detection.get_method(),
            DetectionMethod::ParallelFrameDifference
        );
        assert_eq!(config.detection.threads, Some(4));

        let (detector, params) = RuntimeBuilder::from_config(&config);
        assert_eq!(detector.name(), "parallel_frame_difference");
        assert_eq!(params.threshold, 4.5);
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "detection:\n  threshold: -3.0\n  threads: 0\n").unwrap();

        // Plain loading only parses
        let config = load_config(&path).unwrap();
        assert_eq!(config.detection.threshold, Some(-3.0));

        let err = load_and_validate_config(&path).unwrap_err();
        match &err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains(&ValidationError::NegativeThreshold { value: -3.0 }));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert!(err.to_string().contains("Configuration validation failed"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_config("configs/does-not-exist.yaml").unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("does-not-exist.yaml"));
    }

    #[test]
    fn test_empty_file_is_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yml");
        std::fs::write(&path, "").unwrap();

        assert_eq!(load_and_validate_config(&path).unwrap(), Config::default());
    }
}
