//! Startup errors. All of them are fatal: nothing is rendered.

use sensorboard_domain::error::SensorboardError;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum StartError {
    #[error("no browser window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to start shell: {0}")]
    Shell(#[from] SensorboardError),

    #[error("browser API failure: {0}")]
    Browser(String),
}

#[cfg(test)]
mod tests {
    use sensorboard_domain::error::MountError;

    use super::*;

    #[test]
    fn should_report_missing_container_through_every_layer() {
        let err: StartError =
            SensorboardError::from(MountError::MissingContainer("root".to_string())).into();
        assert_eq!(
            err.to_string(),
            "failed to start shell: mount error: attachment point #root does not exist"
        );
    }

    #[test]
    fn should_report_config_validation_cause() {
        let err: StartError = ConfigError::Validation("brand.label must not be empty".into()).into();
        assert!(err.to_string().ends_with("brand.label must not be empty"));
    }
}
