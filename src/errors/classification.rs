use super::types::GoalieError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl GoalieError {
    /// Classify this error to determine how the run and the process react to it.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            GoalieError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
            },
            GoalieError::SourceUnavailable(_) => ErrorClassification {
                error_type: "SourceUnavailable",
                exit_code: 3,
            },
            GoalieError::Persistence(_) | GoalieError::Io(_) => ErrorClassification {
                error_type: "PersistenceError",
                exit_code: 4,
            },

            // Delivery failures never abort a run
            GoalieError::Delivery(_) => ErrorClassification {
                error_type: "DeliveryFailure",
                exit_code: 1,
            },

            GoalieError::Network(_) => ErrorClassification {
                error_type: "NetworkError",
                exit_code: 1,
            },
            GoalieError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: 1,
            },
            GoalieError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                exit_code: 1,
            },
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.classify().exit_code
    }
}
