use criterion::Criterion;
use std::time::Duration;

// ============================================================================
// Test Data & Domain Types
// ============================================================================

#[derive(Debug, Clone)]
pub enum DomainError {
    Database(String),
    Network(String),
    Validation(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Database(msg) => write!(f, "Database error: {msg}"),
            DomainError::Network(msg) => write!(f, "Network error: {msg}"),
            DomainError::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}

/// Error with a three-level cause chain, for diagnostic rendering.
#[derive(Debug)]
pub struct LayeredError {
    pub message: &'static str,
    pub source: Option<Box<LayeredError>>,
}

impl LayeredError {
    pub fn three_deep() -> Self {
        let root = LayeredError { message: "disk offline", source: None };
        let middle = LayeredError { message: "reading chickens.txt", source: Some(Box::new(root)) };
        LayeredError { message: "loading coop state", source: Some(Box::new(middle)) }
    }
}

impl std::fmt::Display for LayeredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for LayeredError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ============================================================================
// Simulation Functions
// ============================================================================

pub fn simulate_db_query(user_id: u64) -> Result<Option<u64>, DomainError> {
    match user_id % 100 {
        0 => Err(DomainError::Database("Connection timeout".to_string())),
        1 => Ok(None),
        _ => Ok(Some(user_id)),
    }
}

pub fn simulate_write(user_id: u64) -> Result<(), DomainError> {
    if user_id % 10 == 0 {
        Err(DomainError::Network("Service unavailable".to_string()))
    } else {
        Ok(())
    }
}

pub fn validate_user_age(age: i32) -> Result<Option<i32>, DomainError> {
    if (18..=120).contains(&age) {
        Ok(Some(age))
    } else {
        Err(DomainError::Validation("Age out of valid range".to_string()))
    }
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
