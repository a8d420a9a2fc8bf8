use thiserror::Error;

use crate::services::naming::ServiceName;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RegistryError {
    #[error("Registry error, invalid name segment (segment: {0:?})")]
    InvalidSegment(String),

    #[error("Registry error, service already registered (name: {0})")]
    DuplicateRegistration(ServiceName),

    #[error("Registry error, service not found (name: {0})")]
    NotFound(ServiceName),
}
