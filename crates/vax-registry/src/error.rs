use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("person {0} is already registered")]
    DuplicatedPerson(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
