use crate::errors::Result;

/// Contrat commun des Value Objects : un état construit est toujours re-validable.
pub trait ValueObject: PartialEq + Clone {
    fn validate(&self) -> Result<()>;
}
