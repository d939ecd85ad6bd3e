// Store error type
//
// The store has exactly one failure kind: the addressed entity does not exist.
// The two variants only differ in what the message names.

use thiserror::Error;

use crate::entities::{PersonId, SkillId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("person {0} not found")]
    PersonNotFound(PersonId),

    #[error("skill {skill_id} not found for person {person_id}")]
    SkillNotFound { person_id: PersonId, skill_id: SkillId },
}

impl StoreError {
    /// Every store error is a "not found"
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::PersonNotFound(_) | StoreError::SkillNotFound { .. }
        )
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
