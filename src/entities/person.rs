// Person Entity - owns an ordered list of skills
//
// Every change produces a rebuilt Person value; the store swaps it in place of
// the old one. Identity (id) survives every rebuild.

use serde::{Deserialize, Serialize};

use super::skill::{Skill, SkillId};

/// Store-assigned person identifier
pub type PersonId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Ignored on creation, the store assigns it
    #[serde(default)]
    pub id: PersonId,

    pub name: String,

    /// Insertion order is preserved
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Person {
    /// Create an unsaved person with no skills
    pub fn new(name: impl Into<String>) -> Self {
        Person {
            id: 0,
            name: name.into(),
            skills: Vec::new(),
        }
    }

    /// Builder: append a skill
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    /// Rebuild under another identifier
    pub fn with_id(&self, id: PersonId) -> Person {
        Person { id, ..self.clone() }
    }

    /// Rebuild with a replacement skill list, keeping id and name
    pub fn with_skills(&self, skills: Vec<Skill>) -> Person {
        Person {
            id: self.id,
            name: self.name.clone(),
            skills,
        }
    }

    pub fn find_skill(&self, skill_id: SkillId) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == skill_id)
    }

    pub fn has_skill(&self, skill_id: SkillId) -> bool {
        self.find_skill(skill_id).is_some()
    }
}
