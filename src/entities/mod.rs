// Entity Models
//
// Two nested entities:
// - Person: id + name + ordered skills
// - Skill: id + name + description + level, owned by one person
//
// Ids are assigned by the store and never change once assigned.

pub mod person;
pub mod skill;

pub use person::{Person, PersonId};
pub use skill::{Skill, SkillId, SkillLevel};
