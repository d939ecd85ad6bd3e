// In-memory Skill Store
//
// Sole owner of all person/skill state. Stands in for a database: each public
// method behaves like one transaction.
//
// - Ids come from two per-instance counters starting at 1, never reused
// - Every mutation holds the write lock for its whole duration, so counter
//   reads and increments cannot interleave between callers
// - Reads clone a snapshot; callers never see the internal Vec
// - Mutations rebuild the Person value and swap it into its slot, so the
//   order of people and of each person's skills is kept

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::entities::{Person, PersonId, Skill, SkillId};
use crate::error::{StoreError, StoreResult};

const FIRST_ID: i64 = 1;

// ============================================================================
// STATE
// ============================================================================

#[derive(Debug)]
struct StoreState {
    people: Vec<Person>,
    next_person_id: PersonId,
    next_skill_id: SkillId,
}

impl StoreState {
    fn new() -> Self {
        StoreState {
            people: Vec::new(),
            next_person_id: FIRST_ID,
            next_skill_id: FIRST_ID,
        }
    }

    fn position(&self, person_id: PersonId) -> Option<usize> {
        self.people.iter().position(|p| p.id == person_id)
    }

    fn find(&self, person_id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == person_id)
    }

    /// Swap in a rebuilt person at the slot of the person with the same id.
    /// The stored id is kept; name and skills are taken verbatim.
    fn replace(&mut self, person: Person) -> StoreResult<()> {
        let index = self
            .position(person.id)
            .ok_or(StoreError::PersonNotFound(person.id))?;

        let existing_id = self.people[index].id;
        self.people[index] = Person {
            id: existing_id,
            name: person.name,
            skills: person.skills,
        };
        Ok(())
    }
}

// ============================================================================
// SKILL STORE
// ============================================================================

/// Shared handle to the in-memory store. Clones point at the same state.
#[derive(Debug, Clone)]
pub struct SkillStore {
    state: Arc<RwLock<StoreState>>,
}

impl SkillStore {
    pub fn new() -> Self {
        SkillStore {
            state: Arc::new(RwLock::new(StoreState::new())),
        }
    }

    // A writer that panicked mid-call never leaves partial state behind (each
    // mutation is a single assignment/push), so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    /// Snapshot of all people in insertion order
    pub fn list_people(&self) -> Vec<Person> {
        self.read().people.clone()
    }

    pub fn get_person(&self, person_id: PersonId) -> Option<Person> {
        self.read().find(person_id).cloned()
    }

    /// Resolve the person first, then the skill within that person
    pub fn get_skill(&self, person_id: PersonId, skill_id: SkillId) -> Option<Skill> {
        let state = self.read();
        state
            .find(person_id)
            .and_then(|person| person.find_skill(skill_id))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.read().people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().people.is_empty()
    }

    // ------------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------------

    /// Append a new person under the next person id.
    ///
    /// Any caller-supplied person id is ignored. The nested skills are stored
    /// exactly as given, including their ids.
    pub fn add_person(&self, new_person: Person) -> Person {
        let mut state = self.write();

        let person = Person {
            id: state.next_person_id,
            name: new_person.name,
            skills: new_person.skills,
        };
        state.people.push(person.clone());
        state.next_person_id += 1;

        debug!(person_id = person.id, skills = person.skills.len(), "person added");
        person
    }

    /// Append a skill to a person under the next skill id.
    ///
    /// When the person does not exist nothing changes, including the skill counter.
    pub fn add_skill(&self, person_id: PersonId, new_skill: Skill) -> StoreResult<Skill> {
        let mut state = self.write();

        let person = state
            .find(person_id)
            .ok_or(StoreError::PersonNotFound(person_id))?;

        let skill = new_skill.with_id(state.next_skill_id);
        let mut skills = person.skills.clone();
        skills.push(skill.clone());
        let rebuilt = person.with_skills(skills);

        state.replace(rebuilt)?;
        state.next_skill_id += 1;

        debug!(person_id, skill_id = skill.id, "skill added");
        Ok(skill)
    }

    /// Replace name and skills of the person with `person.id`, verbatim.
    ///
    /// Incoming skills are neither merged nor renumbered.
    pub fn update_person(&self, person: Person) -> StoreResult<()> {
        let person_id = person.id;
        self.write().replace(person)?;

        debug!(person_id, "person updated");
        Ok(())
    }

    /// Replace name/description/level of the skill with `skill.id` on a person.
    ///
    /// Skill position and id are kept. If no skill matches, the person is
    /// written back unchanged and still returned as success.
    pub fn update_skill(&self, person_id: PersonId, skill: Skill) -> StoreResult<Person> {
        let mut state = self.write();

        let person = state
            .find(person_id)
            .ok_or(StoreError::PersonNotFound(person_id))?;

        let mut matched = false;
        let skills: Vec<Skill> = person
            .skills
            .iter()
            .map(|existing| {
                if existing.id == skill.id {
                    matched = true;
                    existing.with_values_of(&skill)
                } else {
                    existing.clone()
                }
            })
            .collect();
        let rebuilt = person.with_skills(skills);

        if !matched {
            warn!(person_id, skill_id = skill.id, "update matched no skill, person left unchanged");
        }

        state.replace(rebuilt.clone())?;

        debug!(person_id, skill_id = skill.id, "skill updated");
        Ok(rebuilt)
    }

    /// Remove a person and all of their skills
    pub fn remove_person(&self, person_id: PersonId) -> StoreResult<()> {
        let mut state = self.write();

        let before = state.people.len();
        state.people.retain(|p| p.id != person_id);

        if state.people.len() == before {
            return Err(StoreError::PersonNotFound(person_id));
        }

        debug!(person_id, "person removed");
        Ok(())
    }

    /// Drop every skill with `skill_id` from a person.
    ///
    /// Only the person's existence is checked: removing an unknown skill
    /// from a known person succeeds and changes nothing.
    pub fn remove_skill(&self, person_id: PersonId, skill_id: SkillId) -> StoreResult<()> {
        let mut state = self.write();

        let person = state
            .find(person_id)
            .ok_or(StoreError::PersonNotFound(person_id))?;

        if !person.has_skill(skill_id) {
            warn!(person_id, skill_id, "remove matched no skill, person left unchanged");
        }

        let skills: Vec<Skill> = person
            .skills
            .iter()
            .filter(|s| s.id != skill_id)
            .cloned()
            .collect();
        let rebuilt = person.with_skills(skills);

        state.replace(rebuilt)?;

        debug!(person_id, skill_id, "skill removed");
        Ok(())
    }
}

impl Default for SkillStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
