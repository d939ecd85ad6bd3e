// Skill Entity - always owned by exactly one person
//
// "Skill id is IDENTITY (assigned by the store), name/description/level are VALUES"
//
// A skill never lives on its own: it is created inside a person's skill list
// and destroyed with it.

use serde::{Deserialize, Serialize};

/// Store-assigned skill identifier
pub type SkillId = i64;

// ============================================================================
// SKILL LEVEL
// ============================================================================

/// Well-known proficiency labels.
///
/// `Skill::level` is free-form text; these are the labels clients normally send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillLevel {
    /// Knows the basics, cannot yet apply them unaided
    Awareness,

    /// Applies the skill with some guidance
    Working,

    /// Applies the skill independently
    Practitioner,

    /// Leads and teaches others
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Awareness,
        SkillLevel::Working,
        SkillLevel::Practitioner,
        SkillLevel::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Awareness => "AWARENESS",
            SkillLevel::Working => "WORKING",
            SkillLevel::Practitioner => "PRACTITIONER",
            SkillLevel::Expert => "EXPERT",
        }
    }

    /// Case-insensitive lookup of a level label
    pub fn parse(label: &str) -> Option<SkillLevel> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(label.trim()))
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SKILL ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Ignored on creation, the store assigns it
    #[serde(default)]
    pub id: SkillId,

    pub name: String,
    pub description: String,

    /// Free-form category label, usually one of `SkillLevel`
    pub level: String,
}

impl Skill {
    /// Create an unsaved skill (id 0 until the store assigns one)
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Skill {
            id: 0,
            name: name.into(),
            description: description.into(),
            level: level.into(),
        }
    }

    /// Rebuild this skill under another identifier
    pub fn with_id(&self, id: SkillId) -> Skill {
        Skill { id, ..self.clone() }
    }

    /// Rebuild with the values of `other`, keeping this skill's identity
    pub fn with_values_of(&self, other: &Skill) -> Skill {
        Skill {
            id: self.id,
            name: other.name.clone(),
            description: other.description.clone(),
            level: other.level.clone(),
        }
    }

    /// The level as a well-known label, if it is one
    pub fn known_level(&self) -> Option<SkillLevel> {
        SkillLevel::parse(&self.level)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_creation() {
        let skill = Skill::new("Rust", "Systems programming", SkillLevel::Working.as_str());

        assert_eq!(skill.id, 0);
        assert_eq!(skill.name, "Rust");
        assert_eq!(skill.level, "WORKING");
        assert_eq!(skill.known_level(), Some(SkillLevel::Working));
    }

    #[test]
    fn test_skill_with_values_of_keeps_identity() {
        let original = Skill::new("Rust", "old", "AWARENESS").with_id(7);
        let edit = Skill::new("Rust 2021", "new", "EXPERT").with_id(99);

        let updated = original.with_values_of(&edit);

        assert_eq!(updated.id, 7);
        assert_eq!(updated.name, "Rust 2021");
        assert_eq!(updated.description, "new");
        assert_eq!(updated.level, "EXPERT");
    }

    #[test]
    fn test_skill_level_parse() {
        assert_eq!(SkillLevel::parse("awareness"), Some(SkillLevel::Awareness));
        assert_eq!(SkillLevel::parse(" Expert "), Some(SkillLevel::Expert));
        assert_eq!(SkillLevel::parse("guru"), None);

        let free_form = Skill::new("Cooking", "Pasta", "pretty good");
        assert_eq!(free_form.known_level(), None);
    }

    #[test]
    fn test_skill_json_shape() {
        let json = r#"{"name":"SQL","description":"Queries","level":"PRACTITIONER"}"#;
        let skill: Skill = serde_json::from_str(json).unwrap();

        assert_eq!(skill.id, 0);
        assert_eq!(skill.name, "SQL");

        let value = serde_json::to_value(skill.with_id(3)).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["level"], "PRACTITIONER");
    }

    #[test]
    fn test_skill_requires_fields() {
        let missing_level = r#"{"name":"SQL","description":"Queries"}"#;
        assert!(serde_json::from_str::<Skill>(missing_level).is_err());
    }

    #[test]
    fn test_skill_level_serde() {
        assert_eq!(
            serde_json::to_string(&SkillLevel::Practitioner).unwrap(),
            "\"PRACTITIONER\""
        );
    }
}
