use serde::{Deserialize, Serialize};

pub const MAX_SKILL_LEVEL: u8 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, 0–100.
    pub level: u8,
    pub category: String,
}

impl Skill {
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.level <= MAX_SKILL_LEVEL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillGroup {
    Languages,
    Frameworks,
    Tools,
    AiMl,
}

impl SkillGroup {
    pub const ALL: [SkillGroup; 4] = [
        SkillGroup::Languages,
        SkillGroup::Frameworks,
        SkillGroup::Tools,
        SkillGroup::AiMl,
    ];

    /// The key this group is stored under on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            SkillGroup::Languages => "languages",
            SkillGroup::Frameworks => "frameworks",
            SkillGroup::Tools => "tools",
            SkillGroup::AiMl => "aiMl",
        }
    }
}

/// Skills grouped into the four fixed categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillSet {
    pub languages: Vec<Skill>,
    pub frameworks: Vec<Skill>,
    pub tools: Vec<Skill>,
    #[serde(rename = "aiMl")]
    pub ai_ml: Vec<Skill>,
}

impl SkillSet {
    pub fn group(&self, group: SkillGroup) -> &[Skill] {
        match group {
            SkillGroup::Languages => &self.languages,
            SkillGroup::Frameworks => &self.frameworks,
            SkillGroup::Tools => &self.tools,
            SkillGroup::AiMl => &self.ai_ml,
        }
    }

    pub fn group_mut(&mut self, group: SkillGroup) -> &mut Vec<Skill> {
        match group {
            SkillGroup::Languages => &mut self.languages,
            SkillGroup::Frameworks => &mut self.frameworks,
            SkillGroup::Tools => &mut self.tools,
            SkillGroup::AiMl => &mut self.ai_ml,
        }
    }
}
