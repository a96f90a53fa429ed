//! Per-group validation of the skills payload.
//!
//! Unlike every other section, skills are not accepted or rejected wholesale: each
//! of the four groups is checked on its own and only an empty or invalid group is
//! replaced by its default. Partial arrays are never trusted, so a group is taken
//! entirely from the response or entirely from the defaults.

use serde_json::Value;
use tracing::warn;

use crate::models::skill::{Skill, SkillGroup, SkillSet};

/// Parses one group from the payload. `None` when missing, empty, or any entry is invalid.
fn accepted_group(payload: &Value, group: SkillGroup) -> Option<Vec<Skill>> {
    let raw = payload.get(group.key())?;
    let skills: Vec<Skill> = serde_json::from_value(raw.clone()).ok()?;
    if skills.is_empty() || !skills.iter().all(Skill::is_valid) {
        return None;
    }
    Some(skills)
}

/// Builds a skill set from the payload, substituting defaults group by group.
pub fn merge_skill_groups(payload: &Value, defaults: SkillSet) -> SkillSet {
    let mut merged = defaults;
    for group in SkillGroup::ALL {
        match accepted_group(payload, group) {
            Some(skills) => *merged.group_mut(group) = skills,
            None => warn!(
                "skills: '{}' missing or invalid, using {} defaults",
                group.key(),
                merged.group(group).len()
            ),
        }
    }
    merged
}
