pub mod contact;
pub mod profile;
pub mod project;
pub mod skill;

use serde::{Deserialize, Serialize};

use crate::models::profile::{EducationEntry, ExperienceEntry, PersonalInfo};
use crate::models::project::Project;
use crate::models::skill::SkillSet;

/// Every section of the portfolio in one payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioComplete {
    pub personal: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub skills: SkillSet,
}
