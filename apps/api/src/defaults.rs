//! Bundled static content. Always available, needs no network, and is the
//! terminal fallback of every read.

use crate::models::profile::{
    AccentColor, EducationEntry, EducationKind, ExperienceEntry, PersonalInfo,
};
use crate::models::project::{CategoryFilter, Project, ProjectCategory, ProjectStatus};
use crate::models::skill::{Skill, SkillSet};
use crate::models::PortfolioComplete;

pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Rohan Praveen Chavan".to_string(),
        bio: "AI/ML Engineer building production systems with LLMs, multi-agent orchestration, \
              and full-stack development. Experienced in building and deploying intelligent \
              systems from hackathon to production. Currently pursuing MS Computer Engineering \
              at Virginia Tech."
            .to_string(),
        title: Some("AI/ML Engineer & Full-Stack Developer".to_string()),
        email: Some("rohanchavan0701@gmail.com".to_string()),
        github: Some("https://github.com/RohanChavan0701".to_string()),
        linkedin: Some("https://www.linkedin.com/in/rohanpraveenchavan".to_string()),
        location: Some("Blacksburg, VA".to_string()),
    }
}

pub fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            id: "1".to_string(),
            degree: "M.S. Computer Engineering".to_string(),
            institution: "Virginia Polytechnic Institute and State University".to_string(),
            location: "Blacksburg, VA, USA".to_string(),
            period: "Aug 2024 – May 2026".to_string(),
            gpa: "3.71/4.0".to_string(),
            kind: EducationKind::Masters,
        },
        EducationEntry {
            id: "2".to_string(),
            degree: "B.Tech Information Technology".to_string(),
            institution: "K.J. Somaiya College of Engineering".to_string(),
            location: "Mumbai, India".to_string(),
            period: "Jan 2020 – Dec 2024".to_string(),
            gpa: "3.5/4.0".to_string(),
            kind: EducationKind::Bachelors,
        },
    ]
}

pub fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            id: "vt-maintainer".to_string(),
            company: "Virginia Tech, Division of IT".to_string(),
            title: "Software Maintainer".to_string(),
            location: "Blacksburg, VA, USA".to_string(),
            dates: "Dec 2024 – Feb 2025".to_string(),
            summary: "Modernized ML workflows on Summit platform with cloud-native tooling and CI/CD."
                .to_string(),
            bullets: strings(&[
                "Modernized ML workflows on Summit platform (Docker, AWS Lambda/S3/ECS).",
                "Reduced build errors by 35%, sped up deployments with IaC pipelines.",
            ]),
            stack: strings(&["Docker", "AWS Lambda", "Amazon S3", "Amazon ECS", "IaC"]),
            color: AccentColor::Blue,
        },
        ExperienceEntry {
            id: "vt-wage-grader".to_string(),
            company: "Virginia Tech".to_string(),
            title: "Wage Grader".to_string(),
            location: "Blacksburg, VA, USA".to_string(),
            dates: "Oct 2024 – Present".to_string(),
            summary: "Supported course operations with robust evaluation and automation for grading."
                .to_string(),
            bullets: strings(&[
                "Evaluated 50+ projects, automated grading workflows, improved efficiency 40%.",
            ]),
            stack: strings(&["Python", "Automation", "CI/CD"]),
            color: AccentColor::Purple,
        },
        ExperienceEntry {
            id: "colgate-ipa-intern".to_string(),
            company: "Colgate-Palmolive".to_string(),
            title: "Intelligent Process Automation Intern".to_string(),
            location: "Remote".to_string(),
            dates: "Jan 2024 – Jun 2024".to_string(),
            summary: "Built LLM-powered assistants to automate common support queries and workflows."
                .to_string(),
            bullets: strings(&[
                "Built AI chatbots (Python, GPT, Kore.ai), automated ~70% of queries.",
                "Reduced latency 30s → 10s, improved adoption by 50%.",
            ]),
            stack: strings(&["Python", "OpenAI/GPT", "Kore.ai", "Observability"]),
            color: AccentColor::Cyan,
        },
    ]
}

pub fn skills() -> SkillSet {
    SkillSet {
        languages: vec![
            skill("Python", 95, "programming"),
            skill("JavaScript", 90, "programming"),
            skill("Java", 85, "programming"),
            skill("SQL", 80, "database"),
            skill("HTML/CSS", 85, "web"),
            skill("Node.js", 80, "backend"),
        ],
        frameworks: vec![
            skill("React.js", 90, "frontend"),
            skill("Django", 85, "backend"),
            skill("FastAPI", 80, "backend"),
            skill("PyTorch", 90, "ai-ml"),
            skill("TensorFlow", 85, "ai-ml"),
            skill("LangChain", 85, "ai-ml"),
            skill("OpenCV", 80, "cv"),
            skill("HuggingFace", 85, "ai-ml"),
        ],
        tools: vec![
            skill("Git/GitHub", 95, "development"),
            skill("Docker", 80, "devops"),
            skill("Kubernetes", 75, "devops"),
            skill("AWS", 85, "cloud"),
            skill("GCP", 80, "cloud"),
            skill("Terraform", 70, "devops"),
            skill("MongoDB", 80, "database"),
            skill("PostgreSQL", 85, "database"),
        ],
        ai_ml: vec![
            skill("Machine Learning", 90, "core"),
            skill("Deep Learning", 85, "core"),
            skill("Natural Language Processing", 90, "domain"),
            skill("Computer Vision", 85, "domain"),
            skill("Large Language Models", 95, "specialized"),
            skill("Reinforcement Learning", 75, "specialized"),
            skill("MLOps", 80, "engineering"),
            skill("Model Evaluation", 85, "engineering"),
        ],
    }
}

fn all_projects() -> Vec<Project> {
    vec![
        Project {
            id: Some("1".to_string()),
            title: "LunaFlow — Cycle-Aware Planning Platform".to_string(),
            description: "Context-aware planning system with 4 integrated views (calendar, Kanban \
                          board, brainstorm, vision board). Built in 24 hours with bidirectional \
                          Google Calendar/Tasks sync."
                .to_string(),
            long_description: "Built and deployed in 24 hours at HackViolet 2026. Multi-service \
                               architecture with React frontend, Node.js backend, and a \
                               Python/FastAPI AI service with ElevenLabs voice input and Gemini \
                               task extraction."
                .to_string(),
            tech: strings(&[
                "React",
                "Node.js",
                "Python/FastAPI",
                "Docker",
                "Google Gemini",
                "ElevenLabs",
                "OAuth 2.0",
            ]),
            category: ProjectCategory::Other("Full-Stack".to_string()),
            featured: true,
            github: "https://github.com/RohanChavan0701/period_cycle_planner".to_string(),
            demo: Some("https://lunaflow.work".to_string()),
            image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=800&h=400&fit=crop"
                .to_string(),
            status: ProjectStatus::Completed,
            highlights: strings(&[
                "Built and deployed in 24 hours at HackViolet 2026",
                "4 integrated planning views (calendar, Kanban, brainstorm, vision board)",
                "Bidirectional Google Calendar/Tasks sync via OAuth 2.0",
            ]),
            order: 1,
            metrics: None,
        },
        Project {
            id: Some("2".to_string()),
            title: "CareRoute — Multi-Agent Medical Tourism Orchestrator".to_string(),
            description: "Multi-agent orchestration system coordinating 6 specialized agents via \
                          JSON-RPC 2.0. Built in 36 hours at Codefest 2025."
                .to_string(),
            long_description: "Coordinates flight monitoring, voice calls, notifications, hotel, \
                               hospital and accessibility agents. HIPAA-compliant audit logging, \
                               automated workflow triggering and retry logic. Deployed on AWS EC2 \
                               with PostgreSQL."
                .to_string(),
            tech: strings(&[
                "FastAPI",
                "PostgreSQL",
                "A2A SDK",
                "Docker",
                "AWS EC2",
                "Flutter",
                "APScheduler",
            ]),
            category: ProjectCategory::AiMl,
            featured: true,
            github: "https://github.com/RohanChavan0701/CareRoute".to_string(),
            demo: None,
            image: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=800&h=400&fit=crop"
                .to_string(),
            status: ProjectStatus::Completed,
            highlights: strings(&[
                "4th Place + Honorable Mention at Codefest 2025",
                "6 specialized agents with JSON-RPC 2.0 communication",
                "Deployed on AWS EC2 with PostgreSQL",
            ]),
            order: 2,
            metrics: None,
        },
    ]
}

/// Default projects narrowed by the same rules the document store applies.
pub fn projects(filter: &CategoryFilter, featured_only: bool) -> Vec<Project> {
    all_projects()
        .into_iter()
        .filter(|p| p.matches(filter, featured_only))
        .collect()
}

pub fn complete() -> PortfolioComplete {
    PortfolioComplete {
        personal: personal_info(),
        education: education(),
        experience: experience(),
        projects: projects(&CategoryFilter::All, false),
        skills: skills(),
    }
}

fn skill(name: &str, level: u8, category: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        category: category.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skill::SkillGroup;

    #[test]
    fn test_every_skill_group_is_populated_and_valid() {
        let set = skills();
        for group in SkillGroup::ALL {
            let skills = set.group(group);
            assert!(!skills.is_empty(), "{} is empty", group.key());
            assert!(skills.iter().all(Skill::is_valid));
        }
    }

    #[test]
    fn test_education_keeps_declaration_order() {
        let kinds: Vec<_> = education().into_iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EducationKind::Masters, EducationKind::Bachelors]);
    }

    #[test]
    fn test_project_filter_by_category() {
        let nlp = projects(&CategoryFilter::Only(ProjectCategory::Nlp), false);
        assert!(nlp.is_empty());
        let ai = projects(&CategoryFilter::Only(ProjectCategory::AiMl), false);
        assert_eq!(ai.len(), 1);
        assert_eq!(projects(&CategoryFilter::All, true).len(), 2);
    }
}
