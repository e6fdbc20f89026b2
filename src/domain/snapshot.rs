//! Bundled profile content, served verbatim when no backend is configured.
//!
//! The authored shape mirrors how the content is written: skills grouped by
//! category, projects split into featured and upcoming. The adapter methods
//! below are the single place that reshapes this into what the remote API
//! returns, so the two modes cannot drift apart.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use uuid::Uuid;

use super::entities::{
    Achievement, Education, Experience, PersonalInfo, Project, ProjectStatus, Skill, SkillCategory,
};

/// One category section of the skills page, in authored order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

/// Authored project lists: featured work first, placeholders after.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectShelf {
    pub featured: Vec<Project>,
    pub upcoming: Vec<Project>,
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skill_groups: Vec<SkillGroup>,
    pub projects: ProjectShelf,
    pub achievements: Vec<Achievement>,
}

impl Snapshot {
    /// Flattens the grouped skills into the list shape `GET /api/skills`
    /// returns. Every skill already carries its category, so nothing is lost.
    pub fn skills_flat(&self) -> Vec<Skill> {
        self.skill_groups
            .iter()
            .flat_map(|group| group.skills.iter().cloned())
            .collect()
    }

    /// Merges featured and upcoming projects into the `GET /api/projects`
    /// shape, featured first.
    pub fn all_projects(&self) -> Vec<Project> {
        self.projects
            .featured
            .iter()
            .chain(self.projects.upcoming.iter())
            .cloned()
            .collect()
    }

    pub fn featured_projects(&self) -> Vec<Project> {
        self.projects.featured.clone()
    }
}

/// The content snapshot, built once per process. Immutable after creation.
pub static SNAPSHOT: Lazy<Snapshot> = Lazy::new(bundled);

fn bundled() -> Snapshot {
    let now = Utc::now();

    Snapshot {
        personal_info: PersonalInfo {
            id: Uuid::new_v4(),
            name: "Sarvesh Ramani".to_string(),
            title: "Software Engineer II".to_string(),
            email: "sarveshramani1004@gmail.com".to_string(),
            phone: "+91 8939072479".to_string(),
            linkedin: "https://www.linkedin.com/in/sarvesh-ramani".to_string(),
            location: "India".to_string(),
            profile_image: "https://customer-assets.emergentagent.com/job_f1a148eb-73ec-41da-affa-5da4b24be52c/artifacts/utsgf50g_1728362780929.jpg".to_string(),
            summary: "Backend Developer with 1.5+ years of experience designing scalable microservices using Java, Spring Boot, and MongoDB. Adept at developing secure REST APIs, debugging production issues, and delivering enterprise-level custom enhancements.".to_string(),
            tagline: "Passionate about creating enterprise-level solutions that drive business value.".to_string(),
            created_at: now,
            updated_at: now,
        },
        experience: vec![experience(
            now,
            "AppViewX",
            "Backend Developer",
            "2023 - Present",
            "India",
            "Full-time",
            "Transitioned from core product development (SIGN+) to a SWAT engineering role resolving critical issues and improving client retention.",
            &[
                "Developed secure REST APIs and modular backend components for SIGN+, enabling seamless digital signing workflows with identity providers and PKI systems",
                "Resolved 50+ critical production issues as part of the SWAT team, with <24h turnaround and detailed root cause analysis",
                "Delivered customer-specific enhancements and configuration fixes across AppViewX modules, improving satisfaction and retention",
                "Collaborated directly with enterprise clients to gather feature requirements and implement tailored solutions",
                "Designed and implemented microservices architecture for improved scalability and maintainability",
                "Optimized database queries and improved system performance by 30%",
            ],
            &["Java", "Spring Boot", "MongoDB", "REST APIs", "Microservices", "PKI", "Docker", "Kubernetes"],
            true,
        )],
        education: vec![Education {
            id: Uuid::new_v4(),
            degree: "B.E Mechanical Engineering".to_string(),
            institution: "Coimbatore Institute of Technology".to_string(),
            period: "June 2019 - May 2023".to_string(),
            location: "Coimbatore, India".to_string(),
            description: "Graduated with a strong foundation in engineering principles, problem-solving, and analytical thinking.".to_string(),
            created_at: now,
            updated_at: now,
        }],
        skill_groups: vec![
            group(now, SkillCategory::ProgrammingLanguages, &[
                ("Java", 90, "Primary language for backend development"),
                ("Python", 75, "Used for AI/ML projects and scripting"),
                ("JavaScript", 70, "Frontend and Node.js development"),
            ]),
            group(now, SkillCategory::Frameworks, &[
                ("Spring Boot", 90, "Expert in building microservices"),
                ("TensorFlow", 70, "Machine learning model development"),
                ("Scikit-learn", 75, "Data science and ML algorithms"),
            ]),
            group(now, SkillCategory::Databases, &[
                ("MongoDB", 85, "NoSQL database design and optimization"),
                ("SQL", 75, "Relational database management"),
            ]),
            group(now, SkillCategory::DevopsTools, &[
                ("Docker", 80, "Containerization and deployment"),
                ("Kubernetes", 70, "Container orchestration"),
                ("Git", 85, "Version control and collaboration"),
            ]),
            group(now, SkillCategory::CoreConcepts, &[
                ("Microservices", 90, "Architecture design and implementation"),
                ("REST APIs", 95, "API design and development"),
                ("PKI", 80, "Public Key Infrastructure and security"),
                ("AI/ML", 70, "Machine learning and data science"),
            ]),
        ],
        projects: ProjectShelf {
            featured: vec![
                project(
                    now,
                    "GravitySpy Glitch Classification",
                    "Designed and trained a deep learning model to classify various types of gravitational wave glitches using CNNs, improving recognition accuracy and aiding LIGO data analysis.",
                    &["Python", "TensorFlow", "Scikit-learn", "CNN", "Data Analysis"],
                    "Machine Learning",
                    &[
                        "Achieved 95%+ accuracy in glitch classification",
                        "Processed large-scale LIGO dataset",
                        "Implemented custom CNN architecture",
                        "Improved data analysis pipeline efficiency",
                    ],
                    ProjectStatus::Completed,
                    "Research Project",
                    true,
                ),
                project(
                    now,
                    "Cert V2X",
                    "Built a backend service for issuing and managing certificates used in Vehicle-to-Everything (V2X) communications, integrating secure signing with PKI protocols.",
                    &["Java", "Spring Boot", "PKI", "Security", "V2X Protocol"],
                    "Backend Development",
                    &[
                        "Implemented secure certificate management",
                        "Integrated PKI protocols for V2X communication",
                        "Built RESTful APIs for certificate operations",
                        "Ensured compliance with automotive security standards",
                    ],
                    ProjectStatus::Completed,
                    "Enterprise Project",
                    true,
                ),
            ],
            upcoming: vec![
                project(
                    now,
                    "E-Commerce Microservices Platform",
                    "A scalable microservices-based e-commerce platform with user management, product catalog, and order processing services.",
                    &["Java", "Spring Boot", "MongoDB", "Docker", "Kubernetes"],
                    "Backend Development",
                    &[],
                    ProjectStatus::InPlanning,
                    "Personal Project",
                    false,
                ),
                project(
                    now,
                    "Real-time Chat Application",
                    "A real-time messaging application with WebSocket support, user authentication, and message history.",
                    &["Node.js", "Socket.io", "MongoDB", "React", "JWT"],
                    "Full Stack",
                    &[],
                    ProjectStatus::ComingSoon,
                    "Personal Project",
                    false,
                ),
                project(
                    now,
                    "AI-Powered Log Analysis Tool",
                    "An intelligent log analysis tool that uses machine learning to detect anomalies and predict system failures.",
                    &["Python", "TensorFlow", "ElasticSearch", "Kafka", "Docker"],
                    "AI/ML",
                    &[],
                    ProjectStatus::Concept,
                    "Research Project",
                    false,
                ),
            ],
        },
        achievements: vec![
            Achievement {
                id: Uuid::new_v4(),
                title: "SPOT Award (2023)".to_string(),
                description: "Awarded the quarterly SPOT award for consistently resolving customer issues and ensuring timely delivery.".to_string(),
                year: "2023".to_string(),
                category: "Award".to_string(),
                created_at: now,
                updated_at: now,
            },
            Achievement {
                id: Uuid::new_v4(),
                title: "Excellence Award (2023-24)".to_string(),
                description: "Received the Certificate of Excellence for consistent delivery and continuous efforts on delivering the best output.".to_string(),
                year: "2023-24".to_string(),
                category: "Award".to_string(),
                created_at: now,
                updated_at: now,
            },
        ],
    }
}

fn group(now: DateTime<Utc>, category: SkillCategory, entries: &[(&str, u8, &str)]) -> SkillGroup {
    SkillGroup {
        category,
        skills: entries
            .iter()
            .map(|(name, level, description)| Skill {
                id: Uuid::new_v4(),
                category,
                name: name.to_string(),
                level: *level,
                description: description.to_string(),
                created_at: now,
                updated_at: now,
            })
            .collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn project(
    now: DateTime<Utc>,
    title: &str,
    description: &str,
    technologies: &[&str],
    category: &str,
    highlights: &[&str],
    status: ProjectStatus,
    project_type: &str,
    is_featured: bool,
) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        category: category.to_string(),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
        status,
        project_type: project_type.to_string(),
        is_featured,
        github_url: None,
        demo_url: None,
        created_at: now,
        updated_at: now,
    }
}

#[allow(clippy::too_many_arguments)]
fn experience(
    now: DateTime<Utc>,
    company: &str,
    role: &str,
    period: &str,
    location: &str,
    employment_type: &str,
    description: &str,
    achievements: &[&str],
    technologies: &[&str],
    is_current_job: bool,
) -> Experience {
    Experience {
        id: Uuid::new_v4(),
        company: company.to_string(),
        role: role.to_string(),
        period: period.to_string(),
        location: location.to_string(),
        employment_type: employment_type.to_string(),
        description: description.to_string(),
        achievements: achievements.iter().map(|a| a.to_string()).collect(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        is_current_job,
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_projects_are_the_featured_subset_of_all() {
        let all = SNAPSHOT.all_projects();
        let featured = SNAPSHOT.featured_projects();
        let expected: Vec<_> = all.into_iter().filter(|p| p.is_featured).collect();
        assert_eq!(featured, expected);
    }

    #[test]
    fn flattened_skills_keep_every_skill_exactly_once() {
        let flat = SNAPSHOT.skills_flat();
        let grouped_total: usize = SNAPSHOT.skill_groups.iter().map(|g| g.skills.len()).sum();
        assert_eq!(flat.len(), grouped_total);

        // Category annotations survive the flattening.
        for group in &SNAPSHOT.skill_groups {
            for skill in &group.skills {
                assert!(flat.iter().any(|s| s.id == skill.id && s.category == group.category));
            }
        }
    }

    #[test]
    fn snapshot_carries_the_published_identity() {
        assert_eq!(SNAPSHOT.personal_info.name, "Sarvesh Ramani");
        assert_eq!(SNAPSHOT.personal_info.title, "Software Engineer II");
    }

    #[test]
    fn all_projects_lists_featured_before_upcoming() {
        let all = SNAPSHOT.all_projects();
        let first_upcoming = all.iter().position(|p| !p.is_featured).unwrap();
        assert!(all[..first_upcoming].iter().all(|p| p.is_featured));
        assert!(all[first_upcoming..].iter().all(|p| !p.is_featured));
    }
}
