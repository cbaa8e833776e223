//! Skill categories

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0-100
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        description: "Creating responsive and interactive user interfaces",
        skills: &[
            skill("HTML & CSS", 95),
            skill("JavaScript", 90),
            skill("React.js", 85),
            skill("Next.js", 80),
            skill("Tailwind CSS", 85),
        ],
    },
    SkillCategory {
        title: "Mobile Development",
        description: "Building native and cross-platform mobile applications",
        skills: &[
            skill("React Native", 85),
            skill("Kotlin", 80),
            skill("Flutter", 75),
            skill("Android SDK", 75),
            skill("iOS Development", 65),
        ],
    },
    SkillCategory {
        title: "Backend Development",
        description: "Building APIs and server-side applications",
        skills: &[
            skill("Node.js", 80),
            skill("Express.js", 75),
            skill("Firebase", 85),
            skill("RESTful APIs", 90),
            skill("MongoDB", 70),
        ],
    },
    SkillCategory {
        title: "UI/UX Design",
        description: "Creating beautiful and intuitive user experiences",
        skills: &[
            skill("Figma", 80),
            skill("Adobe XD", 75),
            skill("Responsive Design", 90),
            skill("Design Systems", 85),
            skill("User Research", 70),
        ],
    },
    SkillCategory {
        title: "Programming Languages",
        description: "Core languages for various development tasks",
        skills: &[
            skill("JavaScript", 90),
            skill("TypeScript", 85),
            skill("Python", 70),
            skill("Kotlin", 80),
            skill("Dart", 75),
        ],
    },
    SkillCategory {
        title: "Tools & Other Skills",
        description: "Development tools and additional technical skills",
        skills: &[
            skill("Git & GitHub", 90),
            skill("Webpack", 75),
            skill("CI/CD", 70),
            skill("Testing (Jest, RTL)", 75),
            skill("Progressive Web Apps", 80),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_every_category_has_skills() {
        assert!(SKILL_CATEGORIES.iter().all(|c| !c.skills.is_empty()));
    }
}
