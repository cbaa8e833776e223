//! Project gallery data and filtering

/// Project grouping used by the gallery filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Web,
    Mobile,
    Algorithm,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Mobile => "Mobile",
            Self::Algorithm => "Algorithm",
        }
    }
}

/// Gallery filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        Self::All,
        Self::Only(ProjectCategory::Web),
        Self::Only(ProjectCategory::Mobile),
        Self::Only(ProjectCategory::Algorithm),
    ];

    pub fn next(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == *category,
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Repository URL, or "#" when the code is not public
    pub github: &'static str,
    pub category: ProjectCategory,
    pub featured: bool,
    pub capstone: bool,
    pub team: bool,
}

impl Project {
    pub fn repository(&self) -> Option<&'static str> {
        if self.github == "#" || self.github.is_empty() {
            None
        } else {
            Some(self.github)
        }
    }

    /// Short badges describing the project
    pub fn badges(&self) -> Vec<&'static str> {
        let mut badges = Vec::new();
        if self.featured {
            badges.push("Featured");
        }
        if self.capstone {
            badges.push("Capstone");
        }
        if self.team {
            badges.push("Team");
        }
        badges
    }
}

/// Projects matching the filter, in declaration order
pub fn filter_projects(filter: ProjectFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.matches(p)).collect()
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Si-Bantu",
        description: "Bangkit Capstone 2024 - Smart assistant mobile application for helping people with daily tasks using machine learning and AI technologies.",
        tags: &["Android", "Machine Learning", "TensorFlow", "Kotlin", "Firebase", "AI"],
        github: "https://github.com/indra1222/Bangkitcapstone",
        category: ProjectCategory::Mobile,
        featured: true,
        capstone: true,
        team: true,
    },
    Project {
        title: "SIGAP UNDIP",
        description: "Modern academic information system for Diponegoro University built with Next.js and TypeScript.",
        tags: &["Next.js", "TypeScript", "React", "CSS"],
        github: "https://github.com/mariosianturi19/SIGAP-UNDIP",
        category: ProjectCategory::Web,
        featured: true,
        capstone: false,
        team: false,
    },
    Project {
        title: "NBA App",
        description: "React Native mobile application for NBA statistics and team information with modern UI.",
        tags: &["React Native", "JavaScript", "CSS"],
        github: "https://github.com/mariosianturi19/NBA-App",
        category: ProjectCategory::Mobile,
        featured: true,
        capstone: false,
        team: false,
    },
    Project {
        title: "Klik Digital Dashboard",
        description: "Professional dashboard website for PT. Klik Digital Sinergi with advanced analytics.",
        tags: &["Next.js", "TypeScript", "CSS", "JavaScript"],
        github: "#",
        category: ProjectCategory::Web,
        featured: true,
        capstone: false,
        team: false,
    },
    Project {
        title: "Endorsement Website",
        description: "Social media influencer endorsement platform with payment integration and user management.",
        tags: &["PHP", "MySQL", "HTML", "CSS", "JavaScript"],
        github: "https://github.com/mariosianturi19/Endorsement_Website",
        category: ProjectCategory::Web,
        featured: false,
        capstone: false,
        team: false,
    },
    Project {
        title: "Basketball Court Booking",
        description: "Online basketball court booking system with real-time availability and payment processing.",
        tags: &["PHP", "HTML", "CSS", "JavaScript", "MySQL"],
        github: "https://github.com/mariosianturi19/Booking-Basketball-Court",
        category: ProjectCategory::Web,
        featured: false,
        capstone: false,
        team: false,
    },
    Project {
        title: "Outlet Recognition Website",
        description: "Website for outlet recognition using computer vision and machine learning algorithms.",
        tags: &["Node.js", "HTML", "CSS", "JavaScript", "Computer Vision"],
        github: "#",
        category: ProjectCategory::Web,
        featured: false,
        capstone: false,
        team: false,
    },
    Project {
        title: "Interpolation Algorithm",
        description: "Python implementation of numerical interpolation algorithms for data science and computational mathematics.",
        tags: &["Python", "Jupyter", "NumPy", "SciPy", "Mathematics"],
        github: "https://github.com/mariosianturi19/Implementasi-Interpolasi",
        category: ProjectCategory::Algorithm,
        featured: false,
        capstone: false,
        team: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(filter: ProjectFilter) -> Vec<&'static str> {
        filter_projects(filter).iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_all_returns_every_project() {
        assert_eq!(filter_projects(ProjectFilter::All).len(), PROJECTS.len());
    }

    #[test]
    fn test_mobile_filter() {
        assert_eq!(
            titles(ProjectFilter::Only(ProjectCategory::Mobile)),
            vec!["Si-Bantu", "NBA App"]
        );
    }

    #[test]
    fn test_algorithm_filter() {
        assert_eq!(
            titles(ProjectFilter::Only(ProjectCategory::Algorithm)),
            vec!["Interpolation Algorithm"]
        );
    }

    #[test]
    fn test_web_filter_keeps_declaration_order() {
        assert_eq!(
            titles(ProjectFilter::Only(ProjectCategory::Web)),
            vec![
                "SIGAP UNDIP",
                "Klik Digital Dashboard",
                "Endorsement Website",
                "Basketball Court Booking",
                "Outlet Recognition Website",
            ]
        );
    }

    #[test]
    fn test_filter_cycle_wraps() {
        let mut filter = ProjectFilter::All;
        for _ in 0..ProjectFilter::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, ProjectFilter::All);
        assert_eq!(
            ProjectFilter::All.prev(),
            ProjectFilter::Only(ProjectCategory::Algorithm)
        );
    }

    #[test]
    fn test_private_repository_has_no_link() {
        let dashboard = PROJECTS
            .iter()
            .find(|p| p.title == "Klik Digital Dashboard")
            .unwrap();
        assert_eq!(dashboard.repository(), None);
        assert_eq!(PROJECTS[0].repository(), Some("https://github.com/indra1222/Bangkitcapstone"));
    }

    #[test]
    fn test_badges() {
        assert_eq!(PROJECTS[0].badges(), vec!["Featured", "Capstone", "Team"]);
        assert!(PROJECTS[7].badges().is_empty());
    }
}
