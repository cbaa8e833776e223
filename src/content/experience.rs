//! Work history, organizations, education and certifications

/// Which timeline an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceKind {
    Work,
    Organization,
    Education,
}

impl ExperienceKind {
    pub const ALL: [ExperienceKind; 3] = [Self::Work, Self::Organization, Self::Education];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work Experience",
            Self::Organization => "Organizations",
            Self::Education => "Education",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub employment: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub kind: ExperienceKind,
}

impl Experience {
    /// Entries of one kind, in declaration order
    pub fn of_kind(kind: ExperienceKind) -> impl Iterator<Item = &'static Experience> {
        EXPERIENCES.iter().filter(move |e| e.kind == kind)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Front-End Developer",
        company: "PT. Klik Digital Sinergi",
        location: "Jakarta, Indonesia",
        period: "Jan 2025 - Feb 2025",
        employment: "Internship",
        description: "Developed responsive dashboard using Next.js, TypeScript, and modern CSS frameworks.",
        skills: &["Next.js", "TypeScript", "CSS", "JavaScript"],
        kind: ExperienceKind::Work,
    },
    Experience {
        title: "Front-End Developer",
        company: "PT. Telekomunikasi Selular",
        location: "Jakarta, Indonesia",
        period: "Jul 2024 - Aug 2024",
        employment: "Internship",
        description: "Contributed to web development projects using modern frameworks and best practices.",
        skills: &["React", "JavaScript", "CSS", "HTML"],
        kind: ExperienceKind::Work,
    },
    Experience {
        title: "Teaching Assistant",
        company: "Diponegoro University",
        location: "Semarang, Indonesia",
        period: "Feb 2024 - Jun 2024",
        employment: "Part-time",
        description: "Mentored students in programming fundamentals and computer science concepts.",
        skills: &["Teaching", "Java", "Programming", "Mentoring"],
        kind: ExperienceKind::Work,
    },
    Experience {
        title: "Member",
        company: "Google Developer Student Clubs (GDSC) Diponegoro University",
        location: "Semarang, Indonesia",
        period: "Sep 2023 - Jul 2024",
        employment: "Organization",
        description: "Being a member of GDSC as a bridge between theory and practice to have an interest in developing skills in the field of technology especially Google Technologies.",
        skills: &["Google Technologies", "Community Building", "Tech Development", "Leadership"],
        kind: ExperienceKind::Organization,
    },
    Experience {
        title: "Member",
        company: "Computer Engineering Research Club (CERC) Diponegoro University",
        location: "Semarang, Indonesia",
        period: "Apr 2023 - Jun 2024",
        employment: "Organization",
        description: "Being a member of CERC in the software field with the goal of improving programming skills, especially in frontend and backend.",
        skills: &["Programming", "Frontend Development", "Backend Development", "Research"],
        kind: ExperienceKind::Organization,
    },
    Experience {
        title: "Mobile Development Cohort",
        company: "Bangkit Academy by Google, Tokopedia, Gojek & Traveloka",
        location: "Remote, Indonesia",
        period: "Feb 2024 - Jul 2024",
        employment: "Bootcamp",
        description: "Intensive 6-month program focusing on mobile development, machine learning, and cloud computing. Completed capstone project Si-Bantu with team collaboration.",
        skills: &[
            "Android Development",
            "Kotlin",
            "Machine Learning",
            "TensorFlow",
            "Firebase",
            "Google Cloud Platform",
            "Team Collaboration",
        ],
        kind: ExperienceKind::Education,
    },
    Experience {
        title: "Computer Engineering",
        company: "Diponegoro University",
        location: "Semarang, Indonesia",
        period: "2022 - Present",
        employment: "Bachelor's Degree",
        description: "Focusing on software development, algorithms, and computer systems.",
        skills: &["Software Engineering", "Data Structures", "Algorithms"],
        kind: ExperienceKind::Education,
    },
    Experience {
        title: "Mathematics & Natural Sciences",
        company: "SMA Negeri 55",
        location: "Jakarta, Indonesia",
        period: "2019 - 2022",
        employment: "High School",
        description: "Specialized in STEM subjects with focus on mathematics and physics.",
        skills: &["Mathematics", "Physics", "Chemistry"],
        kind: ExperienceKind::Education,
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Belajar Fundamental Aplikasi Android",
        issuer: "Dicoding Indonesia",
        year: "2023",
    },
    Certification {
        name: "Memulai Pemrograman dengan Kotlin",
        issuer: "Dicoding Indonesia",
        year: "2023",
    },
    Certification {
        name: "CCNAv7: Introduction to Networks",
        issuer: "Cisco Networking Academy",
        year: "2023",
    },
    Certification {
        name: "Belajar Dasar AI",
        issuer: "Dicoding Indonesia",
        year: "2023",
    },
    Certification {
        name: "Database Design Learner",
        issuer: "Oracle Academy",
        year: "2023",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_kind_partitions_entries() {
        let total: usize = ExperienceKind::ALL
            .iter()
            .map(|k| Experience::of_kind(*k).count())
            .sum();
        assert_eq!(total, EXPERIENCES.len());
    }

    #[test]
    fn test_of_kind_keeps_declaration_order() {
        let work: Vec<&str> = Experience::of_kind(ExperienceKind::Work)
            .map(|e| e.company)
            .collect();
        assert_eq!(
            work,
            vec![
                "PT. Klik Digital Sinergi",
                "PT. Telekomunikasi Selular",
                "Diponegoro University",
            ]
        );
    }
}
