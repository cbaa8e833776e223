//! Portfolio content
//!
//! Hardcoded profile, skills, experience and project data rendered by the
//! section views.

mod experience;
mod profile;
mod projects;
mod skills;

pub use experience::{Experience, ExperienceKind, CERTIFICATIONS};
pub use profile::{CONTACT_CHANNELS, HIGHLIGHTS, PROFILE};
pub use projects::{filter_projects, Project, ProjectFilter};
pub use skills::SKILL_CATEGORIES;

#[cfg(test)]
pub use projects::ProjectCategory;
