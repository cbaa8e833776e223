//! Profile, highlights and contact channels

/// Who the portfolio belongs to
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub about: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub response_note: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Togar Anthony Mario Sianturi",
    short_name: "Mario",
    tagline: "Front-End Developer & Mobile App Creator",
    location: "Semarang, Indonesia",
    email: "19mariosianturi@gmail.com",
    about: &[
        "Hello! I'm Togar Anthony Mario Sianturi, a passionate frontend developer based in Semarang, Indonesia. I specialize in creating beautiful, responsive, and user-friendly web applications using modern JavaScript frameworks and libraries.",
        "I'm a proud graduate of the Bangkit Academy 2024, Google's flagship program for developing tech talents in Indonesia. Through this program, I enhanced my skills in Mobile Development and collaborated on innovative projects that solve real-world problems.",
        "My expertise lies in React, Next.js, and TypeScript, with a strong focus on creating seamless user experiences and pixel-perfect designs.",
        "You can explore my projects and contributions on GitHub, where I share my work and collaborate with the developer community.",
    ],
    technologies: &[
        "JavaScript",
        "TypeScript",
        "React",
        "Next.js",
        "HTML5",
        "CSS3",
        "Tailwind CSS",
        "Framer Motion",
        "React Native",
        "Git",
        "Figma",
    ],
    response_note: "I typically respond to messages within 24 hours. For urgent matters, please contact me directly via WhatsApp.",
};

/// A headline strength shown on the home view
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Frontend Development",
        description: "Building modern web applications with React & Next.js",
    },
    Highlight {
        title: "UI/UX Design",
        description: "Creating beautiful and intuitive user interfaces",
    },
    Highlight {
        title: "Open Source",
        description: "Contributing to projects and sharing code on GitHub",
    },
    Highlight {
        title: "Bangkit Graduate",
        description: "Google-backed program graduate specializing in Mobile Development",
    },
];

/// A way to reach the portfolio owner directly
#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "19mariosianturi@gmail.com",
        href: Some("mailto:19mariosianturi@gmail.com"),
    },
    ContactChannel {
        label: "Phone",
        value: "+62 877 1655 4446",
        href: Some("https://wa.me/6287716554446"),
    },
    ContactChannel {
        label: "Location",
        value: "Semarang, Indonesia",
        href: None,
    },
    ContactChannel {
        label: "LinkedIn",
        value: "Togar Anthony Mario Sianturi",
        href: Some("https://www.linkedin.com/in/togar-anthony-mario-sianturi/"),
    },
    ContactChannel {
        label: "GitHub",
        value: "@mariosianturi19",
        href: Some("https://github.com/mariosianturi19"),
    },
];
