use chrono::{DateTime, Datelike};

const BUILD_TIME: &str = env!("BUILD_TIME");
const FALLBACK_YEAR: i32 = 2024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

/// Sections reachable from the navbar, in display order.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        id: "about",
        label: "About",
    },
    NavItem {
        id: "skills",
        label: "Skills",
    },
    NavItem {
        id: "experience",
        label: "Experience",
    },
    NavItem {
        id: "projects",
        label: "Projects",
    },
    NavItem {
        id: "contact",
        label: "Contact",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub monogram: &'static str,
    pub role: &'static str,
    pub about: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub static PROFILE: Profile = Profile {
    name: "John Developer",
    monogram: "JD",
    role: "Full Stack Software Engineer",
    about: "I'm a passionate software engineer with 5+ years of experience building web applications. \
            I specialize in React, Node.js, and cloud technologies. When I'm not coding, you can find \
            me contributing to open-source projects or writing technical blog posts.",
    email: "john@example.com",
    github_url: "https://github.com",
    linkedin_url: "https://linkedin.com",
};

pub static SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "AWS",
    "Docker",
    "GraphQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "Git",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub date: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub description: &'static [&'static str],
}

/// Career history, most recent first. Rendered as declared.
pub static EXPERIENCE: &[Experience] = &[
    Experience {
        date: "2021 - Present",
        title: "Software Engineer",
        company: "Tech Solutions Inc.",
        location: "San Francisco, CA",
        description: &[
            "Led a team of 5 developers in building a microservices architecture",
            "Improved application performance by 40% through optimization",
            "Implemented CI/CD pipelines reducing deployment time by 60%",
        ],
    },
    Experience {
        date: "2019 - 2021",
        title: "Software Engineer",
        company: "Innovation Labs",
        location: "New York, NY",
        description: &[
            "Developed and maintained multiple React-based web applications",
            "Collaborated with UX team to implement responsive designs",
            "Mentored junior developers and conducted code reviews",
        ],
    },
    Experience {
        date: "2017 - 2019",
        title: "Junior Developer",
        company: "StartUp Co",
        location: "Boston, MA",
        description: &[
            "Built and maintained RESTful APIs using Node.js",
            "Implemented user authentication and authorization",
            "Contributed to the development of company's main product",
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce platform built with React, Node.js, and MongoDB",
        tags: &["React", "Node.js", "MongoDB"],
        github_url: "https://github.com",
        live_url: "https://example.com",
    },
    Project {
        title: "Task Management App",
        description: "A real-time task management application with team collaboration features",
        tags: &["React", "Firebase", "Tailwind"],
        github_url: "https://github.com",
        live_url: "https://example.com",
    },
    Project {
        title: "AI Chat Interface",
        description: "An AI-powered chat interface built with OpenAI's GPT-3 API",
        tags: &["React", "OpenAI", "WebSocket"],
        github_url: "https://github.com",
        live_url: "https://example.com",
    },
];

/// Year the site was built, shown in the footer.
pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(BUILD_TIME).map_or(FALLBACK_YEAR, |t| t.year())
}
