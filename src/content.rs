//! Static page content. Everything here is copy, not logic.

use crate::filter::Categorized;

pub const OWNER: &str = "Vamshi";
pub const TAGLINE: &str = "Tech Professional";
pub const EMAIL: &str = "vamshikrishna8330@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/YVK49";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/vamshiyamsani/";

pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Skills", href: "#skills" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "Teaching", href: "#teaching" },
    NavLink { name: "Contact", href: "#contact" },
];

/// Window scroll offset after which the navbar switches to its compact style.
pub const SCROLLED_OFFSET: f64 = 10.0;

pub fn is_scrolled(y: f64) -> bool {
    y > SCROLLED_OFFSET
}

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "devicon-python-plain",
        title: "Fullstack Development",
        desc: "Python, Django, JavaScript, React",
    },
    Highlight {
        icon: "devicon-react-original",
        title: "Frontend Excellence",
        desc: "Responsive UIs, Modern frameworks",
    },
    Highlight {
        icon: "devicon-postgresql-plain",
        title: "Backend Management",
        desc: "Supabase, Firebase, RESTful APIs",
    },
    Highlight {
        icon: "devicon-githubactions-plain",
        title: "AI Automation",
        desc: "n8n, Workflow design, Integration",
    },
];

pub const TEACHING_FEATURES: &[Highlight] = &[
    Highlight {
        icon: "extra-book",
        title: "Practical Curriculum",
        desc: "Learn by building real applications, not just following tutorials",
    },
    Highlight {
        icon: "extra-user",
        title: "Personalized Mentorship",
        desc: "Direct guidance tailored to your learning style and goals",
    },
    Highlight {
        icon: "extra-users",
        title: "Community Support",
        desc: "Connect with fellow learners for collaboration and networking",
    },
    Highlight {
        icon: "extra-message",
        title: "Continuous Feedback",
        desc: "Regular code reviews and improvement suggestions",
    },
];

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub category: &'static str,
    pub demo_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

impl Categorized for Project {
    fn category(&self) -> &str {
        self.category
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "AI Task Automator",
        description: "An intelligent workflow automation platform built with Python and Django that integrates with n8n for complex task automation.",
        image: "https://images.unsplash.com/photo-1555949963-aa79dcee981c?q=80&w=2070&auto=format&fit=crop",
        tags: &["Python", "Django", "n8n", "AI"],
        category: "AI Automation",
        demo_url: Some("#"),
        github_url: Some("#"),
    },
    Project {
        id: 2,
        title: "CodeZen Learning Platform",
        description: "An interactive coding education platform with real-time feedback, built using React, TypeScript, and Supabase for backend management.",
        image: "https://images.unsplash.com/photo-1551651653-c5186a1fbba2?q=80&w=2070&auto=format&fit=crop",
        tags: &["React", "TypeScript", "Supabase", "Education"],
        category: "Web Development",
        demo_url: Some("#"),
        github_url: Some("#"),
    },
    Project {
        id: 3,
        title: "Data Visualization Dashboard",
        description: "A comprehensive analytics dashboard for real-time data visualization using D3.js and React with a Django REST Framework backend.",
        image: "https://images.unsplash.com/photo-1543286386-713bdd548da4?q=80&w=2070&auto=format&fit=crop",
        tags: &["React", "D3.js", "Django", "REST API"],
        category: "Web Development",
        demo_url: None,
        github_url: Some("#"),
    },
    Project {
        id: 4,
        title: "Workflow AI Assistant",
        description: "AI-powered assistant for optimizing business workflows, integrating with various services through a unified API.",
        image: "https://images.unsplash.com/photo-1577401239170-897942555fb3?q=80&w=2069&auto=format&fit=crop",
        tags: &["AI", "API Integration", "Automation"],
        category: "AI Automation",
        demo_url: Some("#"),
        github_url: None,
    },
    Project {
        id: 5,
        title: "Content Management System",
        description: "Custom CMS built with Django and React, featuring a headless architecture and advanced content modeling capabilities.",
        image: "https://images.unsplash.com/photo-1523800503107-5bc3ba2a6f81?q=80&w=2080&auto=format&fit=crop",
        tags: &["Django", "React", "Headless CMS"],
        category: "Web Development",
        demo_url: Some("#"),
        github_url: Some("#"),
    },
    Project {
        id: 6,
        title: "API Integration Platform",
        description: "A platform for seamlessly connecting and automating workflows across different APIs and services.",
        image: "https://images.unsplash.com/photo-1558655146-364adaf1fcc9?q=80&w=2064&auto=format&fit=crop",
        tags: &["API", "Integration", "Automation"],
        category: "Backend Management",
        demo_url: None,
        github_url: Some("#"),
    },
];

/// Icon class for a project category.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Web Development" => "extra-globe",
        "AI Automation" => "extra-zap",
        _ => "extra-code",
    }
}

pub const MAX_SKILL_LEVEL: u8 = 5;

pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
    pub level: u8,
}

impl Categorized for Skill {
    fn category(&self) -> &str {
        self.category
    }
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Python", icon: "devicon-python-plain", category: "Programming", level: 5 },
    Skill { name: "Django", icon: "devicon-django-plain", category: "Programming", level: 5 },
    Skill { name: "JavaScript", icon: "devicon-javascript-plain", category: "Programming", level: 4 },
    Skill { name: "React", icon: "devicon-react-original", category: "Programming", level: 4 },
    Skill { name: "HTML/CSS", icon: "devicon-html5-plain", category: "Programming", level: 5 },
    Skill { name: "TypeScript", icon: "devicon-typescript-plain", category: "Programming", level: 3 },
    Skill { name: "n8n", icon: "extra-zap", category: "AI Automation", level: 5 },
    Skill { name: "Workflow Design", icon: "extra-bot", category: "AI Automation", level: 5 },
    Skill { name: "API Integration", icon: "extra-terminal", category: "AI Automation", level: 4 },
    Skill { name: "Automation", icon: "extra-cpu", category: "AI Automation", level: 5 },
    Skill { name: "Supabase", icon: "devicon-supabase-plain", category: "Backend Management", level: 4 },
    Skill { name: "RESTful APIs", icon: "extra-server", category: "Backend Management", level: 5 },
    Skill { name: "Database Design", icon: "extra-database", category: "Backend Management", level: 4 },
    Skill { name: "Technical Writing", icon: "extra-pen", category: "Content Creation", level: 4 },
    Skill { name: "Tutorial Creation", icon: "extra-pen", category: "Content Creation", level: 5 },
    Skill { name: "Video Content", icon: "extra-pen", category: "Content Creation", level: 4 },
];

pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Alex Rivera",
        role: "Web Developer",
        content: "CodeZen's practical approach to Django helped me transition from a complete beginner to confidently building my own web applications in just a few months.",
        avatar: "https://randomuser.me/api/portraits/men/32.jpg",
    },
    Testimonial {
        id: 2,
        name: "Samantha Lee",
        role: "UX Designer",
        content: "The AI automation course completely changed my workflow. Now I can focus on creative aspects while letting automated processes handle the repetitive tasks.",
        avatar: "https://randomuser.me/api/portraits/women/44.jpg",
    },
    Testimonial {
        id: 3,
        name: "Marcus Johnson",
        role: "Full Stack Developer",
        content: "What sets CodeZen apart is the hands-on mentorship and real-world projects. I gained practical skills that I immediately applied in my job.",
        avatar: "https://randomuser.me/api/portraits/men/22.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{categories, CategoryFilter};

    #[test]
    fn project_categories() {
        let labels = categories(PROJECTS)
            .into_iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["All", "AI Automation", "Web Development", "Backend Management"]
        );
    }

    #[test]
    fn skill_filter_counts() {
        assert_eq!(CategoryFilter::All.apply(SKILLS).len(), SKILLS.len());
        let programming = CategoryFilter::from("Programming").apply(SKILLS);
        assert_eq!(programming.len(), 6);
        assert_eq!(programming[0].name, "Python");
        assert_eq!(programming[5].name, "TypeScript");
    }

    #[test]
    fn skill_names_are_unique() {
        for (i, a) in SKILLS.iter().enumerate() {
            assert!(SKILLS[i + 1..].iter().all(|b| b.name != a.name));
            assert!((1..=MAX_SKILL_LEVEL).contains(&a.level));
        }
    }

    #[test]
    fn scrolled_after_offset() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }
}
