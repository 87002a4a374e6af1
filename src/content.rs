//! Static copy for the landing page sections.

use crate::catalog::Level;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeaturedCourse {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub students: &'static str,
    pub rating: f32,
    pub instructor: &'static str,
    pub level: Level,
    pub price: Option<&'static str>,
    pub original_price: Option<&'static str>,
    pub category: &'static str,
    pub image: Option<&'static str>,
}

pub static FEATURED_COURSES: &[FeaturedCourse] = &[
    FeaturedCourse {
        id: 1,
        title: "Advanced Machine Learning & AI Mastery",
        description: "Comprehensive program covering neural networks, deep learning, computer vision, and natural language processing with hands-on projects using TensorFlow and PyTorch.",
        duration: "12 weeks",
        students: "15.2K+",
        rating: 4.9,
        instructor: "Dr. Sarah Chen",
        level: Level::Advanced,
        price: Some("₹4,999"),
        original_price: Some("₹8,999"),
        category: "AI & ML",
        image: None,
    },
    FeaturedCourse {
        id: 2,
        title: "Data Science & Analytics Bootcamp",
        description: "Master data analysis, statistical modeling, and machine learning. Work with Python, R, SQL, and build real-world data science projects from scratch.",
        duration: "10 weeks",
        students: "22.8K+",
        rating: 4.8,
        instructor: "Prof. Michael Rodriguez",
        level: Level::Intermediate,
        price: Some("₹3,999"),
        original_price: Some("₹6,999"),
        category: "Data Science",
        image: None,
    },
    FeaturedCourse {
        id: 3,
        title: "Blockchain & Web3 Development",
        description: "Build decentralized applications, smart contracts, and DeFi protocols. Learn Solidity, Web3.js, and deploy on Ethereum, Polygon, and other networks.",
        duration: "14 weeks",
        students: "8.4K+",
        rating: 4.7,
        instructor: "Alex Thompson",
        level: Level::Intermediate,
        price: Some("₹5,499"),
        original_price: Some("₹9,999"),
        category: "Blockchain",
        image: None,
    },
    FeaturedCourse {
        id: 4,
        title: "Cybersecurity & Ethical Hacking",
        description: "Comprehensive cybersecurity program covering penetration testing, network security, incident response, and advanced threat detection techniques.",
        duration: "16 weeks",
        students: "11.6K+",
        rating: 4.8,
        instructor: "Sarah Wilson",
        level: Level::Advanced,
        price: Some("₹6,299"),
        original_price: Some("₹10,999"),
        category: "CyberSecurity",
        image: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

pub static CATEGORIES: &[Category] = &[
    Category {
        name: "AI & ML",
        icon: "fa-brain",
        description: "Artificial Intelligence & Machine Learning",
        gradient: "grad-purple-pink",
    },
    Category {
        name: "Data Science",
        icon: "fa-chart-column",
        description: "Analytics & Big Data",
        gradient: "grad-blue-cyan",
    },
    Category {
        name: "BlockChain",
        icon: "fa-lock",
        description: "Cryptocurrency & Web3",
        gradient: "grad-yellow-orange",
    },
    Category {
        name: "CyberSecurity",
        icon: "fa-shield-halved",
        description: "Information Security",
        gradient: "grad-red-pink",
    },
    Category {
        name: "Medicine",
        icon: "fa-stethoscope",
        description: "Healthcare & Medical Sciences",
        gradient: "grad-green-emerald",
    },
    Category {
        name: "Law",
        icon: "fa-scale-balanced",
        description: "Legal Studies & Justice",
        gradient: "grad-indigo-purple",
    },
];

/// Gradient class for a category name, matched case-insensitively so that
/// "Blockchain" and "BlockChain" share a colour.
pub fn category_gradient(category: &str) -> &'static str {
    let lowered = category.to_lowercase();
    CATEGORIES
        .iter()
        .find(|c| c.name.to_lowercase() == lowered)
        .map(|c| c.gradient)
        .unwrap_or("grad-gray")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Goal {
    pub text: &'static str,
    pub icon: &'static str,
}

pub static GOALS: &[Goal] = &[
    Goal { text: "Get a promotion", icon: "fa-arrow-trend-up" },
    Goal { text: "Industry Certification", icon: "fa-star" },
    Goal { text: "New career path", icon: "fa-bullseye" },
    Goal { text: "Study Abroad", icon: "fa-wand-magic-sparkles" },
    Goal { text: "Free Course", icon: "fa-bolt" },
    Goal { text: "First job prep", icon: "fa-users" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub gradient: &'static str,
}

pub static HERO_STATS: &[Stat] = &[
    Stat { icon: "fa-users", value: "1.8M+", label: "Active Learners", gradient: "grad-blue-cyan" },
    Stat { icon: "fa-star", value: "4.8/5", label: "Average Rating", gradient: "grad-yellow-orange" },
    Stat { icon: "fa-arrow-trend-up", value: "95%", label: "Success Rate", gradient: "grad-green-emerald" },
];

pub static TRUST_STATS: &[Stat] = &[
    Stat { icon: "fa-users", value: "1.8M+", label: "Students Enrolled", gradient: "" },
    Stat { icon: "fa-award", value: "500+", label: "Expert Instructors", gradient: "" },
    Stat { icon: "fa-arrow-trend-up", value: "95%", label: "Completion Rate", gradient: "" },
    Stat { icon: "fa-star", value: "4.8★", label: "Average Rating", gradient: "" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
    pub stats: &'static str,
}

pub static FEATURES: &[Feature] = &[
    Feature {
        icon: "fa-wand-magic-sparkles",
        title: "AI-Powered Learning Paths",
        description: "Personalized curriculum powered by advanced AI algorithms that adapt to your learning style and pace",
        gradient: "grad-purple-pink",
        stats: "98% Success Rate",
    },
    Feature {
        icon: "fa-bullseye",
        title: "Industry-Expert Mentorship",
        description: "Learn directly from professionals at Google, Microsoft, Amazon, and other leading tech companies",
        gradient: "grad-blue-cyan",
        stats: "500+ Mentors",
    },
    Feature {
        icon: "fa-award",
        title: "Globally Recognized Certificates",
        description: "Earn industry-recognized certifications that boost your career prospects and salary potential",
        gradient: "grad-green-emerald",
        stats: "95% Hiring Rate",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya Sharma",
        role: "Data Scientist at Google",
        content: "This platform transformed my career completely. The AI program helped me land my dream job at Google!",
        rating: 5,
    },
    Testimonial {
        name: "Rahul Kumar",
        role: "Blockchain Developer",
        content: "Best investment I ever made. The instructors are world-class and the community support is amazing.",
        rating: 5,
    },
    Testimonial {
        name: "Anita Patel",
        role: "ML Engineer at Microsoft",
        content: "From zero coding experience to Microsoft in 8 months. The structured learning path made all the difference.",
        rating: 5,
    },
];

/// Uppercased first character, used for avatar placeholders.
pub fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_lookup_ignores_case() {
        assert_eq!(category_gradient("Blockchain"), "grad-yellow-orange");
        assert_eq!(category_gradient("cybersecurity"), "grad-red-pink");
        assert_eq!(category_gradient("Underwater Basket Weaving"), "grad-gray");
    }

    #[test]
    fn initials() {
        assert_eq!(initial("dr. Sarah Chen"), "D");
        assert_eq!(initial(""), "");
    }

    #[test]
    fn featured_courses_have_known_categories() {
        for course in FEATURED_COURSES {
            assert_ne!(category_gradient(course.category), "grad-gray", "{}", course.title);
        }
    }
}
