//! Static fallback documents, keyed by category.
//!
//! Returned whenever the provider call fails or its output does not parse.
//! Deterministic: the same category always yields the same document, with no
//! network access. An unrecognized category maps to the backend table — made
//! explicit here rather than arising from conditional fallthrough.

use crate::models::profile::Category;
use crate::narrative::{
    AnalysisResult, DemandLevel, ImprovementPlan, MarketGap, RoadmapStep, Strength,
};

/// Fallback analysis document for `category`.
pub fn analysis_for(category: Category) -> AnalysisResult {
    match category {
        Category::Frontend => frontend_analysis(),
        Category::Backend | Category::Other => backend_analysis(),
    }
}

/// Fallback improvement plan for `category`.
pub fn improvement_for(category: Category) -> ImprovementPlan {
    match category {
        Category::Frontend => frontend_improvement(),
        Category::Backend | Category::Other => backend_improvement(),
    }
}

fn strength(skill: &str, description: &str) -> Strength {
    Strength {
        skill: skill.to_string(),
        description: description.to_string(),
    }
}

fn gap(skill: &str, level: DemandLevel, description: &str) -> MarketGap {
    MarketGap {
        skill: skill.to_string(),
        level,
        description: description.to_string(),
    }
}

fn step(title: &str, description: &str) -> RoadmapStep {
    RoadmapStep {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn frontend_analysis() -> AnalysisResult {
    AnalysisResult {
        strengths: vec![
            strength(
                "JavaScript",
                "The most fundamental and essential skill for web frontend work",
            ),
            strength("React", "Currently the most popular frontend library"),
            strength("HTML5/CSS3", "The foundational technologies of web development"),
        ],
        market: vec![
            gap(
                "TypeScript",
                DemandLevel::Weak,
                "Emerging as an essential skill for type safety",
            ),
            gap(
                "Next.js",
                DemandLevel::Missing,
                "React-based SSR framework with rapidly growing adoption",
            ),
            gap(
                "Testing",
                DemandLevel::Weak,
                "Testing tools such as Jest and React Testing Library",
            ),
        ],
        career_analysis: "Your career level is at the transition from junior to mid-level \
            developer. With framework experience such as React you can build standard web \
            applications, but adding advanced skills like TypeScript and testing would make \
            you considerably more competitive."
            .to_string(),
    }
}

fn backend_analysis() -> AnalysisResult {
    AnalysisResult {
        strengths: vec![
            strength("Node.js/Express", "A popular stack for modern backend development"),
            strength("MongoDB", "NoSQL database experience"),
            strength("RESTful API", "The foundation of web service development"),
        ],
        market: vec![
            gap(
                "Docker/Kubernetes",
                DemandLevel::Weak,
                "Containerization and orchestration are essential skills",
            ),
            gap(
                "GraphQL",
                DemandLevel::Missing,
                "A modern API approach that complements REST",
            ),
            gap(
                "TypeScript",
                DemandLevel::Missing,
                "Type safety is becoming important on the backend as well",
            ),
        ],
        career_analysis: "Your career level shows experience building basic backend systems. \
            You have built APIs with Node.js and Express, but it is time to deepen your \
            knowledge of cloud services and containerization tooling."
            .to_string(),
    }
}

fn frontend_improvement() -> ImprovementPlan {
    ImprovementPlan {
        priority_skills: "TypeScript, Jest/React Testing Library, Next.js".to_string(),
        roadmap: vec![
            step(
                "Learn TypeScript",
                "Add type safety to your JavaScript code with TypeScript. Combined with \
                React, it lets you write significantly more reliable code.",
            ),
            step(
                "Pick up testing tools",
                "Learn to write component tests with Jest and React Testing Library. \
                Test-driven development is a strong differentiator.",
            ),
            step(
                "Learn server-side rendering",
                "Use Next.js to improve the SEO and performance of React applications.",
            ),
            step(
                "Deepen state management",
                "Beyond Redux, compare Context API, Recoil, and Zustand, and learn to pick \
                the right solution for each situation.",
            ),
        ],
    }
}

fn backend_improvement() -> ImprovementPlan {
    ImprovementPlan {
        priority_skills: "Docker, AWS/cloud services, GraphQL".to_string(),
        roadmap: vec![
            step(
                "Learn Docker and containerization",
                "Learn to containerize and deploy applications with Docker. This is an \
                essential skill in modern backend development.",
            ),
            step(
                "Deepen cloud services",
                "Learn to use serverless architectures and managed services on a cloud \
                platform such as AWS, Azure, or GCP.",
            ),
            step(
                "Build GraphQL APIs",
                "Learn GraphQL as a complement to RESTful APIs, so clients can request \
                exactly the data they need.",
            ),
            step(
                "Backend development with TypeScript",
                "Apply TypeScript to Node.js backends to raise type safety and code quality.",
            ),
        ],
    }
}
