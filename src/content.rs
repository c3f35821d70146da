pub const OWNER_NAME: &str = "K Shashi Preetham";
pub const TAGLINE: &str = "Data Science & Business Analytics Professional";
pub const SUMMARY: &str = "Transforming data into actionable insights through machine learning models, powerful visualizations, and strategic analysis.";
pub const AVATAR_URL: &str = "https://i.postimg.cc/hQQLkMCg/photo-2024-03-17-17-14-48.jpg";
pub const EMAIL: &str = "shashikathi56@gmail.com";
pub const PHONE: &str = "+91 9966034362";
pub const GITHUB_URL: &str = "https://github.com/shashikathi";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/shashikathi/";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/____shashikathi____";
pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1hc2-PXwPZftLdPEUMfO3Dh2Jq8DiOOsK/view";

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub metrics: &'static [&'static str],
    pub image: &'static str,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "TransOrg Analytics",
        role: "Data Science Intern",
        period: "Jan 2025 - June 2025",
        description: "Developed ML models for customer segmentation and predictive analysis, improving marketing campaign efficiency by 27%. Created interactive Power BI dashboards for real-time performance tracking.",
        metrics: &[
            "Improved campaign performance by 27%",
            "Processed 1.2TB of customer data",
        ],
        image: "https://images.pexels.com/photos/5256816/pexels-photo-5256816.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Experience {
        company: "Movidu",
        role: "Business Analyst",
        period: "Oct 2024 - Jan 2025",
        description: "Led market research and data analysis initiatives to identify potential leads and develop data-driven expansion strategies, collaborating with cross-functional teams to drive business growth.",
        metrics: &[
            "Qualified 200+ potential leads",
            "Achieved 25% revenue growth",
            "20% increase in client engagement",
        ],
        image: "https://images.pexels.com/photos/7567529/pexels-photo-7567529.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tools: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Customer Churn Prediction",
        description: "Built a machine learning model to predict which customers are likely to stop using a telecom service, generating insights for improving customer retention.",
        image: "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tools: &["Python", "Scikit-Learn", "Pandas", "Matplotlib"],
        link: "https://github.com/shashikathi/Customer-Churn-Prediction-",
    },
    Project {
        title: "Wine Quality Prediction",
        description: "Random Forest and Gradient Boosting models reaching 77.1% accuracy on wine quality, with feature importance analysis and 5-fold cross-validation.",
        image: "https://images.pexels.com/photos/2912108/pexels-photo-2912108.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tools: &["Python", "Scikit-learn", "Random Forest", "Gradient Boosting"],
        link: "https://github.com/shashikathi/Wine-Quality-Prediction",
    },
    Project {
        title: "Cryptocurrency Dashboard",
        description: "Interactive dashboard analyzing historical cryptocurrency prices with trend analysis and predictive analytics.",
        image: "https://images.pexels.com/photos/844124/pexels-photo-844124.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tools: &["Python", "Data Visualization", "Time Series Analysis"],
        link: "https://github.com/shashikathi/Cryptocurrency_Dashboard",
    },
    Project {
        title: "Poll-based Web Application",
        description: "Full-stack application for creating and managing polls with analytics on voting patterns and user engagement.",
        image: "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tools: &["Python", "Data Analysis", "Web Development"],
        link: "https://github.com/shashikathi/Poll-based-Web-Application",
    },
    Project {
        title: "Superstore Analytics",
        description: "Analysis of superstore sales data with interactive dashboards, predictive modeling, and business intelligence insights.",
        image: "https://images.pexels.com/photos/669615/pexels-photo-669615.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        tools: &["Data Analysis", "Business Intelligence", "Visualization"],
        link: "https://github.com/shashikathi/Superstore_Analytics",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Percent, 0..=100
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages",
        skills: &[skill("Python", 90), skill("SQL", 85), skill("Django", 80)],
    },
    SkillCategory {
        name: "Technologies & Frameworks",
        skills: &[
            skill("PyTorch", 85),
            skill("CrewAI", 80),
            skill("Google Gen AI", 85),
            skill("Transformers", 80),
            skill("Scikit-learn", 90),
        ],
    },
    SkillCategory {
        name: "Tools & Platforms",
        skills: &[
            skill("MySQL", 85),
            skill("OpenAI", 85),
            skill("LangChain", 80),
            skill("Power BI", 90),
            skill("Airflow", 80),
            skill("Tableau", 85),
        ],
    },
    SkillCategory {
        name: "Data Analysis",
        skills: &[
            skill("MS Excel", 90),
            skill("Data Visualization", 85),
            skill("Statistical Analysis", 85),
            skill("Kaggle", 80),
        ],
    },
    SkillCategory {
        name: "Soft Skills",
        skills: &[
            skill("Cross-Cultural Competence", 90),
            skill("Data Storytelling", 85),
            skill("Design Thinking", 85),
            skill("Learning Agility", 90),
            skill("Leadership", 85),
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Power BI Job Simulation",
        issuer: "PwC | Forage",
        date: "March 2025",
    },
    Certification {
        name: "Excel Skills for Business",
        issuer: "Goldman Sachs | Forage",
        date: "January 2025",
    },
    Certification {
        name: "Data Structures",
        issuer: "Certification Authority",
        date: "November 2022",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "B.Tech Hons. CSE in Data Science and Data Engineering",
        institution: "Lovely Professional University Punjab",
        period: "2021 - Present",
    },
    Education {
        degree: "Higher Secondary Education",
        institution: "Narayana IIT ACADEMY-Raviryala",
        period: "2019 - 2021",
    },
    Education {
        degree: "Secondary Education",
        institution: "Tejaswi high school, Warangal, Telangana",
        period: "2016 - 2019",
    },
];

/// Transition delay for the `index`-th card of a staggered group.
/// `tel:` link target for [`PHONE`].
pub fn phone_href() -> String {
    format!("tel:{}", PHONE.replace(' ', ""))
}

pub fn stagger_ms(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
            for s in category.skills {
                assert!(s.level <= 100, "{} has level {}", s.name, s.level);
            }
        }
    }

    #[test]
    fn test_links_are_absolute() {
        for p in PROJECTS {
            assert!(p.link.starts_with("https://"));
            assert!(!p.tools.is_empty());
        }
        assert!(RESUME_URL.starts_with("https://"));
    }

    #[test]
    fn test_phone_href_has_no_spaces() {
        assert_eq!(phone_href(), "tel:+919966034362");
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_ms(0, 200), 0);
        assert_eq!(stagger_ms(3, 100), 300);
    }
}
