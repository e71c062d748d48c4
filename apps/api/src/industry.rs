//! Static industry profiles.
//!
//! One table drives both deterministic content generation (summary/experience/skills
//! templates) and the heuristic industry/keyword optimizers (keywords, core skills, trends,
//! certifications, career advice). Unknown industries resolve to technology.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug)]
pub struct CertificationHint {
    pub name: &'static str,
    pub provider: &'static str,
    pub priority: Priority,
}

#[derive(Debug)]
pub struct IndustryProfile {
    pub key: &'static str,
    pub label: &'static str,
    /// Extra spellings that resolve to this profile.
    pub aliases: &'static [&'static str],
    /// ATS keywords, lowercase, most important first.
    pub keywords: &'static [&'static str],
    /// Contains a `{jobTitle}` placeholder.
    pub summary_template: &'static str,
    pub experience_bullets: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub core_skills: &'static [(&'static str, Priority)],
    pub trends: &'static [&'static str],
    pub certifications: &'static [CertificationHint],
    pub networking: &'static [&'static str],
    pub portfolio: &'static [&'static str],
    /// May contain a `{role}` placeholder.
    pub interview_tips: &'static [&'static str],
}

pub static PROFILES: [IndustryProfile; 5] = [
    IndustryProfile {
        key: "technology",
        label: "Technology",
        aliases: &["tech", "software", "it", "engineering", "saas"],
        keywords: &[
            "agile",
            "cloud",
            "api",
            "ci/cd",
            "microservices",
            "scalability",
            "automation",
            "testing",
            "git",
            "sql",
            "security",
            "performance",
        ],
        summary_template: "Experienced {jobTitle} with expertise in modern technologies and agile development practices. Proven track record of delivering scalable solutions and driving technical innovation. Strong problem-solving skills and collaborative approach to software development.",
        experience_bullets: &[
            "Developed and maintained scalable applications using modern frameworks and technologies",
            "Collaborated with cross-functional teams to deliver high-quality software solutions",
            "Implemented best practices for code quality, testing, and deployment processes",
            "Optimized application performance and resolved complex technical challenges",
            "Mentored junior developers and contributed to technical documentation",
        ],
        skills: &[
            "JavaScript",
            "React",
            "Node.js",
            "Python",
            "SQL",
            "Git",
            "Agile",
            "Problem Solving",
            "Team Collaboration",
        ],
        core_skills: &[
            ("cloud", Priority::High),
            ("ci/cd", Priority::High),
            ("testing", Priority::Medium),
            ("security", Priority::Medium),
            ("system design", Priority::Medium),
            ("observability", Priority::Low),
        ],
        trends: &[
            "AI-assisted development and LLM integration in products",
            "Platform engineering and internal developer platforms",
            "Cloud cost optimization (FinOps)",
            "Supply-chain security and SBOM requirements",
        ],
        certifications: &[
            CertificationHint {
                name: "AWS Certified Solutions Architect – Associate",
                provider: "Amazon Web Services",
                priority: Priority::High,
            },
            CertificationHint {
                name: "Certified Kubernetes Application Developer",
                provider: "Cloud Native Computing Foundation",
                priority: Priority::Medium,
            },
            CertificationHint {
                name: "Professional Scrum Master I",
                provider: "Scrum.org",
                priority: Priority::Low,
            },
        ],
        networking: &[
            "Contribute to open-source projects used by your target companies",
            "Attend local meetups and speak about a problem you solved",
            "Engage with engineering blogs and maintainers on professional networks",
        ],
        portfolio: &[
            "Publish two or three production-quality projects with READMEs and tests",
            "Write short case studies describing architecture decisions and trade-offs",
            "Link live demos or recorded walkthroughs for each featured project",
        ],
        interview_tips: &[
            "Practice explaining system design trade-offs for a {role} scope",
            "Prepare STAR stories where you shipped measurable improvements",
            "Review data structures and complexity for live coding rounds",
        ],
    },
    IndustryProfile {
        key: "healthcare",
        label: "Healthcare",
        aliases: &["health", "medical", "clinical", "nursing", "hospital"],
        keywords: &[
            "patient care",
            "hipaa",
            "clinical",
            "ehr",
            "patient safety",
            "compliance",
            "care coordination",
            "quality improvement",
            "documentation",
            "triage",
        ],
        summary_template: "Dedicated {jobTitle} with comprehensive experience in healthcare delivery and patient care. Committed to maintaining high standards of clinical excellence while ensuring patient safety and satisfaction. Strong communication and analytical skills.",
        experience_bullets: &[
            "Provided exceptional patient care while maintaining strict adherence to safety protocols",
            "Collaborated with multidisciplinary teams to develop comprehensive treatment plans",
            "Maintained accurate patient records and documentation in compliance with regulations",
            "Implemented quality improvement initiatives to enhance patient outcomes",
            "Educated patients and families on treatment procedures and care management",
        ],
        skills: &[
            "Patient Care",
            "Clinical Assessment",
            "Medical Documentation",
            "HIPAA Compliance",
            "Team Collaboration",
            "Critical Thinking",
            "Communication",
        ],
        core_skills: &[
            ("hipaa", Priority::High),
            ("ehr", Priority::High),
            ("patient safety", Priority::Medium),
            ("care coordination", Priority::Medium),
            ("quality improvement", Priority::Low),
        ],
        trends: &[
            "Telehealth and remote patient monitoring",
            "Value-based care reimbursement models",
            "Interoperability standards such as FHIR",
            "AI-supported diagnostics and clinical decision support",
        ],
        certifications: &[
            CertificationHint {
                name: "Basic Life Support (BLS)",
                provider: "American Heart Association",
                priority: Priority::High,
            },
            CertificationHint {
                name: "Certified Professional in Healthcare Quality",
                provider: "NAHQ",
                priority: Priority::Medium,
            },
        ],
        networking: &[
            "Join a professional association for your specialty",
            "Attend grand rounds and continuing-education events",
            "Connect with clinical leaders at facilities you are targeting",
        ],
        portfolio: &[
            "Document quality-improvement projects with before/after outcome metrics",
            "Keep an up-to-date record of licenses, certifications and CE credits",
            "Collect professional references from supervisors and interdisciplinary peers",
        ],
        interview_tips: &[
            "Prepare examples of handling difficult patient situations as a {role}",
            "Be ready to discuss patient-safety and compliance protocols",
            "Describe how you collaborate within multidisciplinary teams",
        ],
    },
    IndustryProfile {
        key: "finance",
        label: "Finance",
        aliases: &["financial", "banking", "accounting", "fintech", "investment"],
        keywords: &[
            "financial analysis",
            "financial modeling",
            "forecasting",
            "risk management",
            "compliance",
            "excel",
            "budgeting",
            "reporting",
            "valuation",
            "audit",
        ],
        summary_template: "Results-driven {jobTitle} with strong analytical skills and expertise in financial analysis and risk management. Proven ability to drive business growth through data-driven insights and strategic financial planning.",
        experience_bullets: &[
            "Conducted comprehensive financial analysis to support strategic business decisions",
            "Developed and maintained financial models and forecasting tools",
            "Ensured compliance with regulatory requirements and internal policies",
            "Collaborated with stakeholders to optimize financial performance and reduce costs",
            "Prepared detailed reports and presentations for senior management",
        ],
        skills: &[
            "Financial Analysis",
            "Excel",
            "Financial Modeling",
            "Risk Management",
            "Regulatory Compliance",
            "Data Analysis",
            "Strategic Planning",
        ],
        core_skills: &[
            ("financial modeling", Priority::High),
            ("forecasting", Priority::High),
            ("valuation", Priority::Medium),
            ("sql", Priority::Medium),
            ("audit", Priority::Low),
        ],
        trends: &[
            "Automation of reporting and close processes",
            "Real-time payments and embedded finance",
            "ESG reporting requirements",
            "Advanced analytics and machine learning in risk",
        ],
        certifications: &[
            CertificationHint {
                name: "Chartered Financial Analyst (CFA)",
                provider: "CFA Institute",
                priority: Priority::High,
            },
            CertificationHint {
                name: "Financial Modeling & Valuation Analyst (FMVA)",
                provider: "Corporate Finance Institute",
                priority: Priority::Medium,
            },
        ],
        networking: &[
            "Join your local CFA society or finance association chapter",
            "Attend industry conferences and alumni finance events",
            "Request informational interviews with analysts at target firms",
        ],
        portfolio: &[
            "Prepare a sample financial model with clear assumptions",
            "Write a short investment or variance analysis memo",
            "Summarize cost-saving or forecasting wins with quantified impact",
        ],
        interview_tips: &[
            "Practice walking through the three financial statements for a {role} interview",
            "Prepare to discuss a model you built and its key drivers",
            "Review current market events relevant to the firm",
        ],
    },
    IndustryProfile {
        key: "marketing",
        label: "Marketing",
        aliases: &["advertising", "digital marketing", "growth", "brand"],
        keywords: &[
            "digital marketing",
            "seo",
            "content strategy",
            "campaign management",
            "analytics",
            "social media",
            "brand management",
            "conversion",
            "roi",
            "a/b testing",
        ],
        summary_template: "Creative and data-driven {jobTitle} with expertise in digital marketing strategies and brand management. Proven track record of developing successful campaigns that drive engagement and business growth.",
        experience_bullets: &[
            "Developed and executed comprehensive marketing campaigns across multiple channels",
            "Analyzed market trends and consumer behavior to inform strategic decisions",
            "Managed social media presence and created engaging content for target audiences",
            "Collaborated with design and content teams to produce high-quality marketing materials",
            "Tracked campaign performance and optimized strategies based on data insights",
        ],
        skills: &[
            "Digital Marketing",
            "Social Media",
            "Content Creation",
            "Analytics",
            "SEO/SEM",
            "Brand Management",
            "Campaign Management",
        ],
        core_skills: &[
            ("analytics", Priority::High),
            ("seo", Priority::High),
            ("a/b testing", Priority::Medium),
            ("marketing automation", Priority::Medium),
            ("copywriting", Priority::Low),
        ],
        trends: &[
            "First-party data strategies after third-party cookie deprecation",
            "Short-form video and creator partnerships",
            "Generative AI for content production",
            "Marketing mix modeling and incrementality testing",
        ],
        certifications: &[
            CertificationHint {
                name: "Google Analytics Certification",
                provider: "Google",
                priority: Priority::High,
            },
            CertificationHint {
                name: "HubSpot Inbound Marketing",
                provider: "HubSpot Academy",
                priority: Priority::Medium,
            },
        ],
        networking: &[
            "Share campaign breakdowns on professional networks",
            "Join marketing communities and attend local meetups",
            "Partner with creators or peers on small side campaigns",
        ],
        portfolio: &[
            "Assemble case studies with goals, tactics and measured results",
            "Include samples of copy, creative and landing pages",
            "Show dashboards or reports that demonstrate analytical rigor",
        ],
        interview_tips: &[
            "Prepare a campaign you led as a {role} with its metrics",
            "Be ready to critique the company's current marketing",
            "Explain how you prioritize channels under a fixed budget",
        ],
    },
    IndustryProfile {
        key: "education",
        label: "Education",
        aliases: &["teaching", "academic", "school", "edtech", "training"],
        keywords: &[
            "curriculum development",
            "lesson planning",
            "classroom management",
            "student assessment",
            "differentiated instruction",
            "educational technology",
            "student engagement",
            "iep",
        ],
        summary_template: "Passionate {jobTitle} dedicated to fostering student learning and academic excellence. Experienced in curriculum development and innovative teaching methodologies that engage diverse learners.",
        experience_bullets: &[
            "Designed and implemented engaging lesson plans aligned with curriculum standards",
            "Assessed student progress and provided individualized support and feedback",
            "Collaborated with colleagues and parents to support student success",
            "Integrated technology and innovative teaching methods to enhance learning",
            "Participated in professional development and continuous improvement initiatives",
        ],
        skills: &[
            "Curriculum Development",
            "Classroom Management",
            "Student Assessment",
            "Educational Technology",
            "Communication",
            "Adaptability",
            "Mentoring",
        ],
        core_skills: &[
            ("differentiated instruction", Priority::High),
            ("student assessment", Priority::High),
            ("educational technology", Priority::Medium),
            ("classroom management", Priority::Medium),
            ("iep", Priority::Low),
        ],
        trends: &[
            "Blended and hybrid learning models",
            "Social-emotional learning programs",
            "AI tools for personalized instruction",
            "Competency-based assessment",
        ],
        certifications: &[
            CertificationHint {
                name: "State Teaching License",
                provider: "State Department of Education",
                priority: Priority::High,
            },
            CertificationHint {
                name: "Google Certified Educator",
                provider: "Google for Education",
                priority: Priority::Medium,
            },
        ],
        networking: &[
            "Join subject-area teacher associations",
            "Attend district professional-development sessions",
            "Share lesson resources in educator communities",
        ],
        portfolio: &[
            "Compile sample lesson plans and unit overviews",
            "Include anonymized student growth data",
            "Add a short recorded teaching demonstration",
        ],
        interview_tips: &[
            "Prepare a sample lesson suited to the {role} position",
            "Discuss how you differentiate instruction for diverse learners",
            "Share a classroom-management challenge and how you resolved it",
        ],
    },
];

/// Resolves a free-form industry name. Exact key, then alias, then substring; default technology.
pub fn profile_for(industry: &str) -> &'static IndustryProfile {
    let normalized = industry.trim().to_lowercase();

    PROFILES
        .iter()
        .find(|p| p.key == normalized)
        .or_else(|| {
            PROFILES
                .iter()
                .find(|p| p.aliases.contains(&normalized.as_str()))
        })
        .or_else(|| {
            PROFILES.iter().find(|p| {
                !normalized.is_empty()
                    && (normalized.contains(p.key)
                        || p.aliases.iter().any(|a| a.len() > 2 && normalized.contains(a)))
            })
        })
        .unwrap_or(&PROFILES[0])
}
