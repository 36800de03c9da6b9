use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub short_name: &'static str,
    pub nickname: &'static str,
    pub job_title: &'static str,
    pub coding_since: u16,
    pub location: &'static str,
    pub employer: &'static str,
    pub university: &'static str,
    pub degree: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", capitalize(self.first_name), capitalize(self.last_name))
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub static PROFILE: Profile = Profile {
    first_name: "MUHAMMAD",
    last_name: "HARIS",
    short_name: "HARIS",
    nickname: "Haris",
    job_title: "Full Stack Engineer",
    coding_since: 2020,
    location: "Lahore, Pakistan",
    employer: "Calo Inc",
    university: "COMSATS University",
    degree: "BS in Computer Science",
    email: "hariszulfiqar054@gmail.com",
    github_url: "https://github.com/hariszulfiqar054",
    linkedin_url: "https://linkedin.com/in/muhammad-haris-47511216b",
};

/// Tailwind background class used for the stripe on the left of a job card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Accent {
    Lime,
    Cyan,
    Orange,
    Pink,
}

impl Accent {
    pub fn bg_class(self) -> &'static str {
        match self {
            Accent::Lime => "bg-lime-400",
            Accent::Cyan => "bg-cyan-400",
            Accent::Orange => "bg-orange-400",
            Accent::Pink => "bg-pink-400",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Job {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub accent: Accent,
    pub achievements: &'static [&'static str],
}

pub static JOBS: &[Job] = &[
    Job {
        company: "Calo Inc",
        role: "Full Stack Engineer",
        period: "Dec 2022 - Present",
        location: "Bahrain",
        accent: Accent::Lime,
        achievements: &[
            "Boosted revenue by 20% through add-ons & subscription revamp",
            "Slashed release candidate time by 60% with E2E testing",
            "Built menu generation algorithm with 90% accuracy",
            "Saved CX team 10+ hours weekly",
        ],
    },
    Job {
        company: "Retailo Technologies",
        role: "Full Stack Engineer",
        period: "May 2021 - Nov 2022",
        location: "Lahore, PK",
        accent: Accent::Cyan,
        achievements: &[
            "Made React Native app 40% faster",
            "Increased conversions by 20% with BNPL feature",
            "Led design system across 5 products",
        ],
    },
    Job {
        company: "Skylinx Technologies",
        role: "Software Engineer",
        period: "Apr 2020 - May 2021",
        location: "Lahore, PK",
        accent: Accent::Orange,
        achievements: &[
            "Led team of 4 React Native Engineers",
            "Set up CI/CD for backend & mobile apps",
            "Employee of the Year 🏆",
        ],
    },
    Job {
        company: "9Exgen Solutions",
        role: "React Native Engineer",
        period: "Jan 2020 - Mar 2020",
        location: "Lahore, PK",
        accent: Accent::Pink,
        achievements: &[
            "Built Dukandar app from scratch",
            "Integrated QR & local payment options",
        ],
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        icon: "🔤",
        skills: &["JavaScript", "TypeScript", "Go", "Python", "SQL"],
    },
    SkillCategory {
        title: "Frontend",
        icon: "🎨",
        skills: &["React", "React Native", "Redux", "Tailwind CSS", "Next.js"],
    },
    SkillCategory {
        title: "Backend",
        icon: "⚙️",
        skills: &["Node.js", "NestJS", "GraphQL", "REST APIs", "Microservices"],
    },
    SkillCategory {
        title: "Cloud & DevOps",
        icon: "☁️",
        skills: &["AWS", "Docker", "Serverless", "CI/CD", "Firebase"],
    },
    SkillCategory {
        title: "Databases",
        icon: "🗄️",
        skills: &["DynamoDB", "PostgreSQL", "Redis", "MongoDB"],
    },
    SkillCategory {
        title: "Tools",
        icon: "🔧",
        skills: &["Git", "Jest", "Detox", "Socket.IO", "RabbitMQ"],
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: &[Stat] = &[
    Stat {
        value: "5+",
        label: "Years Exp",
    },
    Stat {
        value: "42",
        label: "Repos",
    },
    Stat {
        value: "1K+",
        label: "Commits",
    },
];

pub static FUN_FACTS: &[&str] = &[
    "☕ Powered by excessive caffeine",
    "🎯 AWS Certified Developer",
    "🏆 2020 Employee of the Year",
    "🥇 Hackathon Winner 2018",
    "❄️ Arctic Code Vault Contributor",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScrollDirection {
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Marquee {
    pub words: &'static [&'static str],
    pub separator: &'static str,
    pub separator_class: &'static str,
    pub direction: ScrollDirection,
}

impl Marquee {
    /// Number of times the word run is repeated so the band never shows a gap.
    pub const REPEAT: usize = 4;

    pub fn animation_class(&self) -> &'static str {
        match self.direction {
            ScrollDirection::Forward => "animate-marquee",
            ScrollDirection::Reverse => "animate-marquee-reverse",
        }
    }
}

pub static STACK_MARQUEE: Marquee = Marquee {
    words: &["REACT", "NODE.JS", "TYPESCRIPT", "AWS", "REACT NATIVE", "GRAPHQL"],
    separator: "★",
    separator_class: "text-lime-400",
    direction: ScrollDirection::Forward,
};

pub static TRAITS_MARQUEE: Marquee = Marquee {
    words: &["FULL STACK", "SCALABLE", "PERFORMANT", "CLEAN CODE", "PROBLEM SOLVER"],
    separator: "✦",
    separator_class: "text-orange-400",
    direction: ScrollDirection::Reverse,
};

/// schema.org `Person` record embedded in the page head.
#[derive(Debug, Serialize)]
pub struct PersonSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    #[serde(rename = "jobTitle")]
    job_title: &'static str,
    email: &'static str,
    #[serde(rename = "homeLocation")]
    home_location: &'static str,
    #[serde(rename = "worksFor")]
    works_for: &'static str,
    #[serde(rename = "alumniOf")]
    alumni_of: &'static str,
    #[serde(rename = "knowsAbout")]
    knows_about: Vec<&'static str>,
    #[serde(rename = "sameAs")]
    same_as: [&'static str; 2],
}

impl From<&Profile> for PersonSchema {
    fn from(profile: &Profile) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Person",
            name: profile.full_name(),
            job_title: profile.job_title,
            email: profile.email,
            home_location: profile.location,
            works_for: profile.employer,
            alumni_of: profile.university,
            knows_about: SKILL_CATEGORIES
                .iter()
                .flat_map(|cat| cat.skills.iter().copied())
                .collect(),
            same_as: [profile.github_url, profile.linkedin_url],
        }
    }
}

pub fn person_json_ld() -> Result<String, serde_json::Error> {
    to_script_json(&PersonSchema::from(&PROFILE))
}

/// Serializes `value` for an inline `<script>` body.
///
/// `<`, `>` and `&` only ever appear inside JSON strings, where the `\u` escapes
/// decode to the same text, so the output survives HTML text escaping unchanged
/// and can't close the script element early.
pub fn to_script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace('&', "\\u0026")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e"))
}

pub fn copyright_line(year: i32) -> String {
    format!("Designed & Built by {} © {year}", PROFILE.full_name())
}
