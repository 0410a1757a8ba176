use http::Uri;
use rust_embed::Embed;
use serde::Serialize;
use thiserror::Error;

#[derive(Embed)]
#[folder = "public"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct PublicAssets;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    /// Site-root relative path of the downloadable resume.
    pub resume: &'static str,
}

/// One role on the timeline. `points` are rendered in the given order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub score: &'static str,
    pub years: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Anjali Thakur",
    title: "Software Development Engineer (2+ Years)",
    tagline: "Python • AWS • React • PostgreSQL",
    email: "thakur.anjali0405@gmail.com",
    github: "https://github.com",
    linkedin: "https://www.linkedin.com/in/anjali-thakur-270948303",
    resume: "/AnjaliThakur.pdf",
};

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Software Development Engineer",
        company: "WNS Global Private Limited",
        duration: "May 2023 – Present",
        points: &[
            "Developed and optimized full-stack web applications using React.js and Python",
            "Built scalable backend services and business logic using Python",
            "Managed AWS services including Amazon S3 and CloudWatch",
            "Improved data performance using PostgreSQL stored procedures",
            "Provided production monitoring and support using CloudWatch",
        ],
    },
    ExperienceEntry {
        role: "Software Engineer Intern",
        company: "WNS Global Private Limited",
        duration: "Jun 2022 – Apr 2023",
        points: &[
            "Designed and implemented ETL/ELT pipelines for production systems",
            "Improved system performance using Python-based data processing",
            "Worked with cloud computing concepts to support scalable workflows",
            "Collaborated with cross-functional teams to deliver business solutions",
        ],
    },
];

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        items: &["Python", "JavaScript", "TypeScript"],
    },
    SkillGroup {
        title: "Frontend",
        items: &["React.js", "HTML", "CSS"],
    },
    SkillGroup {
        title: "Backend & Cloud",
        items: &["AWS (S3, CloudWatch)", "PostgreSQL"],
    },
    SkillGroup {
        title: "Data",
        items: &["ETL", "ELT"],
    },
    SkillGroup {
        title: "Tools",
        items: &["Git", "Agile", "SDLC"],
    },
];

pub static EDUCATION: Education = Education {
    degree: "Bachelor of Engineering in Computer Science",
    institution: "Chitkara University, Punjab",
    score: "CGPA: 9.56",
    years: "2019 – 2023",
};

pub const ABOUT: &str = "Software Development Engineer with 2+ years of experience building \
scalable full-stack and backend systems. Strong expertise in Python, AWS, PostgreSQL, and React.js. \
Passionate about clean architecture, cloud-native development, and building reliable, maintainable \
applications.";

pub const CONTACT_PITCH: &str = "Open to full-time SDE roles & exciting projects";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("invalid {field} url: {url}")]
    InvalidUrl { field: &'static str, url: String },
    #[error("static asset not found: {0}")]
    MissingAsset(String),
    #[error("couldn't encode structured data")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub network: Network,
    pub href: String,
}

impl SocialLink {
    pub fn label(&self) -> &'static str {
        match self.network {
            Network::GitHub => "GitHub Profile",
            Network::LinkedIn => "LinkedIn Profile",
            Network::Email => "Send Email",
        }
    }

    /// Web profiles open in a new browsing context, mail goes to the platform handler.
    pub fn target(&self) -> Option<&'static str> {
        match self.network {
            Network::Email => None,
            _ => Some("_blank"),
        }
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.target().map(|_| "noreferrer")
    }
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn headline(&self) -> String {
        format!("{} | {}", self.title, self.tagline)
    }

    pub fn social_links(&self) -> [SocialLink; 3] {
        [
            SocialLink {
                network: Network::GitHub,
                href: self.github.to_string(),
            },
            SocialLink {
                network: Network::LinkedIn,
                href: self.linkedin.to_string(),
            },
            SocialLink {
                network: Network::Email,
                href: self.mailto(),
            },
        ]
    }

    pub fn resume_file_name(&self) -> &'static str {
        self.resume.rsplit('/').next().unwrap_or(self.resume)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let fields = [
            ("profile name", self.name),
            ("profile title", self.title),
            ("profile tagline", self.tagline),
            ("profile email", self.email),
            ("profile github", self.github),
            ("profile linkedin", self.linkedin),
            ("profile resume", self.resume),
        ];
        for (field, value) in fields {
            non_empty(field, value)?;
        }
        if !is_valid_email(self.email) {
            return Err(ContentError::InvalidEmail(self.email.to_string()));
        }
        check_https_url("github", self.github)?;
        check_https_url("linkedin", self.linkedin)?;
        check_asset(self.resume)
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::EmptyField(field))
    } else {
        Ok(())
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn check_https_url(field: &'static str, url: &str) -> Result<(), ContentError> {
    let invalid = || ContentError::InvalidUrl {
        field,
        url: url.to_string(),
    };
    let uri = url.parse::<Uri>().map_err(|_| invalid())?;
    match (uri.scheme_str(), uri.host()) {
        (Some("https"), Some(host)) if !host.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

fn check_asset(path: &str) -> Result<(), ContentError> {
    let name = path.trim_start_matches('/');
    PublicAssets::get(name)
        .map(|_| ())
        .ok_or_else(|| ContentError::MissingAsset(path.to_string()))
}

/// Checks every constant the page renders. Run before serving.
pub fn validate_content() -> Result<(), ContentError> {
    PROFILE.validate()?;
    for entry in EXPERIENCE {
        non_empty("experience role", entry.role)?;
        non_empty("experience company", entry.company)?;
        non_empty("experience duration", entry.duration)?;
    }
    for group in SKILLS {
        non_empty("skill group title", group.title)?;
    }
    non_empty("education degree", EDUCATION.degree)?;
    non_empty("education institution", EDUCATION.institution)?;
    person_json_ld(&PROFILE, SKILLS)?;
    Ok(())
}

#[derive(Serialize)]
struct PersonLd<'a> {
    #[serde(rename = "@context")]
    context: &'a str,
    #[serde(rename = "@type")]
    kind: &'a str,
    name: &'a str,
    #[serde(rename = "jobTitle")]
    job_title: &'a str,
    email: String,
    #[serde(rename = "sameAs")]
    same_as: [&'a str; 2],
    #[serde(rename = "knowsAbout")]
    knows_about: Vec<&'a str>,
}

/// schema.org `Person` document for the page head.
pub fn person_json_ld(profile: &Profile, skills: &[SkillGroup]) -> Result<String, ContentError> {
    let person = PersonLd {
        context: "https://schema.org",
        kind: "Person",
        name: profile.name,
        job_title: profile.title,
        email: profile.mailto(),
        same_as: [profile.github, profile.linkedin],
        knows_about: skills
            .iter()
            .flat_map(|group| group.items.iter().copied())
            .collect(),
    };
    // inside a <script> element
    Ok(serde_json::to_string(&person)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        PROFILE.clone()
    }

    #[test]
    fn test_shipped_content_is_valid() {
        validate_content().expect("shipped content should validate");
    }

    #[test]
    fn test_validated_content_yields_structured_data() {
        validate_content().expect("shipped content should validate");
        let json = person_json_ld(&PROFILE, SKILLS).expect("JSON-LD should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], PROFILE.name);
        assert!(!json.contains("</"));
    }

    #[test]
    fn test_mailto_contains_exact_address() {
        assert_eq!(PROFILE.mailto(), "mailto:thakur.anjali0405@gmail.com");
        let mail = &PROFILE.social_links()[2];
        assert_eq!(mail.network, Network::Email);
        assert_eq!(mail.href, format!("mailto:{}", PROFILE.email));
    }

    #[test]
    fn test_link_targets() {
        let [github, linkedin, mail] = PROFILE.social_links();
        assert_eq!(github.href, PROFILE.github);
        assert_eq!(github.target(), Some("_blank"));
        assert_eq!(github.rel(), Some("noreferrer"));
        assert_eq!(linkedin.target(), Some("_blank"));
        assert_eq!(mail.target(), None);
        assert_eq!(mail.rel(), None);
    }

    #[test]
    fn test_headline_and_resume_name() {
        assert_eq!(
            PROFILE.headline(),
            "Software Development Engineer (2+ Years) | Python • AWS • React • PostgreSQL"
        );
        assert_eq!(PROFILE.resume_file_name(), "AnjaliThakur.pdf");
    }

    #[test]
    fn test_resume_asset_is_shipped() {
        assert!(PublicAssets::get("AnjaliThakur.pdf").is_some());
    }

    #[test]
    fn test_empty_field_rejected() {
        let mut p = profile();
        p.name = "  ";
        assert!(matches!(
            p.validate(),
            Err(ContentError::EmptyField("profile name"))
        ));
    }

    #[test]
    fn test_bad_email_rejected() {
        for email in ["no-at-sign", "@example.com", "a@b", "a@@b.com", "a b@c.com", "a@.com"] {
            let mut p = profile();
            p.email = email;
            assert!(
                matches!(p.validate(), Err(ContentError::InvalidEmail(_))),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_bad_url_rejected() {
        let mut p = profile();
        p.github = "http://github.com";
        assert!(matches!(
            p.validate(),
            Err(ContentError::InvalidUrl { field: "github", .. })
        ));

        let mut p = profile();
        p.linkedin = "not a url";
        let err = p.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid linkedin url: not a url");
    }

    #[test]
    fn test_missing_resume_rejected() {
        let mut p = profile();
        p.resume = "/missing.pdf";
        assert!(matches!(p.validate(), Err(ContentError::MissingAsset(_))));
    }

    #[test]
    fn test_experience_is_most_recent_first() {
        assert_eq!(EXPERIENCE.len(), 2);
        assert!(EXPERIENCE[0].duration.ends_with("Present"));
        assert_eq!(EXPERIENCE[0].points.len(), 5);
        assert_eq!(EXPERIENCE[1].points.len(), 4);
    }

    #[test]
    fn test_person_json_ld() {
        let json = person_json_ld(&PROFILE, SKILLS).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], PROFILE.name);
        assert_eq!(value["email"], PROFILE.mailto());
        assert_eq!(value["sameAs"][1], PROFILE.linkedin);
        let skills = SKILLS.iter().map(|g| g.items.len()).sum::<usize>();
        assert_eq!(value["knowsAbout"].as_array().unwrap().len(), skills);
    }

    #[test]
    fn test_json_ld_cannot_close_script() {
        let mut p = profile();
        p.name = "</script><b>";
        let json = person_json_ld(&p, &[]).unwrap();
        assert!(!json.contains("</script>"));
    }
}
