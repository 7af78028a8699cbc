use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_PORTFOLIO: &str = include_str!("../content/portfolio.json");
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const MAX_LEVEL: u8 = 100;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("portfolio content is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("portfolio content is invalid: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
    #[serde(default)]
    pub competencies: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub contact: ContactInfo,
    pub links: Links,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub role: String,
    pub summary: String,
    #[serde(default)]
    pub portrait: String,
    #[serde(default)]
    pub about: Vec<String>,
}

impl Profile {
    pub fn portrait_src(&self) -> &str {
        image_or_placeholder(&self.portrait)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    pub proficiency: String,
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub period: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: String,
}

impl ProjectEntry {
    pub fn image_src(&self) -> &str {
        image_or_placeholder(&self.image)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub score: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Links {
    pub professional: String,
    pub code_host: String,
}

impl Portfolio {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_PORTFOLIO)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Self = serde_json::from_str(raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile name is empty".to_string()));
        }

        if let Some(skill) = self.skills.iter().find(|skill| skill.level > MAX_LEVEL) {
            return Err(ContentError::Invalid(format!(
                "skill `{}` has level {} above {MAX_LEVEL}",
                skill.name, skill.level
            )));
        }

        if let Some(language) = self
            .languages
            .iter()
            .find(|language| language.level > MAX_LEVEL)
        {
            return Err(ContentError::Invalid(format!(
                "language `{}` has level {} above {MAX_LEVEL}",
                language.name, language.level
            )));
        }

        Ok(())
    }
}

fn image_or_placeholder(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        trimmed
    }
}
