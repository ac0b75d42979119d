use serde::{Deserialize, Serialize};

const EMBEDDED_CONTENT: &str = include_str!("../../data/content.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub content: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub step: u8,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedJob {
    pub title: String,
    pub category: String,
    pub description: String,
    pub locations: Vec<String>,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeContent {
    pub headline: String,
    pub tagline: String,
    pub job_roles: Vec<TitledItem>,
    pub testimonials: Vec<Testimonial>,
    pub featured_jobs: Vec<FeaturedJob>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub headline: String,
    pub tagline: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhyChooseUsContent {
    pub headline: String,
    pub tagline: String,
    pub benefits: Vec<TitledItem>,
    pub process: Vec<ProcessStep>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesContent {
    pub headline: String,
    pub tagline: String,
    pub services: Vec<ServiceOffering>,
    pub process: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactContent {
    pub headline: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub address: Vec<String>,
}

/// Static marketing copy for every page, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    pub home: HomeContent,
    pub about: AboutContent,
    pub why_choose_us: WhyChooseUsContent,
    pub services: ServicesContent,
    pub contact: ContactContent,
}

impl SiteContent {
    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::embedded().expect("embedded content is valid");
        assert_eq!(content.home.job_roles.len(), 12);
        assert_eq!(content.home.featured_jobs.len(), 6);
        assert_eq!(content.why_choose_us.benefits.len(), 6);
        assert_eq!(content.why_choose_us.process.len(), 5);
        assert_eq!(content.services.services.len(), 17);
        assert_eq!(content.contact.phone, "02039473993");
        assert_eq!(content.contact.address.len(), 4);
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        let content = SiteContent::embedded().expect("embedded content is valid");
        let steps: Vec<u8> = content.services.process.iter().map(|s| s.step).collect();
        assert_eq!(steps, [1, 2, 3]);
    }
}
