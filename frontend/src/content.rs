//! Per-brand copy. Each brand is one JSON document under `content/`,
//! compiled into the binary.

use serde::Deserialize;
use thiserror::Error;

use crate::contact::form::FormRules;
use crate::contact::intake::IntakeStrategy;

const BRANDS: &[(&str, &str)] = &[
    ("sonicwave", include_str!("../content/sonicwave.json")),
    ("airtel", include_str!("../content/airtel.json")),
];

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no brand named '{0}'")]
    UnknownBrand(String),
    #[error("content for '{brand}' is malformed: {source}")]
    Malformed {
        brand: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub hero: Hero,
    pub features: Section<Feature>,
    pub testimonials: Section<Testimonial>,
    pub pricing: Section<Plan>,
    pub contact: ContactCopy,
    pub faq: Section<Faq>,
    pub footer: FooterCopy,
    #[serde(default)]
    pub intake: IntakeStrategy,
}

impl Brand {
    pub fn load(id: &str) -> Result<Brand, ContentError> {
        let (_, raw) = BRANDS
            .iter()
            .find(|(brand, _)| *brand == id)
            .ok_or_else(|| ContentError::UnknownBrand(id.to_string()))?;
        serde_json::from_str(raw).map_err(|source| ContentError::Malformed {
            brand: id.to_string(),
            source,
        })
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Section<T> {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<T>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Hero {
    pub headline: String,
    pub accent: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub customers: String,
    pub rating: String,
    pub image: String,
    pub image_alt: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub title: String,
    pub avatar: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Plan {
    pub title: String,
    pub price: String,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactCopy {
    pub title: String,
    pub blurb: String,
    pub form_title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub regions: Vec<String>,
    #[serde(default)]
    pub collect_email: bool,
    pub message_placeholder: String,
    pub submit_label: String,
    pub success_message: String,
    pub failure_message: String,
}

impl ContactCopy {
    pub fn rules(&self) -> FormRules {
        FormRules {
            regions: self.regions.clone(),
            collect_email: self.collect_email,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<Link>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FooterCopy {
    pub blurb: String,
    pub socials: Vec<Link>,
    pub columns: Vec<LinkColumn>,
    pub legal: String,
    pub legal_links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn every_brand_parses_under_its_own_id() {
        for (id, _) in BRANDS {
            let brand = Brand::load(id).unwrap();
            assert_eq!(brand.id, *id);
            assert!(!brand.contact.regions.is_empty());
            assert!(!brand.faq.items.is_empty());
        }
    }

    #[test]
    fn default_brand_exists() {
        assert!(Brand::load(config::DEFAULT_BRAND).is_ok());
    }

    #[test]
    fn unknown_brand_is_an_error() {
        match Brand::load("walkman") {
            Err(ContentError::UnknownBrand(id)) => assert_eq!(id, "walkman"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn headphones_accept_locally_and_ask_for_email() {
        let brand = Brand::load("sonicwave").unwrap();
        assert_eq!(brand.intake, IntakeStrategy::Local);
        assert!(brand.contact.rules().collect_email);
    }

    #[test]
    fn router_forwards_to_the_form_backend() {
        let brand = Brand::load("airtel").unwrap();
        assert_eq!(brand.intake.endpoint(), Some(config::get_intake_url()));
        let rules = brand.contact.rules();
        assert!(!rules.collect_email);
        assert!(rules.regions.iter().any(|r| r == "Arusha"));
    }

    #[test]
    fn one_plan_is_marked_popular() {
        for (id, _) in BRANDS {
            let brand = Brand::load(id).unwrap();
            assert_eq!(brand.pricing.items.iter().filter(|p| p.popular).count(), 1);
        }
    }

    #[test]
    fn malformed_content_reports_the_brand() {
        let err = serde_json::from_str::<Brand>("{}").map_err(|source| ContentError::Malformed {
            brand: "broken".to_string(),
            source,
        });
        assert!(err.unwrap_err().to_string().starts_with("content for 'broken' is malformed"));
    }
}
