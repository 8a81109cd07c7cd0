//! Typed content document models
//!
//! Each landing-page section is described by a JSON document; the field
//! sets below mirror the content catalog. Field names serialize in
//! camelCase to match the documents on disk.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Call-to-action link (label plus target)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub text: String,
    pub href: String,
}

/// Background gradient settings for the hero section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundGradient {
    pub from: String,
    pub to: String,
    pub opacity: f64,
}

/// Hero animation speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    Normal,
    Fast,
}

/// Hero animation pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationPattern {
    Wave,
    Fade,
    Slide,
}

/// Hero animation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSettings {
    pub speed: AnimationSpeed,
    pub pattern: AnimationPattern,
    pub intensity: f64,
}

/// Hero section content (`home/hero`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta_primary: CallToAction,
    pub cta_secondary: CallToAction,
    pub background_gradient: BackgroundGradient,
    pub animation_settings: AnimationSettings,
    pub image_url: String,
    pub image_alt: String,
}

/// Single feature entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// Features section content (`home/features`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub features: Vec<FeatureItem>,
    pub cta_text: String,
    pub cta_link: String,
}

/// Team member profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: String,
    /// Platform name -> profile URL (twitter, github, linkedin, ...)
    #[serde(default)]
    pub social_links: HashMap<String, String>,
}

/// Team roster content (`about/team`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub team: Vec<TeamMember>,
}
