//! Site content and motion constants.
//!
//! Everything the page shows lives in `content/site.json`, embedded at compile
//! time and handed down to the sections as props. Tests build their own
//! [`SiteConfig`] values to probe edge cases (single testimonial, no stats).
//!
//! ```rust,ignore
//! let site = SiteConfig::embedded()?;
//! assert_eq!(site.tagline, "Learn. Grow. Achieve.");
//! ```

use crate::error::LandingError;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

const SITE_JSON: &str = include_str!("../content/site.json");

/// Root of the bundled content.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteConfig {
    /// Brand name shown in the navbar and footer
    pub brand: String,
    /// Text revealed by the hero typewriter
    pub tagline: String,
    /// `tracing` level name: error, warn, info, debug or trace
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub hero_stats: Vec<HeroStat>,
    pub courses: Vec<Course>,
    #[serde(default)]
    pub about_stats: Vec<CounterStat>,
    #[serde(default)]
    pub about_highlights: Vec<Highlight>,
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub popular_courses: Vec<String>,
    #[serde(default)]
    pub motion: MotionConfig,
}

fn default_log_level() -> String {
    "info".into()
}

/// A course card in the catalog.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Path or URL of the card image
    pub image: String,
    pub duration: String,
    pub level: String,
    pub price: String,
    /// "What you'll learn" bullets, in display order
    pub features: Vec<String>,
}

/// A quote in the testimonial carousel.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    /// Star count, 1..=5
    pub rating: u8,
    /// Initials drawn in the avatar bubble
    pub avatar: String,
}

/// Static figure under the hero call-to-action.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroStat {
    pub value: String,
    pub label: String,
}

/// Animated figure in the About section.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CounterStat {
    pub key: String,
    pub label: String,
    pub target: u32,
    /// Appended to the number: `+` or `%`
    #[serde(default)]
    pub suffix: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Timing and threshold constants for every animation on the page.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub typewriter_interval_ms: u64,
    pub counter_duration_ms: u64,
    pub counter_steps: u32,
    pub carousel_interval_ms: u64,
    pub navbar_scroll_threshold_px: f64,
    pub course_reveal_threshold: f64,
    pub about_reveal_threshold: f64,
    pub card_stagger_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            typewriter_interval_ms: 150,
            counter_duration_ms: 2000,
            counter_steps: 60,
            carousel_interval_ms: 5000,
            navbar_scroll_threshold_px: 50.0,
            course_reveal_threshold: 0.2,
            about_reveal_threshold: 0.3,
            card_stagger_ms: 200,
        }
    }
}

impl MotionConfig {
    pub fn typewriter_interval(&self) -> Duration {
        Duration::from_millis(self.typewriter_interval_ms)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    /// Period of one counter step: total duration split evenly over the steps.
    pub fn counter_step(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms) / self.counter_steps.max(1)
    }

    fn validate(&self) -> Result<(), LandingError> {
        if self.typewriter_interval_ms == 0
            || self.carousel_interval_ms == 0
            || self.counter_duration_ms == 0
        {
            return Err(LandingError::Config("motion intervals must be non-zero".into()));
        }
        if self.counter_steps == 0 {
            return Err(LandingError::Config("counter_steps must be at least 1".into()));
        }
        for (name, ratio) in [
            ("course_reveal_threshold", self.course_reveal_threshold),
            ("about_reveal_threshold", self.about_reveal_threshold),
        ] {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(LandingError::Config(format!(
                    "{name} must be in (0, 1], got {ratio}"
                )));
            }
        }
        Ok(())
    }
}

impl SiteConfig {
    /// Parse and validate the content bundled into the binary.
    pub fn embedded() -> Result<Self, LandingError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, LandingError> {
        let site: SiteConfig = serde_json::from_str(raw)?;
        site.validate()?;
        Ok(site)
    }

    pub fn validate(&self) -> Result<(), LandingError> {
        if self.courses.is_empty() {
            return Err(LandingError::Config("course list is empty".into()));
        }
        if self.testimonials.is_empty() {
            return Err(LandingError::Config("testimonial list is empty".into()));
        }
        if let Some(t) = self
            .testimonials
            .iter()
            .find(|t| !(1..=5).contains(&t.rating))
        {
            return Err(LandingError::Config(format!(
                "testimonial {} has rating {}, expected 1..=5",
                t.id, t.rating
            )));
        }
        self.max_level()?;
        self.motion.validate()
    }

    /// Parsed `log_level`.
    pub fn max_level(&self) -> Result<Level, LandingError> {
        Level::from_str(&self.log_level)
            .map_err(|_| LandingError::Config(format!("unknown log level `{}`", self.log_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_content_is_valid() {
        let site = SiteConfig::embedded().unwrap();
        assert_eq!(site.brand, "Ambition Plus");
        assert_eq!(site.tagline, "Learn. Grow. Achieve.");
        assert_eq!(site.courses.len(), 3);
        assert_eq!(site.testimonials.len(), 5);
        assert_eq!(site.popular_courses.len(), 6);
    }

    #[test]
    fn embedded_counter_targets() {
        let site = SiteConfig::embedded().unwrap();
        let targets: Vec<(&str, u32)> = site
            .about_stats
            .iter()
            .map(|s| (s.key.as_str(), s.target))
            .collect();
        assert_eq!(
            targets,
            vec![
                ("experience", 10),
                ("instructors", 50),
                ("countries", 30),
                ("satisfaction", 98)
            ]
        );
        assert_eq!(site.about_stats[3].suffix, "%");
    }

    #[test]
    fn course_features_keep_order() {
        let site = SiteConfig::embedded().unwrap();
        assert_eq!(
            site.courses[0].features,
            vec![
                "React & Next.js",
                "Node.js & Express",
                "MongoDB & PostgreSQL",
                "AWS Deployment"
            ]
        );
    }

    #[test]
    fn motion_defaults_apply_when_omitted() {
        let mut value: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        value.as_object_mut().unwrap().remove("motion");
        let site = SiteConfig::from_json(&value.to_string()).unwrap();
        assert_eq!(site.motion, MotionConfig::default());
        assert_eq!(site.motion.counter_step(), Duration::from_nanos(33_333_333));
        assert_eq!(site.motion.typewriter_interval(), Duration::from_millis(150));
    }

    #[test]
    fn rejects_empty_testimonials() {
        let mut site = SiteConfig::embedded().unwrap();
        site.testimonials.clear();
        assert_eq!(
            site.validate(),
            Err(LandingError::Config("testimonial list is empty".into()))
        );
    }

    #[test]
    fn rejects_empty_courses() {
        let mut site = SiteConfig::embedded().unwrap();
        site.courses.clear();
        assert!(site.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let mut site = SiteConfig::embedded().unwrap();
        site.testimonials[2].rating = 6;
        let err = site.validate().unwrap_err();
        assert!(err.to_string().contains("testimonial 3 has rating 6"));
    }

    #[test]
    fn rejects_bad_threshold_and_level() {
        let mut site = SiteConfig::embedded().unwrap();
        site.motion.about_reveal_threshold = 0.0;
        assert!(site.validate().is_err());

        let mut site = SiteConfig::embedded().unwrap();
        site.log_level = "chatty".into();
        assert!(site.validate().is_err());
        site.log_level = "debug".into();
        assert_eq!(site.max_level(), Ok(Level::DEBUG));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));
    }
}
