//! # Prompt Assembly Module
//!
//! ## Purpose
//! Bundles the extraction results for one user request into a
//! [`TravelRequest`] and renders the downstream text artifacts: the web
//! search query used to gather context and the itinerary-generation prompt
//! whose `# Day N` format the segmenter and place extractor rely on.
//!
//! ## Input/Output Specification
//! - **Input**: Free-form user text plus a [`Config`]
//! - **Output**: `Some(TravelRequest)`, or `None` when no destination is
//!   identifiable (personality and date alone are not actionable)

use crate::config::Config;
use crate::dates::parse_natural_date;
use crate::destination::DestinationExtractor;
use crate::personality::PersonalityDetector;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The structured reading of one user request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRequest {
    /// Destination as extracted, trimmed, never empty
    pub destination: String,
    /// Personality tags in configured declaration order, never empty
    pub personalities: Vec<String>,
    /// Resolved travel date, when one was recognizable
    pub travel_date: Option<NaiveDate>,
}

impl TravelRequest {
    /// Read a request out of free-form user text.
    ///
    /// Returns `None` when no destination can be identified; the other two
    /// fields always resolve (personalities fall back to the default tag,
    /// the date to `None`).
    pub fn from_text(text: &str, config: &Config) -> Option<Self> {
        let destination = DestinationExtractor::new(&config.destination).extract(text)?;
        let personalities = PersonalityDetector::new(&config.personality).detect(text);
        let travel_date = parse_natural_date(text);

        Some(Self {
            destination,
            personalities,
            travel_date,
        })
    }

    /// The travel date rendered for prompt text: "September 04, 2026" or
    /// "flexible dates" when none was given.
    pub fn date_label(&self) -> String {
        match self.travel_date {
            Some(date) => date.format("%B %d, %Y").to_string(),
            None => "flexible dates".to_string(),
        }
    }

    /// The web search query used to gather itinerary context.
    pub fn search_query(&self) -> String {
        format!(
            "{} travel guide best attractions, activities, restaurants for {} travelers",
            self.destination,
            self.personalities.join(", ")
        )
    }

    /// The itinerary-generation prompt over the gathered search context.
    ///
    /// The format rules here are load-bearing: the day headers feed the
    /// segmenter and the "EXACT PLACE NAME" and rating rules feed the place
    /// extractor's pattern families.
    pub fn itinerary_prompt(&self, context: &str) -> String {
        let personalities = self.personalities.join(", ");
        format!(
            "Based on the user's personality ({personalities}) and their travel destination {destination} on {date},\n\
             generate a concise 3-day travel itinerary.\n\
             \n\
             Use this context:\n\
             {context}\n\
             \n\
             The itinerary MUST follow this format:\n\
             \n\
             # Day 1\n\
             - Morning: [Brief activity description] at [EXACT PLACE NAME]\n\
             - Afternoon: [Brief activity description] at [EXACT PLACE NAME]\n\
             - Evening: [Brief activity description] at [EXACT PLACE NAME]\n\
             \n\
             # Day 2\n\
             - Morning: [Brief activity description] at [EXACT PLACE NAME]\n\
             - Afternoon: [Brief activity description] at [EXACT PLACE NAME]\n\
             - Evening: [Brief activity description] at [EXACT PLACE NAME]\n\
             \n\
             # Day 3\n\
             - Morning: [Brief activity description] at [EXACT PLACE NAME]\n\
             - Afternoon: [Brief activity description] at [EXACT PLACE NAME]\n\
             - Evening: [Brief activity description] at [EXACT PLACE NAME]\n\
             \n\
             IMPORTANT RULES:\n\
             1. Each activity MUST include a specific, mappable place name (museum, landmark, restaurant, etc.)\n\
             2. Keep activities short and concise\n\
             3. Include ratings for restaurants (e.g., 4.5/5)\n\
             4. Day numbers must be numerical (1, 2, 3) and not written as text\n\
             5. Make sure to highlight the main attractions of {destination}\n\
             6. Include at least one local secret or hidden gem\n\
             7. Align with the user's {personalities} interests\n\
             8. Use proper Markdown formatting with # for day headers\n",
            personalities = personalities,
            destination = self.destination,
            date = self.date_label(),
            context = context,
        )
    }
}
