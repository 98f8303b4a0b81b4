// Extraction of accessibility data from third-party travel API responses
// Vendor data is best effort: anything missing or malformed means "feature absent".
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::models::{FlightAccessibility, HotelAccessibility, WHEELCHAIR_AMENITY_ID};

pub const DEFAULT_FACILITY_KEYWORDS: [&str; 7] = [
    "wheelchair",
    "accessible",
    "mobility",
    "elevator",
    "ramp",
    "parking",
    "bathroom",
];

pub const DEFAULT_FLIGHT_ADVISORY_NOTE: &str =
    "Check with airline for specific accessibility accommodations";

// Extractor configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    // Matched as case-insensitive substrings of each facility description
    pub facility_keywords: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            facility_keywords: DEFAULT_FACILITY_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

// Result of reading a SerpAPI hotel property
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HotelAmenityAccessibility {
    pub wheelchair_accessible: bool,
    pub accessible_room_available: bool,
    pub wheelchair_amenity_id: u32,
    // Raw amenities exactly as the vendor sent them, `[]` when missing
    pub amenities: Value,
}

impl From<HotelAmenityAccessibility> for HotelAccessibility {
    fn from(item: HotelAmenityAccessibility) -> Self {
        HotelAccessibility {
            wheelchair_accessible: item.wheelchair_accessible,
            accessible_room_available: item.accessible_room_available,
            wheelchair_amenity_id: item.wheelchair_amenity_id,
            ..HotelAccessibility::default()
        }
    }
}

pub struct AccessibilityExtractor {
    config: ExtractorConfig,
    // Lowercased once so matching doesn't redo it per facility
    keywords: Vec<String>,
}

impl Default for AccessibilityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessibilityExtractor {
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        let keywords = config
            .facility_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();
        Self { config, keywords }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    // SerpAPI lists amenities as objects with a numeric id; id 53 means wheelchair accessible
    pub fn hotel_accessibility(&self, hotel_property: &Value) -> HotelAmenityAccessibility {
        let amenities = hotel_property
            .get("amenities")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        let entries = amenities.as_array().map(Vec::as_slice).unwrap_or_default();

        let wheelchair_accessible = entries
            .iter()
            .filter_map(|amenity| amenity.as_object()?.get("id"))
            .any(|id| id.as_f64() == Some(f64::from(WHEELCHAIR_AMENITY_ID)));

        debug!(
            amenities = entries.len(),
            wheelchair_accessible, "Extracted SerpAPI hotel accessibility"
        );

        HotelAmenityAccessibility {
            wheelchair_accessible,
            // Availability can't be told apart from capability in this feed
            accessible_room_available: wheelchair_accessible,
            wheelchair_amenity_id: WHEELCHAIR_AMENITY_ID,
            amenities,
        }
    }

    // Amadeus only gives free-text facilities, so accessibility is a keyword match.
    // Substring matching flags "no parking" too; that is accepted.
    pub fn amadeus_hotel_accessibility(&self, hotel_data: &Value) -> HotelAccessibility {
        let facility_list: Vec<String> = hotel_data
            .get("facilities")
            .and_then(Value::as_array)
            .map(|facilities| facilities.iter().map(facility_description).collect())
            .unwrap_or_default();

        let has_accessibility = facility_list.iter().any(|facility| {
            let facility = facility.to_lowercase();
            self.keywords
                .iter()
                .any(|keyword| facility.contains(keyword.as_str()))
        });

        debug!(
            facilities = facility_list.len(),
            wheelchair_accessible = has_accessibility,
            "Extracted Amadeus hotel accessibility"
        );

        HotelAccessibility {
            wheelchair_accessible: has_accessibility,
            accessible_room_available: has_accessibility,
            facility_list: Some(facility_list),
            ..HotelAccessibility::default()
        }
    }

    // Flight offers carry no reliable accessibility signal yet, so nothing is claimed.
    // Traveler pricings are only counted; SSR codes aren't part of the offer response.
    pub fn flight_accessibility(&self, flight_offer: &Value) -> FlightAccessibility {
        let traveler_pricings = flight_offer
            .get("travelerPricings")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);

        debug!(traveler_pricings, "Extracted Amadeus flight accessibility");

        FlightAccessibility {
            notes: Some(DEFAULT_FLIGHT_ADVISORY_NOTE.to_string()),
            ..FlightAccessibility::default()
        }
    }
}

fn facility_description(facility: &Value) -> String {
    match facility {
        Value::Object(fields) => fields
            .get("description")
            .map(value_text)
            .unwrap_or_else(|| facility.to_string()),
        other => value_text(other),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

static DEFAULT_EXTRACTOR: LazyLock<AccessibilityExtractor> =
    LazyLock::new(AccessibilityExtractor::new);

// Accessibility from a SerpAPI hotel property, using the default extractor
pub fn extract_hotel_accessibility(hotel_property: &Value) -> HotelAmenityAccessibility {
    DEFAULT_EXTRACTOR.hotel_accessibility(hotel_property)
}

// Accessibility from an Amadeus hotel offer, using the default extractor
pub fn extract_amadeus_hotel_accessibility(hotel_data: &Value) -> HotelAccessibility {
    DEFAULT_EXTRACTOR.amadeus_hotel_accessibility(hotel_data)
}

// Accessibility from an Amadeus flight offer. Always conservative
pub fn extract_flight_accessibility_from_amadeus(flight_offer: &Value) -> FlightAccessibility {
    DEFAULT_EXTRACTOR.flight_accessibility(flight_offer)
}
