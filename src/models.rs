// Accessibility records shared by the flight and hotel services
use serde::{Deserialize, Serialize};

// SerpAPI amenity id marking wheelchair accessible rooms
pub const WHEELCHAIR_AMENITY_ID: u32 = 53;

// Accessibility features and accommodations for a flight
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FlightAccessibility {
    pub wheelchair_available: bool,
    // Wheelchair can be stowed in the cargo hold
    pub wheelchair_stowage: bool,
    pub accessible_lavatory: bool,
    // Extra legroom seating available for mobility impaired travelers
    pub extra_legroom_available: bool,
    // SSR codes (WCHR, WCHS, STCR, DEAF, BLND, PRMK)
    pub special_service_codes: Option<Vec<String>>,
    // Companion/escort required; `None` when the airline doesn't say
    pub companion_required: Option<bool>,
    // Special meal options (diabetic, low sodium, ...)
    pub special_meals_available: bool,
    pub notes: Option<String>,
}

// Accessibility features and accommodations for a hotel
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HotelAccessibility {
    pub wheelchair_accessible: bool,
    // Accessible rooms currently in stock
    pub accessible_room_available: bool,
    // SerpAPI amenity id for wheelchair accessible (static reference)
    pub wheelchair_amenity_id: u32,
    // Roll-in shower, grab bars, accessible toilet, ...
    pub accessible_bathroom_types: Option<Vec<String>>,
    pub accessible_parking: bool,
    // Level or ramped entrance
    pub accessible_entrance: bool,
    pub accessible_elevator: bool,
    pub service_animals_allowed: bool,
    // Price of the least expensive accessible room
    pub lowest_accessible_price: Option<f64>,
    // Raw facility descriptions reported by the vendor
    pub facility_list: Option<Vec<String>>,
}

impl Default for HotelAccessibility {
    fn default() -> Self {
        Self {
            wheelchair_accessible: false,
            accessible_room_available: false,
            wheelchair_amenity_id: WHEELCHAIR_AMENITY_ID,
            accessible_bathroom_types: None,
            accessible_parking: false,
            accessible_entrance: false,
            accessible_elevator: false,
            service_animals_allowed: false,
            lowest_accessible_price: None,
            facility_list: None,
        }
    }
}

// Traveler supplied accessibility requirements for trip planning
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AccessibilityRequest {
    pub wheelchair_user: bool,
    pub reduced_mobility: bool,
    pub deaf: bool,
    pub blind: bool,
    pub stretcher_case: bool,
    pub companion_required: bool,
    // Allergies, equipment and other needs as free text
    pub special_requirements: Option<String>,
}
