// Shared accessibility models and helpers for flight and hotel services

pub mod error;
pub mod extract;
pub mod models;
pub mod ssr;

// Re-export key types for convenience
pub use error::{AccessibilityError, Result};
pub use extract::{
    extract_amadeus_hotel_accessibility, extract_flight_accessibility_from_amadeus,
    extract_hotel_accessibility, AccessibilityExtractor, ExtractorConfig,
    HotelAmenityAccessibility,
};
pub use models::{
    AccessibilityRequest, FlightAccessibility, HotelAccessibility, WHEELCHAIR_AMENITY_ID,
};
pub use ssr::{
    get_all_ssr_codes, get_ssr_code_description, validate_ssr_codes, validate_ssr_codes_value,
    SsrCode,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
