pub mod aggregate;
pub mod classify;
pub mod decode;
pub mod display;
pub mod itinerary;
pub mod query;
