pub mod location;
pub mod practitioner;
pub mod service_type;

pub use location::LocationService;
pub use practitioner::PractitionerService;
pub use service_type::ServiceTypeService;
