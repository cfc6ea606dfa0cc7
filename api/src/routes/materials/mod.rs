pub mod materials_request;
pub mod materials_route;
