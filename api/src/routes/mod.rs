pub mod explain;
pub mod health_route;
pub mod materials;
