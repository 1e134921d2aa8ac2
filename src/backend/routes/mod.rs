
pub mod router;

pub mod api_routes;

pub use router::create_router;
