//! Repository pattern implementations

pub mod event;
pub mod route;

pub use event::EventRepository;
pub use route::RouteRepository;
