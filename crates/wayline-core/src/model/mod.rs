pub mod coordinates;
pub mod location;
pub mod route;

pub use coordinates::Coordinates;
pub use location::Location;
pub use route::Route;
