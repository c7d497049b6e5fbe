// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod page_header;

// Primitive wrappers
pub mod avatar;
pub mod calendar;
pub mod separator;

// Depends on context only
pub mod sidebar;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use calendar::*;
pub use card::*;
pub use page_header::*;
pub use separator::*;
pub use sidebar::*;
