//! API endpoint implementations.

mod memberships;
mod messages;
mod rooms;
mod teams;

pub use memberships::MembershipsApi;
pub use messages::MessagesApi;
pub use rooms::RoomsApi;
pub use teams::TeamsApi;
