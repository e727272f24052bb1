//! Domain records shared with the backend's document store. The engine
//! treats all of them as read-only inputs except [`PlanEntry`] and
//! [`PlanDocument`], which it produces.

pub mod plan;
pub mod product;
pub mod professional;
pub mod recommendation;
pub mod user;

pub use plan::{PlanDocument, PlanEntry};
pub use product::Product;
pub use professional::Professional;
pub use recommendation::{Consultation, RecommendationSet, Screening, Urgency, DEFAULT_FOLLOW_UP};
pub use user::UserProfile;
