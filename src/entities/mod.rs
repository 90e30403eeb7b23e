//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod activity_post;
pub mod auth_session;
pub mod check_in;
pub mod plant;
pub mod plant_care;
pub mod site_content;
pub mod user;

// Re-export specific types to avoid conflicts
pub use activity_post::{
    Column as ActivityPostColumn, Entity as ActivityPost, Model as ActivityPostModel,
};
pub use auth_session::{
    Column as AuthSessionColumn, Entity as AuthSession, Model as AuthSessionModel,
};
pub use check_in::{Column as CheckInColumn, Entity as CheckIn, Model as CheckInModel};
pub use plant::{Column as PlantColumn, Entity as Plant, Model as PlantModel};
pub use plant_care::{Column as PlantCareColumn, Entity as PlantCare, Model as PlantCareModel};
pub use site_content::{
    Column as SiteContentColumn, Entity as SiteContent, Model as SiteContentModel,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel, UserRole};
