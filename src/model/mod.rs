pub mod ids;
pub mod name;
pub mod contact_info;
pub mod profile;
pub mod component;

// Re-exports for convenience
pub use ids::{ContactId, NodeId};
pub use name::{FirstName, LastName, MiddleName, Nickname, Nicknames, Prefix, Suffix};
pub use contact_info::{Address, Addresses, Company, Email, Emails, PhoneNumber, PhoneNumbers, PhoneTag};
pub use profile::{Birthday, Groups};
pub use component::{AnyComponent, Component, ComponentKind};
