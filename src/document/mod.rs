//! Document model: the Site -> Page -> Component tree
//!
//! This is the persisted representation of a user's site content. Pages own
//! ordered component lists; components are open data validated against the
//! registry on demand. The active editing session owns the tree exclusively;
//! there is no concurrent mutation.

pub mod component;
pub mod page;
pub mod site;

pub use component::{Component, ComponentId};
pub use page::Page;
pub use site::Site;
