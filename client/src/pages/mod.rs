//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state,
//! navigation) and delegates rendering details to `components`. Cart and
//! wishlist mutations go through `state::cart` like everywhere else.

pub mod about;
pub mod cart;
pub mod checkout;
pub mod contact;
pub mod faq;
pub mod home;
pub mod login;
pub mod orders;
pub mod product;
pub mod profile;
pub mod shop;
pub mod signup;
pub mod wishlist;
