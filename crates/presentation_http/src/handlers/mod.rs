//! Request handlers

pub mod common;
pub mod contact_lookup;
pub mod health;
pub mod image_checks;
pub mod landing;
pub mod text_checks;
pub mod url_check;
