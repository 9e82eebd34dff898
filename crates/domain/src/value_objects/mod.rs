//! Value objects

mod analysis_task;
mod contact_category;
mod image_attachment;

pub use analysis_task::AnalysisTask;
pub use contact_category::ContactCategory;
pub use image_attachment::ImageAttachment;
