pub mod alternatives;
pub mod breakdown;
pub mod conversion;
pub mod landing;
pub mod segmentation;
pub mod transit;
