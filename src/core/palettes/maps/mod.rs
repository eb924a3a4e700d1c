pub mod grayscale;
pub mod rainbow;
