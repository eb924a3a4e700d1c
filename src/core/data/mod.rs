pub mod colour;
pub mod complex;
pub mod fractal_request;
pub mod pixel_buffer;
pub mod scalar_field;
pub mod viewport;
