pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
pub mod recurrence;
