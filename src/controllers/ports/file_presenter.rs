use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()>;

    fn format_name(&self) -> &str;
}

impl FilePresenterPort for Box<dyn FilePresenterPort> {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        (**self).present(buffer, filepath)
    }

    fn format_name(&self) -> &str {
        (**self).format_name()
    }
}
