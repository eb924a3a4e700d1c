use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::{CHANNELS, PixelBuffer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM writer. PPM has no alpha channel, so alpha is dropped.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);
        self.write_to(buffer, &mut file)?;
        file.flush()
    }

    fn format_name(&self) -> &str {
        "PPM"
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(&self, buffer: &PixelBuffer, out: &mut W) -> std::io::Result<()> {
        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", buffer.size(), buffer.size())?;
        writeln!(out, "255")?;

        for pixel in buffer.buffer().chunks_exact(CHANNELS) {
            out.write_all(&pixel[..3])?;
        }

        Ok(())
    }
}
