use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PAM writer keeping all four channels (`TUPLTYPE RGB_ALPHA`).
#[derive(Debug, Default)]
pub struct PamFilePresenter {}

impl FilePresenterPort for PamFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);
        self.write_to(buffer, &mut file)?;
        file.flush()
    }

    fn format_name(&self) -> &str {
        "PAM"
    }
}

impl PamFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(&self, buffer: &PixelBuffer, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "P7")?;
        writeln!(out, "WIDTH {}", buffer.size())?;
        writeln!(out, "HEIGHT {}", buffer.size())?;
        writeln!(out, "DEPTH 4")?;
        writeln!(out, "MAXVAL 255")?;
        writeln!(out, "TUPLTYPE RGB_ALPHA")?;
        writeln!(out, "ENDHDR")?;
        out.write_all(buffer.buffer())
    }
}
