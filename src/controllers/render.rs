use std::io;
use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render::render;
use crate::core::data::fractal_request::FractalRequest;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::errors::FractalError;

/// Renders requests and hands the latest image to a file presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, request: &FractalRequest) -> Result<(), FractalError> {
        info!(
            kind = %request.kind,
            size = request.size,
            zoom = request.zoom,
            iterations = request.iterations,
            palette = %request.palette,
            "rendering fractal"
        );
        if let Some(constant) = request.julia_constant_for_kind() {
            info!(%constant, "using Julia constant");
        }

        let start = Instant::now();
        let buffer = render(request)?;

        info!(duration = ?start.elapsed(), "render finished");

        self.buffer = Some(buffer);
        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> io::Result<()> {
        let Some(buffer) = &self.buffer else {
            return Err(io::Error::other("nothing has been rendered yet"));
        };

        let filepath = filepath.as_ref();
        self.presenter.present(buffer, filepath)?;

        info!(
            path = %filepath.display(),
            format = self.presenter.format_name(),
            "image saved"
        );
        Ok(())
    }
}
