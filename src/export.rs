use egui::{Context, Rect};
use thiserror::Error;

/// Fixed upscale factor applied to the exported bitmap.
pub const EXPORT_SCALE: u32 = 4;

/// Default file name offered by the save dialog.
pub const EXPORT_FILE_NAME: &str = "sketchpad.png";

/// Errors that can occur while exporting the drawing
#[derive(Debug, Error)]
pub enum ExportError {
    /// The screenshot did not cover the canvas region
    #[error("screenshot did not include the canvas region")]
    EmptyCapture,
    /// PNG encoding or writing failed
    #[error("failed to write PNG: {0}")]
    Encode(#[from] image::ImageError),
    /// The user dismissed the save dialog
    #[error("export cancelled")]
    Cancelled,
}

/// Drives PNG export: requests a frame capture from the backend, then crops,
/// upscales and saves the canvas region when the capture arrives.
#[derive(Debug, Default)]
pub struct ExportController {
    /// Canvas rect recorded at request time, screen coordinates.
    pending: Option<Rect>,
}

impl ExportController {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Ask the backend to capture the next frame.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn request(&mut self, ctx: &Context, canvas_rect: Rect) {
        log::info!("Export requested");
        self.pending = Some(canvas_rect);
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
    }

    /// Pick up capture events delivered by the backend and finish any
    /// pending export.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn handle_screenshots(&mut self, ctx: &Context) {
        let Some(canvas_rect) = self.pending else {
            return;
        };
        let capture = ctx.input(|input| {
            input.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(image) = capture else {
            return;
        };
        self.pending = None;
        match save_canvas_png(&image, canvas_rect, ctx.pixels_per_point()) {
            Ok(path) => log::info!("Exported drawing to {}", path.display()),
            Err(ExportError::Cancelled) => log::info!("Export cancelled"),
            Err(err) => log::error!("Export failed: {err}"),
        }
    }

    // Frame captures are not available through the web backend; the export
    // button is native-only.
    #[cfg(target_arch = "wasm32")]
    pub fn handle_screenshots(&mut self, _ctx: &Context) {}
}

/// Crop the capture to the canvas, upscale it by [`EXPORT_SCALE`] and write
/// it to a user-chosen path.
#[cfg(not(target_arch = "wasm32"))]
fn save_canvas_png(
    screenshot: &egui::ColorImage,
    canvas_rect: Rect,
    pixels_per_point: f32,
) -> Result<std::path::PathBuf, ExportError> {
    let region = screenshot.region(&canvas_rect, Some(pixels_per_point));
    let [width, height] = region.size;
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyCapture);
    }

    let raster =
        image::RgbaImage::from_raw(width as u32, height as u32, region.as_raw().to_vec())
            .ok_or(ExportError::EmptyCapture)?;
    let upscaled = image::imageops::resize(
        &raster,
        width as u32 * EXPORT_SCALE,
        height as u32 * EXPORT_SCALE,
        image::imageops::FilterType::Nearest,
    );

    let Some(path) = rfd::FileDialog::new()
        .set_file_name(EXPORT_FILE_NAME)
        .save_file()
    else {
        return Err(ExportError::Cancelled);
    };
    upscaled.save(&path)?;
    Ok(path)
}
