//! The double-buffered canvas pair behind the effect.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::sim::Viewport;

/// A working canvas the particles are composed onto each frame, and the
/// visible display canvas the finished frame is blitted to. Only the display
/// canvas is attached to the page; it sits above everything and ignores
/// pointer input so it can never swallow the clicks it reacts to.
pub struct Overlay {
    work: HtmlCanvasElement,
    work_context: CanvasRenderingContext2d,
    display: HtmlCanvasElement,
    display_context: CanvasRenderingContext2d,
    size: Viewport,
}

impl Overlay {
    /// Create both canvases and attach the display canvas to the body.
    pub fn mount(window: &Window, size: Viewport) -> Result<Self, JsValue> {
        let document = window.document().ok_or("no document")?;

        let work = create_canvas(&document)?;
        let display = create_canvas(&document)?;

        let style = display.style();
        style.set_property("position", "fixed")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("z-index", "999999999")?;
        style.set_property("pointer-events", "none")?;

        let work_context = context_2d(&work)?;
        let display_context = context_2d(&display)?;

        let mut overlay = Self {
            work,
            work_context,
            display,
            display_context,
            size,
        };
        overlay.resize(size);

        document
            .body()
            .ok_or("no body")?
            .append_child(&overlay.display)?;
        Ok(overlay)
    }

    /// Resize both canvases. In-flight particles keep their coordinates.
    pub fn resize(&mut self, size: Viewport) {
        self.size = size;
        self.work.set_width(size.width as u32);
        self.work.set_height(size.height as u32);
        self.display.set_width(size.width as u32);
        self.display.set_height(size.height as u32);
    }

    /// Wipe both canvases.
    pub fn clear(&self) {
        self.work_context
            .clear_rect(0.0, 0.0, self.size.width, self.size.height);
        self.display_context
            .clear_rect(0.0, 0.0, self.size.width, self.size.height);
    }

    pub fn work_context(&self) -> &CanvasRenderingContext2d {
        &self.work_context
    }

    /// Copy the finished frame onto the visible canvas in one draw call, so
    /// a partially composed frame never reaches the screen.
    pub fn blit(&self) -> Result<(), JsValue> {
        self.display_context
            .draw_image_with_html_canvas_element_and_dw_and_dh(
                &self.work,
                0.0,
                0.0,
                self.size.width,
                self.size.height,
            )
    }
}

fn create_canvas(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
    document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| "created element is not a canvas".into())
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or("2d canvas context unavailable")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "2d context has an unexpected type".into())
}
