//! Conversion from window sizes to wry rects.

use winit::dpi::PhysicalSize;

/// The wry rect covering a whole window of `size`.
pub fn window_rect(size: PhysicalSize<u32>) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
    }
}
