/// Output surface size in CSS/logical pixels plus the device pixel ratio.
///
/// Pointer coordinates are logical; the render target uses `physical_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            device_pixel_ratio: if device_pixel_ratio > 0.0 {
                device_pixel_ratio
            } else {
                1.0
            },
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Backing-store size, never zero on either axis.
    pub fn physical_size(&self) -> (u32, u32) {
        let w = (self.width * self.device_pixel_ratio).round() as u32;
        let h = (self.height * self.device_pixel_ratio).round() as u32;
        (w.max(1), h.max(1))
    }

    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.width * 0.5, self.height * 0.5)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0, 1.0)
    }
}
