//! Letterboxed viewport.

/// A pixel rectangle inside the framebuffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Largest viewport with the given aspect ratio, centered in the framebuffer.
    ///
    /// A zero-sized framebuffer (minimized window) yields an empty viewport.
    pub fn letterbox(framebuffer_width: u32, framebuffer_height: u32, aspect: f32) -> Self {
        if framebuffer_width == 0 || framebuffer_height == 0 || aspect <= 0.0 {
            return Self::default();
        }

        let (width, height) = if framebuffer_width as f32 / framebuffer_height as f32 > aspect {
            // Too wide: fit height
            let width = (framebuffer_height as f32 * aspect).round() as u32;
            (width.min(framebuffer_width), framebuffer_height)
        } else {
            // Too tall: fit width
            let height = (framebuffer_width as f32 / aspect).round() as u32;
            (framebuffer_width, height.min(framebuffer_height))
        };

        Self {
            x: (framebuffer_width - width) / 2,
            y: (framebuffer_height - height) / 2,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            0.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUR_THIRDS: f32 = 4.0 / 3.0;

    #[test]
    fn test_exact_aspect_fills() {
        let vp = Viewport::letterbox(800, 600, FOUR_THIRDS);
        assert_eq!(
            vp,
            Viewport {
                x: 0,
                y: 0,
                width: 800,
                height: 600
            }
        );
    }

    #[test]
    fn test_wide_window_pillarboxes() {
        let vp = Viewport::letterbox(1920, 600, FOUR_THIRDS);
        assert_eq!(vp.height, 600);
        assert_eq!(vp.width, 800);
        assert_eq!(vp.x, 560);
        assert_eq!(vp.y, 0);
    }

    #[test]
    fn test_tall_window_letterboxes() {
        let vp = Viewport::letterbox(800, 1000, FOUR_THIRDS);
        assert_eq!(vp.width, 800);
        assert_eq!(vp.height, 600);
        assert_eq!(vp.x, 0);
        assert_eq!(vp.y, 200);
    }

    #[test]
    fn test_minimized_window() {
        assert!(Viewport::letterbox(0, 600, FOUR_THIRDS).is_empty());
        assert!(Viewport::letterbox(800, 0, FOUR_THIRDS).is_empty());
    }
}
