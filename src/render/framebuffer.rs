//! CPU framebuffer, uploaded to a persistent texture once per frame.

use raylib::core::texture::RaylibTexture2D;
use raylib::prelude::*;

pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub current_color: Color,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
            current_color: Color::WHITE,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = self.current_color;
        }
    }

    #[inline]
    pub fn set_pixel_color(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[(y * self.width + x) as usize];
        }
        self.background_color
    }

    #[inline]
    pub fn set_current_color(&mut self, c: Color) {
        self.current_color = c;
    }

    /// Upload the pixels to a persistent texture. `Color` is RGBA8, so the
    /// buffer reinterprets as a byte slice without copying.
    pub fn upload_to_texture(&self, tex: &mut Texture2D) {
        let byte_len = self.color_buffer.len() * std::mem::size_of::<Color>();
        let bytes: &[u8] = unsafe {
            std::slice::from_raw_parts(self.color_buffer.as_ptr() as *const u8, byte_len)
        };
        let _ = tex.update_texture(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_are_bounds_checked() {
        let mut fb = Framebuffer::new(4, 4);
        fb.set_current_color(Color::RED);
        fb.set_pixel(3, 3);
        fb.set_pixel(4, 0); // silently dropped
        fb.set_pixel(0, 4);
        assert_eq!(fb.get_pixel(3, 3), Color::RED);
        assert_eq!(fb.get_pixel(4, 0), fb.background_color);
    }
}
