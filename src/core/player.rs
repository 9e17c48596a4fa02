//! Player position and view basis.

use raylib::prelude::Vector2;

pub struct Player {
    pub pos: Vector2,
    /// View angle in radians, kept in [0, 2*PI) by the movement resolver.
    pub rot: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, rot: f32) -> Self {
        Self {
            pos: Vector2::new(x, y),
            rot,
        }
    }

    /// Unit view direction, recomputed from the angle every call.
    #[inline]
    pub fn dir(&self) -> Vector2 {
        Vector2::new(self.rot.cos(), self.rot.sin())
    }

    /// Camera plane: the view direction rotated 90 degrees, unit length.
    /// Renderers scale it by `CAMERA_WIDTH` when fanning rays.
    #[inline]
    pub fn plane(&self) -> Vector2 {
        let d = self.dir();
        Vector2::new(-d.y, d.x)
    }
}
