use crate::point::Unit;

use alloc::vec::Vec;

use rgb::RGBA8;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum CapStyle {
    /// Square line end that doesn't cover the end point.
    #[default]
    Butt,
    /// Covers the end point and extends beyond it by half the line width.
    Square,
    Round,
}

impl CapStyle {
    /// Synonym for [`CapStyle::Butt`].
    pub const FLAT: Self = CapStyle::Butt;
}

/// Stroke style applied to a path by a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Pen<T> {
    color: RGBA8,
    width: T,
    cap: CapStyle,
    /// empty means solid line
    dasharray: Vec<T>,
}

/// Invisible stroke: transparent, zero width.
impl<T: Unit> Default for Pen<T> {
    fn default() -> Self {
        Self {
            color: RGBA8::new(0, 0, 0, 0),
            width: T::zero(),
            cap: CapStyle::Butt,
            dasharray: Vec::new(),
        }
    }
}

impl<T: Unit> Pen<T> {
    pub fn new(color: RGBA8, width: T, cap: CapStyle) -> Self {
        Self {
            color,
            width,
            cap,
            dasharray: Vec::new(),
        }
    }

    /// One unit wide, butt caps.
    pub fn with_color(color: RGBA8) -> Self {
        Self::new(color, T::one(), CapStyle::Butt)
    }

    pub fn color(&self) -> RGBA8 {
        self.color
    }

    pub fn width(&self) -> T {
        self.width
    }

    pub fn cap(&self) -> CapStyle {
        self.cap
    }

    pub fn dasharray(&self) -> &[T] {
        &self.dasharray
    }

    pub fn is_solid(&self) -> bool {
        self.dasharray.is_empty()
    }

    pub fn add_dash(&mut self, length: T) {
        self.dasharray.push(length);
    }

    pub fn clear_dasharray(&mut self) {
        self.dasharray.clear();
    }
}
