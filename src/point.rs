use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::{Float, Num, NumCast};
use vek::vec::Vec2;

/// Numeric coordinate type of points and paths.
///
/// Addition, subtraction and division follow the type's own arithmetic:
/// integer units truncate, floating-point units don't.
pub trait Unit: Copy + Debug + PartialOrd + Num + NumCast {
    /// Converts a real value to this unit.
    ///
    /// Integer units round to the nearest value (halves away from zero)
    /// and saturate at their bounds.
    fn from_real<F: Float>(value: F) -> Self;

    /// `self * num / den` in the unit's own arithmetic.
    ///
    /// Integer units give the same truncated quotient as the plain
    /// expression, without overflowing on the intermediate product.
    fn mul_div(self, num: Self, den: Self) -> Self;

    fn to_real<F: Float>(self) -> F {
        F::from(self).unwrap_or_else(F::nan)
    }
}

macro_rules! integer_unit {
    ($($t:ident)*) => {$(
        impl Unit for $t {
            fn from_real<F: Float>(value: F) -> Self {
                // `as` saturates, NaN becomes zero
                value.round().to_f64().map_or(0, |v| v as $t)
            }

            fn mul_div(self, num: Self, den: Self) -> Self {
                // quotient and remainder share the sign of `self`
                self / den * num + self % den * num / den
            }
        }
    )*};
}

macro_rules! float_unit {
    ($($t:ident)*) => {$(
        impl Unit for $t {
            fn from_real<F: Float>(value: F) -> Self {
                value.to_f64().map_or(<$t>::NAN, |v| v as $t)
            }

            fn mul_div(self, num: Self, den: Self) -> Self {
                self * num / den
            }
        }
    )*};
}

integer_unit!(i8 i16 i32 i64 isize);
float_unit!(f32 f64);

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Unit> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    pub fn set_x(&mut self, x: T) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: T) {
        self.y = y;
    }

    pub fn increment_x(&mut self, dx: T) {
        self.x = self.x + dx;
    }

    pub fn increment_y(&mut self, dy: T) {
        self.y = self.y + dy;
    }

    pub fn increment(&mut self, dx: T, dy: T) {
        self.increment_x(dx);
        self.increment_y(dy);
    }

    /// Multiplies both coordinates by `factor`.
    ///
    /// The product is computed in `F`, then brought back with
    /// [`Unit::from_real`]: `Point::new(10, 10).scale(0.35)` is `(4, 4)`.
    pub fn scale<F: Float>(self, factor: F) -> Self {
        let x = T::from_real(self.x.to_real::<F>() * factor);
        let y = T::from_real(self.y.to_real::<F>() * factor);
        Self::new(x, y)
    }
}

impl<T: Unit> Add for Point<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Unit> Sub for Point<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Unit> AddAssign for Point<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Unit> SubAssign for Point<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Unit, F: Float> Mul<F> for Point<T> {
    type Output = Self;

    fn mul(self, factor: F) -> Self {
        self.scale(factor)
    }
}

impl<T: Unit, F: Float> MulAssign<F> for Point<T> {
    fn mul_assign(&mut self, factor: F) {
        *self = self.scale(factor);
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T> From<Vec2<T>> for Point<T> {
    fn from(v: Vec2<T>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl<T> From<Point<T>> for Vec2<T> {
    fn from(p: Point<T>) -> Self {
        Vec2::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type P = Point<i32>;

    #[test]
    fn default_is_origin() {
        let p = P::default();
        assert_eq!((p.x(), p.y()), (0, 0));
        assert_eq!(p, P::origin());
    }

    #[test]
    fn setters_and_increments() {
        let mut p = P::default();
        p.set_x(10);
        p.set_y(20);
        assert_eq!(p, P::new(10, 20));

        p.increment_x(10);
        p.increment_y(20);
        assert_eq!(p, P::new(20, 40));

        p.increment(-10, -20);
        assert_eq!(p, P::new(10, 20));
    }

    #[test]
    fn add_and_subtract() {
        let mut p = P::new(10, 20);
        let p1 = P::new(10, 20);
        let p2 = P::new(-10, -20);

        p += p1;
        assert_eq!(p, P::new(20, 40));
        p += p2;
        assert_eq!(p, P::new(10, 20));
        p -= p2;
        assert_eq!(p, P::new(20, 40));
        p -= p1;
        assert_eq!(p, P::new(10, 20));

        let a = P::new(7, -3);
        let b = P::new(-12, 45);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn integer_scaling_rounds() {
        let p = P::new(10, 10);

        assert_eq!(p * 0.35f32, P::new(4, 4));
        assert_eq!(p * 0.33f32, P::new(3, 3));
        assert_eq!(p * 0.55f32, P::new(6, 6));
        assert_eq!(p * -0.35f32, P::new(-4, -4));
        assert_eq!(p * -0.33f32, P::new(-3, -3));
        assert_eq!(p * -0.55f32, P::new(-6, -6));

        assert_eq!(p * 0.35f64, P::new(4, 4));
        assert_eq!(p * 0.33f64, P::new(3, 3));
        assert_eq!(p * 0.55f64, P::new(6, 6));
        assert_eq!(p * -0.35f64, P::new(-4, -4));
        assert_eq!(p * -0.33f64, P::new(-3, -3));
        assert_eq!(p * -0.55f64, P::new(-6, -6));

        let mut q = p;
        q *= 0.35f32;
        assert_eq!(q, P::new(4, 4));
    }

    #[test]
    fn integer_scaling_saturates() {
        let p = Point::<i8>::new(100, -100);
        assert_eq!(p * 10.0f32, Point::new(i8::MAX, i8::MIN));
    }

    #[test]
    fn integer_mul_div_truncates_like_plain_division() {
        for d in -20i32..=20 {
            assert_eq!(d.mul_div(2, 3), d * 2 / 3, "d = {}", d);
        }
        assert_eq!(100i8.mul_div(2, 3), 66);
        assert_eq!((-100i8).mul_div(2, 3), -66);
        assert_eq!(i32::MAX.mul_div(2, 3), 1_431_655_764);
        assert_eq!(i32::MIN.mul_div(2, 3), -1_431_655_765);
    }

    #[test]
    fn float_scaling() {
        let p = Point::<f64>::new(10.0, -4.0);
        assert_eq!(p * 0.5f64, Point::new(5.0, -2.0));
    }

    #[test]
    fn comparison() {
        assert_eq!(P::new(10, 10), P::new(10, 10));
        assert_ne!(P::new(10, 10), P::new(10, 11));
        assert_ne!(P::new(10, 10), P::new(11, 11));
    }

    #[test]
    fn vek_conversions() {
        let v: Vec2<i32> = P::new(3, 4).into();
        assert_eq!(v, Vec2::new(3, 4));
        assert_eq!(P::from(v), P::new(3, 4));
        assert_eq!(P::from((5, 6)), P::new(5, 6));
    }
}
