use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::Vector;

// Operator overloads resolve vector-vs-scalar at compile time.

macro_rules! vector_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $vec_fn:ident, $scalar_fn:ident) => {
        impl<const N: usize> $trait for Vector<N> {
            type Output = Vector<N>;
            #[inline]
            fn $method(self, rhs: Vector<N>) -> Vector<N> {
                self.$vec_fn(rhs)
            }
        }

        impl<const N: usize> $trait<f32> for Vector<N> {
            type Output = Vector<N>;
            #[inline]
            fn $method(self, rhs: f32) -> Vector<N> {
                self.$scalar_fn(rhs)
            }
        }

        impl<const N: usize> $assign_trait for Vector<N> {
            #[inline]
            fn $assign_method(&mut self, rhs: Vector<N>) {
                *self = self.$vec_fn(rhs);
            }
        }

        impl<const N: usize> $assign_trait<f32> for Vector<N> {
            #[inline]
            fn $assign_method(&mut self, rhs: f32) {
                *self = self.$scalar_fn(rhs);
            }
        }
    };
}

vector_binop!(Add, add, AddAssign, add_assign, add_vec, add_scalar);
vector_binop!(Sub, sub, SubAssign, sub_assign, sub_vec, sub_scalar);
vector_binop!(Mul, mul, MulAssign, mul_assign, mul_vec, mul_scalar);
vector_binop!(Div, div, DivAssign, div_assign, div_vec, div_scalar);

impl<const N: usize> Neg for Vector<N> {
    type Output = Vector<N>;
    #[inline]
    fn neg(self) -> Vector<N> {
        self.mul_scalar(-1.0)
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.0[i]
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(components: [f32; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    #[inline]
    fn from(v: Vector<N>) -> Self {
        v.0
    }
}

#[cfg(test)]
mod tests {
    use crate::vector::{Vec2, Vec3};

    #[test]
    fn operators_dispatch_by_operand_type() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v + Vec2::new(1.0, 1.0), Vec2::new(2.0, 3.0));
        assert_eq!(v + 1.0, Vec2::new(2.0, 3.0));
        assert_eq!(v * Vec2::new(3.0, 4.0), Vec2::new(3.0, 8.0));
        assert_eq!(v * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(-v, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn assign_operators() {
        let mut v = Vec3::new(2.0, 4.0, 6.0);
        v /= 2.0;
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        v -= Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
        v[2] = 9.0;
        assert_eq!(v.z(), 9.0);
    }
}
