use std::fmt;

/// Integer element types the kernels operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
}

impl DType {
    /// Returns the size in bytes of a single element.
    pub fn size_in_bytes(&self) -> usize {
        match self {
            DType::I8 => 1,
            DType::I16 => 2,
            DType::I32 => 4,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::I8 => write!(f, "i8"),
            DType::I16 => write!(f, "i16"),
            DType::I32 => write!(f, "i32"),
        }
    }
}

/// A signed integer element with a widened accumulator type.
///
/// `Wide` is at least twice as wide as `Self`, so a single product never
/// overflows it. Sums over long contractions wrap (two's complement), and
/// `narrow` truncates to the 32-bit result type every kernel stores.
pub trait Element: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    type Wide: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static;

    const DTYPE: DType;

    fn widen(self) -> Self::Wide;

    /// `acc + a * b` in the accumulator type, wrapping on overflow.
    fn mac(acc: Self::Wide, a: Self, b: Self) -> Self::Wide;

    fn wide_add(a: Self::Wide, b: Self::Wide) -> Self::Wide;

    fn wide_sub(a: Self::Wide, b: Self::Wide) -> Self::Wide;

    fn wide_mul(a: Self::Wide, b: Self::Wide) -> Self::Wide;

    fn narrow(acc: Self::Wide) -> i32;

    fn wrapping_sub(self, other: Self) -> Self;
}

macro_rules! impl_element {
    ($t:ty, $wide:ty, $dtype:expr) => {
        impl Element for $t {
            type Wide = $wide;

            const DTYPE: DType = $dtype;

            #[inline(always)]
            fn widen(self) -> $wide {
                self as $wide
            }

            #[inline(always)]
            fn mac(acc: $wide, a: Self, b: Self) -> $wide {
                acc.wrapping_add((a as $wide).wrapping_mul(b as $wide))
            }

            #[inline(always)]
            fn wide_add(a: $wide, b: $wide) -> $wide {
                a.wrapping_add(b)
            }

            #[inline(always)]
            fn wide_sub(a: $wide, b: $wide) -> $wide {
                a.wrapping_sub(b)
            }

            #[inline(always)]
            fn wide_mul(a: $wide, b: $wide) -> $wide {
                a.wrapping_mul(b)
            }

            #[inline(always)]
            fn narrow(acc: $wide) -> i32 {
                acc as i32
            }

            #[inline(always)]
            fn wrapping_sub(self, other: Self) -> Self {
                <$t>::wrapping_sub(self, other)
            }
        }
    };
}

impl_element!(i8, i32, DType::I8);
impl_element!(i16, i32, DType::I16);
impl_element!(i32, i64, DType::I32);
