/// Arguments of a parallel strided matrix multiplication, shared by every
/// worker of the fan-out.
///
/// `p_src_b` is `N x O` for the plain products and `O x N` for the
/// transposed ones. Complex variants point at interleaved `(re, im)` pairs
/// and count strides in complex elements.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PlpMatMultStrideInstance<T> {
    pub p_src_a: *const T,
    pub p_src_b: *const T,
    pub m: u32,
    pub n: u32,
    pub o: u32,
    pub stride_a: u32,
    pub stride_b: u32,
    pub stride_c: u32,
    pub n_pe: u32,
    pub p_dst_c: *mut i32,
}

/// Arguments of a parallel strided matrix subtraction.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PlpMatSubStrideInstance<T> {
    pub p_src_a: *const T,
    pub p_src_b: *const T,
    pub m: u32,
    pub n: u32,
    pub stride_a: u32,
    pub stride_b: u32,
    pub stride_y: u32,
    pub n_pe: u32,
    pub p_dst: *mut T,
}

pub type PlpMatMultStrideInstanceI32 = PlpMatMultStrideInstance<i32>;
pub type PlpMatMultStrideInstanceI16 = PlpMatMultStrideInstance<i16>;
pub type PlpMatMultStrideInstanceI8 = PlpMatMultStrideInstance<i8>;

pub type PlpMatSubStrideInstanceI32 = PlpMatSubStrideInstance<i32>;
pub type PlpMatSubStrideInstanceI16 = PlpMatSubStrideInstance<i16>;
pub type PlpMatSubStrideInstanceI8 = PlpMatSubStrideInstance<i8>;
