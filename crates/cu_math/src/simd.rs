//! Four-wide f32 lanes behind `Vec4` arithmetic.
//!
//! Two backends expose the same functions: `scalar` is always compiled and
//! `sse` is compiled with the `simd` feature on x86 targets. `Vec4` calls
//! through `active`, which names whichever backend this build selected.
//!
//! Both backends must agree bit-for-bit. Per-lane IEEE add/sub/mul/div are
//! exact in either form; the horizontal sum in `dot` is done in the fixed
//! order `((x + y) + z) + w` on both sides.

#[cfg(all(
    feature = "simd",
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
))]
pub(crate) use self::sse as active;

#[cfg(not(all(
    feature = "simd",
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
)))]
pub(crate) use self::scalar as active;

/// Plain per-component implementation
#[cfg_attr(feature = "simd", allow(dead_code))]
pub(crate) mod scalar {
    use crate::vector::Vec4;

    #[inline]
    pub fn add(a: Vec4, b: Vec4) -> Vec4 {
        Vec4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
    }

    #[inline]
    pub fn sub(a: Vec4, b: Vec4) -> Vec4 {
        Vec4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
    }

    #[inline]
    pub fn mul(a: Vec4, b: Vec4) -> Vec4 {
        Vec4::new(a.x * b.x, a.y * b.y, a.z * b.z, a.w * b.w)
    }

    #[inline]
    pub fn div(a: Vec4, b: Vec4) -> Vec4 {
        Vec4::new(a.x / b.x, a.y / b.y, a.z / b.z, a.w / b.w)
    }

    #[inline]
    pub fn scale(a: Vec4, s: f32) -> Vec4 {
        Vec4::new(a.x * s, a.y * s, a.z * s, a.w * s)
    }

    #[inline]
    pub fn div_scalar(a: Vec4, s: f32) -> Vec4 {
        Vec4::new(a.x / s, a.y / s, a.z / s, a.w / s)
    }

    #[inline]
    pub fn dot(a: Vec4, b: Vec4) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
    }
}

/// SSE implementation
#[cfg(all(
    feature = "simd",
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
))]
pub(crate) mod sse {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::*;
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::*;

    use crate::vector::Vec4;

    #[inline]
    fn load(v: &Vec4) -> __m128 {
        // SAFETY: Vec4 is repr(C, align(16)) holding exactly four f32, so the
        // pointer is valid and 16-byte aligned for a full-width load.
        unsafe { _mm_load_ps((v as *const Vec4).cast::<f32>()) }
    }

    #[inline]
    fn store(r: __m128) -> Vec4 {
        let mut out = Vec4::ZERO;
        // SAFETY: same layout argument as `load`, writing into a local.
        unsafe { _mm_store_ps((&mut out as *mut Vec4).cast::<f32>(), r) };
        out
    }

    #[inline]
    pub fn add(a: Vec4, b: Vec4) -> Vec4 {
        // SAFETY: SSE is statically enabled for this target.
        store(unsafe { _mm_add_ps(load(&a), load(&b)) })
    }

    #[inline]
    pub fn sub(a: Vec4, b: Vec4) -> Vec4 {
        // SAFETY: SSE is statically enabled for this target.
        store(unsafe { _mm_sub_ps(load(&a), load(&b)) })
    }

    #[inline]
    pub fn mul(a: Vec4, b: Vec4) -> Vec4 {
        // SAFETY: SSE is statically enabled for this target.
        store(unsafe { _mm_mul_ps(load(&a), load(&b)) })
    }

    #[inline]
    pub fn div(a: Vec4, b: Vec4) -> Vec4 {
        // SAFETY: SSE is statically enabled for this target.
        store(unsafe { _mm_div_ps(load(&a), load(&b)) })
    }

    #[inline]
    pub fn scale(a: Vec4, s: f32) -> Vec4 {
        // SAFETY: SSE is statically enabled for this target.
        store(unsafe { _mm_mul_ps(load(&a), _mm_set1_ps(s)) })
    }

    #[inline]
    pub fn div_scalar(a: Vec4, s: f32) -> Vec4 {
        // SAFETY: SSE is statically enabled for this target.
        store(unsafe { _mm_div_ps(load(&a), _mm_set1_ps(s)) })
    }

    #[inline]
    pub fn dot(a: Vec4, b: Vec4) -> f32 {
        // Horizontal sum stays sequential; a shuffle/hadd tree would change rounding.
        let p = mul(a, b);
        p.x + p.y + p.z + p.w
    }
}
