//! Compositing over image buffers
//!
//! Every operation here either validates up front and then writes, or
//! builds a fresh image. Geometry is clipped, never rejected: source
//! pixels outside the source read as 0, destination pixels outside the
//! destination are skipped.

use core::ops::{Add, Div, Mul, Sub};

use glimmer_hal::MAX_BRIGHTNESS;

use super::Image;
use crate::error::{Error, RangeError, Result};

/// Copy a `w × h` region of `src` at (`sx`, `sy`) into `dst` at (`dx`, `dy`)
///
/// This is the unchecked primitive: it ignores the destination's
/// read-only flag and treats a non-positive size as an empty region. Use
/// [`Image::blit_from`] for the checked form.
#[allow(clippy::too_many_arguments)]
pub fn blit(src: &Image, dst: &mut Image, sx: i32, sy: i32, w: i32, h: i32, dx: i32, dy: i32) {
    // Widened so that no offset sum can overflow; only the part of the
    // region landing inside dst is ever visited
    let (sx, sy, w, h, dx, dy) = (
        sx as i64, sy as i64, w as i64, h as i64, dx as i64, dy as i64,
    );
    let x0 = 0.max(-dx);
    let y0 = 0.max(-dy);
    let x1 = w.min(dst.width() as i64 - dx);
    let y1 = h.min(dst.height() as i64 - dy);
    for y in y0..y1 {
        for x in x0..x1 {
            let v = src.pixel_or_blank(narrow(sx + x), narrow(sy + y));
            dst.put_clipped(narrow(dx + x), narrow(dy + y), v);
        }
    }
}

/// Coordinate back to `i32`; anything beyond lies outside every image
fn narrow(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl Image {
    /// Checked blit of a region of `src` into `self`
    ///
    /// Fails with [`Error::Immutable`] if `self` is read-only, then with
    /// [`RangeError::Size`] if `w` or `h` is negative.
    #[allow(clippy::too_many_arguments)]
    pub fn blit_from(
        &mut self,
        src: &Image,
        sx: i32,
        sy: i32,
        w: i32,
        h: i32,
        dx: i32,
        dy: i32,
    ) -> Result<()> {
        self.check_mutable()?;
        if w < 0 || h < 0 {
            return Err(Error::OutOfRange(RangeError::Size));
        }
        blit(src, self, sx, sy, w, h, dx, dy);
        Ok(())
    }

    /// New same-size image whose pixel (x, y) is this image's (x + dx, y + dy)
    ///
    /// Positive `dx` moves content left, positive `dy` moves it up.
    pub fn shift(&self, dx: i32, dy: i32) -> Image {
        let mut out = self.copy();
        out.pixels_mut().fill(0);
        blit(
            self,
            &mut out,
            dx,
            dy,
            self.width() as i32,
            self.height() as i32,
            0,
            0,
        );
        out
    }

    /// Shift content `n` columns to the left
    pub fn shift_left(&self, n: i32) -> Image {
        self.shift(n, 0)
    }

    /// Shift content `n` columns to the right
    pub fn shift_right(&self, n: i32) -> Image {
        self.shift(n.saturating_neg(), 0)
    }

    /// Shift content `n` rows up
    pub fn shift_up(&self, n: i32) -> Image {
        self.shift(0, n)
    }

    /// Shift content `n` rows down
    pub fn shift_down(&self, n: i32) -> Image {
        self.shift(0, n.saturating_neg())
    }

    /// New `w × h` image holding the region at (`x`, `y`)
    ///
    /// Negative sizes clamp to 0. Fails with [`Error::Capacity`] if the
    /// region does not fit the pixel store.
    pub fn crop(&self, x: i32, y: i32, w: i32, h: i32) -> Result<Image> {
        let w = w.clamp(0, u8::MAX as i32);
        let h = h.clamp(0, u8::MAX as i32);
        let mut out = Image::new(w as u8, h as u8)?;
        blit(self, &mut out, x, y, w, h, 0, 0);
        Ok(out)
    }

    /// New image with every pixel scaled by `factor`, rounded to nearest
    ///
    /// Results clamp to `MAX_BRIGHTNESS`. A negative or non-finite factor
    /// fails with [`RangeError::ScaleFactor`].
    pub fn dim(&self, factor: f32) -> Result<Image> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(Error::OutOfRange(RangeError::ScaleFactor));
        }
        let mut out = self.copy();
        for p in out.pixels_mut() {
            let scaled = (*p as f32 * factor + 0.5) as u32;
            *p = scaled.min(MAX_BRIGHTNESS as u32) as u8;
        }
        Ok(out)
    }
}

/// Per-pixel sum (clamped to `MAX_BRIGHTNESS`) or difference (clamped to 0)
pub fn combine(a: &Image, b: &Image, add: bool) -> Result<Image> {
    if a.width() != b.width() || a.height() != b.height() {
        return Err(Error::SizeMismatch);
    }
    let mut out = a.copy();
    for (p, &q) in out.pixels_mut().iter_mut().zip(b.pixels()) {
        *p = if add {
            (*p + q).min(MAX_BRIGHTNESS)
        } else {
            p.saturating_sub(q)
        };
    }
    Ok(out)
}

impl Add for &Image {
    type Output = Result<Image>;

    fn add(self, rhs: &Image) -> Self::Output {
        combine(self, rhs, true)
    }
}

impl Sub for &Image {
    type Output = Result<Image>;

    fn sub(self, rhs: &Image) -> Self::Output {
        combine(self, rhs, false)
    }
}

impl Mul<f32> for &Image {
    type Output = Result<Image>;

    fn mul(self, factor: f32) -> Self::Output {
        self.dim(factor)
    }
}

impl Div<f32> for &Image {
    type Output = Result<Image>;

    fn div(self, divisor: f32) -> Self::Output {
        if divisor == 0.0 {
            return Err(Error::OutOfRange(RangeError::ScaleFactor));
        }
        self.dim(1.0 / divisor)
    }
}
