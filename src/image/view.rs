//! Borrowed, non-owning view over pixel memory owned elsewhere.
use super::owned::Image;
use super::traits::Raster;
use crate::types::Pixel32;

/// Non-owning view over `width * height` packed pixels.
///
/// Wraps caller-supplied memory (or another image's buffer) directly: no
/// allocation, no copy, and dropping a view never frees anything. The
/// lifetime ties the view to its owner, so a dangling view is rejected at
/// compile time. Turning a view into an independent image always goes
/// through [`ImageRef::to_image`], which deep-copies — a copy of a view
/// never inherits its non-owning status.
#[derive(Clone, Copy, Debug)]
pub struct ImageRef<'a> {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Element count (`width * height`)
    pub size: usize,
    /// Aliased storage in row-major order, exactly `size` elements
    pub data: &'a [Pixel32],
}

impl<'a> ImageRef<'a> {
    /// View over the head of `data`.
    ///
    /// Panics when `data` holds fewer than `width * height` pixels; excess
    /// elements are ignored. The caller keeps sole responsibility for not
    /// mutating the owner while the view is alive — the borrow checker
    /// enforces exactly that.
    pub fn from_slice(width: usize, height: usize, data: &'a [Pixel32]) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            size,
            data: &data[..size],
        }
    }

    /// Deep copy into a fresh owning [`Image`].
    pub fn to_image(&self) -> Image {
        Image::from_pixels(self.width, self.height, self.data)
    }
}

impl Raster for ImageRef<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn data(&self) -> &[Pixel32] {
        self.data
    }
    #[inline]
    fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_aliases_the_owner_buffer() {
        let mut image = Image::from_pixels(3, 2, &[1, 2, 3, 4, 5, 6]);
        image.set(1, 1, 0xF0F0F0);

        let view = image.as_ref();
        assert_eq!(view.data.as_ptr(), image.data.as_ptr());
        assert_eq!(view.width, image.width);
        assert_eq!(view.height, image.height);
        assert_eq!(view.get(1, 1), 0xF0F0F0);
    }

    #[test]
    fn view_over_caller_memory_takes_exactly_size_elements() {
        let buffer = [7u32, 8, 9, 10, 11];
        let view = ImageRef::from_slice(2, 2, &buffer);
        assert_eq!(view.size, 4);
        assert_eq!(view.data, &[7, 8, 9, 10]);
        assert_eq!(view.data.as_ptr(), buffer.as_ptr());
    }

    #[test]
    fn copying_a_view_produces_an_independent_owner() {
        let buffer = [1u32, 2, 3, 4];
        let view = ImageRef::from_slice(2, 2, &buffer);

        let owned = view.to_image();
        assert_ne!(owned.data.as_ptr(), buffer.as_ptr());
        assert_eq!(owned.data, buffer);
        assert_eq!(owned.width, 2);
        assert_eq!(owned.height, 2);
    }

    #[test]
    fn get_or_probes_past_the_edges() {
        let buffer = [1u32, 2, 3, 4];
        let view = ImageRef::from_slice(2, 2, &buffer);
        assert_eq!(view.get_or(-1, -1, 255), 255);
        assert_eq!(view.get_or(2, 0, 255), 255);
        assert_eq!(view.get_or(1, 1, 255), 4);
    }
}
