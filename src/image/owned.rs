//! Owning packed-pixel container in row-major layout.
use super::traits::Raster;
use super::view::ImageRef;
use crate::palette::TupleType;
use crate::types::Pixel32;

/// Owning 2-D raster of packed pixel values.
///
/// The buffer always holds exactly `size = width * height` elements. `depth`,
/// `max_val` and `tuple_type` are PNM-style metadata tags carried along for
/// codecs; nothing enforces them against the stored values.
///
/// Cloning always deep-copies into a fresh owning buffer, and moving
/// transfers the buffer without copying — see [`ImageRef`] for the
/// non-owning counterpart.
#[derive(Debug, PartialEq)]
pub struct Image {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Element count (`width * height`), not a byte count
    pub size: usize,
    /// Bytes per pixel, metadata only
    pub depth: usize,
    /// Channel ceiling, metadata only
    pub max_val: u32,
    /// Channel-layout tag, metadata only
    pub tuple_type: TupleType,
    /// Backing storage in row-major order, exactly `size` elements
    pub data: Vec<Pixel32>,
}

impl Image {
    /// Owning image with a zero-filled buffer of `width * height` pixels.
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            size,
            depth: 4,
            max_val: 255,
            tuple_type: TupleType::default(),
            data: vec![0; size],
        }
    }

    /// Owning image bulk-copied from the head of `source`.
    ///
    /// Panics when `source` holds fewer than `width * height` pixels.
    pub fn from_pixels(width: usize, height: usize, source: &[Pixel32]) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            size,
            depth: 4,
            max_val: 255,
            tuple_type: TupleType::default(),
            data: source[..size].to_vec(),
        }
    }

    /// Borrow the whole buffer as a non-owning view.
    pub fn as_ref(&self) -> ImageRef<'_> {
        ImageRef::from_slice(self.width, self.height, &self.data)
    }

    /// Write the pixel at (x, y). Same unchecked `y * width + x` indexing as
    /// [`Raster::get`]; out-of-range coordinates panic.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: Pixel32) {
        let idx = y * self.width + x;
        self.data[idx] = value;
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [Pixel32] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}

impl Raster for Image {
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
        &self.data
    }
    #[inline]
    fn size(&self) -> usize {
        self.size
    }
}

impl Clone for Image {
    /// Deep copy into a fresh owning buffer.
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            size: self.size,
            depth: self.depth,
            max_val: self.max_val,
            tuple_type: self.tuple_type,
            data: self.data.clone(),
        }
    }

    /// Deep copy that reuses the destination buffer in place when the sizes
    /// already match. On a size mismatch the old buffer is released and the
    /// destination reset to empty before reallocating, so a failed
    /// allocation cannot leave a stale buffer behind.
    fn clone_from(&mut self, source: &Self) {
        if self.size != source.size {
            self.data = Vec::new();
            self.size = 0;
            self.data = source.data.clone();
            self.size = source.size;
        } else {
            self.data.copy_from_slice(&source.data);
        }
        self.width = source.width;
        self.height = source.height;
        self.depth = source.depth;
        self.max_val = source.max_val;
        self.tuple_type = source.tuple_type;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> Image {
        let mut image = Image::new(3, 2);
        for (i, px) in image.data.iter_mut().enumerate() {
            *px = (i as Pixel32 + 1) * 10;
        }
        image
    }

    #[test]
    fn new_allocates_zeroed_buffer() {
        let image = Image::new(4, 3);
        assert_eq!(image.size, 12);
        assert_eq!(image.data.len(), 12);
        assert!(image.data.iter().all(|&px| px == 0));
        assert_eq!(image.depth, 4);
        assert_eq!(image.max_val, 255);
        assert_eq!(image.tuple_type, TupleType::Rgba);
    }

    #[test]
    fn from_pixels_copies_exactly_size_elements() {
        let source = [1, 2, 3, 4, 5, 6, 99, 99];
        let image = Image::from_pixels(3, 2, &source);
        assert_eq!(image.data, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn get_set_use_row_major_indexing() {
        let mut image = sample_image();
        assert_eq!(image.get(0, 0), 10);
        assert_eq!(image.get(2, 0), 30);
        assert_eq!(image.get(1, 1), 50);
        image.set(1, 1, 777);
        assert_eq!(image.data[4], 777);
    }

    #[test]
    fn get_or_checks_both_axes() {
        let image = sample_image();
        assert_eq!(image.get_or(-1, 0, 42), 42);
        assert_eq!(image.get_or(0, -1, 42), 42);
        assert_eq!(image.get_or(3, 0, 42), 42);
        assert_eq!(image.get_or(0, 2, 42), 42);
        assert_eq!(image.get_or(2, 1, 42), image.get(2, 1));
    }

    #[test]
    fn clone_is_an_independent_deep_copy() {
        let image = sample_image();
        let mut copy = image.clone();
        assert_ne!(copy.data.as_ptr(), image.data.as_ptr());
        assert_eq!(copy.data, image.data);

        copy.set(0, 0, 999);
        assert_eq!(image.get(0, 0), 10);
    }

    #[test]
    fn clone_from_reuses_buffer_on_matching_size() {
        let image = sample_image();
        let mut dst = Image::new(2, 3); // same element count, different shape
        let before = dst.data.as_ptr();
        dst.clone_from(&image);
        assert_eq!(dst.data.as_ptr(), before);
        assert_eq!(dst.width, 3);
        assert_eq!(dst.height, 2);
        assert_eq!(dst.data, image.data);
    }

    #[test]
    fn clone_from_reallocates_on_size_mismatch() {
        let image = sample_image();
        let mut dst = Image::new(1, 1);
        dst.clone_from(&image);
        assert_eq!(dst.size, 6);
        assert_eq!(dst.data, image.data);
    }

    #[test]
    fn move_transfers_the_buffer_without_copying() {
        let image = sample_image();
        let before = image.data.as_ptr();
        let moved = image;
        assert_eq!(moved.data.as_ptr(), before);
    }
}
