use crate::types::Pixel32;

/// Read access shared by the owning [`Image`](super::Image) container and the
/// borrowed [`ImageRef`](super::ImageRef) view, so algorithms are generic
/// over either input without per-pixel dispatch.
pub trait Raster {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Backing storage in row-major order; length equals `size()`.
    fn data(&self) -> &[Pixel32];

    /// Element count of the raster (`width * height`).
    #[inline]
    fn size(&self) -> usize {
        self.width() * self.height()
    }

    /// Pixel at (x, y). Indexing is `y * width + x` with no bounds check of
    /// its own; out-of-range coordinates panic on the slice access.
    #[inline]
    fn get(&self, x: usize, y: usize) -> Pixel32 {
        self.data()[y * self.width() + x]
    }

    /// Bounds-checked pixel access returning `default` outside the raster.
    /// Lets local-window algorithms probe neighbors past the edges without
    /// special-casing boundaries.
    #[inline]
    fn get_or(&self, x: isize, y: isize, default: Pixel32) -> Pixel32 {
        if x < 0 || x >= self.width() as isize || y < 0 || y >= self.height() as isize {
            default
        } else {
            self.get(x as usize, y as usize)
        }
    }

    fn row(&self, y: usize) -> &[Pixel32] {
        let start = y * self.width();
        &self.data()[start..start + self.width()]
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { raster: self, y: 0 }
    }
}

pub struct Rows<'a, R: ?Sized + Raster> {
    raster: &'a R,
    y: usize,
}

impl<'a, R: Raster> Iterator for Rows<'a, R> {
    type Item = &'a [Pixel32];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.raster.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.raster.row(y))
    }
}
