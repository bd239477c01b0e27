use binarize::Image;

/// Generates a document-like raster: dark glyph blocks on a bright page.
pub fn glyph_page(width: usize, height: usize, cell: usize) -> Image {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut image = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let sum = cx + cy;
            let val = if sum & 1 == 0 { 32u32 } else { 220u32 };
            image.set(x, y, val);
        }
    }
    image
}

/// Generates a horizontal gradient from 0 to 255.
pub fn gradient(width: usize, height: usize) -> Image {
    assert!(width > 1, "gradient needs at least two columns");

    let mut image = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            image.set(x, y, (x * 255 / (width - 1)) as u32);
        }
    }
    image
}
