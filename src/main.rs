use binarize::prelude::*;

fn main() {
    // Demo stub: binarizes a synthetic horizontal gradient with Otsu
    let w = 640usize;
    let h = 480usize;
    let mut gray = Image::new(w, h);
    for y in 0..h {
        for x in 0..w {
            gray.set(x, y, (x * 255 / (w - 1)) as u32);
        }
    }

    let binary = Otsu::to_binary_image(gray.as_ref(), &Parameters::new());
    let black = binary
        .data
        .iter()
        .filter(|&&px| px == binarize::palette::BLACK)
        .count();
    println!(
        "binarized {}x{}: {black} black / {} white",
        binary.width,
        binary.height,
        binary.size - black
    );
}
