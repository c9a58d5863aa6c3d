/// Generates an all-background (zero) grayscale buffer.
pub fn blank_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![0u8; width * height]
}

/// Fills an axis-aligned rectangle with a constant value.
pub fn fill_rect(
    img: &mut [u8],
    width: usize,
    x0: usize,
    y0: usize,
    rect_w: usize,
    rect_h: usize,
    value: u8,
) {
    for y in y0..y0 + rect_h {
        for x in x0..x0 + rect_w {
            img[y * width + x] = value;
        }
    }
}

/// Reference blob statistics computed directly from a pixel buffer,
/// independent of the scan-line implementation. Only meaningful for images
/// whose foreground forms a single connected blob.
pub fn reference_stats(img: &[u8], width: usize) -> (f64, f64, f64, f64, f64) {
    let mut x_sum = 0.0;
    let mut y_sum = 0.0;
    let mut x2_sum = 0.0;
    let mut y2_sum = 0.0;
    let mut weight = 0.0;
    for (i, &v) in img.iter().enumerate() {
        if v == 0 {
            continue;
        }
        let vf = v as f64;
        let x = (i % width) as f64;
        let y = (i / width) as f64;
        x_sum += x * vf;
        y_sum += y * vf;
        x2_sum += x * x * vf;
        y2_sum += y * y * vf;
        weight += vf;
    }
    let mx = x_sum / weight;
    let my = y_sum / weight;
    let dx = (x2_sum / weight - mx * mx).sqrt();
    let dy = (y2_sum / weight - my * my).sqrt();
    (mx, my, dx, dy, weight)
}
