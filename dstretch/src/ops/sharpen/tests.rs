use super::*;

fn flat(value: u8) -> PixelBuffer {
    PixelBuffer::new_filled(3, 3, [value, value, value, 255]).unwrap()
}

fn spike(value: u8) -> PixelBuffer {
    let mut buffer = flat(0);
    buffer.set_pixel(1, 1, [value, value, value, 200]);
    buffer
}

#[test]
fn unsharp_leaves_flat_regions() {
    let out = Sharpen::new(100.0, SharpenAlgorithm::Unsharp).apply(flat(100));
    assert_eq!(out, flat(100));
}

#[test]
fn unsharp_amplifies_deviation_from_cross_blur() {
    // blurred = 100 / 5 = 20; 100 + 80 * 1.0
    let out = Sharpen::new(100.0, SharpenAlgorithm::Unsharp).apply(spike(100));
    assert_eq!(out.pixel(1, 1), [180, 180, 180, 200]);

    // 100 + 80 * 0.25
    let out = Sharpen::new(25.0, SharpenAlgorithm::Unsharp).apply(spike(100));
    assert_eq!(out.pixel(1, 1), [120, 120, 120, 200]);
}

#[test]
fn highpass_uses_five_point_detail() {
    // detail = 5 * 100 - 400 = 100; 100 + 100 * 1.0 * 0.5
    let out = Sharpen::new(100.0, SharpenAlgorithm::Highpass).apply(flat(100));
    assert_eq!(out.pixel(1, 1), [150, 150, 150, 255]);
}

#[test]
fn laplacian_uses_nine_point_detail() {
    // detail = 9 * 100 - 800 = 100; 100 + 100 * 0.5 * 0.2
    let out = Sharpen::new(50.0, SharpenAlgorithm::Laplacian).apply(flat(100));
    assert_eq!(out.pixel(1, 1), [110, 110, 110, 255]);

    // isolated spike: detail = 9 * 50; 50 + 450 * 0.2
    let out = Sharpen::new(100.0, SharpenAlgorithm::Laplacian).apply(spike(50));
    assert_eq!(out.pixel(1, 1), [140, 140, 140, 200]);
}

#[test]
fn output_is_clamped() {
    let out = Sharpen::new(100.0, SharpenAlgorithm::Highpass).apply(spike(250));
    assert_eq!(out.pixel(1, 1), [255, 255, 255, 200]);

    // dark center among bright neighbors goes negative before clamping
    let mut buffer = flat(255);
    buffer.set_pixel(1, 1, [10, 10, 10, 255]);
    let out = Sharpen::new(100.0, SharpenAlgorithm::Unsharp).apply(buffer);
    assert_eq!(out.pixel(1, 1), [0, 0, 0, 255]);
}

#[test]
fn border_ring_is_untouched() {
    let mut buffer = PixelBuffer::new_filled(5, 4, [60, 60, 60, 255]).unwrap();
    buffer.set_pixel(0, 0, [200, 10, 10, 255]);
    buffer.set_pixel(4, 3, [10, 200, 10, 255]);

    let out = Sharpen::new(100.0, SharpenAlgorithm::Laplacian).apply(buffer.clone());
    for y in 0..4u32 {
        for x in 0..5u32 {
            if x == 0 || y == 0 || x == 4 || y == 3 {
                assert_eq!(out.pixel(x, y), buffer.pixel(x, y));
            }
        }
    }
}

#[test]
fn zero_strength_is_noop() {
    let out = Sharpen::new(0.0, SharpenAlgorithm::Highpass).apply(spike(90));
    assert_eq!(out, spike(90));
}
