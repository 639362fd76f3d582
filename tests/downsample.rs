use dominant_colors_wasm::{DominantColor, DownsampleError, Downsampler, downsample, pack_argb};

fn opaque(r: u8, g: u8, b: u8) -> u32 {
    pack_argb(r, g, b, 255)
}

#[test]
fn solid_red_square() {
    let data = [opaque(255, 0, 0); 4];
    let top = downsample(&data, 2, 2).unwrap();

    assert_eq!(top[0].to_array(), [1.0, 0.0, 0.0, 1.0]);
    for c in &top[1..] {
        assert_eq!(c.to_array(), [0.0, 0.0, 0.0, 0.0]);
    }
}

#[test]
fn single_transparent_pixel_is_not_an_error() {
    let top = downsample(&[pack_argb(200, 100, 50, 0)], 1, 1).unwrap();
    assert!(top.iter().all(|c| *c == DominantColor::default()));
}

#[test]
fn all_translucent_pixels_are_filtered() {
    let data: Vec<u32> = (0..64).map(|i| pack_argb(i as u8 * 3, 90, 200, 127)).collect();
    let top = downsample(&data, 8, 8).unwrap();
    assert!(top.iter().all(|c| c.weight == 0.0 && c.to_hex() == "000000"));
}

#[test]
fn weights_never_exceed_one() {
    // six hues spread over distinct buckets: top four cover 4/6 of the pixels
    let hues = [
        opaque(255, 0, 0),
        opaque(255, 255, 0),
        opaque(0, 255, 0),
        opaque(0, 255, 255),
        opaque(0, 0, 255),
        opaque(255, 0, 255),
    ];
    let top = downsample(&hues, 2, 3).unwrap();
    let sum: f64 = top.iter().map(|c| c.weight).sum();
    assert!((sum - 4.0 / 6.0).abs() < 1e-12);
}

#[test]
fn more_populous_bucket_comes_first() {
    let mut data = vec![opaque(0, 0, 255); 5];
    data.extend(std::iter::repeat_n(opaque(0, 255, 0), 10));
    let top = downsample(&data, 3, 5).unwrap();

    assert_eq!(top[0].to_hex(), "00FF00");
    assert!((top[0].weight - 10.0 / 15.0).abs() < 1e-12);
    assert_eq!(top[1].to_hex(), "0000FF");
    assert!((top[1].weight - 5.0 / 15.0).abs() < 1e-12);
}

#[test]
fn grays_and_black_share_the_red_bucket() {
    // achromatic pixels land in bucket 0 with red
    let data = [opaque(0, 0, 0), opaque(128, 128, 128), opaque(255, 0, 0), opaque(0, 0, 255)];
    let top = downsample(&data, 2, 2).unwrap();
    assert!((top[0].weight - 0.75).abs() < 1e-12);
    assert!((top[1].weight - 0.25).abs() < 1e-12);
    assert_eq!(top[1].to_hex(), "0000FF");
}

#[test]
fn bucket_color_is_the_mean_hsv() {
    let data = [opaque(255, 0, 0), opaque(128, 0, 0)];
    let top = downsample(&data, 1, 2).unwrap();
    let expected_v = (1.0 + 128.0 / 255.0) / 2.0;
    assert!((top[0].r() - expected_v).abs() < 1e-12);
    assert_eq!(top[0].g(), 0.0);
    assert_eq!(top[0].b(), 0.0);
}

#[test]
fn output_is_deterministic() {
    let data: Vec<u32> = (0..400u32)
        .map(|i| opaque((i * 7 % 256) as u8, (i * 13 % 256) as u8, (i * 29 % 256) as u8))
        .collect();
    let a = downsample(&data, 20, 20).unwrap();
    let b = downsample(&data, 20, 20).unwrap();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.to_array().map(f64::to_bits), y.to_array().map(f64::to_bits));
    }

    let mut ds = Downsampler::new();
    ds.downsample(&[opaque(0, 255, 0); 4], 2, 2).unwrap();
    assert_eq!(ds.downsample(&data, 20, 20).unwrap(), a);
}

#[test]
fn invalid_input_is_rejected_up_front() {
    assert!(matches!(
        downsample(&[], 0, 0),
        Err(DownsampleError::InvalidDimensions { .. })
    ));
    assert_eq!(
        downsample(&[opaque(1, 2, 3); 3], 2, 2),
        Err(DownsampleError::BufferTooShort { expected: 4, actual: 3 })
    );
}
