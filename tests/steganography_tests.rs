use image::{Rgb, RgbImage, RgbaImage};
use lsb_blue::embedder::extract;
use lsb_blue::{
    available_pixels, fits, hide, hide_strict, required_pixels, reveal, Message, StegoError,
};
use rand::{Rng, RngCore};

/// 一个辅助函数，用于创建一个带有随机像素的 RGBA 网格
fn random_grid(width: u32, height: u32) -> RgbaImage {
    let mut raw_pixels = vec![0u8; (width * height * 4) as usize];
    rand::rng().fill_bytes(&mut raw_pixels);
    RgbaImage::from_raw(width, height, raw_pixels).expect("Buffer size matches dimensions.")
}

/// "Hi" 隐藏到 5x5 网格中，前 24 个像素依次携带 01001000 01101001 00000000
#[test]
fn test_hide_hi_in_five_by_five_grid() {
    let message = Message::from_bytes("Hi");
    let doctored = hide(random_grid(5, 5), &message);

    let expected: Vec<bool> = "010010000110100100000000".chars().map(|c| c == '1').collect();
    assert_eq!(&extract(&doctored)[..24], expected.as_slice());
    assert_eq!(reveal(&doctored), message);
}

#[test]
fn test_round_trip_random_messages() {
    let mut rng = rand::rng();
    for _ in 0..20 {
        let len = rng.random_range(1..=60usize);
        let bytes: Vec<u8> = (0..len).map(|_| rng.random_range(1..=255u8)).collect();
        let message = Message::from_bytes(bytes);

        let grid = random_grid(rng.random_range(25..40), rng.random_range(20..30));
        assert!(fits(&grid, &message));
        assert_eq!(reveal(&hide(grid, &message)), message);
    }
}

/// 空消息不修改任何像素
#[test]
fn test_hide_empty_message_is_identity() {
    let original = random_grid(12, 12);
    let doctored = hide(original.clone(), &Message::default());
    assert_eq!(doctored, original);
}

#[test]
fn test_hide_never_touches_other_channels() {
    let original = random_grid(30, 30);
    let doctored = hide(original.clone(), &Message::from_bytes("channel isolation"));

    for (before, after) in original.pixels().zip(doctored.pixels()) {
        assert_eq!(before[0], after[0]);
        assert_eq!(before[1], after[1]);
        assert_eq!(before[3], after[3]);
        assert_eq!(before[2] >> 1, after[2] >> 1);
    }
}

/// 容量不足时只写入前 N 个比特，不报错；终止符丢失后按尽力而为解码
#[test]
fn test_hide_truncates_silently_on_overflow() {
    let original = RgbImage::from_pixel(4, 4, Rgb([9, 9, 8]));
    let message = Message::from_bytes("Hi");
    assert_eq!(required_pixels(&message), 24);
    assert_eq!(available_pixels(&original), 16);
    assert!(!fits(&original, &message));

    let doctored = hide(original, &message);
    assert_eq!(reveal(&doctored).as_bytes(), b"Hi");
}

/// 3x3 网格只能容纳 "o" 的 8 个比特和 "v" 的最高位
#[test]
fn test_hide_truncation_embeds_leading_bits() {
    let doctored = hide(random_grid(3, 3), &Message::from_bytes("overflow"));

    let after = extract(&doctored);
    assert_eq!(
        after,
        vec![false, true, true, false, true, true, true, true, false]
    );
    assert_eq!(reveal(&doctored).as_bytes(), b"o");
}

#[test]
fn test_hide_strict_rejects_overflow_without_modifying() {
    let grid = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));
    match hide_strict(grid, &Message::from_bytes("Hi")) {
        Err(StegoError::CapacityExceeded {
            required,
            available,
        }) => {
            assert_eq!(required, 24);
            assert_eq!(available, 16);
        }
        other => panic!("Expected a capacity error, got {:?}", other),
    }
}

#[test]
fn test_hide_strict_accepts_exact_fit() -> anyhow::Result<()> {
    let grid = random_grid(4, 6);
    let message = Message::from_bytes("Hi");
    let doctored = hide_strict(grid, &message)?;
    assert_eq!(reveal(&doctored), message);
    Ok(())
}

/// 所有蓝色通道都是偶数时，第一个字节就是终止符
#[test]
fn test_reveal_on_even_blue_grid_is_empty() {
    let grid = RgbImage::from_pixel(10, 10, Rgb([255, 255, 254]));
    assert!(reveal(&grid).is_empty());

    let tiny = RgbImage::from_pixel(2, 3, Rgb([0, 0, 0]));
    assert!(reveal(&tiny).is_empty());
}

/// 没有隐藏消息的图像也能解码，结果长度不超过 width * height / 8
#[test]
fn test_reveal_on_untouched_grid_is_bounded() {
    for _ in 0..10 {
        let grid = random_grid(13, 7);
        let revealed = reveal(&grid);
        assert!(revealed.len() <= 13 * 7 / 8);
    }

    let all_odd = RgbImage::from_pixel(13, 7, Rgb([0, 0, 1]));
    let revealed = reveal(&all_odd);
    assert_eq!(revealed.len(), 13 * 7 / 8);
    assert!(revealed.as_bytes().iter().all(|&b| b == 0xFF));
}

#[test]
fn test_required_pixels_of_empty_message_is_zero() {
    assert_eq!(required_pixels(&Message::default()), 0);
    assert!(fits(&RgbImage::new(0, 0), &Message::default()));
}
