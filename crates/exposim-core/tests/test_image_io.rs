mod common;

use exposim_core::buffer::PixelBuffer;
use exposim_core::error::ExposimError;
use exposim_core::io::image_io::{load_image, save_image, ImageCodec, ImageRsCodec};

use common::{make_gradient_buffer, write_test_image};

#[test]
fn test_png_roundtrip_is_lossless() {
    let img = make_gradient_buffer(6, 9);
    let dir = tempfile::tempdir().unwrap();
    let path = write_test_image(dir.path(), "grad.png", &img);

    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded, img);
}

#[test]
fn test_grayscale_decodes_to_three_channels() {
    let raw: Vec<u8> = (0..20).map(|v| v * 10).collect();
    let gray = PixelBuffer::from_raw(4, 5, 1, raw).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");
    save_image(&gray, &path).unwrap();

    let loaded = ImageRsCodec.decode(&path).unwrap();
    assert_eq!(loaded.shape(), (4, 5, 3));
    assert_eq!(loaded.data[[1, 2, 0]], 70);
    assert_eq!(loaded.data[[1, 2, 2]], 70);
}

#[test]
fn test_format_sniffed_from_content() {
    // PNG bytes behind a .jpg name still decode.
    let img = make_gradient_buffer(3, 3);
    let dir = tempfile::tempdir().unwrap();
    let png = write_test_image(dir.path(), "real.png", &img);
    let disguised = dir.path().join("disguised.jpg");
    std::fs::copy(&png, &disguised).unwrap();

    assert_eq!(load_image(&disguised).unwrap(), img);
}

#[test]
fn test_encode_jpeg() {
    let img = make_gradient_buffer(16, 16);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.jpg");
    ImageRsCodec.encode(&img, &path).unwrap();

    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.shape(), img.shape());
}

#[test]
fn test_unsupported_channel_count() {
    let two = PixelBuffer::from_elem(2, 2, 2, 0);
    let dir = tempfile::tempdir().unwrap();
    let err = save_image(&two, &dir.path().join("x.png")).unwrap_err();
    assert!(matches!(err, ExposimError::UnsupportedChannelCount(2)));
}

#[test]
fn test_garbage_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("junk.png");
    std::fs::write(&path, b"\x00\x01\x02 not an image").unwrap();
    assert!(load_image(&path).is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_image(&dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, ExposimError::Io(_)));
}
