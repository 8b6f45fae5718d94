//! 图像导入到画布渲染的全链路测试
//!
//! 覆盖"图像字节 → 画作编码 → CanvasState → 像素缓冲"的完整路径。

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use painting_codec::convert::{image_to_code, load_image_from_memory};
use painting_codec::{is_likely_painting_code, CanvasState, ConvertConfig};

fn png_bytes(image: &RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn test_import_png_and_render_canvas() {
    let source = RgbaImage::from_fn(8, 8, |x, _| {
        if x < 4 {
            image::Rgba([255, 0, 0, 255])
        } else {
            image::Rgba([0, 0, 255, 255])
        }
    });

    let config = ConvertConfig::default();
    let loaded = load_image_from_memory(&png_bytes(&source), &config).unwrap();
    let code = image_to_code(&loaded, 8, 8, &config).unwrap();

    assert!(is_likely_painting_code(&code));

    let state = CanvasState {
        painting_code: code,
        height: 8,
        width: 8,
        size_multiplier: 2,
        artist: "importer".to_string(),
        signature: String::new(),
    };
    state.validate().unwrap();

    let rendered = state.render();
    assert_eq!(rendered.dimensions(), (16, 16));
    assert_eq!(rendered.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(rendered.get_pixel(15, 0).0, [0, 0, 255, 255]);
}

#[test]
fn test_imported_code_survives_json_round_trip() {
    let source = RgbaImage::from_pixel(2, 2, image::Rgba([10, 200, 30, 255]));
    let config = ConvertConfig::default();
    let loaded = load_image_from_memory(&png_bytes(&source), &config).unwrap();

    let state = CanvasState {
        painting_code: image_to_code(&loaded, 2, 2, &config).unwrap(),
        height: 2,
        width: 2,
        size_multiplier: 1,
        ..CanvasState::default()
    };

    let restored = CanvasState::from_json(&state.to_json().unwrap()).unwrap();
    assert_eq!(restored, state);
    assert_eq!(restored.render().as_raw(), state.render().as_raw());
}
