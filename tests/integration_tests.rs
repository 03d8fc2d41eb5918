use image::{ImageBuffer, Rgba, RgbaImage};
use parity_hide::{
    cli::{HideArgs, RecoverArgs},
    handler::{handle_hide, handle_recover},
};
use rand::RngCore;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// 一个辅助函数，用于创建一个带有随机像素的测试图像
fn create_test_image(path: &Path, width: u32, height: u32) {
    let mut img_buf: RgbaImage = ImageBuffer::new(width, height);
    let mut raw_pixels = vec![0u8; (width * height * 4) as usize];
    rand::rng().fill_bytes(&mut raw_pixels);

    img_buf
        .pixels_mut()
        .zip(raw_pixels.chunks_exact(4))
        .for_each(|(pixel, chunk)| {
            *pixel = Rgba([chunk[0], chunk[1], chunk[2], 255]);
        });

    img_buf.save(path).expect("Failed to create test image.");
}

/// 验证从隐藏到恢复的完整流程 (BMP)
#[test]
fn test_handle_hide_and_recover_bmp() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let original_image_path = dir.path().join("original.bmp");
    let hidden_image_path = dir.path().join("hidden.bmp");
    let recovered_text_path = dir.path().join("recovered.txt");

    create_test_image(&original_image_path, 40, 30);
    // 最后一个字符以 1 比特结尾，结束标记完整出现
    let original_text = "This is a test message for the handler!";

    // 2. 测试 handle_hide
    let hide_args = HideArgs {
        image: original_image_path.clone(),
        message: original_text.to_string(),
        dest: hidden_image_path.clone(),
    };
    handle_hide(hide_args)?;
    assert!(
        hidden_image_path.exists(),
        "Hidden image should be created."
    );

    // 3. 测试 handle_recover
    let recover_args = RecoverArgs {
        image: hidden_image_path.clone(),
        text: Some(recovered_text_path.clone()),
    };
    let recovered = handle_recover(recover_args)?;

    // 4. 验证结果：恢复的文本带有结束标记对应的空字符
    let expected = format!("{original_text}\0");
    assert_eq!(recovered, expected);
    assert_eq!(fs::read_to_string(&recovered_text_path)?, expected);

    Ok(())
}

/// 验证 PNG 输出同样可以恢复，且只有载荷覆盖的像素发生变化
#[test]
fn test_handle_hide_png_touches_only_payload_pixels() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let original_image_path = dir.path().join("original.png");
    let hidden_image_path = dir.path().join("nested").join("hidden.png");

    create_test_image(&original_image_path, 16, 16);
    let message = "ok";

    handle_hide(HideArgs {
        image: original_image_path.clone(),
        message: message.to_string(),
        dest: hidden_image_path.clone(),
    })?;

    let before = image::open(&original_image_path)?.to_rgba8();
    let after = image::open(&hidden_image_path)?.to_rgba8();

    // "ok" + 结束标记共 24 比特，占用前 8 个像素
    let touched = 24_usize.div_ceil(3);
    for (i, (a, b)) in before.pixels().zip(after.pixels()).enumerate() {
        if i >= touched {
            assert_eq!(a, b, "pixel {i} outside the payload must be unchanged");
        } else {
            assert_eq!(a.0[3], b.0[3], "alpha of pixel {i} must be preserved");
        }
    }

    let recovered = handle_recover(RecoverArgs {
        image: hidden_image_path,
        text: None,
    })?;
    assert_eq!(recovered, "ok\0");

    Ok(())
}

/// 验证空间不足时的错误处理，且不会写出目标文件
#[test]
fn test_handle_hide_not_enough_space() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let image_path = dir.path().join("small.png");
    let dest_path = dir.path().join("dest.png");

    // 创建一个非常小的图片：4x4 像素只能容纳 48 比特
    create_test_image(&image_path, 4, 4);
    let large_text = "a".repeat(50);

    // 2. 执行并断言错误
    let hide_args = HideArgs {
        image: image_path,
        message: large_text,
        dest: dest_path.clone(),
    };
    let result = handle_hide(hide_args);

    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.to_string().contains("Not enough space"));
        assert!(format!("{e:#}").contains("required 408 bits, available 48 bits"));
    }
    assert!(!dest_path.exists());

    Ok(())
}

/// 验证没有结束标记的图像恢复出空字符串
#[test]
fn test_handle_recover_without_terminator() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let image_path = dir.path().join("odd.png");

    // 所有通道均为奇数，永远不会出现连续 8 个 0 比特
    RgbaImage::from_pixel(8, 8, Rgba([1, 3, 5, 255])).save(&image_path)?;

    let recovered = handle_recover(RecoverArgs {
        image: image_path,
        text: None,
    })?;
    assert_eq!(recovered, "");

    Ok(())
}

/// 验证无法读取的图像会返回错误
#[test]
fn test_handle_recover_missing_image() {
    let dir = tempdir().expect("Failed to create temp dir.");
    let result = handle_recover(RecoverArgs {
        image: dir.path().join("missing.bmp"),
        text: None,
    });

    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.to_string().contains("Unable to read image file"));
    }
}

/// 验证目标目录无法创建时返回错误且不写出任何文件
#[test]
fn test_handle_hide_dest_under_regular_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let image_path = dir.path().join("image.png");
    let blocker = dir.path().join("file");
    let dest_path = blocker.join("out.bmp");

    create_test_image(&image_path, 8, 8);
    fs::write(&blocker, "not a directory")?;

    let result = handle_hide(HideArgs {
        image: image_path,
        message: "hi".to_string(),
        dest: dest_path.clone(),
    });

    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.to_string().contains("Unable to create output directory"));
    }
    assert!(!dest_path.exists());
    assert_eq!(fs::read_to_string(&blocker)?, "not a directory");

    Ok(())
}

/// 验证无法编码的目标格式返回错误且不写出任何文件
#[test]
fn test_handle_hide_unsupported_dest_format() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let image_path = dir.path().join("image.png");
    let dest_path = dir.path().join("out.gif");

    create_test_image(&image_path, 8, 8);

    let result = handle_hide(HideArgs {
        image: image_path,
        message: "hi".to_string(),
        dest: dest_path.clone(),
    });

    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.to_string().contains("Unable to write to target image file"));
        assert!(format!("{e:#}").contains("Unable to save image"));
    }
    assert!(!dest_path.exists());

    Ok(())
}
