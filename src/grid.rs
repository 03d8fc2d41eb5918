//! # 像素网格模块
//!
//! 将图像抽象为可按 (x, y) 读取的像素网格。
//! 只读网格 ([`PixelGrid`]) 用于解码，可写网格 ([`PixelGridMut`]) 用于编码，
//! 因此不可修改的载体在编译期就会被拒绝，而不是在运行时静默跳过。

use crate::constants::{BITS_PER_PIXEL, CHANNEL_WIDEN};
use crate::error::StegoError;
use image::error::{ImageError, ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};
use log::debug;
use std::path::Path;

/// 可读取的像素网格。
///
/// `get` 返回的 RGBA 通道值处于 16 位颜色模型中 (8 位值 `v` 扩展为 `v * 0x101`)。
pub trait PixelGrid {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn get(&self, x: u32, y: u32) -> [u16; 4];
}

/// 支持逐像素写入的网格。写入时每个通道为 8 位。
pub trait PixelGridMut: PixelGrid {
    fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]);
}

fn widen(Rgba(channels): Rgba<u8>) -> [u16; 4] {
    channels.map(|c| u16::from(c) * CHANNEL_WIDEN)
}

impl PixelGrid for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn get(&self, x: u32, y: u32) -> [u16; 4] {
        widen(self.get_pixel(x, y))
    }
}

impl PixelGrid for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn get(&self, x: u32, y: u32) -> [u16; 4] {
        widen(*self.get_pixel(x, y))
    }
}

impl PixelGridMut for RgbaImage {
    fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        self.put_pixel(x, y, Rgba(rgba));
    }
}

/// 网格可承载的比特总数：`width * height * 3`。
pub fn capacity<G: PixelGrid + ?Sized>(grid: &G) -> usize {
    grid.width() as usize * grid.height() as usize * BITS_PER_PIXEL
}

/// 打开并解码载体图像，格式由文件内容推断。
pub fn load_carrier(path: &Path) -> Result<DynamicImage, StegoError> {
    let image = image::open(path).map_err(|source| StegoError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        GenericImageView::width(&image),
        GenericImageView::height(&image),
        image.color()
    );
    Ok(image)
}

/// 将隐写后的图像写入目标路径。
///
/// 输出格式由目标扩展名决定，无法识别时使用 BMP。
/// 未启用编码器的格式在创建文件之前即被拒绝。
pub fn save_carrier(image: &RgbaImage, path: &Path) -> Result<(), StegoError> {
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Bmp);
    if !format.writing_enabled() {
        let hint = ImageFormatHint::Exact(format);
        return Err(StegoError::ImageSave {
            path: path.to_path_buf(),
            source: ImageError::Unsupported(UnsupportedError::from_format_and_kind(
                hint.clone(),
                UnsupportedErrorKind::Format(hint),
            )),
        });
    }
    debug!("Writing {} as {:?}", path.display(), format);
    image
        .save_with_format(path, format)
        .map_err(|source| StegoError::ImageSave {
            path: path.to_path_buf(),
            source,
        })
}
