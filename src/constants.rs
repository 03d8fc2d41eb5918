/// 每个字符在比特流中占用的比特数。
/// 字符只保留低 8 位，按最高位优先的顺序写出。
pub const BITS_PER_CHAR: usize = 8;

/// 消息结束标记的长度 (比特)。
/// 编码时在消息之后追加 8 个 0 比特，解码时遇到连续 8 个 0 比特即停止扫描。
pub const TERMINATOR_BITS: usize = 8;

/// 每个像素可承载的比特数：R、G、B 各一位，Alpha 通道不参与隐写。
pub const BITS_PER_PIXEL: usize = 3;

/// 16 位颜色模型下单个通道的最大值。
pub const CHANNEL_MAX: u16 = 0xFFFF;

/// 8 位通道值扩展为 16 位时使用的乘数 (0xAB -> 0xABAB)。
pub const CHANNEL_WIDEN: u16 = 0x0101;

/// 未指定消息时默认隐藏的文本。
pub const DEFAULT_MESSAGE: &str = "foo";

/// 默认读取的载体图像路径。
pub const DEFAULT_IMAGE_PATH: &str = "./images/outimage.bmp";

/// 默认写出的隐写结果图像路径。
pub const DEFAULT_OUTPUT_PATH: &str = "./images/outimage.bmp";
