/// Icon-wide constants: palette, default sizes and the size thresholds that
/// switch the glyph between its small and regular variants

pub mod palette {
    use image::Rgba;

    /// Brand purple used for the badge and the accent lines (#8B5CF6)
    pub const BRAND_PURPLE: Rgba<u8> = Rgba([139, 92, 246, 255]);

    /// Document body and export arrow
    pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
}

pub mod sizes {
    /// Sizes written on every run, in order
    pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

    /// Smallest size the config accepts
    pub const MIN_SIZE: u32 = 16;

    /// Largest size the config accepts
    pub const MAX_SIZE: u32 = 1024;

    /// At or above this size the icon gets three 2px accent lines and a
    /// proportional arrow shaft; below it, two 1px lines and a fixed shaft
    pub const DETAIL_THRESHOLD: u32 = 48;
}

pub mod output {
    /// Directory name created next to the crate manifest
    pub const DEFAULT_DIR_NAME: &str = "icons";

    pub const FILE_PREFIX: &str = "icon";
    pub const FILE_EXTENSION: &str = "png";
}
