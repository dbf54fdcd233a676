/// Largest 8-bit channel value, as a float for normalization.
pub const MAX_INTENSITY: f32 = 255.0;

/// Number of entries in an 8-bit lookup table.
pub const LUT_SIZE: usize = 256;

/// Lower bound applied to the user-facing effect strength.
pub const STRENGTH_MIN: f32 = 0.1;

/// Upper bound applied to the user-facing effect strength.
pub const STRENGTH_MAX: f32 = 1.0;

/// Default effect strength.
pub const DEFAULT_STRENGTH: f32 = 0.5;

/// Default gamma for `adjust_gamma` (identity).
pub const DEFAULT_GAMMA: f32 = 1.0;

/// Dark preset: exposure factor = 1 - strength * this.
/// At full strength the factor bottoms out at 0.2.
pub const DARK_FACTOR_SCALE: f32 = 0.8;

/// Dark preset: blend weight = 1 - strength * this.
pub const DARK_WEIGHT_SCALE: f32 = 0.5;

/// Overexposure preset: exposure factor = 1 + strength * this.
/// At full strength the factor tops out at 2.2.
pub const OVEREXPOSE_FACTOR_SCALE: f32 = 1.2;

/// Overexposure preset: blend weight = 1 + strength * this.
pub const OVEREXPOSE_WEIGHT_SCALE: f32 = 0.5;

/// Log batch progress every this many images (and at completion).
pub const PROGRESS_INTERVAL: usize = 10;

/// Recognized input extensions, matched case-sensitively.
/// Scan results are grouped in this order.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "gif", "tiff"];

/// Minimum element count (h*w*c) to use Rayon parallelism inside a transform.
pub const PARALLEL_ELEMENT_THRESHOLD: usize = 196_608;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f64 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f64 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f64 = 0.114;
