use std::{
    fs::File,
    io::{self, BufRead, BufReader, Seek},
    path::Path,
};

use png::{BitDepth, ColorType, Decoder, Transformations};
use sdl2::{
    pixels::{Color, PixelFormatEnum},
    rect::{Point, Rect},
    render::{BlendMode, Canvas, RenderTarget, Texture, TextureCreator},
    surface::Surface,
};

use crate::text::FontFace;

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    PngDecodingError(png::DecodingError),
    Sdl(String),
    Font(String),
    UnsupportedImage(String),
    EmptyImage,
}

impl From<io::Error> for LoadError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<png::DecodingError> for LoadError {
    fn from(value: png::DecodingError) -> Self {
        Self::PngDecodingError(value)
    }
}

impl From<String> for LoadError {
    fn from(value: String) -> Self {
        Self::Sdl(value)
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{}", err),
            Self::PngDecodingError(err) => write!(f, "{}", err),
            Self::Sdl(err) => write!(f, "SDL error: {}", err),
            Self::Font(err) => write!(f, "font error: {}", err),
            Self::UnsupportedImage(what) => write!(f, "unsupported image: {}", what),
            Self::EmptyImage => write!(f, "image has no pixels"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Tightly packed 8-bit RGBA pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RgbaImage {
    pub const BYTES_PER_PIXEL: usize = 4;

    pub fn pitch(&self) -> usize {
        self.width as usize * Self::BYTES_PER_PIXEL
    }

    /// Copies the pixels into an SDL-owned surface.
    pub fn to_surface(&self) -> Result<Surface<'static>, LoadError> {
        if self.width == 0 || self.height == 0 {
            return Err(LoadError::EmptyImage);
        }

        let mut surface = Surface::new(self.width, self.height, PixelFormatEnum::RGBA32)?;
        let row_len = self.pitch();
        let surface_pitch = surface.pitch() as usize;

        surface.with_lock_mut(|pixels| {
            for (row, source) in self.data.chunks_exact(row_len).enumerate() {
                let start = row * surface_pitch;
                pixels[start..start + row_len].copy_from_slice(source);
            }
        });

        Ok(surface)
    }
}

pub fn decode_png<R: BufRead + Seek>(source: R) -> Result<RgbaImage, LoadError> {
    let mut decoder = Decoder::new(source);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder.read_info()?;

    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| LoadError::UnsupportedImage(String::from("image too large")))?;
    let mut buf = vec![0; buffer_size];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    Ok(RgbaImage {
        width: info.width,
        height: info.height,
        data: expand_to_rgba(info.color_type, info.bit_depth, &buf)?,
    })
}

fn expand_to_rgba(
    color_type: ColorType,
    bit_depth: BitDepth,
    samples: &[u8],
) -> Result<Vec<u8>, LoadError> {
    let bytes_per_sample = match bit_depth {
        BitDepth::Eight => 1,
        // Big-endian samples, so the high byte comes first.
        BitDepth::Sixteen => 2,
        other => {
            return Err(LoadError::UnsupportedImage(format!(
                "{:?} bit samples",
                other
            )))
        }
    };
    let channels = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(LoadError::UnsupportedImage(String::from(
                "unexpanded palette",
            )))
        }
    };

    let pixels = samples.chunks_exact(channels * bytes_per_sample);
    let mut rgba = Vec::with_capacity(pixels.len() * RgbaImage::BYTES_PER_PIXEL);
    for pixel in pixels {
        let sample = |index: usize| pixel[index * bytes_per_sample];
        let expanded = match channels {
            1 => [sample(0), sample(0), sample(0), 0xFF],
            2 => [sample(0), sample(0), sample(0), sample(1)],
            3 => [sample(0), sample(1), sample(2), 0xFF],
            _ => [sample(0), sample(1), sample(2), sample(3)],
        };
        rgba.extend_from_slice(&expanded);
    }

    Ok(rgba)
}

/// Loads a BMP or PNG file, picked by extension.
pub fn load_surface(path: &Path) -> Result<Surface<'static>, LoadError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "bmp" => Ok(Surface::load_bmp(path)?),
        "png" => {
            let image = decode_png(BufReader::new(File::open(path)?))?;
            image.to_surface()
        }
        _ => Err(LoadError::UnsupportedImage(format!("{}", path.display()))),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Flip {
    pub const NONE: Flip = Flip {
        horizontal: false,
        vertical: false,
    };
    pub const HORIZONTAL: Flip = Flip {
        horizontal: true,
        vertical: false,
    };
    pub const VERTICAL: Flip = Flip {
        horizontal: false,
        vertical: true,
    };
}

/// A renderer texture together with its pixel size.
///
/// The size is zero whenever no texture is loaded. Every load frees the
/// previous texture first.
pub struct LTexture<'a> {
    texture: Option<Texture<'a>>,
    width: u32,
    height: u32,
}

impl<'a> Default for LTexture<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> LTexture<'a> {
    pub fn new() -> Self {
        Self {
            texture: None,
            width: 0,
            height: 0,
        }
    }

    pub fn load_from_file<T>(
        &mut self,
        creator: &'a TextureCreator<T>,
        path: &Path,
        color_key: Option<Color>,
    ) -> Result<(), LoadError> {
        self.free();

        let mut surface = load_surface(path)?;
        if let Some(key) = color_key {
            surface.set_color_key(true, key)?;
        }

        self.load_from_surface(creator, &surface)
    }

    pub fn load_from_rendered_text<T>(
        &mut self,
        creator: &'a TextureCreator<T>,
        font: &FontFace,
        text: &str,
        color: Color,
    ) -> Result<(), LoadError> {
        self.free();

        let surface = font.rasterize(text, color)?.to_surface()?;
        self.load_from_surface(creator, &surface)
    }

    pub fn load_from_surface<T>(
        &mut self,
        creator: &'a TextureCreator<T>,
        surface: &Surface,
    ) -> Result<(), LoadError> {
        self.free();

        let texture = creator
            .create_texture_from_surface(surface)
            .map_err(|err| LoadError::Sdl(format!("{err}")))?;

        self.width = surface.width();
        self.height = surface.height();
        self.texture = Some(texture);
        Ok(())
    }

    pub fn free(&mut self) {
        self.texture = None;
        self.width = 0;
        self.height = 0;
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_color(&mut self, red: u8, green: u8, blue: u8) {
        if let Some(texture) = self.texture.as_mut() {
            texture.set_color_mod(red, green, blue);
        }
    }

    pub fn set_blend_mode(&mut self, blending: BlendMode) {
        if let Some(texture) = self.texture.as_mut() {
            texture.set_blend_mode(blending);
        }
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        if let Some(texture) = self.texture.as_mut() {
            texture.set_alpha_mod(alpha);
        }
    }

    pub fn render_at<T: RenderTarget>(
        &self,
        canvas: &mut Canvas<T>,
        x: i32,
        y: i32,
    ) -> Result<(), String> {
        self.render_clip(canvas, x, y, None)
    }

    pub fn render_clip<T: RenderTarget>(
        &self,
        canvas: &mut Canvas<T>,
        x: i32,
        y: i32,
        clip: Option<Rect>,
    ) -> Result<(), String> {
        self.render(canvas, x, y, clip, 0.0, None, Flip::NONE)
    }

    /// Draws at `(x, y)` with the clip's size, or the full texture size without one.
    ///
    /// `angle` is in degrees, clockwise, around `center` (texture center if `None`).
    /// Drawing an unloaded texture does nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn render<T: RenderTarget>(
        &self,
        canvas: &mut Canvas<T>,
        x: i32,
        y: i32,
        clip: Option<Rect>,
        angle: f64,
        center: Option<Point>,
        flip: Flip,
    ) -> Result<(), String> {
        let Some(texture) = self.texture.as_ref() else {
            return Ok(());
        };

        let (width, height) = match clip {
            Some(clip) => (clip.width(), clip.height()),
            None => (self.width, self.height),
        };

        canvas.copy_ex(
            texture,
            clip,
            Rect::new(x, y, width, height),
            angle,
            center,
            flip.horizontal,
            flip.vertical,
        )
    }

    /// Stretches the whole texture over `destination`, or the whole target when `None`.
    pub fn render_stretched<T: RenderTarget>(
        &self,
        canvas: &mut Canvas<T>,
        destination: Option<Rect>,
    ) -> Result<(), String> {
        match self.texture.as_ref() {
            Some(texture) => canvas.copy(texture, None::<Rect>, destination),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        env, fs,
        io::Cursor,
        path::{Path, PathBuf},
        process,
    };

    use png::{BitDepth, ColorType};
    use sdl2::{pixels::PixelFormatEnum, render::Canvas, surface::Surface};

    use super::{decode_png, expand_to_rgba, load_surface, LTexture, LoadError, RgbaImage};
    use crate::color::{COLOR_KEY, WHITE};

    fn encode_png(
        width: u32,
        height: u32,
        color: ColorType,
        depth: BitDepth,
        data: &[u8],
    ) -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
            writer.finish().unwrap();
        }
        bytes
    }

    fn write_asset(file_name: &str, bytes: &[u8]) -> PathBuf {
        let path = env::temp_dir().join(format!("sdltutorial-{}-{}", process::id(), file_name));
        fs::write(&path, bytes).unwrap();
        path
    }

    fn software_canvas(width: u32, height: u32) -> Canvas<Surface<'static>> {
        Surface::new(width, height, PixelFormatEnum::RGBA32)
            .unwrap()
            .into_canvas()
            .unwrap()
    }

    #[test]
    fn empty_texture_has_no_size() {
        let mut texture = LTexture::new();
        assert!(!texture.is_loaded());
        assert_eq!((texture.width(), texture.height()), (0, 0));

        texture.free();
        assert_eq!((texture.width(), texture.height()), (0, 0));
    }

    #[test]
    fn grayscale_expands_to_opaque_rgba() {
        let rgba = expand_to_rgba(ColorType::Grayscale, BitDepth::Eight, &[0x10, 0x80]).unwrap();
        assert_eq!(rgba, vec![0x10, 0x10, 0x10, 0xFF, 0x80, 0x80, 0x80, 0xFF]);
    }

    #[test]
    fn gray_alpha_keeps_alpha() {
        let rgba = expand_to_rgba(ColorType::GrayscaleAlpha, BitDepth::Eight, &[0x20, 0x40]).unwrap();
        assert_eq!(rgba, vec![0x20, 0x20, 0x20, 0x40]);
    }

    #[test]
    fn sixteen_bit_keeps_high_byte() {
        let rgba = expand_to_rgba(
            ColorType::Rgb,
            BitDepth::Sixteen,
            &[0xAB, 0x01, 0xCD, 0x02, 0xEF, 0x03],
        )
        .unwrap();
        assert_eq!(rgba, vec![0xAB, 0xCD, 0xEF, 0xFF]);
    }

    #[test]
    fn unexpanded_palette_is_rejected() {
        assert!(matches!(
            expand_to_rgba(ColorType::Indexed, BitDepth::Eight, &[0]),
            Err(LoadError::UnsupportedImage(_))
        ));
    }

    #[test]
    fn decodes_encoded_png() {
        let bytes = encode_png(
            2,
            1,
            ColorType::Rgba,
            BitDepth::Eight,
            &[1, 2, 3, 4, 5, 6, 7, 8],
        );
        let image = decode_png(Cursor::new(bytes)).unwrap();
        assert_eq!(
            image,
            RgbaImage {
                width: 2,
                height: 1,
                data: vec![1, 2, 3, 4, 5, 6, 7, 8],
            }
        );
        assert_eq!(image.pitch(), 8);
    }

    #[test]
    fn garbage_is_a_png_error() {
        let result = decode_png(Cursor::new(b"definitely not a png".to_vec()));
        assert!(matches!(result, Err(LoadError::PngDecodingError(_))));
    }

    #[test]
    fn empty_image_has_no_surface() {
        let image = RgbaImage {
            width: 0,
            height: 12,
            data: Vec::new(),
        };
        assert!(matches!(image.to_surface(), Err(LoadError::EmptyImage)));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let result = load_surface(Path::new("music.ogg"));
        assert!(matches!(result, Err(LoadError::UnsupportedImage(_))));
    }

    #[test]
    fn missing_png_is_io_error() {
        let result = load_surface(Path::new("this/file/does/not/exist.png"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn load_sets_size_and_reload_keeps_it() {
        let path = write_asset(
            "sized.png",
            &encode_png(3, 2, ColorType::Rgba, BitDepth::Eight, &[0xFF; 24]),
        );
        let canvas = software_canvas(4, 4);
        let creator = canvas.texture_creator();

        let mut texture = LTexture::new();
        texture.load_from_file(&creator, &path, None).unwrap();
        assert!(texture.is_loaded());
        assert_eq!((texture.width(), texture.height()), (3, 2));

        texture.load_from_file(&creator, &path, None).unwrap();
        assert!(texture.is_loaded());
        assert_eq!((texture.width(), texture.height()), (3, 2));

        texture.free();
        assert!(!texture.is_loaded());
        assert_eq!((texture.width(), texture.height()), (0, 0));
    }

    #[test]
    fn failed_reload_leaves_texture_empty() {
        let path = write_asset(
            "reloaded.png",
            &encode_png(1, 1, ColorType::Grayscale, BitDepth::Eight, &[0x40]),
        );
        let canvas = software_canvas(4, 4);
        let creator = canvas.texture_creator();

        let mut texture = LTexture::new();
        texture.load_from_file(&creator, &path, None).unwrap();
        assert_eq!((texture.width(), texture.height()), (1, 1));

        let result = texture.load_from_file(&creator, Path::new("no/such/image.png"), None);
        assert!(matches!(result, Err(LoadError::Io(_))));
        assert!(!texture.is_loaded());
        assert_eq!((texture.width(), texture.height()), (0, 0));
    }

    #[test]
    fn bmp_files_load_with_their_size() {
        let image = RgbaImage {
            width: 2,
            height: 3,
            data: vec![0x80; 2 * 3 * 4],
        };
        let path = env::temp_dir().join(format!("sdltutorial-{}-sized.bmp", process::id()));
        image.to_surface().unwrap().save_bmp(&path).unwrap();

        let canvas = software_canvas(4, 4);
        let creator = canvas.texture_creator();

        let mut texture = LTexture::new();
        texture.load_from_file(&creator, &path, None).unwrap();
        assert_eq!((texture.width(), texture.height()), (2, 3));
    }

    #[test]
    fn color_key_pixels_are_transparent() {
        let path = write_asset(
            "keyed.png",
            &encode_png(2, 1, ColorType::Rgb, BitDepth::Eight, &[0, 0xFF, 0xFF, 0xFF, 0, 0]),
        );
        let mut canvas = software_canvas(2, 1);
        let creator = canvas.texture_creator();

        let mut texture = LTexture::new();
        texture.load_from_file(&creator, &path, Some(COLOR_KEY)).unwrap();

        canvas.set_draw_color(WHITE);
        canvas.clear();
        texture.render_at(&mut canvas, 0, 0).unwrap();
        canvas.present();

        let pixels = canvas.surface().with_lock(|pixels| pixels[..8].to_vec());
        assert_eq!(pixels, vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xFF]);
    }
}
