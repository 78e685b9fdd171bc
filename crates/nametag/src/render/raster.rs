#![forbid(unsafe_code)]

use crate::render::{Generator, HeadlessError};
use nametag_core::GenerationRequest;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error(transparent)]
    Headless(#[from] HeadlessError),
    #[error("failed to parse SVG")]
    SvgParse,
    #[error("failed to allocate pixmap for raster rendering")]
    PixmapAlloc,
    #[error("failed to encode PNG")]
    PngEncode,
    #[error("failed to convert SVG to PDF")]
    PdfConvert,
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone)]
pub struct RasterOptions {
    /// Multiplier over the badge's intrinsic pixel size (its `mm` size at 96 dpi).
    pub scale: f32,
    /// Fill behind the badge: `#rgb`, `#rrggbb`, `#rrggbbaa`, `white`, `black` or `transparent`.
    pub background: Option<String>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
        }
    }
}

pub fn render_png_sync(
    generator: &Generator,
    request: &GenerationRequest,
    raster: &RasterOptions,
) -> Result<Vec<u8>> {
    let artifact = generator.generate_sync(request)?;
    svg_to_png(artifact.as_str(), raster)
}

pub fn render_pdf_sync(generator: &Generator, request: &GenerationRequest) -> Result<Vec<u8>> {
    let artifact = generator.generate_sync(request)?;
    svg_to_pdf(artifact.as_str())
}

pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let pixmap = svg_to_pixmap(svg, options.scale, options.background.as_deref())?;
    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let mut opt = svg2pdf::usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = "DejaVu Sans".to_string();

    let tree = svg2pdf::usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|_| RasterError::PdfConvert)
}

fn svg_to_pixmap(svg: &str, scale: f32, background: Option<&str>) -> Result<tiny_skia::Pixmap> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    // Badge templates ask for `sans-serif`; pin the generic family to a common face.
    opt.font_family = "DejaVu Sans".to_string();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    // The tree size already accounts for `mm` units and maps the viewBox onto it.
    let size = tree.size();
    let width_px = (size.width() * scale).ceil().max(1.0) as u32;
    let height_px = (size.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px).ok_or(RasterError::PixmapAlloc)?;

    if let Some(color) = background.and_then(parse_color) {
        pixmap.fill(color);
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

fn parse_color(text: &str) -> Option<tiny_skia::Color> {
    let s = text.trim().to_ascii_lowercase();
    match s.as_str() {
        "transparent" => return Some(tiny_skia::Color::from_rgba8(0, 0, 0, 0)),
        "white" => return Some(tiny_skia::Color::from_rgba8(255, 255, 255, 255)),
        "black" => return Some(tiny_skia::Color::from_rgba8(0, 0, 0, 255)),
        _ => {}
    }

    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize, width: usize| -> Option<u8> {
        let v = u8::from_str_radix(hex.get(i * width..(i + 1) * width)?, 16).ok()?;
        Some(if width == 1 { (v << 4) | v } else { v })
    };

    let (width, alpha) = match hex.len() {
        3 => (1, false),
        4 => (1, true),
        6 => (2, false),
        8 => (2, true),
        _ => return None,
    };
    let a = if alpha { channel(3, width)? } else { 255 };
    Some(tiny_skia::Color::from_rgba8(
        channel(0, width)?,
        channel(1, width)?,
        channel(2, width)?,
        a,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><rect width="10" height="10" fill="black"/></svg>"#;

    #[test]
    fn svg_to_png_produces_png_signature() {
        let bytes = svg_to_png(SQUARE, &RasterOptions::default()).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn svg_to_pdf_produces_pdf_signature() {
        let bytes = svg_to_pdf(SQUARE).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn scale_multiplies_the_intrinsic_size() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="4" viewBox="0 0 10 4"><rect width="10" height="4" fill="black"/></svg>"#;
        let pixmap = svg_to_pixmap(svg, 3.0, None).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (30, 12));
    }

    #[test]
    fn badge_renders_to_png() {
        let request = GenerationRequest::new("jackie*", "per, pers, pers").with_gradient(true);
        let bytes = Generator::new()
            .render_png_sync(&request, &RasterOptions::default())
            .unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn empty_name_is_reported_before_rasterizing() {
        let request = GenerationRequest::new("", "she/her");
        let err = Generator::new().render_pdf_sync(&request).unwrap_err();
        assert!(matches!(err, RasterError::Headless(_)));
    }

    #[test]
    fn background_colors() {
        let c = parse_color("#ff000080").unwrap();
        assert_eq!(c.to_color_u8().red(), 255);
        assert_eq!(c.to_color_u8().alpha(), 128);
        let c = parse_color(" #0F0 ").unwrap();
        assert_eq!(c.to_color_u8().green(), 255);
        assert_eq!(parse_color("white"), Some(tiny_skia::Color::WHITE));
        assert!(parse_color("#12345").is_none());
        assert!(parse_color("rebeccapurple").is_none());
        assert!(parse_color("#gg0000").is_none());
    }
}
