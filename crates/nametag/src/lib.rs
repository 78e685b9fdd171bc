#![forbid(unsafe_code)]

//! `nametag` generates SVG name tags: a background colored by pronouns, a squiggle drawn from
//! the name, an optional strip of colored blocks encoding a key fingerprint, and an optional
//! gradient derived from the name.
//!
//! # Features
//!
//! - `render`: enable badge generation (`nametag::render`)
//! - `raster`: enable PNG/PDF output via pure-Rust SVG rasterization/conversion

pub use nametag_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use nametag_render::assets::{gradient_template, plain_template};
    pub use nametag_render::{
        ColorBlock, GeneratedArtifact, GradientStops, Slot, SlotSet, SquigglePoint,
        TemplateDocument, derive_gradient, encode_fingerprint, squiggle_points,
        synthesize_squiggle,
    };

    #[cfg(feature = "raster")]
    pub mod raster;

    use nametag_core::{ColorTable, GenerationRequest, GeneratorConfig, RequestDraft};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Request(#[from] nametag_core::Error),
        #[error(transparent)]
        Render(#[from] nametag_render::Error),
    }

    impl HeadlessError {
        /// `true` when the caller sent a bad request rather than the setup being broken.
        pub fn is_request_error(&self) -> bool {
            match self {
                Self::Request(err) => err.is_request_error(),
                Self::Render(nametag_render::Error::InvalidInput { .. }) => true,
                Self::Render(_) => false,
            }
        }
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Synchronous generation helper (executor-free).
    pub fn generate_sync(
        request: &GenerationRequest,
        template: &TemplateDocument,
        colors: &ColorTable,
    ) -> Result<GeneratedArtifact> {
        Ok(nametag_render::generate(request, template, colors)?)
    }

    /// Runs [`generate_sync`]; there is no I/O to await.
    pub async fn generate(
        request: &GenerationRequest,
        template: &TemplateDocument,
        colors: &ColorTable,
    ) -> Result<GeneratedArtifact> {
        generate_sync(request, template, colors)
    }

    /// Already-read file contents a [`GeneratorConfig`] points at.
    ///
    /// Reading the files is up to the caller; `None` keeps the bundled asset.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ConfigSources<'a> {
        pub color_map: Option<&'a str>,
        pub template: Option<&'a str>,
        pub gradient_template: Option<&'a str>,
    }

    /// Bundles a color table with the plain and gradient templates.
    ///
    /// Requests with gradients enabled go to the gradient template, all others to the plain
    /// one. Stays runtime-agnostic: all work is CPU-bound and does not perform I/O.
    #[derive(Debug, Clone)]
    pub struct Generator {
        pub colors: ColorTable,
        pub plain: TemplateDocument,
        pub gradient: TemplateDocument,
    }

    impl Default for Generator {
        fn default() -> Self {
            Self {
                colors: ColorTable::builtin(),
                plain: plain_template().clone(),
                gradient: gradient_template().clone(),
            }
        }
    }

    impl Generator {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn from_config(config: &GeneratorConfig, sources: ConfigSources<'_>) -> Result<Self> {
            config.validate()?;
            let colors = match sources.color_map {
                Some(json) => ColorTable::from_json_str(json, config.default_color.as_str())?,
                None => ColorTable::builtin().with_default_color(config.default_color.as_str()),
            };
            let mut generator = Self::new().with_colors(colors);
            if let Some(source) = sources.template {
                generator.plain = TemplateDocument::parse(source)?;
            }
            if let Some(source) = sources.gradient_template {
                generator.gradient = TemplateDocument::parse(source)?;
            }
            Ok(generator)
        }

        pub fn with_colors(mut self, colors: ColorTable) -> Self {
            self.colors = colors;
            self
        }

        pub fn with_plain_template(mut self, template: TemplateDocument) -> Self {
            self.plain = template;
            self
        }

        pub fn with_gradient_template(mut self, template: TemplateDocument) -> Self {
            self.gradient = template;
            self
        }

        pub fn template_for(&self, request: &GenerationRequest) -> &TemplateDocument {
            if request.gradient_enabled() {
                &self.gradient
            } else {
                &self.plain
            }
        }

        pub fn generate_sync(&self, request: &GenerationRequest) -> Result<GeneratedArtifact> {
            generate_sync(request, self.template_for(request), &self.colors)
        }

        pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedArtifact> {
            self.generate_sync(request)
        }

        /// Validates a client draft, then generates it.
        pub fn generate_draft_sync(&self, draft: &RequestDraft) -> Result<GeneratedArtifact> {
            let request = draft.validate()?;
            self.generate_sync(&request)
        }

        #[cfg(feature = "raster")]
        pub fn render_png_sync(
            &self,
            request: &GenerationRequest,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            raster::render_png_sync(self, request, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_pdf_sync(&self, request: &GenerationRequest) -> raster::Result<Vec<u8>> {
            raster::render_pdf_sync(self, request)
        }
    }
}
