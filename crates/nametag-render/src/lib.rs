#![forbid(unsafe_code)]

//! Headless SVG name tag generation.
//!
//! The engine turns a [`GenerationRequest`] and a [`TemplateDocument`] into a
//! [`GeneratedArtifact`]:
//!
//! 1. fill the `{{ name }}` / `{{ pronouns }}` text placeholders,
//! 2. color the background from the [`ColorTable`] (or the request's own color),
//! 3. draw the squiggle from the name's code points,
//! 4. add the fingerprint strip, when a non-zero fingerprint is given,
//! 5. derive the background gradient from the name's SHA-1, when enabled and supported.
//!
//! Everything is a pure function of its inputs. Templates and color tables are read-only and
//! can be shared across threads; nothing here performs I/O.

pub mod assets;
pub mod document;
pub mod engine;
pub mod error;
pub mod gradient;
pub mod mutator;
pub mod number;
pub mod path;
pub mod strip;
pub mod template;

pub use engine::{GeneratedArtifact, generate};
pub use error::{Error, Result};
pub use gradient::{GradientStops, derive_gradient};
pub use nametag_core::{ColorTable, Fingerprint, GenerationRequest};
pub use path::{SquigglePoint, squiggle_points, synthesize_squiggle};
pub use strip::{ColorBlock, encode_fingerprint};
pub use template::{Slot, SlotSet, TemplateDocument};
