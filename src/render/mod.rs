//! Rendering to HTML

mod assembler;
mod html;

pub use assembler::{render, render_in, render_with, RenderOptions, RenderedDocument};
pub use html::{escape_html, render_plain};
