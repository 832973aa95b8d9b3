// File: crates/dotplan-core/src/render/fonts.rs
// Summary: Font book mapping font roles to Skia typefaces (TTF files first, system fallback).

use std::collections::HashMap;
use std::path::Path;

use log::{debug, warn};
use skia_safe as skia;
use skia::font_style::{Slant, Weight, Width};

use crate::canvas::TextMeasure;
use crate::style::{FontFace, FontRole, StyleConfig};

fn role_style(role: FontRole) -> skia::FontStyle {
    match role {
        FontRole::Text => skia::FontStyle::normal(),
        FontRole::Bold => skia::FontStyle::bold(),
        FontRole::Light => skia::FontStyle::new(Weight::LIGHT, Width::NORMAL, Slant::Upright),
    }
}

pub struct FontBook {
    typefaces: HashMap<FontRole, skia::Typeface>,
}

impl FontBook {
    /// Resolve each role from `font_dir` (when the face names a file) or from the
    /// system font manager. Roles nothing resolves for fall back to Skia's default font.
    pub fn load(font_dir: Option<&Path>, style: &StyleConfig) -> Self {
        let mgr = skia::FontMgr::default();
        let mut typefaces = HashMap::new();
        for role in FontRole::ALL {
            let face = style.face(role);
            let typeface = font_dir
                .and_then(|dir| load_file(&mgr, dir, face))
                .or_else(|| mgr.match_family_style(&face.family, role_style(role)))
                .or_else(|| mgr.legacy_make_typeface(None, role_style(role)));
            match typeface {
                Some(tf) => {
                    typefaces.insert(role, tf);
                }
                None => warn!("no typeface for {:?} ('{}'); using default font", role, face.family),
            }
        }
        Self { typefaces }
    }

    /// System fonts only.
    pub fn system(style: &StyleConfig) -> Self {
        Self::load(None, style)
    }

    pub fn font(&self, role: FontRole, size: f32) -> skia::Font {
        match self.typefaces.get(&role) {
            Some(tf) => skia::Font::from_typeface(tf.clone(), size),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size);
                font
            }
        }
    }
}

impl TextMeasure for FontBook {
    fn text_width(&self, text: &str, font: FontRole, size: f32) -> f32 {
        self.font(font, size).measure_str(text, None).0
    }
}

fn load_file(mgr: &skia::FontMgr, dir: &Path, face: &FontFace) -> Option<skia::Typeface> {
    let path = dir.join(face.file.as_ref()?);
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("cannot read font {}: {err}; falling back to '{}'", path.display(), face.family);
            return None;
        }
    };
    let typeface = mgr.new_from_data(skia::Data::new_copy(&bytes), None);
    if typeface.is_none() {
        warn!("{} is not a usable font file", path.display());
    } else {
        debug!("registered {}", path.display());
    }
    typeface
}
