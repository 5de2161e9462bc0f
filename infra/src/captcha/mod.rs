//! Image verification code rendering.

use captcha::filters::{Noise, Wave};
use captcha::Captcha;

use wn_core::services::{CaptchaGenerator, CaptchaImage};

/// Characters per image code.
const CODE_CHARS: u32 = 4;

const WIDTH: u32 = 130;
const HEIGHT: u32 = 48;

/// Random image code rendered to PNG
#[derive(Default)]
pub struct PngCaptchaGenerator;

impl PngCaptchaGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CaptchaGenerator for PngCaptchaGenerator {
    fn generate(&self) -> Result<CaptchaImage, String> {
        let mut captcha = Captcha::new();
        captcha
            .add_chars(CODE_CHARS)
            .apply_filter(Noise::new(0.2))
            .apply_filter(Wave::new(2.0, 10.0))
            .view(WIDTH, HEIGHT);

        let text = captcha.chars_as_string();
        let png = captcha
            .as_png()
            .ok_or_else(|| "captcha rendering failed".to_string())?;
        Ok(CaptchaImage { text, png })
    }
}

/// Generator returning a preset answer, for endpoint tests.
pub struct FixedCaptchaGenerator {
    text: String,
}

impl FixedCaptchaGenerator {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl CaptchaGenerator for FixedCaptchaGenerator {
    fn generate(&self) -> Result<CaptchaImage, String> {
        Ok(CaptchaImage {
            text: self.text.clone(),
            // PNG magic bytes stand in for a rendered image.
            png: vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A],
        })
    }
}
