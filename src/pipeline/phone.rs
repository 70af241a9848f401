//! Phone-number structure and image synthesis.
//!
//! A synthesized phone number has three parts: an area code, an exchange
//! number, and a subscriber number. A type selector drawn from `[1,9]`
//! decides the area-code branch: selectors above 5 pick one of the fixed
//! 3-digit mobile prefixes, the rest build a landline code of `selector + 1`
//! digits starting with 0. The exchange number fills the remaining landline
//! prefix budget (or is fixed at 4 digits for mobile numbers) and the
//! subscriber number is always 4 digits.

use crate::core::constants::{
    EDGE_PAD_EXTRA, GLYPH_SIZE, LANDLINE_PREFIX_DIGITS, MOBILE_EXCHANGE_LEN, MOBILE_PREFIXES,
    PART_GAP_EXTRA, SUBSCRIBER_LEN,
};
use crate::core::{GenResult, NumGenError};
use crate::glyphs::GlyphStore;
use crate::processors::resize::resize_strip;
use crate::processors::{SequenceCompositor, SpacingRange};
use ndarray::{concatenate, Array2, Axis};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Layout policy for rendering a phone number as an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritingStyle {
    /// All parts rendered as one contiguous digit sequence.
    Contiguous,
    /// Each part rendered on its own, separated by wide white blocks.
    Spaced,
}

impl WritingStyle {
    /// Draws a style uniformly from the two variants.
    pub fn draw(rng: &mut impl Rng) -> Self {
        if rng.gen_range(0..2) == 0 {
            Self::Contiguous
        } else {
            Self::Spaced
        }
    }
}

/// The three structural parts of a synthesized phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneNumber {
    area_code: Vec<u8>,
    exchange: Vec<u8>,
    subscriber: Vec<u8>,
}

impl PhoneNumber {
    /// Draws a phone number with a uniform-random type selector.
    pub fn draw(rng: &mut impl Rng) -> Self {
        let selector = rng.gen_range(1..=9);
        Self::draw_with_selector(selector, rng)
    }

    /// Draws a phone number for a fixed type selector.
    ///
    /// Selectors above 5 produce a mobile number (one of the fixed
    /// prefixes, 4-digit exchange); selectors 1-5 produce a landline
    /// number with a `selector + 1` digit area code starting with 0 and a
    /// `6 - len(area_code)` digit exchange, which is empty for selector 5.
    pub fn draw_with_selector(selector: u8, rng: &mut impl Rng) -> Self {
        let area_code = if selector > 5 {
            MOBILE_PREFIXES[rng.gen_range(0..MOBILE_PREFIXES.len())].to_vec()
        } else {
            let mut code = vec![0u8];
            code.extend((0..selector).map(|_| rng.gen_range(1..=9)));
            code
        };

        let exchange_len = if is_mobile_code(&area_code) {
            MOBILE_EXCHANGE_LEN
        } else {
            LANDLINE_PREFIX_DIGITS - area_code.len()
        };
        let exchange = (0..exchange_len).map(|_| rng.gen_range(0..=9)).collect();
        let subscriber = (0..SUBSCRIBER_LEN).map(|_| rng.gen_range(0..=9)).collect();

        Self {
            area_code,
            exchange,
            subscriber,
        }
    }

    /// The area-code digits.
    pub fn area_code(&self) -> &[u8] {
        &self.area_code
    }

    /// The exchange-number digits (possibly empty).
    pub fn exchange(&self) -> &[u8] {
        &self.exchange
    }

    /// The subscriber-number digits.
    pub fn subscriber(&self) -> &[u8] {
        &self.subscriber
    }

    /// True if the area code is one of the fixed mobile prefixes.
    pub fn is_mobile(&self) -> bool {
        is_mobile_code(&self.area_code)
    }

    /// All significant digits in order: area code, exchange, subscriber.
    pub fn digits(&self) -> Vec<u8> {
        let mut digits =
            Vec::with_capacity(self.area_code.len() + self.exchange.len() + self.subscriber.len());
        digits.extend_from_slice(&self.area_code);
        digits.extend_from_slice(&self.exchange);
        digits.extend_from_slice(&self.subscriber);
        digits
    }

    /// The digits concatenated into a string, e.g. `"07012345678"`.
    pub fn digit_string(&self) -> String {
        self.digits().iter().map(u8::to_string).collect()
    }
}

fn is_mobile_code(area_code: &[u8]) -> bool {
    MOBILE_PREFIXES.iter().any(|prefix| prefix == area_code)
}

/// Synthesizes phone-number images at a fixed target width.
#[derive(Debug)]
pub struct PhoneNumberSynthesizer<'a> {
    compositor: SequenceCompositor<'a>,
    spacing: SpacingRange,
    width: u32,
}

impl<'a> PhoneNumberSynthesizer<'a> {
    /// Creates a synthesizer over a loaded glyph store.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero target width.
    pub fn new(store: &'a GlyphStore, spacing: SpacingRange, width: u32) -> GenResult<Self> {
        if width == 0 {
            return Err(NumGenError::validation_error(
                "phone-number synthesizer",
                "width",
                "a positive pixel width",
                "0",
            ));
        }
        Ok(Self {
            compositor: SequenceCompositor::new(store),
            spacing,
            width,
        })
    }

    /// Draws one phone number and a writing style, and renders the image.
    ///
    /// # Errors
    ///
    /// Propagates any composition failure; no partial image is produced.
    pub fn synthesize(
        &self,
        rng: &mut impl Rng,
    ) -> GenResult<(PhoneNumber, WritingStyle, Array2<f32>)> {
        let phone = PhoneNumber::draw(rng);
        let style = WritingStyle::draw(rng);
        let image = self.compose(&phone, style, rng)?;
        debug!(
            number = %phone.digit_string(),
            style = ?style,
            "phone number synthesized"
        );
        Ok((phone, style, image))
    }

    /// Renders a phone number under a writing style.
    ///
    /// Contiguous style renders all digits as one sequence and pads both
    /// outer edges with a white block of a single spacing draw plus 5
    /// pixels. Spaced style renders each non-empty part at `28 x part_len`
    /// pixels, separates parts with per-gap spacing draws plus 25 pixels,
    /// and pads the edges the same way as the contiguous style. Either way
    /// the composite is resized back to the target width.
    pub fn compose(
        &self,
        phone: &PhoneNumber,
        style: WritingStyle,
        rng: &mut impl Rng,
    ) -> GenResult<Array2<f32>> {
        let blocks = match style {
            WritingStyle::Contiguous => {
                let image = self
                    .compositor
                    .render(&phone.digits(), self.spacing, self.width, rng)?;
                let pad = white_block(self.spacing.draw(rng) + EDGE_PAD_EXTRA);
                vec![pad.clone(), image, pad]
            }
            WritingStyle::Spaced => {
                let mut blocks = Vec::with_capacity(7);
                blocks.push(self.render_part(phone.area_code(), rng)?);
                blocks.push(white_block(self.spacing.draw(rng) + PART_GAP_EXTRA));
                if !phone.exchange().is_empty() {
                    blocks.push(self.render_part(phone.exchange(), rng)?);
                    blocks.push(white_block(self.spacing.draw(rng) + PART_GAP_EXTRA));
                }
                blocks.push(self.render_part(phone.subscriber(), rng)?);

                let edge = white_block(self.spacing.draw(rng) + EDGE_PAD_EXTRA);
                blocks.insert(0, edge.clone());
                blocks.push(edge);
                blocks
            }
        };

        let views: Vec<_> = blocks.iter().map(|block| block.view()).collect();
        let composite = concatenate(Axis(1), &views)?;
        resize_strip(&composite, self.width)
    }

    /// Renders one structural part at its natural width of 28 pixels per
    /// digit.
    fn render_part(&self, digits: &[u8], rng: &mut impl Rng) -> GenResult<Array2<f32>> {
        let width = GLYPH_SIZE * digits.len() as u32;
        self.compositor.render(digits, self.spacing, width, rng)
    }
}

/// A normalized all-white block of the strip height.
fn white_block(width: u32) -> Array2<f32> {
    Array2::ones((GLYPH_SIZE as usize, width as usize))
}
