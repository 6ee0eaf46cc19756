//! The clock display loop.
//!
//! Four labels stacked in a centered column: a heading and the 12-hour
//! time, then a heading and the 24-hour time. Each tick reads the wall
//! clock once and overwrites both time strings from that single reading;
//! frames only paint whatever the last tick produced.

use anyhow::Result;

use duoclock_core::{
    Clock, PLACEHOLDER_12H, PLACEHOLDER_24H, SystemClock, Timestamp, format_12h, format_24h,
};

use crate::paint::Color;
use crate::render::{LabelRenderer, TextRun};
use crate::runtime::{App, AppControl, FrameCtx};
use crate::text::{FontCollection, FontId};

pub const WINDOW_TITLE: &str = "Digital Clock";

const BACKGROUND: Color = Color::BLACK;
const HEADING_COLOR_12H: Color = Color::from_premul(0.0, 0.749, 1.0, 1.0); // deep sky blue
const HEADING_COLOR_24H: Color = Color::from_premul(0.486, 0.988, 0.0, 1.0); // lawn green
const TIME_COLOR: Color = Color::WHITE;

const HEADING_SIZE: f32 = 20.0;
const TIME_SIZE: f32 = 50.0;

const HEADING_PAD_TOP: f32 = 15.0;
const HEADING_PAD_BOTTOM: f32 = 5.0;
const TIME_PAD: f32 = 5.0;

const HEADING_12H: &str = "12-Hour Format Time";
const HEADING_24H: &str = "24-Hour Format Time";

/// The two on-screen time strings.
///
/// Overwritten in place on every tick; no history is kept.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DisplayStrings {
    pub time_12h: String,
    pub time_24h: String,
}

impl DisplayStrings {
    /// Initial state shown until the first tick fires.
    pub fn placeholder() -> Self {
        Self {
            time_12h: PLACEHOLDER_12H.to_string(),
            time_24h: PLACEHOLDER_24H.to_string(),
        }
    }

    /// Rewrites both strings from one timestamp, keeping them in agreement.
    pub fn refresh(&mut self, ts: Timestamp) {
        self.time_12h = format_12h(ts);
        self.time_24h = format_24h(ts);
    }
}

/// One entry in the stacked label column.
#[derive(Debug, Copy, Clone)]
struct StackEntry {
    width: f32,
    height: f32,
    pad_top: f32,
    pad_bottom: f32,
}

/// Computes top-left origins for a vertically stacked, horizontally
/// centered column of labels.
fn stack_centered(viewport_width: f32, entries: &[StackEntry]) -> Vec<(f32, f32)> {
    let mut y = 0.0;
    entries
        .iter()
        .map(|e| {
            y += e.pad_top;
            let x = ((viewport_width - e.width) / 2.0).max(0.0);
            let origin = (x, y);
            y += e.height + e.pad_bottom;
            origin
        })
        .collect()
}

/// The clock application. Generic over the time source so tests can drive
/// it with a fixed clock.
pub struct ClockApp<C: Clock = SystemClock> {
    clock: C,
    display: DisplayStrings,

    fonts: FontCollection,
    font: FontId,

    // Built on the first frame, once the GPU device exists.
    renderer: Option<LabelRenderer>,
}

impl ClockApp<SystemClock> {
    pub fn new(font_bytes: &[u8]) -> Result<Self> {
        Self::with_clock(font_bytes, SystemClock)
    }
}

impl<C: Clock> ClockApp<C> {
    pub fn with_clock(font_bytes: &[u8], clock: C) -> Result<Self> {
        let mut fonts = FontCollection::new();
        let font = fonts.load_font(font_bytes)?;

        Ok(Self {
            clock,
            display: DisplayStrings::placeholder(),
            fonts,
            font,
            renderer: None,
        })
    }

    fn text_runs(&self, viewport_width: f32) -> Vec<TextRun> {
        let labels: [(&str, f32, Color, f32, f32); 4] = [
            (HEADING_12H, HEADING_SIZE, HEADING_COLOR_12H, HEADING_PAD_TOP, HEADING_PAD_BOTTOM),
            (&self.display.time_12h, TIME_SIZE, TIME_COLOR, TIME_PAD, TIME_PAD),
            (HEADING_24H, HEADING_SIZE, HEADING_COLOR_24H, HEADING_PAD_TOP, HEADING_PAD_BOTTOM),
            (&self.display.time_24h, TIME_SIZE, TIME_COLOR, TIME_PAD, TIME_PAD),
        ];

        let entries: Vec<StackEntry> = labels
            .iter()
            .map(|(text, size, _, pad_top, pad_bottom)| {
                let (width, height) = self.fonts.measure_line(text, self.font, *size);
                StackEntry { width, height, pad_top: *pad_top, pad_bottom: *pad_bottom }
            })
            .collect();

        let origins = stack_centered(viewport_width, &entries);

        labels
            .iter()
            .zip(origins)
            .map(|((text, size, color, _, _), (x, y))| TextRun {
                text: (*text).to_string(),
                x,
                y,
                size: *size,
                color: *color,
                font: self.font,
            })
            .collect()
    }
}

impl<C: Clock> App for ClockApp<C> {
    fn on_tick(&mut self) {
        // One clock read per tick; both strings come from it.
        self.display.refresh(self.clock.now());
        log::trace!("tick: {} / {}", self.display.time_24h, self.display.time_12h);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let (viewport_width, _) = ctx.logical_size();
        let runs = self.text_runs(viewport_width);

        let renderer = self
            .renderer
            .get_or_insert_with(|| LabelRenderer::new(ctx.gpu.device(), ctx.gpu.surface_format()));

        let fonts = &self.fonts;
        ctx.render(BACKGROUND, |rctx, target| {
            renderer.render(rctx, target, &runs, fonts);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(Timestamp);

    impl Clock for FixedClock {
        fn now(&self) -> Timestamp {
            self.0
        }
    }

    #[test]
    fn placeholders_before_the_first_tick() {
        let display = DisplayStrings::placeholder();
        assert_eq!(display.time_12h, "00:00:00 AM");
        assert_eq!(display.time_24h, "00:00:00");
    }

    #[test]
    fn refresh_keeps_both_strings_on_the_same_instant() {
        let clock = FixedClock(Timestamp::new(13, 30, 0).unwrap());
        let mut display = DisplayStrings::placeholder();
        display.refresh(clock.now());
        assert_eq!(display.time_12h, "01:30:00 PM");
        assert_eq!(display.time_24h, "13:30:00");
    }

    #[test]
    fn refresh_overwrites_in_place() {
        let mut display = DisplayStrings::placeholder();
        display.refresh(Timestamp::new(0, 0, 5).unwrap());
        display.refresh(Timestamp::new(23, 59, 59).unwrap());
        assert_eq!(display.time_12h, "11:59:59 PM");
        assert_eq!(display.time_24h, "23:59:59");
    }

    #[test]
    fn stack_is_horizontally_centered() {
        let entries = [
            StackEntry { width: 100.0, height: 20.0, pad_top: 15.0, pad_bottom: 5.0 },
            StackEntry { width: 300.0, height: 50.0, pad_top: 5.0, pad_bottom: 5.0 },
        ];
        let origins = stack_centered(640.0, &entries);
        assert_eq!(origins[0].0, 270.0);
        assert_eq!(origins[1].0, 170.0);
    }

    #[test]
    fn stack_applies_padding_in_order() {
        let entries = [
            StackEntry { width: 10.0, height: 20.0, pad_top: 15.0, pad_bottom: 5.0 },
            StackEntry { width: 10.0, height: 50.0, pad_top: 5.0, pad_bottom: 5.0 },
        ];
        let origins = stack_centered(100.0, &entries);
        // First label sits below its top padding.
        assert_eq!(origins[0].1, 15.0);
        // Second starts after the first's height + bottom pad + its own top pad.
        assert_eq!(origins[1].1, 15.0 + 20.0 + 5.0 + 5.0);
    }

    #[test]
    fn labels_never_overflow_left_edge() {
        let entries = [StackEntry { width: 500.0, height: 50.0, pad_top: 0.0, pad_bottom: 0.0 }];
        let origins = stack_centered(100.0, &entries);
        assert_eq!(origins[0].0, 0.0);
    }
}
