//! Animation driver
//!
//! [`Display`] owns the pixel sink and the timer service and runs at most
//! one animation at a time. A request is normalized once into a
//! [`FrameProducer`]; from then on every timer expiry pulls one frame
//! from it and writes it to the sink.
//!
//! ```text
//! show()/scroll() ──► cancel old entry ──► schedule periodic entry ──► draw first frame
//!                                                    │
//! tick(now) ◄──── expiry (handle must match) ◄──────┘
//!     │
//!     ├── frame available ──► write to sink
//!     ├── producer done   ──► cancel entry, idle
//!     └── sink error      ──► cancel entry, blank sink, idle, return error
//! ```

use core::slice;

use glimmer_hal::{FontData, PixelSink, TimerHandle, TimerMode, TimerService};

use super::source::{FrameProducer, FrameSource, ImageList, Indexed};
use crate::config::DisplayConfig;
use crate::error::{check_brightness, check_index, Result};
use crate::image::Image;
use crate::pins::{PinArbiter, PinMode};
use crate::text::{BuiltinFont, ScrollingText, StringFacade};

/// Something to show on the display
#[derive(Debug, Clone, Copy)]
pub enum Content<'a> {
    /// A single image
    Image(&'a Image),
    /// Text, scrolled across the display
    Text(&'a str),
    /// Images shown one after another
    Images(&'a [Image]),
    /// Text flashed one character per frame
    Characters(&'a str),
}

/// Options for [`Display::show`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShowOptions {
    /// Per-frame delay; `None` uses the configured default
    pub delay_ms: Option<u32>,
    /// Blank the display before the first frame
    pub clear: bool,
    /// Block until the animation completes
    pub wait: bool,
    /// Repeat indefinitely
    pub looping: bool,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            delay_ms: None,
            clear: false,
            wait: true,
            looping: false,
        }
    }
}

/// Options for [`Display::scroll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollOptions {
    /// Per-column delay; `None` uses the configured default
    pub delay_ms: Option<u32>,
    /// Block until the text has scrolled off
    pub wait: bool,
    /// Give every character five columns
    pub monospace: bool,
    /// Repeat indefinitely
    pub looping: bool,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            delay_ms: None,
            wait: true,
            monospace: false,
            looping: false,
        }
    }
}

/// The live animation
struct Animation<'a, F: FontData + ?Sized> {
    producer: FrameProducer<'a, F>,
    handle: TimerHandle,
}

/// LED matrix display with animation support
///
/// The timer service is expected to be dedicated to this display: `tick`
/// drains every expiry it reports.
pub struct Display<'a, S, T, F = BuiltinFont>
where
    S: PixelSink,
    T: TimerService,
    F: FontData + ?Sized,
{
    sink: S,
    timer: T,
    font: &'a F,
    config: DisplayConfig,
    animation: Option<Animation<'a, F>>,
}

impl<'a, S, T, F> Display<'a, S, T, F>
where
    S: PixelSink,
    T: TimerService,
    F: FontData + ?Sized,
{
    /// Create a display with the default configuration
    pub fn new(sink: S, timer: T, font: &'a F) -> Self {
        Self::with_config(sink, timer, font, DisplayConfig::default())
    }

    /// Create a display with a custom configuration
    pub fn with_config(sink: S, timer: T, font: &'a F, config: DisplayConfig) -> Self {
        Self {
            sink,
            timer,
            font,
            config,
            animation: None,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The pixel sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The timer service
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Mutable access to the timer service
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Stop any animation and hand back the sink and timer
    pub fn into_parts(mut self) -> (S, T) {
        self.stop();
        (self.sink, self.timer)
    }

    /// Check whether an animation is running
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Show an image, a string, or a sequence of images
    ///
    /// Any running animation is cancelled first. A single image or a
    /// single character is drawn immediately, unless `clear` or `looping`
    /// is set. Empty text does nothing.
    pub fn show(&mut self, content: Content<'a>, options: ShowOptions) -> Result<()> {
        self.stop();

        let immediate = !options.clear && !options.looping;
        match content {
            Content::Text(s) | Content::Characters(s) if s.is_empty() => return Ok(()),
            Content::Text(s) | Content::Characters(s) if s.len() == 1 && immediate => {
                let img = Image::for_char(self.font, s.as_bytes()[0]);
                return self.draw_static(&img);
            }
            Content::Image(img) if immediate => return self.draw_static(img),
            _ => {}
        }

        let producer = match content {
            Content::Text(s) => {
                FrameProducer::Scroll(ScrollingText::new(s, self.font, false, options.looping))
            }
            Content::Characters(s) => FrameProducer::indexed(
                Indexed::Characters(StringFacade::new(s, self.font)),
                options.looping,
            ),
            Content::Image(img) => FrameProducer::indexed(
                Indexed::Images(ImageList::new(slice::from_ref(img))),
                options.looping,
            ),
            Content::Images(images) => {
                FrameProducer::indexed(Indexed::Images(ImageList::new(images)), options.looping)
            }
        };
        let delay_ms = options.delay_ms.unwrap_or(self.config.show_delay_ms);
        self.start(producer, delay_ms, options.clear, options.wait)
    }

    /// Scroll text across the display
    ///
    /// Always animates, even for empty or single-character text.
    pub fn scroll(&mut self, text: &'a str, options: ScrollOptions) -> Result<()> {
        self.stop();
        let producer = FrameProducer::Scroll(ScrollingText::new(
            text,
            self.font,
            options.monospace,
            options.looping,
        ));
        let delay_ms = options.delay_ms.unwrap_or(self.config.scroll_delay_ms);
        self.start(producer, delay_ms, false, options.wait)
    }

    /// Cancel the running animation, leaving the current frame on display
    pub fn stop(&mut self) {
        if let Some(animation) = self.animation.take() {
            self.timer.cancel(animation.handle);
            debug!("animation {} cancelled", animation.handle.0);
        }
    }

    /// Handle every timer expiry due at `now_ms`
    ///
    /// Expiries that do not belong to the live animation are dropped. On a
    /// sink error the animation is abandoned and the display blanked
    /// before the error is returned.
    pub fn tick(&mut self, now_ms: u32) -> Result<()> {
        while let Some(handle) = self.timer.poll_expired(now_ms) {
            self.advance(handle)?;
        }
        Ok(())
    }

    /// [`tick`](Self::tick) at the timer's current time
    pub fn poll(&mut self) -> Result<()> {
        let now = self.timer.now_ms();
        self.tick(now)
    }

    /// Yield to the timer until the animation finishes
    ///
    /// Never returns for a looping animation unless an error occurs.
    pub fn wait(&mut self) -> Result<()> {
        while self.animation.is_some() {
            self.timer.idle();
            self.poll()?;
        }
        Ok(())
    }

    /// Set one display pixel
    pub fn set_pixel(&mut self, x: i32, y: i32, brightness: u8) -> Result<()> {
        let x = check_index(x, self.sink.width())?;
        let y = check_index(y, self.sink.height())?;
        let brightness = check_brightness(brightness)?;
        self.sink.set_pixel(x as u8, y as u8, brightness)?;
        Ok(())
    }

    /// Read one display pixel
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<u8> {
        let x = check_index(x, self.sink.width())?;
        let y = check_index(y, self.sink.height())?;
        Ok(self.sink.get_pixel(x as u8, y as u8)?)
    }

    /// Stop any animation and blank the display
    pub fn clear(&mut self) -> Result<()> {
        self.stop();
        self.sink.clear()?;
        Ok(())
    }

    /// Claim the matrix pins and enable the display
    ///
    /// Every pin is checked before any is claimed, so a conflict leaves
    /// the arbiter unchanged.
    pub fn on<const N: usize>(&mut self, pins: &mut PinArbiter<N>) -> Result<()> {
        for &pin in &self.config.display_pins {
            pins.check_acquire(pin, PinMode::Display)?;
        }
        for &pin in &self.config.display_pins {
            pins.acquire(pin, PinMode::Display)?;
        }
        self.sink.set_enabled(true);
        debug!("display on");
        Ok(())
    }

    /// Disable the display and release the matrix pins
    pub fn off<const N: usize>(&mut self, pins: &mut PinArbiter<N>) -> Result<()> {
        self.sink.set_enabled(false);
        for &pin in &self.config.display_pins {
            pins.free(pin)?;
        }
        debug!("display off");
        Ok(())
    }

    /// Check whether the display is enabled
    pub fn is_on(&self) -> bool {
        self.sink.is_enabled()
    }

    fn start(
        &mut self,
        producer: FrameProducer<'a, F>,
        delay_ms: u32,
        clear: bool,
        wait: bool,
    ) -> Result<()> {
        // A zero period never re-arms; run at the timer's finest step instead
        let delay_ms = delay_ms.max(1);

        // Nothing is written before the timer entry exists
        let handle = self.timer.schedule(delay_ms, TimerMode::Periodic)?;
        self.animation = Some(Animation { producer, handle });

        if let Err(e) = self.draw_first_frame(clear) {
            return Err(self.abort(e));
        }
        if self.animation.is_none() {
            return Ok(());
        }
        debug!("animation {} started, {} ms per frame", handle.0, delay_ms);

        if wait {
            self.wait()?;
        }
        Ok(())
    }

    /// Blank the sink if asked and draw the live animation's first frame
    ///
    /// An empty producer is stopped without drawing.
    fn draw_first_frame(&mut self, clear: bool) -> Result<()> {
        if clear {
            self.sink.clear()?;
        }
        let frame = match self.animation.as_mut() {
            Some(animation) => animation.producer.next_frame(),
            None => return Ok(()),
        };
        match frame {
            Some(frame) => draw_frame(&mut self.sink, frame),
            None => {
                self.stop();
                Ok(())
            }
        }
    }

    fn advance(&mut self, handle: TimerHandle) -> Result<()> {
        let animation = match self.animation.as_mut() {
            Some(a) if a.handle == handle => a,
            _ => {
                debug!("dropping stale expiry {}", handle.0);
                return Ok(());
            }
        };
        let drawn = match animation.producer.next_frame() {
            Some(frame) => draw_frame(&mut self.sink, frame),
            None => {
                self.timer.cancel(handle);
                self.animation = None;
                debug!("animation {} complete", handle.0);
                return Ok(());
            }
        };
        drawn.map_err(|e| self.abort(e))
    }

    /// Drop the animation and blank the sink after a failure
    fn abort(&mut self, error: crate::Error) -> crate::Error {
        self.stop();
        // Best effort
        let _ = self.sink.clear();
        warn!("animation aborted: {}", error);
        error
    }

    fn draw_static(&mut self, img: &Image) -> Result<()> {
        draw_frame(&mut self.sink, img)
    }
}

/// Write a frame to the sink, clipped to its top-left corner
///
/// Sink pixels outside the frame are blanked.
fn draw_frame<S: PixelSink>(sink: &mut S, frame: &Image) -> Result<()> {
    for y in 0..sink.height() {
        for x in 0..sink.width() {
            let v = frame.pixel_or_blank(x as i32, y as i32);
            sink.set_pixel(x, y, v)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, IndexError, RangeError};
    use crate::icons;
    use crate::timer::testing::ManualClock;
    use crate::timer::SoftTimer;
    use glimmer_hal::{DeviceError, TimerError};

    /// Sink that records everything written to it
    struct RecordingSink {
        pixels: [[u8; 5]; 5],
        enabled: bool,
        writes: usize,
        clears: usize,
        /// Fail the write with this index (0-based)
        fail_at: Option<usize>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                pixels: [[0; 5]; 5],
                enabled: false,
                writes: 0,
                clears: 0,
                fail_at: None,
            }
        }

        fn frames(&self) -> usize {
            self.writes / 25
        }

        fn snapshot(&self) -> Image {
            let mut img = Image::blank();
            for y in 0..5 {
                for x in 0..5 {
                    img.set_pixel(x, y, self.pixels[y as usize][x as usize])
                        .unwrap();
                }
            }
            img
        }

        fn is_blank(&self) -> bool {
            self.pixels.iter().flatten().all(|&p| p == 0)
        }
    }

    impl PixelSink for RecordingSink {
        fn width(&self) -> u8 {
            5
        }

        fn height(&self) -> u8 {
            5
        }

        fn set_pixel(&mut self, x: u8, y: u8, brightness: u8) -> core::result::Result<(), DeviceError> {
            if self.fail_at == Some(self.writes) {
                self.fail_at = None;
                return Err(DeviceError::Hardware);
            }
            self.writes += 1;
            self.pixels[y as usize][x as usize] = brightness;
            Ok(())
        }

        fn get_pixel(&self, x: u8, y: u8) -> core::result::Result<u8, DeviceError> {
            Ok(self.pixels[y as usize][x as usize])
        }

        fn clear(&mut self) -> core::result::Result<(), DeviceError> {
            self.clears += 1;
            self.pixels = [[0; 5]; 5];
            Ok(())
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }
    }

    type TestDisplay<'a> = Display<'a, RecordingSink, SoftTimer<ManualClock, 4>, BuiltinFont>;

    fn display(font: &BuiltinFont) -> TestDisplay<'_> {
        Display::new(
            RecordingSink::new(),
            SoftTimer::new(ManualClock::new(0, 10)),
            font,
        )
    }

    fn no_wait() -> ShowOptions {
        ShowOptions {
            wait: false,
            ..ShowOptions::default()
        }
    }

    #[test]
    fn test_single_image_shown_immediately() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let heart = icons::HEART.image();
        d.show(Content::Image(&heart), ShowOptions::default()).unwrap();
        assert!(!d.is_animating());
        assert_eq!(d.sink().snapshot(), heart);
        assert_eq!(d.timer().pending(), 0);
    }

    #[test]
    fn test_small_image_clipped_and_padded() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let dot = Image::from_bytes(1, 1, &[7]).unwrap();
        d.set_pixel(4, 4, 9).unwrap();
        d.show(Content::Image(&dot), ShowOptions::default()).unwrap();
        assert_eq!(d.get_pixel(0, 0), Ok(7));
        assert_eq!(d.get_pixel(4, 4), Ok(0));
    }

    #[test]
    fn test_single_char_shown_immediately() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        d.show(Content::Text("A"), ShowOptions::default()).unwrap();
        assert!(!d.is_animating());
        assert_eq!(d.sink().snapshot(), Image::for_char(&font, b'A'));
    }

    #[test]
    fn test_empty_text_does_nothing() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        d.show(Content::Text(""), ShowOptions::default()).unwrap();
        assert_eq!(d.sink().writes, 0);
        assert!(!d.is_animating());
    }

    #[test]
    fn test_image_sequence_paced_by_timer() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let frames = icons::sequence(&[icons::YES, icons::NO]);
        let options = ShowOptions {
            delay_ms: Some(100),
            ..no_wait()
        };
        d.show(Content::Images(&frames), options).unwrap();
        assert!(d.is_animating());
        assert_eq!(d.sink().snapshot(), frames[0]);

        d.tick(99).unwrap();
        assert_eq!(d.sink().snapshot(), frames[0]);
        d.tick(100).unwrap();
        assert_eq!(d.sink().snapshot(), frames[1]);
        assert!(d.is_animating());

        // Exhausted: last frame stays, driver goes idle
        d.tick(200).unwrap();
        assert!(!d.is_animating());
        assert_eq!(d.sink().snapshot(), frames[1]);
        assert_eq!(d.timer().pending(), 0);
    }

    #[test]
    fn test_default_delay_from_config() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let frames = icons::sequence(&[icons::YES, icons::NO]);
        d.show(Content::Images(&frames), no_wait()).unwrap();
        d.tick(399).unwrap();
        assert_eq!(d.sink().frames(), 1);
        d.tick(400).unwrap();
        assert_eq!(d.sink().frames(), 2);
    }

    #[test]
    fn test_clear_flag_blanks_first_and_animates() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let heart = icons::HEART.image();
        let options = ShowOptions {
            clear: true,
            ..no_wait()
        };
        d.show(Content::Image(&heart), options).unwrap();
        assert_eq!(d.sink().clears, 1);
        assert!(d.is_animating());
        assert_eq!(d.sink().snapshot(), heart);
    }

    #[test]
    fn test_looping_cycles_characters() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let options = ShowOptions {
            delay_ms: Some(10),
            looping: true,
            ..no_wait()
        };
        d.show(Content::Characters("ab"), options).unwrap();
        let a = Image::for_char(&font, b'a');
        let b = Image::for_char(&font, b'b');
        for (i, expected) in [&b, &a, &b, &a].into_iter().enumerate() {
            d.tick(10 * (i as u32 + 1)).unwrap();
            assert_eq!(&d.sink().snapshot(), expected);
        }
        assert!(d.is_animating());
    }

    #[test]
    fn test_show_text_scrolls_and_waits() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let expected = ScrollingText::new("Hi", &font, false, false).pass_length();
        d.show(Content::Text("Hi"), ShowOptions::default()).unwrap();
        assert!(!d.is_animating());
        assert_eq!(d.sink().frames(), expected);
        assert!(d.sink().is_blank());
    }

    #[test]
    fn test_scroll_waits_for_completion() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let expected = ScrollingText::new("Glimmer", &font, true, false).pass_length();
        let options = ScrollOptions {
            monospace: true,
            ..ScrollOptions::default()
        };
        d.scroll("Glimmer", options).unwrap();
        assert!(!d.is_animating());
        assert_eq!(d.sink().frames(), expected);
        // Default scroll delay is 150 ms per column
        assert!(d.timer().now_ms() >= 150 * (expected as u32 - 1));
    }

    #[test]
    fn test_scroll_empty_text_animates() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        d.scroll("", ScrollOptions::default()).unwrap();
        assert_eq!(d.sink().frames(), 5);
    }

    #[test]
    fn test_new_show_cancels_scroll() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let options = ScrollOptions {
            wait: false,
            delay_ms: Some(10),
            ..ScrollOptions::default()
        };
        d.scroll("long text here", options).unwrap();
        d.tick(10).unwrap();
        d.tick(20).unwrap();
        assert_eq!(d.sink().frames(), 3);

        let sad = icons::SAD.image();
        d.show(Content::Image(&sad), no_wait()).unwrap();
        let writes = d.sink().writes;
        for t in 3..100 {
            d.tick(t * 10).unwrap();
        }
        assert_eq!(d.sink().writes, writes);
        assert_eq!(d.sink().snapshot(), sad);
    }

    #[test]
    fn test_stale_expiry_dropped() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let frames = icons::sequence(&[icons::YES, icons::NO]);
        let options = ShowOptions {
            delay_ms: Some(100),
            ..no_wait()
        };
        d.show(Content::Images(&frames), options).unwrap();
        // An entry the animation does not own expires first
        d.timer_mut().schedule(50, TimerMode::OneShot).unwrap();
        d.tick(50).unwrap();
        assert_eq!(d.sink().frames(), 1);
        assert!(d.is_animating());
    }

    #[test]
    fn test_sink_error_aborts_and_blanks() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let frames = icons::sequence(&[icons::YES, icons::NO, icons::HEART]);
        let options = ShowOptions {
            delay_ms: Some(10),
            ..no_wait()
        };
        d.show(Content::Images(&frames), options).unwrap();
        d.sink.fail_at = Some(d.sink().writes + 3);
        assert_eq!(d.tick(10), Err(Error::Device(DeviceError::Hardware)));
        assert!(!d.is_animating());
        assert!(d.sink().is_blank());
        assert_eq!(d.timer().pending(), 0);
        d.tick(1000).unwrap();
        assert!(d.sink().is_blank());
    }

    #[test]
    fn test_timer_full_reported() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        for _ in 0..4 {
            d.timer_mut().schedule(1000, TimerMode::OneShot).unwrap();
        }
        let frames = icons::sequence(&[icons::YES, icons::NO]);
        assert_eq!(
            d.show(Content::Images(&frames), no_wait()),
            Err(Error::Timer(TimerError::Full))
        );
        assert!(!d.is_animating());
    }

    #[test]
    fn test_failed_start_leaves_display_untouched() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let heart = icons::HEART.image();
        d.show(Content::Image(&heart), ShowOptions::default()).unwrap();
        let writes = d.sink().writes;

        for _ in 0..4 {
            d.timer_mut().schedule(1000, TimerMode::OneShot).unwrap();
        }
        let frames = icons::sequence(&[icons::YES, icons::NO]);
        let options = ShowOptions {
            clear: true,
            ..no_wait()
        };
        assert!(d.show(Content::Images(&frames), options).is_err());
        assert!(d.scroll("hi", ScrollOptions::default()).is_err());
        assert_eq!(d.sink().clears, 0);
        assert_eq!(d.sink().writes, writes);
        assert_eq!(d.sink().snapshot(), heart);
    }

    #[test]
    fn test_zero_delay_runs_at_one_ms() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let frames = icons::sequence(&[icons::YES, icons::NO]);
        let options = ShowOptions {
            delay_ms: Some(0),
            clear: true,
            ..no_wait()
        };
        d.show(Content::Images(&frames), options).unwrap();
        assert!(d.is_animating());
        assert_eq!(d.sink().snapshot(), frames[0]);
        d.tick(1).unwrap();
        assert_eq!(d.sink().snapshot(), frames[1]);

        let scroll = ScrollOptions {
            delay_ms: Some(0),
            ..ScrollOptions::default()
        };
        d.scroll("hi", scroll).unwrap();
        assert!(!d.is_animating());
    }

    #[test]
    fn test_empty_scroll_with_full_timer_reports() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        for _ in 0..4 {
            d.timer_mut().schedule(1000, TimerMode::OneShot).unwrap();
        }
        assert_eq!(
            d.scroll("", ScrollOptions::default()),
            Err(Error::Timer(TimerError::Full))
        );
        assert_eq!(d.sink().writes, 0);
    }

    #[test]
    fn test_pixel_access_validated() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        d.set_pixel(2, 3, 6).unwrap();
        assert_eq!(d.get_pixel(2, 3), Ok(6));
        assert_eq!(d.set_pixel(5, 0, 1), Err(Error::OutOfBounds(IndexError::TooLarge)));
        assert_eq!(d.get_pixel(0, -1), Err(Error::OutOfBounds(IndexError::Negative)));
        assert_eq!(d.set_pixel(0, 0, 10), Err(Error::OutOfRange(RangeError::Brightness)));
    }

    #[test]
    fn test_clear_stops_animation() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let frames = icons::sequence(&[icons::YES, icons::NO]);
        d.show(Content::Images(&frames), no_wait()).unwrap();
        d.clear().unwrap();
        assert!(!d.is_animating());
        assert!(d.sink().is_blank());
    }

    #[test]
    fn test_on_off_claims_pins() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let mut pins: PinArbiter<16> = PinArbiter::new();
        d.on(&mut pins).unwrap();
        assert!(d.is_on());
        for pin in [3, 4, 6, 7, 10] {
            assert_eq!(pins.mode(pin), Ok(PinMode::Display));
        }
        // Switching on twice is harmless
        d.on(&mut pins).unwrap();

        d.off(&mut pins).unwrap();
        assert!(!d.is_on());
        assert_eq!(pins.mode(3), Ok(PinMode::Unused));
    }

    #[test]
    fn test_on_claims_every_matrix_line() {
        let font = BuiltinFont::new();
        let config = DisplayConfig {
            display_pins: (2..=11).collect(),
            ..DisplayConfig::default()
        };
        let mut d = Display::with_config(
            RecordingSink::new(),
            SoftTimer::<_, 4>::new(ManualClock::new(0, 10)),
            &font,
            config,
        );
        let mut pins: PinArbiter<30> = PinArbiter::new();
        d.on(&mut pins).unwrap();
        for pin in 2..=11 {
            assert_eq!(pins.mode(pin), Ok(PinMode::Display));
        }
        // A row line is no longer free for other peripherals
        assert!(pins.check_acquire(5, PinMode::I2c).is_err());

        d.off(&mut pins).unwrap();
        for pin in 2..=11 {
            assert_eq!(pins.mode(pin), Ok(PinMode::Unused));
        }
    }

    #[test]
    fn test_on_conflict_changes_nothing() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let mut pins: PinArbiter<16> = PinArbiter::new();
        pins.acquire(7, PinMode::I2c).unwrap();
        assert_eq!(
            d.on(&mut pins),
            Err(Error::ResourceConflict {
                pin: 7,
                mode: PinMode::I2c
            })
        );
        assert!(!d.is_on());
        assert_eq!(pins.mode(3), Ok(PinMode::Unused));
    }

    #[test]
    fn test_into_parts_cancels() {
        let font = BuiltinFont::new();
        let mut d = display(&font);
        let frames = icons::sequence(&[icons::YES, icons::NO]);
        d.show(Content::Images(&frames), no_wait()).unwrap();
        let (_sink, timer) = d.into_parts();
        assert_eq!(timer.pending(), 0);
    }
}
