//! Multiplexed matrix scanning
//!
//! Only one row is lit at a time. Each row is held for `MAX_BRIGHTNESS`
//! PWM phases; in phase `p` a column is lit when its pixel's brightness
//! exceeds `p`, so a pixel of brightness `b` is on for `b` of every
//! `MAX_BRIGHTNESS` phases.

use glimmer_hal::{OutputPin, PixelSink, MAX_BRIGHTNESS};

use crate::buffer::FrameBuffer;

/// Software-PWM scan driver for a `ROWS × COLS` matrix
pub struct MatrixScanner<R, C, const ROWS: usize, const COLS: usize>
where
    R: OutputPin,
    C: OutputPin,
{
    rows: [R; ROWS],
    cols: [C; COLS],
    /// Row lit by the next step
    row: usize,
    /// PWM phase of the next step, `0..MAX_BRIGHTNESS`
    phase: u8,
}

impl<R, C, const ROWS: usize, const COLS: usize> MatrixScanner<R, C, ROWS, COLS>
where
    R: OutputPin,
    C: OutputPin,
{
    /// Steps needed to refresh every row once at full PWM resolution
    pub const STEPS_PER_FRAME: usize = ROWS * MAX_BRIGHTNESS as usize;

    /// Take ownership of the row and column lines and switch every LED off
    pub fn new(rows: [R; ROWS], cols: [C; COLS]) -> Self {
        let mut scanner = Self {
            rows,
            cols,
            row: 0,
            phase: 0,
        };
        scanner.blank();
        scanner
    }

    /// Drive one row for one PWM phase
    pub fn scan_step(&mut self, frame: &FrameBuffer<COLS, ROWS>) {
        // Row off before the columns change, to avoid ghosting
        for r in self.rows.iter_mut() {
            r.set_low();
        }

        if frame.is_enabled() {
            if let Some(levels) = frame.row(self.row) {
                for (c, &level) in self.cols.iter_mut().zip(levels.iter()) {
                    c.set_state(level <= self.phase);
                }
                self.rows[self.row].set_high();
            }
        } else {
            for c in self.cols.iter_mut() {
                c.set_high();
            }
        }

        self.phase += 1;
        if self.phase >= MAX_BRIGHTNESS {
            self.phase = 0;
            self.row = (self.row + 1) % ROWS;
        }
    }

    /// Switch every LED off and restart at the first row
    pub fn blank(&mut self) {
        for r in self.rows.iter_mut() {
            r.set_low();
        }
        for c in self.cols.iter_mut() {
            c.set_high();
        }
        self.row = 0;
        self.phase = 0;
    }

    /// Row currently selected for the next step
    pub fn current_row(&self) -> usize {
        self.row
    }

    /// Release the row and column lines
    pub fn release(mut self) -> ([R; ROWS], [C; COLS]) {
        self.blank();
        (self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_hal::PixelSink;

    #[derive(Debug, Default)]
    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    type Scanner = MatrixScanner<MockPin, MockPin, 2, 3>;

    fn scanner() -> Scanner {
        MatrixScanner::new(Default::default(), Default::default())
    }

    /// Columns lit (driven low) while the given row is high
    fn lit(scanner: &Scanner) -> [bool; 3] {
        let mut out = [false; 3];
        for (o, c) in out.iter_mut().zip(scanner.cols.iter()) {
            *o = c.is_set_low();
        }
        out
    }

    #[test]
    fn test_new_blanks() {
        let s = scanner();
        assert!(s.rows.iter().all(|r| r.is_set_low()));
        assert!(s.cols.iter().all(|c| c.is_set_high()));
    }

    #[test]
    fn test_pwm_duty_matches_brightness() {
        let mut s = scanner();
        let mut fb: FrameBuffer<3, 2> = FrameBuffer::new();
        fb.set_enabled(true);
        fb.set_pixel(0, 0, 9).unwrap();
        fb.set_pixel(1, 0, 3).unwrap();

        let mut on = [0usize; 3];
        for _ in 0..MAX_BRIGHTNESS {
            assert_eq!(s.current_row(), 0);
            s.scan_step(&fb);
            assert!(s.rows[0].is_set_high());
            assert!(s.rows[1].is_set_low());
            for (n, l) in on.iter_mut().zip(lit(&s)) {
                *n += l as usize;
            }
        }
        assert_eq!(on, [9, 3, 0]);
        assert_eq!(s.current_row(), 1);
    }

    #[test]
    fn test_rows_cycle() {
        let mut s = scanner();
        let mut fb: FrameBuffer<3, 2> = FrameBuffer::new();
        fb.set_enabled(true);
        for _ in 0..Scanner::STEPS_PER_FRAME {
            s.scan_step(&fb);
        }
        assert_eq!(s.current_row(), 0);
    }

    #[test]
    fn test_disabled_drives_nothing() {
        let mut s = scanner();
        let mut fb: FrameBuffer<3, 2> = FrameBuffer::new();
        fb.set_pixel(0, 0, 9).unwrap();
        s.scan_step(&fb);
        assert!(s.rows.iter().all(|r| r.is_set_low()));
        assert!(s.cols.iter().all(|c| c.is_set_high()));
    }

    #[test]
    fn test_release_blanks() {
        let mut s = scanner();
        let mut fb: FrameBuffer<3, 2> = FrameBuffer::new();
        fb.set_enabled(true);
        fb.set_pixel(2, 0, 9).unwrap();
        s.scan_step(&fb);
        let (rows, cols) = s.release();
        assert!(rows.iter().all(|r| r.is_set_low()));
        assert!(cols.iter().all(|c| c.is_set_high()));
    }
}
