//! HD44780 16×2 character LCD behind a PCF8574 I²C backpack.
//!
//! The backpack exposes the controller's 4-bit bus on the expander's
//! output port:
//!
//! | Bit | Signal    |
//! |-----|-----------|
//! | P0  | RS        |
//! | P1  | RW (tied write) |
//! | P2  | EN        |
//! | P3  | Backlight |
//! | P4–P7 | D4–D7   |
//!
//! Generic over [`embedded_hal::i2c::I2c`] and [`DelayNs`] so the same
//! driver runs on the ESP-IDF I²C driver and on a recording bus in tests.
//! Text is clipped at the right edge; `°` maps to the controller's degree
//! glyph and any other non-ASCII character prints as `?`.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::warn;

use crate::app::ports::DisplayPort;

pub const COLS: u8 = 16;
pub const ROWS: u8 = 2;

// Expander bits
const RS: u8 = 0b0000_0001;
const EN: u8 = 0b0000_0100;
const BACKLIGHT: u8 = 0b0000_1000;

// Controller commands
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE_INCREMENT: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

const ROW_OFFSETS: [u8; ROWS as usize] = [0x00, 0x40];

/// ROM code A00 degree sign.
const GLYPH_DEGREE: u8 = 0xDF;

pub struct Lcd1602<I2C, D> {
    i2c: I2C,
    delay: D,
    addr: u8,
    backlight: bool,
    col: u8,
}

impl<I2C: I2c, D: DelayNs> Lcd1602<I2C, D> {
    pub fn new(i2c: I2C, delay: D, addr: u8) -> Self {
        Self {
            i2c,
            delay,
            addr,
            backlight: true,
            col: 0,
        }
    }

    /// Power-on initialisation into 4-bit, two-line mode, display on,
    /// cursor hidden, cleared.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        self.delay.delay_ms(50);
        self.expander_write(0)?;

        // Three 8-bit function sets resynchronise the nibble phase
        // whatever state the controller woke up in.
        self.write_nibble(0x30)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30)?;
        self.delay.delay_us(150);
        self.write_nibble(0x20)?;

        self.command(CMD_FUNCTION_4BIT_2LINE)?;
        self.command(CMD_DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE_INCREMENT)
    }

    pub fn clear(&mut self) -> Result<(), I2C::Error> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(2);
        self.col = 0;
        Ok(())
    }

    /// Out-of-range positions are pinned to the last row / column.
    pub fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), I2C::Error> {
        let row = row.min(ROWS - 1);
        let col = col.min(COLS - 1);
        self.col = col;
        self.command(CMD_SET_DDRAM | (ROW_OFFSETS[row as usize] + col))
    }

    pub fn print(&mut self, text: &str) -> Result<(), I2C::Error> {
        for ch in text.chars() {
            if self.col >= COLS {
                break;
            }
            self.send(glyph(ch), RS)?;
            self.col += 1;
        }
        Ok(())
    }

    pub fn set_backlight(&mut self, on: bool) -> Result<(), I2C::Error> {
        self.backlight = on;
        self.expander_write(0)
    }

    fn command(&mut self, byte: u8) -> Result<(), I2C::Error> {
        self.send(byte, 0)
    }

    fn send(&mut self, byte: u8, mode: u8) -> Result<(), I2C::Error> {
        self.write_nibble((byte & 0xF0) | mode)?;
        self.write_nibble((byte << 4) | mode)
    }

    fn write_nibble(&mut self, bits: u8) -> Result<(), I2C::Error> {
        self.expander_write(bits | EN)?;
        self.delay.delay_us(1);
        self.expander_write(bits & !EN)?;
        self.delay.delay_us(50);
        Ok(())
    }

    fn expander_write(&mut self, bits: u8) -> Result<(), I2C::Error> {
        let bl = if self.backlight { BACKLIGHT } else { 0 };
        self.i2c.write(self.addr, &[bits | bl])
    }
}

fn glyph(ch: char) -> u8 {
    match ch {
        '\u{00b0}' => GLYPH_DEGREE,
        c if c.is_ascii() && !c.is_ascii_control() => c as u8,
        _ => b'?',
    }
}

impl<I2C: I2c, D: DelayNs> DisplayPort for Lcd1602<I2C, D> {
    fn clear(&mut self) {
        if let Err(e) = Lcd1602::clear(self) {
            warn!("LCD clear failed: {:?}", e);
        }
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        if let Err(e) = Lcd1602::set_cursor(self, col, row) {
            warn!("LCD set_cursor({}, {}) failed: {:?}", col, row, e);
        }
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = Lcd1602::print(self, text) {
            warn!("LCD print {:?} failed: {:?}", text, e);
        }
    }
}
