//! Byte stream output
//!
//! Bytes come from raw words, least significant byte first. Leftover bytes
//! of the last word are kept between calls, so the concatenated output does
//! not depend on how it is split into reads. This buffer is separate from
//! the `uint32` half-word buffer; mixing the two never loses or repeats a
//! byte of either stream.

use std::io;

use crate::rng::Generator;

impl Generator {
    /// Fill `buf` with random bytes and return `buf.len()`
    ///
    /// # Example
    /// ```
    /// use sfc_rand::Generator;
    ///
    /// let mut bulk = [0u8; 10];
    /// Generator::new(5).read(&mut bulk);
    ///
    /// let mut rng = Generator::new(5);
    /// let mut pieces = [0u8; 10];
    /// let (head, tail) = pieces.split_at_mut(3);
    /// rng.read(head);
    /// rng.read(tail);
    /// assert_eq!(bulk, pieces);
    /// ```
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut word = self.stream_word;
        let mut unread = self.stream_unread;
        for byte in buf.iter_mut() {
            if unread == 0 {
                word = self.engine.next_u64();
                unread = 8;
            }
            *byte = word as u8;
            word >>= 8;
            unread -= 1;
        }
        self.stream_word = word;
        self.stream_unread = unread;
        buf.len()
    }
}

impl io::Read for Generator {
    /// Always fills the whole buffer; never fails
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(Generator::read(self, buf))
    }
}
