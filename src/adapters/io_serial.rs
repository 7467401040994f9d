// src/adapters/io_serial.rs

use crate::common::hal_traits::RadarSerial;
use embedded_io::{ErrorType, Read, ReadReady, Write};

/// Wraps any UART implementing the `embedded-io` traits.
///
/// `embedded-io` only reports whether data is ready, so `bytes_available`
/// returns 1 or 0.
#[derive(Debug)]
pub struct IoSerial<T> {
    inner: T,
}

impl<T> IoSerial<T> {
    pub fn new(inner: T) -> Self {
        IoSerial { inner }
    }

    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Release the underlying UART.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> RadarSerial for IoSerial<T>
where
    T: Read + ReadReady + Write,
{
    type Error = <T as ErrorType>::Error;

    fn bytes_available(&mut self) -> usize {
        match self.inner.read_ready() {
            Ok(true) => 1,
            Ok(false) => 0,
            Err(e) => {
                log::warn!("ld2420: read_ready failed: {:?}", e);
                0
            }
        }
    }

    fn read_byte(&mut self) -> nb::Result<u8, Self::Error> {
        if !self.inner.read_ready().map_err(nb::Error::Other)? {
            return Err(nb::Error::WouldBlock);
        }
        let mut byte = [0u8; 1];
        match self.inner.read(&mut byte) {
            Ok(1) => Ok(byte[0]),
            Ok(_) => Err(nb::Error::WouldBlock),
            Err(e) => Err(nb::Error::Other(e)),
        }
    }

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        match self.inner.write(&[byte]) {
            Ok(1) => Ok(()),
            Ok(_) => Err(nb::Error::WouldBlock),
            Err(e) => Err(nb::Error::Other(e)),
        }
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.inner.flush().map_err(nb::Error::Other)
    }
}
