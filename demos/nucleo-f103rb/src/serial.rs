use core::fmt;

use embassy_stm32::mode::Blocking;
use embassy_stm32::usart::UartTx;

/// Progress log sink on the ST-Link virtual COM port
pub struct SerialLog<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> SerialLog<'d> {
    pub fn new(tx: UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl fmt::Write for SerialLog<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.tx
            .blocking_write(s.as_bytes())
            .map_err(|_| fmt::Error)
    }
}
