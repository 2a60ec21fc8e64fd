use std::cell::RefCell;
use std::io::{Result as IoResult, Write};
use std::rc::Rc;

/// Memory-backed writer whose clones all append to the same buffer.
///
/// Lets a reader's prompts and the interpreter's own output land in one
/// transcript, in the order they were written.
#[derive(Clone, Default)]
pub struct SharedWriter {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl SharedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.borrow()).into_owned()
    }
}

impl Write for SharedWriter {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}
