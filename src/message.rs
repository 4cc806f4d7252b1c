pub const WM_DESTROY: u32 = 0x0002;
pub const WM_CLOSE: u32 = 0x0010;
pub const WM_QUIT: u32 = 0x0012;

/// Non-owning reference to an OS window. The OS destroys the window when it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Message {
    pub window: WindowHandle,
    pub code: u32,
    pub wparam: usize,
    pub lparam: isize,
}

impl Message {
    pub fn new(window: WindowHandle, code: u32, wparam: usize, lparam: isize) -> Self {
        Self { window, code, wparam, lparam }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextMessage {
    Message(Message),
    /// The queue delivered the quit signal with this exit code.
    Quit(i32),
}
