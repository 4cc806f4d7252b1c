use crate::error::Result;
use crate::message::*;

pub trait WindowSystem {
    /// Blocks until the thread's queue yields a message or the quit signal.
    fn next_message(&mut self) -> Result<NextMessage>;
    fn translate_message(&mut self, message: &Message);
    fn dispatch_message(&mut self, message: &Message) -> isize;
    fn post_quit(&self, exit_code: i32);
    fn default_window_procedure(&self, message: &Message) -> isize;
}

pub trait WindowProcedure {
    fn handle<S: WindowSystem + ?Sized>(&self, os: &S, message: &Message) -> isize;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct QuitOnDestroy;

impl WindowProcedure for QuitOnDestroy {
    fn handle<S: WindowSystem + ?Sized>(&self, os: &S, message: &Message) -> isize {
        match message.code {
            WM_DESTROY => {
                os.post_quit(0);
                0
            }
            _ => os.default_window_procedure(message),
        }
    }
}

pub fn window_procedure<S: WindowSystem + ?Sized>(os: &S, message: &Message) -> isize {
    QuitOnDestroy.handle(os, message)
}

/// Fetch, translate and dispatch until the quit signal arrives. Returns the
/// exit code carried by the quit message.
pub fn run_message_loop<S: WindowSystem + ?Sized>(os: &mut S) -> Result<i32> {
    loop {
        match os.next_message()? {
            NextMessage::Quit(exit_code) => {
                log::debug!("quit received, exit code {}", exit_code);
                return Ok(exit_code);
            }
            NextMessage::Message(msg) => {
                os.translate_message(&msg);
                os.dispatch_message(&msg);
            }
        }
    }
}
