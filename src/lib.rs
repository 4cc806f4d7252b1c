pub mod config;
pub mod error;
pub mod message;
pub mod window_proc;
#[cfg(windows)]
pub mod win32;

pub use error::{Error, Result};

use config::AppConfig;

/// Registers the class, opens the window, pumps messages until it is closed and
/// says goodbye. Returns the exit code posted with the quit signal.
#[cfg(windows)]
pub fn run(config: &AppConfig) -> Result<i32> {
    use crate::win32::*;
    use crate::window_proc::{run_message_loop, QuitOnDestroy};

    let class = register_window_class::<QuitOnDestroy>(&config.class_name)?;
    let window = create_window(&class, &config.window)?;
    show_window(window);

    let exit_code = run_message_loop(&mut Win32::new())?;
    log::info!("message loop finished with exit code {}", exit_code);

    message_box(&config.farewell.text, &config.farewell.caption)?;
    Ok(exit_code)
}

#[cfg(not(windows))]
pub fn run(_config: &AppConfig) -> Result<i32> {
    Err(Error::Unsupported)
}
