use widestring::U16CString;
use windows::{
    core::*, Win32::Foundation::*,
    Win32::Graphics::Gdi::*,
    Win32::System::LibraryLoader::*,
    Win32::UI::WindowsAndMessaging::*,
};

use crate::config::WindowConfig;
use crate::error::{Error, Result};
use crate::message::{Message, NextMessage, WindowHandle};
use crate::window_proc::{WindowProcedure, WindowSystem};

const _: () = assert!(crate::message::WM_DESTROY == WM_DESTROY);
const _: () = assert!(crate::message::WM_CLOSE == WM_CLOSE);
const _: () = assert!(crate::message::WM_QUIT == WM_QUIT);

fn wide(s: &str) -> Result<U16CString> {
    U16CString::from_str(s).map_err(|_| Error::InvalidString(s.to_string()))
}

fn last_error() -> u32 {
    unsafe { GetLastError() }.0
}

fn raw_parts(message: &Message) -> (HWND, u32, WPARAM, LPARAM) {
    (HWND(message.window.0), message.code, WPARAM(message.wparam), LPARAM(message.lparam))
}

extern "system" fn wndproc<P: WindowProcedure + Default>(
    window: HWND, message: u32, wparam: WPARAM, lparam: LPARAM, ) -> LRESULT {
    let msg = Message::new(WindowHandle(window.0), message, wparam.0, lparam.0);
    LRESULT(P::default().handle(&Win32::new(), &msg))
}

#[derive(Default)]
pub struct Win32 {
    current: MSG,
}

impl Win32 {
    pub fn new() -> Self {
        Self::default()
    }

    // Keeps time and cursor position of the last fetched message.
    fn raw(&self, message: &Message) -> MSG {
        let (hwnd, code, wparam, lparam) = raw_parts(message);
        MSG { hwnd, message: code, wParam: wparam, lParam: lparam, ..self.current }
    }
}

impl WindowSystem for Win32 {
    fn next_message(&mut self) -> Result<NextMessage> {
        let ret = unsafe { GetMessageW(&mut self.current, None, 0, 0) };
        match ret.0 {
            -1 => Err(Error::GetMessage { code: last_error() }),
            0 => Ok(NextMessage::Quit(self.current.wParam.0 as i32)),
            _ => Ok(NextMessage::Message(Message::new(
                WindowHandle(self.current.hwnd.0),
                self.current.message,
                self.current.wParam.0,
                self.current.lParam.0,
            ))),
        }
    }

    fn translate_message(&mut self, message: &Message) {
        let msg = self.raw(message);
        unsafe { TranslateMessage(&msg) };
    }

    fn dispatch_message(&mut self, message: &Message) -> isize {
        let msg = self.raw(message);
        unsafe { DispatchMessageW(&msg) }.0
    }

    fn post_quit(&self, exit_code: i32) {
        unsafe { PostQuitMessage(exit_code) };
    }

    fn default_window_procedure(&self, message: &Message) -> isize {
        let (hwnd, code, wparam, lparam) = raw_parts(message);
        unsafe { DefWindowProcW(hwnd, code, wparam, lparam) }.0
    }
}

/// A class registered with the OS. The class is never unregistered; process
/// exit reclaims it.
pub struct RegisteredClass {
    name: U16CString,
    instance: HINSTANCE,
}

impl RegisteredClass {
    pub fn name(&self) -> String {
        self.name.to_string_lossy()
    }
}

/// Registering a name that already exists in this process is accepted only
/// when the existing class has the same procedure and style.
pub fn register_window_class<P: WindowProcedure + Default>(name: &str) -> Result<RegisteredClass> {
    let class_name = wide(name)?;
    let instance = unsafe { GetModuleHandleW(None) }?;

    let wcex = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(wndproc::<P>),
        hInstance: instance,
        hbrBackground: HBRUSH(unsafe { GetStockObject(WHITE_BRUSH) }.0),
        lpszClassName: PCWSTR(class_name.as_ptr()),
        ..Default::default()
    };
    if unsafe { RegisterClassExW(&wcex) } == 0 {
        let code = last_error();
        if code != ERROR_CLASS_ALREADY_EXISTS.0 || !same_class(instance, &wcex) {
            return Err(Error::RegisterClass { name: name.to_string(), code });
        }
        log::warn!("window class {:?} is already registered", name);
    } else {
        log::info!("registered window class {:?}", name);
    }

    Ok(RegisteredClass { name: class_name, instance })
}

fn same_class(instance: HINSTANCE, wcex: &WNDCLASSEXW) -> bool {
    let mut existing = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        ..Default::default()
    };
    if !unsafe { GetClassInfoExW(instance, wcex.lpszClassName, &mut existing) }.as_bool() {
        return false;
    }
    existing.style == wcex.style
        && existing.lpfnWndProc.map(|f| f as usize) == wcex.lpfnWndProc.map(|f| f as usize)
}

pub fn create_window(class: &RegisteredClass, config: &WindowConfig) -> Result<WindowHandle> {
    let title = wide(&config.title)?;

    let hwnd = unsafe { CreateWindowExW(
        Default::default(),
        PCWSTR(class.name.as_ptr()),
        PCWSTR(title.as_ptr()),
        WS_OVERLAPPEDWINDOW | WS_CAPTION,
        config.x, config.y, config.width, config.height,
        None, None, class.instance, None
    ) };
    if hwnd.0 == 0 {
        return Err(Error::CreateWindow { title: config.title.clone(), code: last_error() });
    }

    log::info!("created window {:?} at ({}, {}) size {}x{}",
        config.title, config.x, config.y, config.width, config.height);
    Ok(WindowHandle(hwnd.0))
}

pub fn show_window(window: WindowHandle) {
    unsafe { ShowWindow(HWND(window.0), SW_SHOWNORMAL) };
    unsafe { UpdateWindow(HWND(window.0)) };
}

pub fn message_box(text: &str, caption: &str) -> Result<i32> {
    let text = wide(text)?;
    let caption = wide(caption)?;
    Ok(unsafe { MessageBoxW(None, PCWSTR(text.as_ptr()), PCWSTR(caption.as_ptr()), MB_OK) }.0)
}
