use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use windows::core::{PCWSTR, PWSTR};
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Printing::{
    EnumPrintersW, GetDefaultPrinterW, SetDefaultPrinterW, PRINTER_ENUM_CONNECTIONS,
    PRINTER_ENUM_LOCAL, PRINTER_INFO_4W,
};
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_HIDE;

use crate::error::GalleryError;
use crate::print::PrintQueue;

// ShellExecuteW reports success with any value above 32.
const SHELL_EXECUTE_OK: isize = 32;

/// Prints through the shell `print` / `printto` verbs of the file's registered handler.
#[derive(Debug, Default)]
pub struct ShellPrintQueue;

impl PrintQueue for ShellPrintQueue {
    fn printers(&self) -> Result<Vec<String>, GalleryError> {
        let flags = PRINTER_ENUM_LOCAL | PRINTER_ENUM_CONNECTIONS;
        let mut needed = 0_u32;
        let mut returned = 0_u32;

        // The sizing call fails with ERROR_INSUFFICIENT_BUFFER and fills `needed`.
        let _ = unsafe {
            EnumPrintersW(flags, PCWSTR::null(), 4, None, &mut needed, &mut returned)
        };
        if needed == 0 {
            return Ok(Vec::new());
        }

        let word = std::mem::size_of::<u64>();
        let mut storage = vec![0_u64; (needed as usize).div_ceil(word)];
        let buffer = unsafe {
            std::slice::from_raw_parts_mut(storage.as_mut_ptr().cast::<u8>(), needed as usize)
        };
        unsafe {
            EnumPrintersW(
                flags,
                PCWSTR::null(),
                4,
                Some(buffer),
                &mut needed,
                &mut returned,
            )
        }
        .map_err(|error| GalleryError::Print(format!("failed to enumerate printers: {error}")))?;

        let infos = unsafe {
            std::slice::from_raw_parts(
                storage.as_ptr().cast::<PRINTER_INFO_4W>(),
                returned as usize,
            )
        };
        Ok(infos
            .iter()
            .filter(|info| !info.pPrinterName.is_null())
            .filter_map(|info| unsafe { info.pPrinterName.to_string() }.ok())
            .collect())
    }

    fn default_printer(&self) -> Result<Option<String>, GalleryError> {
        let mut len = 0_u32;
        let _ = unsafe { GetDefaultPrinterW(PWSTR::null(), &mut len) };
        if len == 0 {
            return Ok(None);
        }

        let mut buffer = vec![0_u16; len as usize];
        let ok = unsafe { GetDefaultPrinterW(PWSTR(buffer.as_mut_ptr()), &mut len) };
        if !ok.as_bool() {
            return Ok(None);
        }

        let end = buffer.iter().position(|&unit| unit == 0).unwrap_or(buffer.len());
        Ok(Some(String::from_utf16_lossy(&buffer[..end])))
    }

    fn set_default_printer(&self, name: &str) -> Result<(), GalleryError> {
        let printer = wide(OsStr::new(name));
        let ok = unsafe { SetDefaultPrinterW(PCWSTR(printer.as_ptr())) };
        if !ok.as_bool() {
            return Err(GalleryError::Print(format!(
                "failed to make {name} the default printer"
            )));
        }
        Ok(())
    }

    fn print_file(&self, path: &Path, printer: Option<&str>) -> Result<(), GalleryError> {
        let file = wide(path.as_os_str());
        let (verb, parameters) = match printer {
            Some(name) => ("printto", Some(wide(OsStr::new(&format!("\"{name}\""))))),
            None => ("print", None),
        };
        let verb = wide(OsStr::new(verb));
        let directory = wide(OsStr::new("."));

        let instance = unsafe {
            ShellExecuteW(
                HWND::default(),
                PCWSTR(verb.as_ptr()),
                PCWSTR(file.as_ptr()),
                parameters
                    .as_ref()
                    .map_or(PCWSTR::null(), |value| PCWSTR(value.as_ptr())),
                PCWSTR(directory.as_ptr()),
                SW_HIDE,
            )
        };

        let code = instance.0 as isize;
        if code <= SHELL_EXECUTE_OK {
            return Err(GalleryError::Print(format!(
                "shell print of {} failed with code {code}",
                path.display()
            )));
        }
        Ok(())
    }
}

fn wide(value: &OsStr) -> Vec<u16> {
    value.encode_wide().chain(std::iter::once(0)).collect()
}
