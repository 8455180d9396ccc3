//! Executable validation and metadata extraction.
//!
//! Consumed by the shortcut-creation flow for validation and display
//! preview; verification does not depend on this module.

use crate::config::ShortcutConfig;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Display metadata extracted from an executable.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExeInfo {
    pub version: String,
    pub description: String,
    pub product_name: String,
    pub company: String,
    /// Shortcut name suggested to the user: the product name when known,
    /// otherwise the file stem.
    pub suggested_name: String,
}

/// Verify that a file is a launchable Windows executable.
///
/// The file must exist and carry one of the accepted extensions; `.exe`
/// files must additionally start with the `MZ` PE signature.
pub fn is_valid_exe(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }

    let Some(ext) = path.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
        return false;
    };
    if !ShortcutConfig::EXE_EXTENSIONS.contains(&ext.as_str()) {
        return false;
    }

    if ext == "exe" {
        return has_pe_signature(path);
    }
    true
}

fn has_pe_signature(path: &Path) -> bool {
    let mut header = [0u8; 2];
    match fs::File::open(path).and_then(|mut f| f.read_exact(&mut header)) {
        Ok(()) => &header == ShortcutConfig::PE_SIGNATURE,
        Err(_) => false,
    }
}

/// Extract version metadata from an executable.
///
/// # Platform Behavior
/// - **Windows**: queries the version-info resource
///   (`GetFileVersionInfoW`/`VerQueryValueW`)
/// - **Linux/macOS**: no version resources exist; returns the fallback
///
/// Never fails: when no version info can be read, the fallback carries empty
/// fields and a `suggested_name` derived from the file stem.
pub fn get_exe_info(path: &Path) -> ExeInfo {
    #[cfg(windows)]
    {
        if let Some(info) = version_info::query(path) {
            return info;
        }
    }

    fallback_info(path)
}

fn fallback_info(path: &Path) -> ExeInfo {
    ExeInfo {
        suggested_name: path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
        ..ExeInfo::default()
    }
}

#[cfg(windows)]
mod version_info {
    //! Version-info resource queries via the Win32 version APIs.

    use super::ExeInfo;
    use std::os::windows::ffi::OsStrExt;
    use std::path::Path;
    use windows_sys::Win32::Storage::FileSystem::{
        GetFileVersionInfoSizeW, GetFileVersionInfoW, VerQueryValueW, VS_FIXEDFILEINFO,
    };

    fn wide(s: &std::ffi::OsStr) -> Vec<u16> {
        s.encode_wide().chain(std::iter::once(0)).collect()
    }

    fn wide_str(s: &str) -> Vec<u16> {
        s.encode_utf16().chain(std::iter::once(0)).collect()
    }

    /// Load the whole version-info block of `path`.
    #[allow(unsafe_code)]
    fn load_block(path: &Path) -> Option<Vec<u8>> {
        let path_w = wide(path.as_os_str());

        // SAFETY: path_w is NUL-terminated and outlives both calls; `data`
        // is sized exactly as GetFileVersionInfoSizeW reported.
        unsafe {
            let size = GetFileVersionInfoSizeW(path_w.as_ptr(), std::ptr::null_mut());
            if size == 0 {
                return None;
            }
            let mut data = vec![0u8; size as usize];
            if GetFileVersionInfoW(path_w.as_ptr(), 0, size, data.as_mut_ptr().cast()) == 0 {
                return None;
            }
            Some(data)
        }
    }

    /// Query one sub-block, returning its bytes as (pointer, length).
    ///
    /// The pointer aims into `data` and is valid as long as `data` is.
    #[allow(unsafe_code)]
    fn query_value(data: &[u8], sub_block: &str) -> Option<(*const core::ffi::c_void, u32)> {
        let sub_block_w = wide_str(sub_block);
        let mut value: *mut core::ffi::c_void = std::ptr::null_mut();
        let mut len: u32 = 0;

        // SAFETY: `data` holds a complete version-info block and
        // sub_block_w is NUL-terminated; VerQueryValueW only hands back a
        // pointer into `data`.
        let ok = unsafe {
            VerQueryValueW(
                data.as_ptr().cast(),
                sub_block_w.as_ptr(),
                &mut value,
                &mut len,
            )
        };
        (ok != 0 && !value.is_null()).then_some((value as *const _, len))
    }

    /// Read one entry of the StringFileInfo table, empty when absent.
    #[allow(unsafe_code)]
    fn string_value(data: &[u8], name: &str) -> String {
        // First entry of the translation table picks the string block.
        let Some((trans_ptr, trans_len)) = query_value(data, "\\VarFileInfo\\Translation") else {
            return String::new();
        };
        if (trans_len as usize) < 4 {
            return String::new();
        }

        // SAFETY: the translation value is at least two u16s, as checked
        // above, and lives inside `data`.
        let (lang, codepage) = unsafe {
            let words = trans_ptr as *const u16;
            (*words, *words.add(1))
        };

        let block = format!("\\StringFileInfo\\{lang:04x}{codepage:04x}\\{name}");
        let Some((value_ptr, value_len)) = query_value(data, &block) else {
            return String::new();
        };

        // SAFETY: VerQueryValueW reports the string value's length in
        // u16 characters; the value lives inside `data`.
        let chars =
            unsafe { std::slice::from_raw_parts(value_ptr as *const u16, value_len as usize) };
        String::from_utf16_lossy(chars)
            .trim_end_matches('\0')
            .to_string()
    }

    /// Query the version-info resource. `None` when the file carries none.
    #[allow(unsafe_code)]
    pub(super) fn query(path: &Path) -> Option<ExeInfo> {
        let data = load_block(path)?;

        let (fixed_ptr, _) = query_value(&data, "\\")?;
        // SAFETY: the root sub-block of a version-info block is a
        // VS_FIXEDFILEINFO living inside `data`.
        let fixed = unsafe { &*(fixed_ptr as *const VS_FIXEDFILEINFO) };
        let version = format!(
            "{}.{}.{}.{}",
            fixed.dwFileVersionMS >> 16,
            fixed.dwFileVersionMS & 0xffff,
            fixed.dwFileVersionLS >> 16,
            fixed.dwFileVersionLS & 0xffff,
        );

        let product_name = string_value(&data, "ProductName");
        let suggested_name = if product_name.is_empty() {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            product_name.clone()
        };

        Some(ExeInfo {
            version,
            description: string_value(&data, "FileDescription"),
            product_name,
            company: string_value(&data, "CompanyName"),
            suggested_name,
        })
    }
}
