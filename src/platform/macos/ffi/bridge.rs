//! Thin layer over objc2 for the dynamic `msg_send!` style used throughout
//! the platform code.
//!
//! Everything here is re-exported so callers need a single import:
//! `use crate::platform::macos::ffi::bridge::*`.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::CString;

use objc2::encode::Encode;
use objc2::runtime::Ivar;

// ============================================================================
// Core objc2 re-exports
// ============================================================================

pub use objc2::rc::Retained;
pub use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
pub use objc2::{msg_send, sel, ClassType};
pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

pub use block2::RcBlock;

// ============================================================================
// Type aliases
// ============================================================================

/// Untyped Objective-C object pointer.
pub type id = *mut AnyObject;

pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES` (the `BOOL` type, not Rust `bool`).
pub const YES: Bool = Bool::YES;

/// Objective-C `NO`.
pub const NO: Bool = Bool::NO;

// ============================================================================
// Helper functions
// ============================================================================

/// The shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![get_class("NSApplication"), sharedApplication] }
}

/// Create an NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Look up a class registered with the runtime.
///
/// Only used with AppKit/Foundation classes and classes this crate
/// registers itself, so a miss is a programming error.
pub fn get_class(name: &str) -> &'static AnyClass {
    CString::new(name)
        .ok()
        .and_then(|c_name| AnyClass::get(&c_name))
        .unwrap_or_else(|| panic!("Objective-C class '{name}' not registered"))
}

// ============================================================================
// Object trait extensions for ivar access
// ============================================================================

fn ivar_named<'a>(cls: &'a AnyClass, name: &str) -> &'a Ivar {
    CString::new(name)
        .ok()
        .and_then(|c_name| cls.instance_variable(&c_name))
        .unwrap_or_else(|| panic!("ivar '{name}' not found on {}", cls.name().to_string_lossy()))
}

/// Instance variable access on classes built with `ClassBuilder`.
pub trait ObjectExt {
    /// # Safety
    /// The ivar must exist and be of type `T`. Main thread only for views.
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// # Safety
    /// The ivar must exist and be of type `T`. Main thread only for views.
    unsafe fn load_ivar_mut<T: Encode>(&mut self, name: &str) -> &mut T;

    /// # Safety
    /// The ivar must exist and be of type `T`. Main thread only for views.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        ivar_named(self.class(), name).load::<T>(self)
    }

    unsafe fn load_ivar_mut<T: Encode>(&mut self, name: &str) -> &mut T {
        let ivar = ivar_named(self.class(), name);
        ivar.load_mut::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        *self.load_ivar_mut::<T>(name) = value;
    }
}

// ============================================================================
// Boolean ivar helpers (bool ivars are stored as u8)
// ============================================================================

/// # Safety
/// `obj` must be valid and carry a `u8` ivar called `name`.
pub unsafe fn get_bool_ivar(obj: id, name: &str) -> bool {
    *(*obj).load_ivar::<u8>(name) != 0
}

/// # Safety
/// `obj` must be valid and carry a `u8` ivar called `name`.
pub unsafe fn set_bool_ivar(obj: id, name: &str, val: bool) {
    (*obj).store_ivar::<u8>(name, u8::from(val));
}

// ============================================================================
// NSAutoreleasePool replacement
// ============================================================================

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
