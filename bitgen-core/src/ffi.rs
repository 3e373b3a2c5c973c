//! Stable foreign-function descriptors.
//!
//! [`Ffi`] pins a generator on the heap and exposes an [`Interface`] whose
//! function pointers drive it through an opaque state pointer.  The
//! descriptor is built once at construction and the same instance is
//! returned on every access, so callers may capture it for the wrapper's
//! lifetime.

#![allow(unsafe_code)]

use alloc::boxed::Box;
use core::ffi::c_void;

use crate::BitGenerator;

/// Function-pointer descriptor for one generator instance.
///
/// `state` stays valid for as long as the owning [`Ffi`] is alive and is
/// only meaningful to the three accompanying functions.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct Interface {
    /// Opaque generator pointer passed to the functions below.
    pub state: *mut c_void,
    /// Draw one 64-bit word.
    pub next_u64: unsafe extern "C" fn(*mut c_void) -> u64,
    /// Draw one 32-bit word.
    pub next_u32: unsafe extern "C" fn(*mut c_void) -> u32,
    /// Draw one double in `[0, 1)`.
    pub next_double: unsafe extern "C" fn(*mut c_void) -> f64,
}

/// Heap-pinned generator with a memoized [`Interface`].
#[derive(Debug)]
pub struct Ffi<G: BitGenerator> {
    // boxed so the address handed to `interface` never moves
    generator: Box<G>,
    interface: Interface,
}

impl<G: BitGenerator> Ffi<G> {
    /// Pin `generator` and build its descriptor.
    pub fn new(generator: G) -> Self {
        let mut generator = Box::new(generator);
        let state = core::ptr::addr_of_mut!(*generator).cast::<c_void>();
        let interface = Interface {
            state,
            next_u64: next_u64_thunk::<G>,
            next_u32: next_u32_thunk::<G>,
            next_double: next_double_thunk::<G>,
        };
        Self { generator, interface }
    }

    /// The memoized descriptor; repeated calls return the identical object.
    pub fn interface(&self) -> &Interface {
        &self.interface
    }

    /// Direct access to the wrapped generator.
    ///
    /// Must not be held across foreign calls through [`Self::interface`].
    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    /// Unwrap, invalidating the descriptor.
    pub fn into_inner(self) -> G {
        *self.generator
    }
}

unsafe extern "C" fn next_u64_thunk<G: BitGenerator>(state: *mut c_void) -> u64 {
    // SAFETY: `state` was produced by `Ffi::new` from a live Box<G>
    let generator = unsafe { &mut *state.cast::<G>() };
    generator.next_u64()
}

unsafe extern "C" fn next_u32_thunk<G: BitGenerator>(state: *mut c_void) -> u32 {
    // SAFETY: as above
    let generator = unsafe { &mut *state.cast::<G>() };
    generator.next_u32()
}

unsafe extern "C" fn next_double_thunk<G: BitGenerator>(state: *mut c_void) -> f64 {
    // SAFETY: as above
    let generator = unsafe { &mut *state.cast::<G>() };
    generator.next_double()
}
