//! The foreign-interface descriptor: stable identity and faithful
//! dispatch.

#![allow(unsafe_code)]

use bitgen::ffi::Ffi;
use bitgen::rand_core::RngCore;
use bitgen::*;

#[test]
fn descriptor_is_memoized() {
    let mut wrapper = Ffi::new(Pcg64::seeded(5));
    let first = wrapper.interface() as *const _;
    let again = wrapper.interface() as *const _;
    assert_eq!(first, again);
    let state = wrapper.interface().state;
    assert_eq!(state, wrapper.interface().state);
}

#[test]
fn thunks_drive_the_wrapped_generator() {
    let mut reference = Pcg64::seeded(9);
    let wrapper = Ffi::new(Pcg64::seeded(9));
    let interface = *wrapper.interface();
    unsafe {
        assert_eq!((interface.next_u64)(interface.state), reference.next_u64());
        assert_eq!((interface.next_u32)(interface.state), reference.next_u32());
        assert_eq!((interface.next_u32)(interface.state), reference.next_u32());
        assert_eq!((interface.next_double)(interface.state), reference.next_double());
    }
    drop(wrapper);
}

#[test]
fn unwrapping_returns_the_advanced_generator() {
    let mut reference = Mt64::seeded(2);
    let wrapper = Ffi::new(Mt64::seeded(2));
    let interface = *wrapper.interface();
    unsafe {
        (interface.next_u64)(interface.state);
    }
    reference.next_u64();
    let mut inner = wrapper.into_inner();
    assert_eq!(inner.next_u64(), reference.next_u64());
}
