use std::ptr;

use libc::{MAP_ANONYMOUS, MAP_FAILED, MAP_PRIVATE, PROT_READ, PROT_WRITE, c_void};

/// The OS refused to map a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapError;

/// Capability for acquiring and releasing contiguous blocks of raw memory.
///
/// The engine asks for one fixed-size block per region and hands each block
/// back exactly once at cleanup. Implementations never return null from a
/// successful `request`.
pub trait PageProvider {
  fn request(
    &mut self,
    size: usize,
  ) -> Result<*mut u8, MapError>;

  /// # Safety
  ///
  /// `base` and `size` must describe a block previously returned by
  /// `request` on this provider and not released since.
  unsafe fn release(
    &mut self,
    base: *mut u8,
    size: usize,
  );
}

/// `PageProvider` backed by anonymous private `mmap(2)` mappings.
pub struct MmapProvider;

impl MmapProvider {
  pub fn new() -> Self {
    Self
  }
}

impl Default for MmapProvider {
  fn default() -> Self {
    Self::new()
  }
}

impl PageProvider for MmapProvider {
  fn request(
    &mut self,
    size: usize,
  ) -> Result<*mut u8, MapError> {
    // Safety: mmap with a null hint creates a fresh anonymous mapping and
    // touches no existing memory.
    let address = unsafe {
      libc::mmap(
        ptr::null_mut(),
        size,
        PROT_READ | PROT_WRITE,
        MAP_ANONYMOUS | MAP_PRIVATE,
        -1,
        0,
      )
    };

    if address == MAP_FAILED || address.is_null() {
      return Err(MapError);
    }

    Ok(address as *mut u8)
  }

  unsafe fn release(
    &mut self,
    base: *mut u8,
    size: usize,
  ) {
    // Safety: the caller guarantees `base`/`size` came from `request`.
    unsafe {
      libc::munmap(base as *mut c_void, size);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mmap_provider_maps_writable_memory() {
    let mut provider = MmapProvider::new();
    let base = provider.request(4096).unwrap();
    assert!(!base.is_null());

    // Safety: we own the fresh 4096-byte mapping at `base`.
    unsafe {
      ptr::write_bytes(base, 0x5A, 4096);
      assert_eq!(*base, 0x5A);
      assert_eq!(*base.add(4095), 0x5A);
      provider.release(base, 4096);
    }
  }

  #[test]
  fn two_requests_return_distinct_blocks() {
    let mut provider = MmapProvider::new();
    let first = provider.request(4096).unwrap();
    let second = provider.request(4096).unwrap();
    assert_ne!(first, second);

    // Safety: both blocks were just mapped by `request`.
    unsafe {
      provider.release(first, 4096);
      provider.release(second, 4096);
    }
  }
}
