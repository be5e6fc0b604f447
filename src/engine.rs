use log::{debug, trace};

use crate::error::AllocError;
use crate::provider::PageProvider;
use crate::region::Region;

/// Deployment constants for one allocator instance.
///
/// `Default` mirrors the classic layout this engine grew out of: 4 KiB
/// regions, 8-byte granularity, at most four regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatorConfig {
  /// Bytes per region; every region is requested at exactly this size.
  pub region_capacity: usize,
  /// Every request must be a positive multiple of this.
  pub granularity: usize,
  /// Upper bound on concurrently backing regions. `1` gives the
  /// single-region behavior.
  pub max_regions: usize,
}

impl Default for AllocatorConfig {
  fn default() -> Self {
    Self {
      region_capacity: 4096,
      granularity: 8,
      max_regions: 4,
    }
  }
}

/// Worst-fit allocation engine over regions acquired on demand from a
/// [`PageProvider`].
///
/// Regions are tried in creation order; a new one is mapped only when no
/// existing region can satisfy a request and `max_regions` has not been
/// reached. Regions live until [`cleanup`](Self::cleanup) (or drop), never
/// individually.
pub struct WorstFitAllocator<P: PageProvider> {
  provider: P,
  regions: Vec<Region>,
  config: AllocatorConfig,
}

impl<P: PageProvider> WorstFitAllocator<P> {
  /// Creates an engine that maps nothing until the first demand.
  ///
  /// # Panics
  ///
  /// Panics when the config is unusable: zero granularity or max_regions,
  /// or a capacity that is not a positive multiple of the granularity.
  pub fn new(
    provider: P,
    config: AllocatorConfig,
  ) -> Self {
    assert!(config.granularity > 0, "granularity must be positive");
    assert!(
      config.region_capacity > 0 && config.region_capacity % config.granularity == 0,
      "region capacity must be a positive multiple of the granularity"
    );
    assert!(config.max_regions > 0, "at least one region must be allowed");

    Self {
      provider,
      regions: Vec::new(),
      config,
    }
  }

  /// Creates an engine with its first region already mapped.
  ///
  /// Combined with `max_regions = 1` this is the eager single-region
  /// variant of `new`.
  pub fn with_eager_region(
    provider: P,
    config: AllocatorConfig,
  ) -> Result<Self, AllocError> {
    let mut engine = Self::new(provider, config);
    engine.map_region()?;
    Ok(engine)
  }

  /// Allocates `size` bytes and returns the start of the range.
  ///
  /// `size` must be a positive multiple of the configured granularity. The
  /// returned pointer stays valid until the matching
  /// [`deallocate`](Self::deallocate) or [`cleanup`](Self::cleanup).
  pub fn allocate(
    &mut self,
    size: usize,
  ) -> Result<*mut u8, AllocError> {
    if size == 0 || size % self.config.granularity != 0 {
      return Err(AllocError::InvalidSize);
    }

    for region in &mut self.regions {
      if let Some(addr) = region.allocate(size) {
        trace!("allocated {size} bytes at {addr:#x}");
        return Ok(addr as *mut u8);
      }
    }

    if self.regions.len() == self.config.max_regions {
      return Err(AllocError::OutOfMemory);
    }

    // A fresh region stays registered even when this request is larger
    // than a whole region; later smaller requests will use it.
    let region = self.map_region()?;
    let addr = region.allocate(size).ok_or(AllocError::OutOfMemory)?;
    trace!("allocated {size} bytes at {addr:#x}");
    Ok(addr as *mut u8)
  }

  /// Returns the range starting at `ptr` to its owning region and coalesces
  /// the region's free chunks.
  pub fn deallocate(
    &mut self,
    ptr: *mut u8,
  ) -> Result<(), AllocError> {
    let addr = ptr as usize;

    for region in &mut self.regions {
      if let Some(len) = region.deallocate(addr) {
        trace!("freed {len} bytes at {addr:#x}");
        return Ok(());
      }
    }

    Err(AllocError::InvalidFree)
  }

  /// Releases every mapped region back to the provider and discards all
  /// bookkeeping. Idempotent; the engine stays usable and will map fresh
  /// regions on the next demand.
  pub fn cleanup(&mut self) {
    for region in self.regions.drain(..) {
      debug!(
        "releasing region at {:#x} ({} bytes)",
        region.base(),
        region.capacity()
      );
      // Safety: every region base was returned by this provider's
      // `request` and `drain` guarantees a single release per region.
      unsafe {
        self
          .provider
          .release(region.base() as *mut u8, region.capacity());
      }
    }
  }

  pub fn region_count(&self) -> usize {
    self.regions.len()
  }

  pub fn regions(&self) -> &[Region] {
    &self.regions
  }

  fn map_region(&mut self) -> Result<&mut Region, AllocError> {
    let capacity = self.config.region_capacity;
    let base = self.provider.request(capacity)? as usize;
    debug!(
      "mapped region {} at {:#x} ({} bytes)",
      self.regions.len(),
      base,
      capacity
    );
    self.regions.push(Region::new(base, capacity));
    let index = self.regions.len() - 1;
    Ok(&mut self.regions[index])
  }
}

impl<P: PageProvider> Drop for WorstFitAllocator<P> {
  fn drop(&mut self) {
    self.cleanup();
  }
}
