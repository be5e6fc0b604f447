use crate::chunk::{FreeChunk, FreeChunkSet, TakenRecord, TakenSet};

/// One fixed-capacity block of address space with its free and taken
/// bookkeeping.
///
/// The free chunks and taken records of a region always tile
/// `[base, base + capacity)` exactly: `free_bytes() + taken_bytes()` equals
/// `capacity()` after every operation.
#[derive(Debug)]
pub struct Region {
  base: usize,
  capacity: usize,
  free: FreeChunkSet,
  taken: TakenSet,
}

impl Region {
  /// A fresh region is one free chunk spanning the whole capacity.
  pub fn new(
    base: usize,
    capacity: usize,
  ) -> Self {
    let mut free = FreeChunkSet::new();
    free.insert_sorted(FreeChunk { start: base, len: capacity });

    Self {
      base,
      capacity,
      free,
      taken: TakenSet::new(),
    }
  }

  /// Worst-fit allocation of `size` bytes within this region.
  pub fn allocate(
    &mut self,
    size: usize,
  ) -> Option<usize> {
    let index = self.free.worst_fit(size)?;
    let start = self.free.take(index, size);
    self.taken.append(TakenRecord { start, len: size });
    Some(start)
  }

  /// Returns the freed length, or `None` when `addr` is not taken here.
  pub fn deallocate(
    &mut self,
    addr: usize,
  ) -> Option<usize> {
    let len = self.taken.find_and_remove(addr)?;
    self.free.insert_sorted(FreeChunk { start: addr, len });
    self.free.merge_adjacent();
    Some(len)
  }

  pub fn base(&self) -> usize {
    self.base
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn free_bytes(&self) -> usize {
    self.free.total()
  }

  pub fn taken_bytes(&self) -> usize {
    self.taken.total()
  }

  pub fn free_chunks(&self) -> &[FreeChunk] {
    self.free.chunks()
  }

  pub fn taken_records(&self) -> &[TakenRecord] {
    self.taken.records()
  }
}
