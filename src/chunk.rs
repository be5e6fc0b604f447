/// A currently-unallocated sub-range of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeChunk {
  pub start: usize,
  pub len: usize,
}

/// Bookkeeping entry for one outstanding allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakenRecord {
  pub start: usize,
  pub len: usize,
}

/// Free chunks of one region, kept in ascending order by `start`.
///
/// Chunks are pairwise non-overlapping, and after `merge_adjacent` no two
/// chunks touch.
#[derive(Debug, Default)]
pub struct FreeChunkSet {
  chunks: Vec<FreeChunk>,
}

impl FreeChunkSet {
  pub fn new() -> Self {
    Self { chunks: Vec::new() }
  }

  /// Index of the worst-fit chunk for `requested` bytes.
  ///
  /// Scans for the strictly largest chunk; among equally large chunks the
  /// lowest-addressed one wins because the comparison is strict. Returns
  /// `None` when even the largest chunk is too small.
  pub fn worst_fit(
    &self,
    requested: usize,
  ) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_len = 0;

    for (index, chunk) in self.chunks.iter().enumerate() {
      if chunk.len > best_len {
        best = Some(index);
        best_len = chunk.len;
      }
    }

    if best_len < requested {
      return None;
    }

    best
  }

  /// Carves `requested` bytes from the front of the chunk at `index` and
  /// returns the carved start address. An exact fit removes the chunk.
  pub fn take(
    &mut self,
    index: usize,
    requested: usize,
  ) -> usize {
    let start = self.chunks[index].start;

    if self.chunks[index].len == requested {
      self.chunks.remove(index);
    } else {
      self.chunks[index].start += requested;
      self.chunks[index].len -= requested;
    }

    start
  }

  /// Inserts `chunk` keeping ascending `start` order.
  pub fn insert_sorted(
    &mut self,
    chunk: FreeChunk,
  ) {
    let position = self.chunks.partition_point(|c| c.start < chunk.start);
    self.chunks.insert(position, chunk);
  }

  /// Coalesces touching neighbors in one ascending pass.
  ///
  /// A merged chunk is compared against its new successor before the pass
  /// advances, so chains of adjacent chunks collapse into one.
  pub fn merge_adjacent(&mut self) {
    let mut i = 0;
    while i + 1 < self.chunks.len() {
      if self.chunks[i].start + self.chunks[i].len == self.chunks[i + 1].start {
        self.chunks[i].len += self.chunks[i + 1].len;
        self.chunks.remove(i + 1);
      } else {
        i += 1;
      }
    }
  }

  pub fn len(&self) -> usize {
    self.chunks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.chunks.is_empty()
  }

  /// Sum of all free chunk lengths.
  pub fn total(&self) -> usize {
    self.chunks.iter().map(|c| c.len).sum()
  }

  pub fn chunks(&self) -> &[FreeChunk] {
    &self.chunks
  }
}

/// Outstanding allocations of one region, in insertion order.
#[derive(Debug, Default)]
pub struct TakenSet {
  records: Vec<TakenRecord>,
}

impl TakenSet {
  pub fn new() -> Self {
    Self { records: Vec::new() }
  }

  pub fn append(
    &mut self,
    record: TakenRecord,
  ) {
    self.records.push(record);
  }

  /// Removes the record starting at `addr` and returns its length.
  pub fn find_and_remove(
    &mut self,
    addr: usize,
  ) -> Option<usize> {
    let index = self.records.iter().position(|r| r.start == addr)?;
    Some(self.records.remove(index).len)
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// Sum of all outstanding allocation lengths.
  pub fn total(&self) -> usize {
    self.records.iter().map(|r| r.len).sum()
  }

  pub fn records(&self) -> &[TakenRecord] {
    &self.records
  }
}
