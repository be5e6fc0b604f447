use std::ptr;

use wfalloc::{AllocatorConfig, MmapProvider, WorstFitAllocator};

fn main() {
  // Default config: 4 KiB regions, 8-byte granularity, at most 4 regions.
  let config = AllocatorConfig::default();
  let mut allocator = WorstFitAllocator::new(MmapProvider::new(), config);

  println!("config = {:?}", config);
  println!("regions mapped at start = {}", allocator.region_count());

  // --------------------------------------------------------------------
  // 1) First allocation. The engine owns no memory yet, so this maps the
  //    first region on demand.
  // --------------------------------------------------------------------
  let first = allocator.allocate(64).unwrap();
  println!("\n[1] allocate(64) -> {:?}", first);
  println!("[1] regions mapped = {}", allocator.region_count());

  // Write something into the allocated memory to show it's usable.
  unsafe {
    ptr::write_bytes(first, 0xAB, 64);
    println!("[1] first byte after fill = 0x{:X}", *first);
  }

  // --------------------------------------------------------------------
  // 2) Two more allocations. Worst fit carves each one from the front of
  //    the largest remaining free chunk, so they are laid out back to back.
  // --------------------------------------------------------------------
  let second = allocator.allocate(128).unwrap();
  let third = allocator.allocate(32).unwrap();
  println!("\n[2] allocate(128) -> {:?}", second);
  println!("[2] allocate(32)  -> {:?}", third);
  println!(
    "[2] second - first = {}, third - second = {}",
    second as usize - first as usize,
    third as usize - second as usize,
  );

  // --------------------------------------------------------------------
  // 3) Free the middle allocation. The hole it leaves is smaller than the
  //    region tail, so the next request ignores it: worst fit.
  // --------------------------------------------------------------------
  allocator.deallocate(second).unwrap();
  let fourth = allocator.allocate(128).unwrap();
  println!("\n[3] freed second, allocate(128) -> {:?}", fourth);
  println!(
    "[3] reused the hole? {}",
    if fourth == second {
      "yes (would be first fit)"
    } else {
      "no, carved from the largest chunk (worst fit)"
    }
  );

  // --------------------------------------------------------------------
  // 4) Invalid requests fail loudly instead of corrupting state.
  // --------------------------------------------------------------------
  println!("\n[4] allocate(13)            -> {:?}", allocator.allocate(13));
  println!(
    "[4] deallocate(never given) -> {:?}",
    allocator.deallocate(0x10 as *mut u8)
  );

  // --------------------------------------------------------------------
  // 5) Exhaust the region limit. Each full-region allocation maps a new
  //    region until the configured maximum, then the engine reports
  //    OutOfMemory.
  // --------------------------------------------------------------------
  allocator.deallocate(fourth).unwrap();
  allocator.deallocate(third).unwrap();
  allocator.deallocate(first).unwrap();

  let mut full_regions = Vec::new();
  loop {
    match allocator.allocate(4096) {
      Ok(ptr) => {
        full_regions.push(ptr);
        println!(
          "\n[5] allocate(4096) -> {:?}, regions mapped = {}",
          ptr,
          allocator.region_count()
        );
      }
      Err(e) => {
        println!("\n[5] allocate(4096) failed: {}", e);
        break;
      }
    }
  }

  for ptr in full_regions {
    allocator.deallocate(ptr).unwrap();
  }

  // --------------------------------------------------------------------
  // 6) Hand every region back to the OS.
  // --------------------------------------------------------------------
  allocator.cleanup();
  println!("\n[6] after cleanup: regions mapped = {}", allocator.region_count());
}
