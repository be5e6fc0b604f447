//! # wfalloc - A Worst-Fit Region Allocator Library
//!
//! This crate provides a **worst-fit allocator** that manages raw address
//! space obtained from the operating system in fixed-size regions and serves
//! fixed-granularity allocation requests from them.
//!
//! ## Overview
//!
//! Every region keeps two pieces of bookkeeping: the free chunks still
//! available in it, and a record of every allocation handed out from it.
//!
//! ```text
//!   One Region (fixed capacity, e.g. 4 KiB):
//!
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │ ┌────────┬──────────────┬────────┬───────┬────────────────────┐  │
//!   │ │ taken  │     free     │ taken  │ taken │        free        │  │
//!   │ └────────┴──────────────┴────────┴───────┴────────────────────┘  │
//!   │               ▲                                ▲                 │
//!   │               │                                │                 │
//!   │          free chunks kept sorted by address;                     │
//!   │          adjacent free chunks are always merged                  │
//!   └──────────────────────────────────────────────────────────────────┘
//!
//!   Worst fit: every request is carved from the front of the LARGEST
//!   free chunk, so small allocations nibble at big chunks instead of
//!   shredding small ones.
//! ```
//!
//! Regions are mapped on demand: the engine starts with none and asks its
//! [`PageProvider`] for a new fixed-size region only when no existing region
//! can satisfy a request, up to a configured maximum.
//!
//! ## Crate Structure
//!
//! ```text
//!   wfalloc
//!   ├── error      - AllocError taxonomy
//!   ├── provider   - PageProvider capability + mmap implementation
//!   ├── chunk      - FreeChunkSet / TakenSet bookkeeping (internal)
//!   ├── region     - one fixed-capacity region (internal)
//!   └── engine     - WorstFitAllocator orchestrating the regions
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wfalloc::{AllocatorConfig, MmapProvider, WorstFitAllocator};
//!
//! fn main() {
//!     let mut allocator =
//!         WorstFitAllocator::new(MmapProvider::new(), AllocatorConfig::default());
//!
//!     // Sizes must be positive multiples of the configured granularity.
//!     let ptr = allocator.allocate(64).unwrap();
//!
//!     unsafe {
//!         // Use the memory.
//!         *ptr = 42;
//!     }
//!
//!     allocator.deallocate(ptr).unwrap();
//!     allocator.cleanup();
//! }
//! ```
//!
//! ## How It Works
//!
//! `allocate(size)` walks the regions in creation order and runs a worst-fit
//! search in each:
//!
//! ```text
//!   allocate(size)
//!     │
//!     ├─ size not a positive multiple of granularity? ──► InvalidSize
//!     │
//!     ├─ for each region: worst-fit chunk found? ──► split/remove chunk,
//!     │                                              record taken, return
//!     │
//!     ├─ region limit reached? ──► OutOfMemory
//!     │
//!     └─ map a new region via the PageProvider and retry there
//!          │
//!          ├─ mapping failed ──► MappingFailure
//!          └─ request larger than a whole region ──► OutOfMemory
//! ```
//!
//! `deallocate(ptr)` finds the region whose taken records contain `ptr`,
//! recovers the allocation's length, returns the range to that region's free
//! chunks and merges adjacent neighbors. An address the engine never handed
//! out fails with `InvalidFree` instead of corrupting state.
//!
//! ## Features
//!
//! - **Worst-fit policy**: allocations always come from the largest free
//!   chunk (ties go to the lowest address)
//! - **On-demand regions**: memory is mapped only when needed, up to a
//!   configurable region count
//! - **Prompt coalescing**: after every free, no two adjacent free chunks
//!   remain
//! - **Injected backing**: any [`PageProvider`] works; tests run against a
//!   fake one, production uses [`MmapProvider`]
//!
//! ## Limitations
//!
//! - **Single-threaded only**: no internal locking; wrap the engine in a
//!   mutex for concurrent use
//! - **Fixed granularity**: request sizes must be exact multiples of the
//!   configured granularity, there is no alignment handling beyond that
//! - **No region reclamation**: regions are released only by `cleanup` (or
//!   drop), never individually
//!
//! ## Safety
//!
//! The engine itself never reads or writes the memory it manages; it tracks
//! address ranges only. Dereferencing returned pointers is the caller's
//! responsibility and requires `unsafe`.

mod chunk;
mod engine;
pub mod error;
pub mod provider;
mod region;

pub use chunk::{FreeChunk, TakenRecord};
pub use engine::{AllocatorConfig, WorstFitAllocator};
pub use error::AllocError;
pub use provider::{MapError, MmapProvider, PageProvider};
pub use region::Region;
