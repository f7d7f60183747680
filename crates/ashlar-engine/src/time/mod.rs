//! Time subsystem.
//!
//! Provides the fixed-rate frame clock that paces the render loop.
//! Intended usage:
//! - one `FrameClock` per loop, created at startup with the target rate
//! - call `tick()` once per presented frame, then sleep for `sleep_time()`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
