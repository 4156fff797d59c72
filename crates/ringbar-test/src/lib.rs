//! Testing harness for ringbar animations.
//!
//! Replaces the host's monotonic clock and frame-presentation cycle with
//! simulated ones, so a run can be stepped frame by frame at chosen times.
//!
//! # Example
//!
//! ```
//! use ringbar_test::FrameHarness;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let harness = FrameHarness::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! harness
//!     .animator()
//!     .run(100.0, move |f| sink.borrow_mut().push(f), None)
//!     .expect("valid duration");
//!
//! harness.frame_at(0.0);
//! harness.frame_at(50.0);
//! harness.frame_at(100.0);
//! assert_eq!(*seen.borrow(), vec![0.0, 0.5, 1.0]);
//! assert!(harness.is_idle());
//! ```

mod clock;
mod harness;
mod scheduler;

pub use clock::ManualClock;
pub use harness::FrameHarness;
pub use scheduler::ManualScheduler;
