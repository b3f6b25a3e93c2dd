//! Higher order list functions
//!
//! Seven operations that replace hand-written loops over sequences:
//! [`map`], [`fold`], [`reduce`], [`partition`], [`expand`], [`scan`] and
//! [`collect`].
//!
//! - [`list`] has them as free functions over any `IntoIterator`;
//! - [`ext::ListOps`] offers them as methods on slices and vectors;
//! - [`runtime`] applies them to dynamically typed values with named
//!   builtin callbacks.
//!
//! ```
//! use holf::{expand, map, scan};
//!
//! // 10:09 and then alternating 10 and 20 minute intervals
//! let intervals = expand(0, |i| if *i == 10 { 20 } else { 10 });
//! let departures = scan(intervals, 609, |time, interval| time + interval).take(4);
//! let timetable = map(departures, |t| format!("{:02}:{:02}", t / 60, t % 60));
//! assert_eq!(timetable, vec!["10:09", "10:19", "10:39", "10:49"]);
//! ```

pub mod config;
pub mod error;
pub mod ext;
pub mod list;
pub mod runtime;
pub mod sequence;

pub use error::{ListError, ListResult};
pub use ext::ListOps;
pub use list::{
    collect, expand, expand_until, fold, map, partition, reduce, scan, try_collect, try_fold,
    try_map, try_partition, try_reduce,
};
pub use sequence::{Expand, ExpandUntil, Scan};
