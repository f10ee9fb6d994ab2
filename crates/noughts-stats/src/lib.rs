//! Summary statistics for training progress.
//!
//! Each generation scores a pool of candidate networks; this crate condenses
//! those scores into a few numbers worth printing.
//!
//! ```
//! use noughts_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::new([0.25, -0.5, 0.75, 0.5]).unwrap();
//! assert_eq!(stats.min, -0.5);
//! assert_eq!(stats.max, 0.75);
//! assert_eq!(stats.mean, 0.25);
//! assert_eq!(stats.median, 0.375);
//! ```

pub mod descriptive;
